use clap::Parser;

/// Interactive menu front-end for yt-dlp
#[derive(Parser)]
#[command(version, about)]
pub struct Args {
    /// Name or path of the yt-dlp executable
    #[arg(long, default_value = "yt-dlp")]
    pub tool: String,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_ytdlp_on_path() {
        let args = Args::try_parse_from(["ytdlp-menu"]).unwrap();
        assert!(!args.verbose);
        assert_eq!(args.tool, "yt-dlp");
    }

    #[test]
    fn accepts_tool_override() {
        let args = Args::try_parse_from(["ytdlp-menu", "--tool", "/opt/bin/yt-dlp", "-v"]).unwrap();
        assert_eq!(args.tool, "/opt/bin/yt-dlp");
        assert!(args.verbose);
    }
}
