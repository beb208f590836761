//! Argument lists for each kind of downloader invocation.

use crate::request::{DownloadRequest, Quality};

/// Filename template expanded by the downloader, appended to the output directory.
pub const OUTPUT_TEMPLATE: &str = "%(title)s.%(ext)s";

/// Build the download arguments: output template first, then the quality
/// flags, then `--` and the URL.
pub fn download_args(request: &DownloadRequest) -> Vec<String> {
    let mut args = vec![
        "-o".to_string(),
        format!("{}{OUTPUT_TEMPLATE}", request.output_dir()),
    ];
    args.extend(quality_args(request.quality()).iter().map(|s| s.to_string()));
    args.extend(url_args(request.url()));
    args
}

// `--` keeps a URL starting with a dash from being parsed as an option.
fn url_args(url: &str) -> [String; 2] {
    ["--".to_string(), url.to_string()]
}

fn quality_args(quality: Quality) -> &'static [&'static str] {
    match quality {
        Quality::Best => &["-f", "best"],
        Quality::P720 => &["-f", "best[height<=720]"],
        Quality::P480 => &["-f", "best[height<=480]"],
        Quality::AudioOnly => &["-x", "--audio-format", "mp3"],
    }
}

/// Print title and duration without downloading.
pub fn metadata_args(url: &str) -> Vec<String> {
    let mut args = vec!["--get-title".to_string(), "--get-duration".to_string()];
    args.extend(url_args(url));
    args
}

/// List the available formats.
pub fn formats_args(url: &str) -> Vec<String> {
    let mut args = vec!["-F".to_string()];
    args.extend(url_args(url));
    args
}
