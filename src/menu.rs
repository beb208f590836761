use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use crate::command;
use crate::error::AppError;
use crate::request::{self, DownloadRequest, Quality};
use crate::runner::{self, ExitOutcome, ProcessRunner};

const MAIN_MENU: &str = "\
=== YouTube Downloader ===
1. Download video
2. Show video info
3. List available formats
4. Exit";

const QUALITY_MENU: &str = "\
Select quality:
1. Best available
2. 720p
3. 480p
4. Audio only (mp3)";

/// Check the downloader is installed, printing installation guidance if not.
pub fn check_tool<W: Write>(tool: &str, out: &mut W) -> io::Result<Option<PathBuf>> {
    match runner::locate(tool) {
        Ok(path) => Ok(Some(path)),
        Err(e) => {
            tracing::error!("{e}");
            writeln!(out, "Error: {e}.")?;
            writeln!(out)?;
            writeln!(out, "{tool} is required. Install it with one of:")?;
            writeln!(out, "  pip install -U yt-dlp")?;
            writeln!(out, "  brew install yt-dlp        (macOS)")?;
            writeln!(out, "  winget install yt-dlp      (Windows)")?;
            writeln!(out, "  sudo apt install yt-dlp    (Debian/Ubuntu)")?;
            writeln!(out)?;
            writeln!(out, "or download a release from https://github.com/yt-dlp/yt-dlp/releases")?;
            writeln!(out, "and make sure it is on your PATH.")?;
            Ok(None)
        }
    }
}

/// The interactive menu loop.
pub struct Menu<'a, R, W, P> {
    input: R,
    out: W,
    runner: &'a P,
}

impl<'a, R: BufRead, W: Write, P: ProcessRunner> Menu<'a, R, W, P> {
    pub fn new(input: R, out: W, runner: &'a P) -> Self {
        Self { input, out, runner }
    }

    /// Show the menu until the user picks exit or input ends.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            writeln!(self.out)?;
            writeln!(self.out, "{MAIN_MENU}")?;

            let choice = match self.prompt("Choose an option [1-4]: ") {
                Ok(choice) => choice,
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => break,
                Err(e) => return Err(e.into()),
            };

            let result = match choice.as_str() {
                "1" => self.download().await,
                "2" => self.show_info().await,
                "3" => self.list_formats().await,
                "4" => break,
                other => {
                    writeln!(self.out, "Invalid option '{other}', please choose 1-4.")?;
                    continue;
                }
            };

            if let Err(e) = result {
                match e.downcast::<AppError>() {
                    Ok(app_error) => self.report(&app_error)?,
                    Err(e) if is_end_of_input(&e) => break,
                    Err(e) => return Err(e),
                }
            }
        }

        writeln!(self.out, "Goodbye!")?;
        Ok(())
    }

    async fn download(&mut self) -> Result<()> {
        let url = self.prompt_url()?;
        let dir = self.prompt("Output directory (empty for current directory): ")?;
        writeln!(self.out, "{QUALITY_MENU}")?;
        let selection = self.prompt("Choose quality [1-4, default 1]: ")?;

        let request = DownloadRequest::new(&url, &dir, Quality::from_selection(&selection))?;

        tokio::fs::create_dir_all(request.output_dir())
            .await
            .map_err(|source| AppError::DirectoryCreate {
                path: PathBuf::from(request.output_dir()),
                source,
            })?;

        tracing::debug!("building arguments for {request:?}");
        let args = command::download_args(&request);

        writeln!(
            self.out,
            "Downloading {} ({}) into {}",
            request.url(),
            request.quality().label(),
            request.output_dir()
        )?;
        self.invoke(&args).await?;
        writeln!(self.out, "Download completed successfully.")?;
        Ok(())
    }

    async fn show_info(&mut self) -> Result<()> {
        let url = self.prompt_url()?;
        writeln!(self.out, "Fetching video info...")?;
        self.invoke(&command::metadata_args(&url)).await
    }

    async fn list_formats(&mut self) -> Result<()> {
        let url = self.prompt_url()?;
        writeln!(self.out, "Fetching available formats...")?;
        self.invoke(&command::formats_args(&url)).await
    }

    fn prompt_url(&mut self) -> Result<String> {
        let input = self.prompt("Enter video URL: ")?;
        tracing::debug!("validating {input:?}");
        Ok(request::validate_url(&input)?)
    }

    async fn invoke(&mut self, args: &[String]) -> Result<()> {
        self.out.flush()?;
        tracing::debug!("invoking {}", self.runner.program());

        let ExitOutcome {
            success,
            code,
            note,
        } = self.runner.run(args).await.inspect_err(|e| {
            tracing::debug!("failed: {e}");
        })?;

        if success {
            tracing::debug!("completed");
            return Ok(());
        }

        tracing::debug!("failed with code {code:?}");
        if let Some(note) = note {
            writeln!(self.out, "{} {note}.", self.runner.program())?;
        }
        Err(AppError::Exited {
            tool: self.runner.program().to_string(),
            code,
        }
        .into())
    }

    /// Print `text`, then read one trimmed line. End of input is `UnexpectedEof`.
    fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.out, "{text}")?;
        self.out.flush()?;

        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            writeln!(self.out)?;
            return Err(io::ErrorKind::UnexpectedEof.into());
        }
        Ok(String::from_utf8_lossy(&line).trim().to_string())
    }

    fn report(&mut self, error: &AppError) -> io::Result<()> {
        writeln!(self.out, "Error: {error}")?;

        if matches!(error, AppError::Launch { .. } | AppError::Exited { .. }) {
            let tool = self.runner.program();
            writeln!(self.out, "Troubleshooting tips:")?;
            writeln!(self.out, "  - Check that the URL is correct and the video is available")?;
            writeln!(self.out, "  - Check your internet connection")?;
            writeln!(self.out, "  - Update {tool} (pip install -U yt-dlp, or {tool} -U)")?;
            writeln!(self.out, "  - Age-restricted or private videos may need cookies or a login")?;
        }
        Ok(())
    }
}

fn is_end_of_input(error: &anyhow::Error) -> bool {
    error
        .downcast_ref::<io::Error>()
        .is_some_and(|e| e.kind() == io::ErrorKind::UnexpectedEof)
}
