use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::error::AppError;
use crate::platform;

/// Normalized result of an invocation that launched and ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitOutcome {
    pub success: bool,
    pub code: Option<i32>,
    /// Extra detail when the process did not exit normally
    pub note: Option<String>,
}

/// Runs the external downloader with a list of arguments.
pub trait ProcessRunner {
    /// Name shown in messages
    fn program(&self) -> &str;

    /// Run to completion with inherited stdio.
    ///
    /// A process that cannot be started is an [`AppError::Launch`]; one that
    /// starts and fails is an `Ok` outcome with `success == false`.
    async fn run(&self, args: &[String]) -> Result<ExitOutcome, AppError>;
}

/// Resolve the downloader executable on the search path (or as a path).
pub fn locate(tool: &str) -> Result<PathBuf, AppError> {
    which::which(tool).map_err(|e| {
        tracing::debug!("lookup of {tool} failed: {e}");
        AppError::ToolNotFound(tool.to_string())
    })
}

/// Backend that spawns the real executable.
pub struct ExternalTool {
    path: PathBuf,
    name: String,
}

impl ExternalTool {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ProcessRunner for ExternalTool {
    fn program(&self) -> &str {
        &self.name
    }

    async fn run(&self, args: &[String]) -> Result<ExitOutcome, AppError> {
        tracing::debug!("running {} {}", self.path.display(), args.join(" "));

        let status = Command::new(&self.path)
            .args(args)
            .status()
            .await
            .map_err(|source| AppError::Launch {
                tool: self.name.clone(),
                source,
            })?;

        let outcome = platform::outcome(status);
        tracing::debug!("{} finished: {outcome:?}", self.name);
        Ok(outcome)
    }
}
