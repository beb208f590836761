use std::path::PathBuf;

use thiserror::Error;

/// Failure kinds surfaced to the user.
///
/// Only [`AppError::ToolNotFound`] is fatal; the menu loop reports every other
/// variant and returns to the menu.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("'{0}' was not found on the search path")]
    ToolNotFound(String),

    #[error("{0} cannot be empty")]
    EmptyInput(&'static str),

    #[error("not a YouTube URL: {0}")]
    InvalidUrl(String),

    #[error("failed to create output directory {}: {source}", path.display())]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to launch {tool}: {source}")]
    Launch {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {}", describe_exit(*code))]
    Exited { tool: String, code: Option<i32> },
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("status {code}"),
        None => "no exit code (terminated abnormally)".to_string(),
    }
}
