mod cli;
mod command;
mod error;
mod menu;
mod platform;
mod request;
mod runner;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use crate::cli::Args;
use crate::menu::Menu;
use crate::runner::ExternalTool;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .init();

    let mut stdout = io::stdout().lock();

    // Nothing else runs without the downloader
    let Some(path) = menu::check_tool(&args.tool, &mut stdout)? else {
        stdout.flush()?;
        return Ok(ExitCode::FAILURE);
    };

    let tool = ExternalTool::new(path);
    tracing::info!("using {}", tool.path().display());

    Menu::new(io::stdin().lock(), stdout, &tool).run().await?;

    Ok(ExitCode::SUCCESS)
}
