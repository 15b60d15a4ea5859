//! tictactoe_rewind - terminal tic-tac-toe with a rewindable move history.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use std::sync::Arc;
use tictactoe_rewind::Settings;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut settings = Settings::load(cli.config.as_deref())?;
    if let Some(log_file) = cli.log_file {
        settings = settings.with_log_file(log_file);
    }
    if let Some(log_filter) = cli.log_filter {
        settings = settings.with_log_filter(log_filter);
    }

    init_tracing(&settings)?;
    info!(?settings, "Starting tictactoe_rewind");

    tictactoe_rewind::tui::run(&settings)
}

/// Logs go to a file so they never interfere with the TUI.
fn init_tracing(settings: &Settings) -> Result<()> {
    let log_file = std::fs::File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .init();

    Ok(())
}
