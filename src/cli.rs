//! Command-line interface for tictactoe_rewind.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal, with a move history you can rewind.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_rewind")]
#[command(about = "Terminal tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file (overrides the settings file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset, e.g. "debug"
    #[arg(long)]
    pub log_filter: Option<String>,
}
