//! Command-line interface for tictactoe_timeline.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe in the terminal with a clickable move history.
#[derive(Parser, Debug)]
#[command(name = "tictactoe_timeline")]
#[command(about = "Play tic-tac-toe and jump back to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (optional; defaults apply if missing)
    #[arg(short, long, default_value = "tictactoe_timeline.toml")]
    pub config: PathBuf,

    /// Start with the move list newest-first
    #[arg(long)]
    pub reverse: bool,

    /// Write logs here instead of the configured file
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
