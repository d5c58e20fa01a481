//! tictactoe_timeline binary.

use anyhow::{Context, Result};
use clap::Parser;
use tictactoe_timeline::{AppConfig, Cli, init_logging, run_tui};
use tracing::info;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let (config, source) = AppConfig::load(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;
    let config = config.with_cli_overrides(&cli);

    init_logging(config.logging())?;
    info!(source = %source, config = ?config, "Configuration resolved");

    run_tui(&config)
}
