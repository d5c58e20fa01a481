//! Tracing setup.

use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::LoggingConfig;

/// Sends tracing output to the configured log file.
///
/// `RUST_LOG` wins over the configured filter. Safe to call more than once;
/// later calls leave the first subscriber in place.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.file())
        .with_context(|| format!("Failed to create log file {}", config.file().display()))?;

    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.filter())),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!(log_file = %config.file().display(), "Logging initialized");
    Ok(())
}
