//! Application configuration loaded from an optional TOML file.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::Cli;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Move list presentation.
    display: DisplayConfig,
    /// Log destination and filter.
    logging: LoggingConfig,
}

/// Move list presentation settings.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show the move list oldest first.
    chronological: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            chronological: true,
        }
    }
}

/// Logging settings.
///
/// The terminal UI owns stdout, so logs always go to a file.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log file path.
    file: PathBuf,
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: PathBuf::from("tictactoe_timeline.log"),
            filter: "info".to_string(),
        }
    }
}

/// Where a resolved [`AppConfig`] came from.
///
/// Configuration is read before logging starts, so the caller reports this
/// once the subscriber is installed.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConfigSource {
    /// No file at the given path.
    #[display("defaults ({} not found)", _0.display())]
    Defaults(PathBuf),
    /// Parsed from this file.
    #[display("{}", _0.display())]
    File(PathBuf),
}

impl AppConfig {
    /// Loads configuration from a TOML file, or defaults if it does not exist.
    pub fn load(path: impl AsRef<Path>) -> Result<(Self, ConfigSource), ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok((Self::default(), ConfigSource::Defaults(path.to_path_buf())));
        }
        let config = Self::from_file(path)?;
        Ok((config, ConfigSource::File(path.to_path_buf())))
    }

    /// Loads configuration from a TOML file that must exist.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Applies command-line overrides on top of file values.
    pub fn with_cli_overrides(mut self, cli: &Cli) -> Self {
        if cli.reverse {
            self.display.chronological = false;
        }
        if let Some(file) = &cli.log_file {
            self.logging.file = file.clone();
        }
        self
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(*config.display().chronological());
        assert_eq!(config.logging().filter(), "info");
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["tictactoe_timeline", "--reverse", "--log-file", "x.log"]);
        let config = AppConfig::default().with_cli_overrides(&cli);
        assert!(!*config.display().chronological());
        assert_eq!(config.logging().file(), &PathBuf::from("x.log"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str("[logging]\nfilter = \"debug\"\n").unwrap();
        assert!(*config.display().chronological());
        assert_eq!(config.logging().filter(), "debug");
        assert_eq!(
            config.logging().file(),
            &PathBuf::from("tictactoe_timeline.log")
        );
    }
}
