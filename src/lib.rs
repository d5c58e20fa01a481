//! Tic-tac-toe with a clickable move history, in the terminal.
//!
//! The game rules and the time-travel history live in
//! [`tictactoe_timeline_core`]; this crate mounts them in a ratatui
//! front end and supplies the CLI, configuration and logging around it.
//!
//! # Architecture
//!
//! - **Core**: [`GameController`] owns all game state
//! - **TUI**: [`BoardView`] and the info panel render it; [`App`] maps
//!   keys and mouse presses to controller calls
//! - **Config**: [`AppConfig`] from an optional TOML file plus CLI overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod tui;

pub use cli::Cli;
pub use config::{AppConfig, ConfigError, ConfigSource, DisplayConfig, LoggingConfig};
pub use logging::init_logging;
pub use tui::{App, BoardView, Focus, ScreenLayout, draw, run_tui, screen_layout};

pub use tictactoe_timeline_core::{
    Board, ClickOutcome, Coordinates, GameController, GameState, GameStatus, HistoryEntry,
    HistoryError, MoveListEntry, Player, Position, Square,
};
