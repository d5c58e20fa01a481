//! Tic-tac-toe rules and a navigable move history.
//!
//! This crate has no UI dependency. A front end owns one
//! [`GameController`], forwards clicks and history jumps to it, and renders
//! from the derived [`GameStatus`] and [`MoveListEntry`] values.
//!
//! # Example
//!
//! ```
//! use tictactoe_timeline_core::{GameController, GameStatus, Player, Position};
//!
//! let mut game = GameController::new(true);
//! game.click(Position::TopLeft);
//! game.click(Position::Center);
//! assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
//!
//! game.jump_to(0).unwrap();
//! assert!(game.current_board().is_empty(Position::TopLeft));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod controller;
mod error;
mod history;
pub mod invariants;
mod position;
pub mod rules;
mod state;
mod status;
mod types;

pub use controller::GameController;
pub use error::HistoryError;
pub use history::{History, HistoryEntry, MAX_ENTRIES};
pub use position::{Coordinates, Position};
pub use state::GameState;
pub use status::{ClickOutcome, GameStatus, MoveListEntry};
pub use types::{Board, Player, Square};
