//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the controller so any front end can evaluate a snapshot on its own.

pub mod win;

pub use win::{LINES, check_winner, detect_winner};
