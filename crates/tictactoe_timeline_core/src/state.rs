//! Complete game state owned by the controller.

use crate::{Board, History, Player};
use serde::{Deserialize, Serialize};

/// History, turn and display-order state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Recorded snapshots plus the selected step.
    history: History,
    /// Player whose mark the next click places.
    next_player: Player,
    /// Move list shown oldest first when true.
    chronological: bool,
}

impl GameState {
    /// Creates the state of a fresh game.
    pub fn new(chronological: bool) -> Self {
        Self {
            history: History::new(),
            next_player: Player::X,
            chronological,
        }
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Index of the selected history entry.
    pub fn current_step(&self) -> usize {
        self.history.current_step()
    }

    /// Board at the selected step.
    pub fn current_board(&self) -> &Board {
        self.history.current().board()
    }

    /// Returns the player to move.
    pub fn next_player(&self) -> Player {
        self.next_player
    }

    /// Whether the move list is in chronological order.
    pub fn is_chronological(&self) -> bool {
        self.chronological
    }

    pub(crate) fn history_mut(&mut self) -> &mut History {
        &mut self.history
    }

    pub(crate) fn set_next_player(&mut self, player: Player) {
        self.next_player = player;
    }

    pub(crate) fn set_chronological(&mut self, chronological: bool) {
        self.chronological = chronological;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(true)
    }
}
