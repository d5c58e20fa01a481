//! Derived, display-only views of the game state.

use crate::{Coordinates, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Status line for the selected step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum GameStatus {
    /// A line is complete.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Nine moves without a completed line.
    #[display("Draw")]
    Draw,
    /// Game continues with this player to move.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// Result of a click on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum ClickOutcome {
    /// A mark was placed and a history entry appended.
    #[display("placed {}", _0)]
    Placed(Player),
    /// The cell already holds a mark; nothing changed.
    #[display("occupied")]
    Occupied,
    /// A line is already complete; nothing changed.
    #[display("game over")]
    GameOver,
    /// Raw index outside the board; nothing changed.
    #[display("out of bounds")]
    OutOfBounds,
}

impl ClickOutcome {
    /// True when the click changed the game state.
    pub fn is_placed(self) -> bool {
        matches!(self, ClickOutcome::Placed(_))
    }
}

/// One selectable row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct MoveListEntry {
    /// History index this row jumps to.
    step: usize,
    /// Where the move was played; `None` for the game start.
    coordinates: Option<Coordinates>,
    /// Whether this row is the selected step.
    is_current: bool,
}

impl MoveListEntry {
    pub(crate) fn new(step: usize, coordinates: Option<Coordinates>, is_current: bool) -> Self {
        Self {
            step,
            coordinates,
            is_current,
        }
    }

    /// Button text: `Go to game start` or `Go to move #n`.
    pub fn label(&self) -> String {
        if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }

    /// Coordinates rendered as `(column, row)`, empty for the game start.
    pub fn coordinates_label(&self) -> String {
        match self.coordinates {
            Some(coordinates) if self.step != 0 => coordinates.to_string(),
            _ => String::new(),
        }
    }
}
