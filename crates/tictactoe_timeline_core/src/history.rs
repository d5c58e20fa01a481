//! Move history: an append-only log of board snapshots with a cursor.
//!
//! Every entry is an immutable snapshot of the board after a move, plus the
//! coordinates of that move. Navigation only moves the cursor; recording a
//! new move drops everything after the cursor first, so the log never
//! branches.

use crate::{Board, Coordinates, HistoryError};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Upper bound on history length: the empty board plus nine moves.
pub const MAX_ENTRIES: usize = 10;

/// A board snapshot and the move that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct HistoryEntry {
    /// Board after the move.
    board: Board,
    /// Where the move was played. `None` for the game start.
    coordinates: Option<Coordinates>,
}

impl HistoryEntry {
    /// The entry every game starts from.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            coordinates: None,
        }
    }

    /// Entry for a move played at `coordinates`.
    pub fn after_move(board: Board, coordinates: Coordinates) -> Self {
        Self {
            board,
            coordinates: Some(coordinates),
        }
    }
}

/// Ordered log of [`HistoryEntry`] values plus the selected step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct History {
    entries: Vec<HistoryEntry>,
    current_step: usize,
}

impl History {
    /// Creates a history holding only the initial empty board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::initial()],
            current_step: 0,
        }
    }

    /// All recorded entries, oldest first.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Number of recorded entries (never zero).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the initial entry cannot be removed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Index of the selected entry.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// The selected entry.
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.current_step]
    }

    /// Records a move made from the current step.
    ///
    /// Entries after the cursor are discarded, the new entry is appended and
    /// becomes current.
    #[instrument(skip(self, board))]
    pub fn record(&mut self, board: Board, coordinates: Coordinates) {
        let discarded = self.entries.len() - (self.current_step + 1);
        if discarded > 0 {
            debug!(discarded, "Dropping redo branch");
        }
        self.entries.truncate(self.current_step + 1);
        self.entries.push(HistoryEntry::after_move(board, coordinates));
        self.current_step = self.entries.len() - 1;
    }

    /// Moves the cursor to `step` without touching the entries.
    #[instrument(skip(self))]
    pub fn seek(&mut self, step: usize) -> Result<(), HistoryError> {
        if step >= self.entries.len() {
            return Err(HistoryError::step_out_of_range(step, self.entries.len()));
        }
        self.current_step = step;
        Ok(())
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
