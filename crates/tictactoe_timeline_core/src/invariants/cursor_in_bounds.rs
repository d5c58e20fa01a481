//! Cursor invariant: the selected step is a recorded entry.

use super::Invariant;
use crate::{GameState, MAX_ENTRIES};

/// Invariant: `current_step < history.len() <= MAX_ENTRIES`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameState> for CursorInBoundsInvariant {
    fn holds(state: &GameState) -> bool {
        let len = state.history().len();
        state.current_step() < len && len <= MAX_ENTRIES
    }

    fn description() -> &'static str {
        "Selected step lies inside a history of at most ten entries"
    }
}
