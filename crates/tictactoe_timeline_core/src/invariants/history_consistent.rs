//! History consistency invariant: entry `n` is the board after `n` moves.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: every entry matches its place in the log.
///
/// Entry `n` holds exactly `n` marks, X leads O by zero or one, and only the
/// initial entry lacks coordinates.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        state
            .history()
            .entries()
            .iter()
            .enumerate()
            .all(|(step, entry)| {
                let board = entry.board();
                let x = board.count(Player::X);
                let o = board.count(Player::O);
                board.occupied() == step
                    && (x == o || x == o + 1)
                    && entry.coordinates().is_some() == (step != 0)
            })
    }

    fn description() -> &'static str {
        "History entry n holds n alternating marks and the coordinates of move n"
    }
}
