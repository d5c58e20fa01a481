//! Alternating turn invariant: X owns even steps, O owns odd ones.

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: the next player is X exactly when the selected step is even.
///
/// Holds after clicks and after jumps alike, since both derive the turn from
/// the number of moves on the selected board.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        state.next_player() == Player::for_step(state.current_step())
    }

    fn description() -> &'static str {
        "Next player is X on even steps and O on odd steps"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position, Square};

    #[test]
    fn test_new_game_holds() {
        assert!(AlternatingTurnInvariant::holds(&GameState::default()));
    }

    #[test]
    fn test_after_one_move_holds() {
        let mut state = GameState::default();
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        state
            .history_mut()
            .record(board, Position::Center.coordinates());
        state.set_next_player(Player::O);

        assert!(AlternatingTurnInvariant::holds(&state));
    }

    #[test]
    fn test_same_player_twice_violates() {
        let mut state = GameState::default();
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        state
            .history_mut()
            .record(board, Position::Center.coordinates());

        // Turn never flipped.
        assert!(!AlternatingTurnInvariant::holds(&state));
    }
}
