//! Game controller: the single owner of [`GameState`].
//!
//! Front ends forward cell clicks, history jumps and order toggles here, then
//! redraw from [`GameController::status`], [`GameController::move_list`] and
//! [`GameController::current_board`]. Nothing on the controller suspends or
//! spawns; each call is one complete transition.

use crate::invariants::{InvariantSet, TimelineInvariants};
use crate::rules::{check_winner, detect_winner};
use crate::{
    Board, ClickOutcome, GameState, GameStatus, History, HistoryError, MoveListEntry, Player,
    Position, Square,
};
use tracing::{debug, info, instrument};

/// Number of moves that fill the board.
const FULL_BOARD_STEP: usize = 9;

/// Drives a tic-tac-toe game with time travel.
#[derive(Debug, Clone, Default)]
pub struct GameController {
    state: GameState,
}

impl GameController {
    /// Creates a controller for a fresh game.
    #[instrument]
    pub fn new(chronological: bool) -> Self {
        Self {
            state: GameState::new(chronological),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the move history.
    pub fn history(&self) -> &History {
        self.state.history()
    }

    /// Index of the selected history entry.
    pub fn current_step(&self) -> usize {
        self.state.current_step()
    }

    /// Board at the selected step.
    pub fn current_board(&self) -> &Board {
        self.state.current_board()
    }

    /// Returns the player to move.
    pub fn next_player(&self) -> Player {
        self.state.next_player()
    }

    /// Whether the move list is in chronological order.
    pub fn is_chronological(&self) -> bool {
        self.state.is_chronological()
    }

    /// The completed line on the selected board, if any.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        detect_winner(self.current_board())
    }

    /// Places the next player's mark at `position`.
    ///
    /// Does nothing when the selected board already has a completed line or
    /// the cell is taken. Otherwise drops any entries after the selected step,
    /// records the new board with the cell's coordinates and passes the turn.
    #[instrument(skip(self), fields(step = self.current_step()))]
    pub fn click(&mut self, position: Position) -> ClickOutcome {
        let current = *self.current_board();
        if detect_winner(&current).is_some() {
            return ClickOutcome::GameOver;
        }
        if !current.is_empty(position) {
            return ClickOutcome::Occupied;
        }

        let player = self.state.next_player();
        let mut board = current;
        board.set(position, Square::Occupied(player));
        self.state
            .history_mut()
            .record(board, position.coordinates());
        self.state.set_next_player(player.opponent());

        info!(
            player = %player,
            position = %position,
            step = self.current_step(),
            "Move placed"
        );
        self.debug_check_invariants();
        ClickOutcome::Placed(player)
    }

    /// Clicks the cell at a raw row-major index.
    ///
    /// Indices past the board are ignored like any other rejected click.
    #[instrument(skip(self))]
    pub fn click_index(&mut self, index: usize) -> ClickOutcome {
        match Position::from_index(index) {
            Some(position) => self.click(position),
            None => ClickOutcome::OutOfBounds,
        }
    }

    /// Selects history entry `step` and restores whose turn it was.
    ///
    /// The history itself is untouched; the next click from here discards
    /// later entries. Steps past the end are rejected and leave the state as
    /// it was.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        self.state.history_mut().seek(step)?;
        self.state.set_next_player(Player::for_step(step));
        debug!(step, next_player = %self.next_player(), "Jumped to step");
        self.debug_check_invariants();
        Ok(())
    }

    /// Flips the move list between oldest-first and newest-first.
    #[instrument(skip(self))]
    pub fn toggle_order(&mut self) {
        let chronological = !self.state.is_chronological();
        self.state.set_chronological(chronological);
        debug!(chronological, "Toggled move list order");
    }

    /// Status line for the selected step.
    pub fn status(&self) -> GameStatus {
        if let Some(player) = check_winner(self.current_board()) {
            GameStatus::Winner(player)
        } else if self.current_step() == FULL_BOARD_STEP {
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(self.next_player())
        }
    }

    /// One entry per recorded step, in the selected display order.
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        let current = self.current_step();
        let entries = self
            .history()
            .entries()
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveListEntry::new(step, *entry.coordinates(), step == current));

        if self.is_chronological() {
            entries.collect()
        } else {
            entries.rev().collect()
        }
    }

    fn debug_check_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = TimelineInvariants::check_all(&self.state)
        {
            panic!("Game state invariants violated: {:?}", violations);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_controller() {
        let game = GameController::default();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.current_step(), 0);
        assert_eq!(game.next_player(), Player::X);
        assert!(game.is_chronological());
        assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
    }

    #[test]
    fn test_click_places_and_flips_turn() {
        let mut game = GameController::default();
        assert_eq!(game.click(Position::Center), ClickOutcome::Placed(Player::X));

        assert_eq!(game.history().len(), 2);
        assert_eq!(game.current_step(), 1);
        assert_eq!(game.next_player(), Player::O);
        assert_eq!(
            game.current_board().get(Position::Center),
            Square::Occupied(Player::X)
        );
    }

    #[test]
    fn test_click_index_out_of_bounds() {
        let mut game = GameController::default();
        assert_eq!(game.click_index(9), ClickOutcome::OutOfBounds);
        assert_eq!(game.history().len(), 1);
    }

    #[test]
    fn test_toggle_order_keeps_state() {
        let mut game = GameController::default();
        game.click(Position::TopLeft);
        let before = game.state().history().clone();

        game.toggle_order();
        assert!(!game.is_chronological());
        assert_eq!(game.state().history(), &before);
        assert_eq!(game.current_step(), 1);
    }
}
