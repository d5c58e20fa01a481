//! Tests for the game controller's click, jump and ordering behavior.

use tictactoe_timeline_core::invariants::{InvariantSet, TimelineInvariants};
use tictactoe_timeline_core::{
    Board, ClickOutcome, Coordinates, GameController, GameStatus, Player, Position,
};

fn play(game: &mut GameController, indices: &[usize]) {
    for &index in indices {
        assert!(
            game.click_index(index).is_placed(),
            "click on {} was rejected",
            index
        );
    }
}

#[test]
fn test_draw_after_nine_moves() {
    let mut game = GameController::default();
    // X O X / X O O / O X X
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);

    assert_eq!(game.current_step(), 9);
    assert_eq!(game.history().len(), 10);
    assert_eq!(game.winning_line(), None);
    assert_eq!(game.status(), GameStatus::Draw);
    assert_eq!(game.status().to_string(), "Draw");
}

#[test]
fn test_winner_status_and_line() {
    let mut game = GameController::default();
    play(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(
        game.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
    assert_eq!(game.status(), GameStatus::Winner(Player::X));
    assert_eq!(game.status().to_string(), "Winner: X");
}

#[test]
fn test_click_occupied_is_noop() {
    let mut game = GameController::default();
    play(&mut game, &[4]);
    let before = game.state().clone();

    assert_eq!(game.click(Position::Center), ClickOutcome::Occupied);
    assert_eq!(game.state(), &before);
    assert_eq!(game.next_player(), Player::O);
}

#[test]
fn test_click_after_win_is_idempotent_noop() {
    let mut game = GameController::default();
    play(&mut game, &[0, 3, 1, 4, 2]);
    let before = game.state().clone();

    for _ in 0..3 {
        assert_eq!(game.click(Position::BottomRight), ClickOutcome::GameOver);
        assert_eq!(game.state(), &before);
    }
}

#[test]
fn test_jump_to_start_restores_empty_board() {
    let mut game = GameController::default();
    play(&mut game, &[0, 3, 1]);

    game.jump_to(0).unwrap();
    assert_eq!(game.current_board(), &Board::new());
    assert_eq!(game.next_player(), Player::X);
    assert_eq!(game.status(), GameStatus::NextPlayer(Player::X));
    // Navigation never drops entries.
    assert_eq!(game.history().len(), 4);
}

#[test]
fn test_jump_to_odd_step_gives_o_the_turn() {
    let mut game = GameController::default();
    play(&mut game, &[0, 3, 1]);

    game.jump_to(1).unwrap();
    assert_eq!(game.next_player(), Player::O);
    assert_eq!(game.current_board().occupied(), 1);
}

#[test]
fn test_jump_past_end_is_rejected() {
    let mut game = GameController::default();
    play(&mut game, &[0]);
    let before = game.state().clone();

    assert!(game.jump_to(2).is_err());
    assert_eq!(game.state(), &before);
}

#[test]
fn test_jump_back_from_win_reopens_board() {
    let mut game = GameController::default();
    play(&mut game, &[0, 3, 1, 4, 2]);

    game.jump_to(4).unwrap();
    assert_eq!(game.winning_line(), None);
    assert_eq!(game.click(Position::BottomRight), ClickOutcome::Placed(Player::X));
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_click_after_jump_discards_redo_branch() {
    let mut game = GameController::default();
    play(&mut game, &[0, 1, 2, 3]);

    game.jump_to(1).unwrap();
    assert_eq!(game.click(Position::Center), ClickOutcome::Placed(Player::O));

    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_step(), 2);
    assert_eq!(game.next_player(), Player::X);
    assert!(game.current_board().is_empty(Position::TopRight));
    assert_eq!(
        game.history().entries()[2].coordinates(),
        &Some(Coordinates::new(2, 2))
    );
}

#[test]
fn test_toggle_order_reverses_only_move_list() {
    let mut game = GameController::default();
    game.click(Position::TopLeft);
    game.click(Position::TopCenter);
    assert_eq!(game.history().len(), 3);

    let steps = |game: &GameController| -> Vec<usize> {
        game.move_list().iter().map(|entry| *entry.step()).collect()
    };
    assert_eq!(steps(&game), vec![0, 1, 2]);

    let board = *game.current_board();
    game.toggle_order();

    assert_eq!(steps(&game), vec![2, 1, 0]);
    assert_eq!(game.current_step(), 2);
    assert_eq!(game.current_board(), &board);

    game.toggle_order();
    assert_eq!(steps(&game), vec![0, 1, 2]);
}

#[test]
fn test_move_list_labels_and_current_flag() {
    let mut game = GameController::default();
    game.click(Position::TopLeft);
    game.click(Position::TopCenter);
    game.jump_to(1).unwrap();

    let list = game.move_list();
    let labels: Vec<String> = list.iter().map(|entry| entry.label()).collect();
    assert_eq!(
        labels,
        vec!["Go to game start", "Go to move #1", "Go to move #2"]
    );

    let coordinates: Vec<String> = list.iter().map(|entry| entry.coordinates_label()).collect();
    assert_eq!(coordinates, vec!["", "(1, 1)", "(2, 1)"]);

    let current: Vec<bool> = list.iter().map(|entry| *entry.is_current()).collect();
    assert_eq!(current, vec![false, true, false]);
}

#[test]
fn test_turn_alternation_holds_across_reachable_states() {
    // Walk many click/jump interleavings; after every transition X must own
    // even steps and the full invariant set must hold.
    for first in 0..9 {
        for back in 0..4 {
            let mut game = GameController::default();
            let mut seed = first;
            for round in 0..12 {
                game.click_index(seed % 9);
                assert_eq!(
                    game.next_player() == Player::X,
                    game.current_step() % 2 == 0
                );
                if round % 4 == 3 {
                    let step = game.current_step().saturating_sub(back);
                    game.jump_to(step).unwrap();
                    assert_eq!(
                        game.next_player() == Player::X,
                        game.current_step() % 2 == 0
                    );
                }
                assert!(TimelineInvariants::check_all(game.state()).is_ok());
                seed = seed * 5 + 7;
            }
        }
    }
}
