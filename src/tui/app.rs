//! Application state and input handling.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use derive_getters::Getters;
use ratatui::layout::Rect;
use tictactoe_timeline_core::{ClickOutcome, GameController, Position};
use tracing::{debug, instrument, warn};

use super::board_view::BoardView;
use super::input::{digit_position, move_cursor};
use super::ui::screen_layout;

/// Which panel receives arrow keys and Enter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrows move the board cursor; Enter places a mark.
    #[default]
    Board,
    /// Arrows select a history row; Enter jumps to it.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Main application state.
#[derive(Debug, Getters)]
pub struct App {
    game: GameController,
    cursor: Position,
    focus: Focus,
    /// History step under the move-list cursor.
    selected_step: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(chronological: bool) -> Self {
        Self {
            game: GameController::new(chronological),
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            should_quit: false,
        }
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        // crossterm fires both press and release on some platforms.
        if key.kind == KeyEventKind::Release {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                debug!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('t') | KeyCode::Char('T') => self.game.toggle_order(),
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.selected_step = self.game.current_step();
            }
            code if digit_position(code).is_some() => {
                if let Some(position) = digit_position(code) {
                    self.cursor = position;
                    self.click(position);
                }
            }
            code => match self.focus {
                Focus::Board => self.handle_board_key(code),
                Focus::Moves => self.handle_moves_key(code),
            },
        }
    }

    /// Handles a mouse event; `area` is the full frame it was drawn in.
    #[instrument(skip(self), fields(x = mouse.column, y = mouse.row))]
    pub fn handle_mouse(&mut self, mouse: MouseEvent, area: Rect) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let (x, y) = (mouse.column, mouse.row);
        let layout = screen_layout(area);

        if let Some(position) = BoardView::hit_test(layout.board, x, y) {
            self.focus = Focus::Board;
            self.cursor = position;
            self.click(position);
        } else if contains(layout.toggle, x, y) {
            self.game.toggle_order();
        } else if contains(layout.moves, x, y) {
            let row = usize::from(y - layout.moves.y);
            if let Some(entry) = self.game.move_list().get(row) {
                self.focus = Focus::Moves;
                self.jump_to(*entry.step());
            }
        }
    }

    fn handle_board_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.click(self.cursor),
            _ => {}
        }
    }

    fn handle_moves_key(&mut self, code: KeyCode) {
        let list = self.game.move_list();
        let Some(selected) = list
            .iter()
            .position(|entry| *entry.step() == self.selected_step)
        else {
            self.selected_step = self.game.current_step();
            return;
        };

        match code {
            KeyCode::Up => {
                self.selected_step = *list[selected.saturating_sub(1)].step();
            }
            KeyCode::Down => {
                let next = (selected + 1).min(list.len() - 1);
                self.selected_step = *list[next].step();
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to(self.selected_step),
            _ => {}
        }
    }

    fn click(&mut self, position: Position) {
        let outcome = self.game.click(position);
        if let ClickOutcome::Placed(_) = outcome {
            self.selected_step = self.game.current_step();
        }
    }

    fn jump_to(&mut self, step: usize) {
        // Rows come from the move list, so the step is always recorded.
        match self.game.jump_to(step) {
            Ok(()) => self.selected_step = step,
            Err(e) => warn!(error = %e, "Ignoring jump to unknown step"),
        }
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use tictactoe_timeline_core::{GameStatus, Player};

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn left_click(app: &mut App, area: Rect, x: u16, y: u16) {
        app.handle_mouse(
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: x,
                row: y,
                modifiers: KeyModifiers::NONE,
            },
            area,
        );
    }

    #[test]
    fn test_digit_keys_play() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('5'));

        assert_eq!(app.game().current_step(), 2);
        assert_eq!(app.game().status(), GameStatus::NextPlayer(Player::X));
        assert_eq!(app.cursor(), &Position::Center);
    }

    #[test]
    fn test_arrows_and_enter_play_at_cursor() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Enter);

        assert!(!app.game().current_board().is_empty(Position::TopLeft));
    }

    #[test]
    fn test_move_list_navigation_jumps() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Char('1'));
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus(), &Focus::Moves);
        assert_eq!(app.selected_step(), &2);

        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.game().current_step(), 0);
        assert_eq!(app.game().next_player(), Player::X);
    }

    #[test]
    fn test_toggle_and_quit_keys() {
        let mut app = App::new(true);
        press(&mut app, KeyCode::Char('t'));
        assert!(!app.game().is_chronological());
        press(&mut app, KeyCode::Char('q'));
        assert!(*app.should_quit());
    }

    #[test]
    fn test_mouse_click_on_cell_and_move_list() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = screen_layout(area);
        let cells = BoardView::cell_rects(layout.board);

        let mut app = App::new(true);
        left_click(&mut app, area, cells[0].x, cells[0].y);
        left_click(&mut app, area, cells[4].x + 1, cells[4].y + 1);
        assert_eq!(app.game().current_step(), 2);

        // First move-list row is the game start in chronological order.
        left_click(&mut app, area, layout.moves.x + 2, layout.moves.y);
        assert_eq!(app.game().current_step(), 0);
        assert_eq!(app.game().history().len(), 3);
    }

    #[test]
    fn test_mouse_click_on_toggle() {
        let area = Rect::new(0, 0, 80, 24);
        let layout = screen_layout(area);
        let mut app = App::new(true);

        left_click(&mut app, area, layout.toggle.x + 1, layout.toggle.y + 1);
        assert!(!app.game().is_chronological());
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = App::new(true);
        let mut key = KeyEvent::new(KeyCode::Char('5'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        app.handle_key(key);
        assert_eq!(app.game().current_step(), 0);
    }
}
