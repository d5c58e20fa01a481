//! Stateless 3x3 board widget with click hit-testing.
//!
//! Cell geometry is a pure function of the drawing area, so the same area
//! used to render a frame can later resolve a mouse press to a cell.

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Paragraph, Widget},
};
use tictactoe_timeline_core::{Board, Player, Position, Square};

/// Width of one cell in columns.
pub const CELL_WIDTH: u16 = 7;
/// Height of one cell in rows.
pub const CELL_HEIGHT: u16 = 3;
/// Total grid width including two separator columns.
pub const GRID_WIDTH: u16 = CELL_WIDTH * 3 + 2;
/// Total grid height including two separator rows.
pub const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + 2;

/// Renders nine cells from a board, marking highlighted ones.
#[derive(Debug, Clone, Copy)]
pub struct BoardView<'a> {
    board: &'a Board,
    highlight: &'a [Position],
    cursor: Option<Position>,
}

impl<'a> BoardView<'a> {
    /// Creates a view of `board` with no highlight and no cursor.
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            highlight: &[],
            cursor: None,
        }
    }

    /// Cells to mark, e.g. a completed line.
    pub fn highlight(mut self, highlight: &'a [Position]) -> Self {
        self.highlight = highlight;
        self
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(mut self, cursor: Option<Position>) -> Self {
        self.cursor = cursor;
        self
    }

    /// Screen rectangles of the nine cells, row-major, centered in `area`.
    ///
    /// Cells that do not fit are clipped to `area`.
    pub fn cell_rects(area: Rect) -> [Rect; 9] {
        let grid = center_rect(area, GRID_WIDTH, GRID_HEIGHT);
        Position::ALL.map(|pos| {
            let x = grid.x + u16::from(pos.column() - 1) * (CELL_WIDTH + 1);
            let y = grid.y + u16::from(pos.row() - 1) * (CELL_HEIGHT + 1);
            Rect::new(x, y, CELL_WIDTH, CELL_HEIGHT).intersection(area)
        })
    }

    /// Resolves a press at screen `(x, y)` to the cell under it.
    ///
    /// The cell's row and column come from its fixed place in the grid,
    /// never from what the board holds. Separators and anything outside the
    /// grid miss.
    pub fn hit_test(area: Rect, x: u16, y: u16) -> Option<Position> {
        Self::cell_rects(area)
            .iter()
            .zip(Position::ALL)
            .find(|(rect, _)| contains(**rect, x, y))
            .map(|(_, pos)| pos)
    }

    fn cell_style(&self, pos: Position, square: Square) -> Style {
        let base = match square {
            Square::Empty => Style::default().fg(Color::DarkGray),
            Square::Occupied(Player::X) => {
                Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
            }
            Square::Occupied(Player::O) => {
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
            }
        };
        let base = if self.highlight.contains(&pos) {
            base.bg(Color::Green).fg(Color::Black)
        } else {
            base
        };
        if self.cursor == Some(pos) {
            base.add_modifier(Modifier::REVERSED)
        } else {
            base
        }
    }
}

impl Widget for BoardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let separator = Style::default().fg(Color::DarkGray);
        let grid = center_rect(area, GRID_WIDTH, GRID_HEIGHT);

        for line in 1..3u16 {
            let y = grid.y + line * (CELL_HEIGHT + 1) - 1;
            let x = grid.x + line * (CELL_WIDTH + 1) - 1;
            for dx in 0..GRID_WIDTH {
                put(buf, area, grid.x + dx, y, "─", separator);
            }
            for dy in 0..GRID_HEIGHT {
                let symbol = if (dy + 1) % (CELL_HEIGHT + 1) == 0 { "┼" } else { "│" };
                put(buf, area, x, grid.y + dy, symbol, separator);
            }
        }

        for (rect, pos) in Self::cell_rects(area).into_iter().zip(Position::ALL) {
            let square = self.board.get(pos);
            let symbol = match square {
                Square::Empty => String::new(),
                Square::Occupied(player) => player.to_string(),
            };
            let style = self.cell_style(pos, square);
            buf.set_style(rect, style);

            let mut text_area = rect;
            text_area.y += rect.height / 2;
            text_area.height = rect.height.min(1);
            Paragraph::new(symbol)
                .style(style)
                .alignment(Alignment::Center)
                .render(text_area.intersection(area), buf);
        }
    }
}

fn put(buf: &mut Buffer, area: Rect, x: u16, y: u16, symbol: &str, style: Style) {
    if contains(area, x, y) {
        buf[(x, y)].set_symbol(symbol).set_style(style);
    }
}

fn contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
