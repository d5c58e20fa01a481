//! Keyboard navigation helpers.

use crossterm::event::KeyCode;
use tictactoe_timeline_core::Position;

/// Moves the board cursor one cell in the arrow's direction.
///
/// The cursor stops at the edges.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, column) = (cursor.row(), cursor.column());
    let (row, column) = match key {
        KeyCode::Up => (row.saturating_sub(1).max(1), column),
        KeyCode::Down => ((row + 1).min(3), column),
        KeyCode::Left => (row, column.saturating_sub(1).max(1)),
        KeyCode::Right => (row, (column + 1).min(3)),
        _ => (row, column),
    };
    Position::from_row_column(row, column).unwrap_or(cursor)
}

/// Maps digit keys `1`-`9` to cells, numbered row-major from the top left.
pub fn digit_position(key: KeyCode) -> Option<Position> {
    match key {
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(|d| (d as usize).checked_sub(1))
            .and_then(Position::from_index),
        _ => None,
    }
}
