//! Stateless UI rendering.
//!
//! [`screen_layout`] is shared by drawing and mouse handling so a press is
//! always resolved against the geometry that was drawn.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Focus};
use super::board_view::BoardView;

/// Screen regions for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    /// Title bar.
    pub title: Rect,
    /// Bordered board panel.
    pub board_panel: Rect,
    /// Inside of the board panel, where cells are laid out.
    pub board: Rect,
    /// Status line.
    pub status: Rect,
    /// Order toggle button.
    pub toggle: Rect,
    /// Bordered move list.
    pub moves_panel: Rect,
    /// Inside of the move list, one row per entry.
    pub moves: Rect,
    /// Key help.
    pub help: Rect,
}

/// Splits the terminal area into the screen regions.
pub fn screen_layout(area: Rect) -> ScreenLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(13),   // Body
            Constraint::Length(3), // Help
        ])
        .split(area);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);

    let info = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Status
            Constraint::Length(3), // Toggle
            Constraint::Min(3),    // Moves
        ])
        .split(body[1]);

    let bordered = Block::default().borders(Borders::ALL);
    ScreenLayout {
        title: rows[0],
        board_panel: body[0],
        board: bordered.inner(body[0]),
        status: info[0],
        toggle: info[1],
        moves_panel: info[2],
        moves: bordered.inner(info[2]),
        help: rows[2],
    }
}

/// Draws the whole screen for the current app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = screen_layout(frame.area());
    let game = app.game();

    let title = Paragraph::new("Tic-Tac-Toe Timeline")
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, layout.title);

    let board_block = focus_block("Board", app.focus() == &Focus::Board);
    frame.render_widget(board_block, layout.board_panel);

    let winning_line = game.winning_line();
    let highlight = winning_line.as_ref().map(|line| &line[..]).unwrap_or(&[]);
    let cursor = (app.focus() == &Focus::Board).then_some(*app.cursor());
    frame.render_widget(
        BoardView::new(game.current_board())
            .highlight(highlight)
            .cursor(cursor),
        layout.board,
    );

    let status = Paragraph::new(game.status().to_string())
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Status"));
    frame.render_widget(status, layout.status);

    let order = if game.is_chronological() {
        "oldest first"
    } else {
        "newest first"
    };
    let toggle = Paragraph::new(format!("[ Order: {} ]", order))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(toggle, layout.toggle);

    draw_moves(frame, app, &layout);

    let help = Paragraph::new("Click or 1-9 / arrows+Enter: play | Tab: focus | T: order | Q: quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(help, layout.help);
}

fn draw_moves(frame: &mut Frame, app: &App, layout: &ScreenLayout) {
    let focused = app.focus() == &Focus::Moves;
    let lines: Vec<Line> = app
        .game()
        .move_list()
        .iter()
        .map(|entry| {
            let mut style = Style::default();
            if *entry.is_current() {
                style = style.add_modifier(Modifier::BOLD).fg(Color::White);
            }
            if focused && *entry.step() == *app.selected_step() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(vec![
                Span::styled(
                    format!("{:>6} ", entry.coordinates_label()),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(entry.label(), style),
            ])
        })
        .collect();

    let moves = Paragraph::new(lines).block(focus_block("Moves", focused));
    frame.render_widget(moves, layout.moves_panel);
}

fn focus_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}
