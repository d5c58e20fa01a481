//! Terminal front end.
//!
//! One blocking event loop: read an event, apply it to the [`App`], redraw.

mod app;
mod board_view;
mod input;
mod terminal;
mod ui;

pub use app::{App, Focus};
pub use board_view::BoardView;
pub use ui::{ScreenLayout, draw, screen_layout};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, EnableMouseCapture, Event},
    execute,
    terminal::{EnterAlternateScreen, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

use crate::AppConfig;
use terminal::{TerminalGuard, install_panic_hook};

/// Runs the game until the user quits, restoring the terminal on the way out.
#[instrument(skip(config))]
pub fn run_tui(config: &AppConfig) -> Result<()> {
    info!("Starting tic-tac-toe TUI");

    install_panic_hook();
    enable_raw_mode().context("Failed to enable raw mode")?;
    let _guard = TerminalGuard::new(io::stdout());

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let app = App::new(*config.display().chronological());
    let res = run_app(&mut terminal, app);

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("TUI exited");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    loop {
        let area = terminal.draw(|f| draw(f, &app))?.area;

        if *app.should_quit() {
            return Ok(());
        }

        match event::read()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse, area),
            Event::Resize(width, height) => {
                debug!(width, height, "Terminal resized");
            }
            _ => {}
        }
    }
}
