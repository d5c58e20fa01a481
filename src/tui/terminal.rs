//! Terminal mode teardown.
//!
//! Raw mode, the alternate screen and mouse capture outlive the process if
//! nobody turns them off, so teardown runs from a drop guard and from the
//! panic hook.

use crossterm::{
    cursor::Show,
    event::DisableMouseCapture,
    execute,
    terminal::{LeaveAlternateScreen, disable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Restores the terminal when dropped.
///
/// Create it right after raw mode is enabled. Every later exit path,
/// including `?` and unwinding panics, then leaves the terminal usable.
pub struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> TerminalGuard<W> {
    /// Guards the terminal behind `out`.
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        restore_terminal(&mut self.out);
    }
}

/// Leaves raw mode, the alternate screen and mouse capture, and shows the
/// cursor. Failures are logged and the remaining steps still run.
pub fn restore_terminal<W: Write>(out: &mut W) {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
}

/// Chains a panic hook that restores the terminal before the previous hook
/// prints the panic message.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore_terminal(&mut io::stdout());
        previous(info);
    }));
}
