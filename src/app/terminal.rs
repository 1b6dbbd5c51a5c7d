//! Switching the terminal in and out of TUI mode.

use std::io::{Stdout, stdout};

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// The ratatui handle drawn into by the event loop.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// What: Enter TUI mode and build the drawing handle.
///
/// Output:
/// - The terminal handle, or the first error hit along the way.
///
/// Details:
/// - Raw mode, the alternate screen and mouse capture are switched on first.
/// - If the handle cannot be built the terminal is restored before returning the error.
pub fn open_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    if let Err(e) = execute!(stdout(), EnterAlternateScreen, EnableMouseCapture) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }
    build_or_restore(|| Terminal::new(CrosstermBackend::new(stdout())), restore_terminal)
}

/// Undo [`open_terminal`]: mouse capture off, main screen back, raw mode off.
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(stdout(), DisableMouseCapture, LeaveAlternateScreen)?;
    Ok(())
}

/// Run `build` after the terminal is set up, calling `restore` when it fails.
fn build_or_restore<T>(
    build: impl FnOnce() -> std::io::Result<T>,
    restore: impl FnOnce() -> Result<()>,
) -> Result<T> {
    match build() {
        Ok(handle) => Ok(handle),
        Err(e) => {
            if let Err(restore_err) = restore() {
                tracing::warn!(error = %restore_err, "failed to restore terminal");
            }
            Err(e.into())
        }
    }
}
