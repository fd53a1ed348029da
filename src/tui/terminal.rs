//! Terminal lifecycle: raw mode and the alternate screen.

use std::io::{self, IsTerminal, Stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{BalcaoError, Result};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

fn io_err(context: &str, err: io::Error) -> BalcaoError {
    BalcaoError::Io(format!("{context}: {err}"))
}

/// Puts the terminal into raw mode on the alternate screen.
///
/// Refuses to start when stdout is not a TTY. If a later step fails, raw
/// mode is undone so the shell is not left in a broken state.
pub fn setup_terminal() -> Result<Tui> {
    if !io::stdout().is_terminal() {
        return Err(BalcaoError::Io(
            "stdout is not a terminal; the interface needs an interactive TTY".to_string(),
        ));
    }

    enable_raw_mode().map_err(|e| io_err("failed to enable raw mode", e))?;

    let result = (|| {
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)
            .map_err(|e| io_err("failed to enter alternate screen", e))?;
        Terminal::new(CrosstermBackend::new(stdout))
            .map_err(|e| io_err("failed to create terminal", e))
    })();

    if result.is_err() {
        let _ = disable_raw_mode();
    }
    result
}

/// Leaves the alternate screen and hands the terminal back to the shell.
pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode().map_err(|e| io_err("failed to disable raw mode", e))?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .map_err(|e| io_err("failed to leave alternate screen", e))?;
    terminal
        .show_cursor()
        .map_err(|e| io_err("failed to restore cursor", e))
}
