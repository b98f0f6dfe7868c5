//! Terminal setup and teardown utilities.

use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{DepthviewError, Result};

/// Type alias for our terminal backend.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enables raw mode and switches to the alternate screen buffer.
///
/// # Errors
///
/// Returns [`DepthviewError::Io`] if stdout is not a TTY or the terminal
/// refuses either mode switch.
pub fn setup_terminal() -> Result<Tui> {
    if !io::stdout().is_terminal() {
        return Err(DepthviewError::Io(
            "depth replay needs an interactive terminal (TTY)".to_string(),
        ));
    }

    enable_raw_mode().map_err(|e| io_error("failed to enable raw mode", e))?;
    install_panic_hook();

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(io_error("failed to enter alternate screen", e));
    }

    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        let _ = leave_screen();
        io_error("failed to create terminal", e)
    })
}

/// Disables raw mode, leaves the alternate screen and shows the cursor.
///
/// # Errors
///
/// Returns [`DepthviewError::Io`] if the terminal cannot be restored.
pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    leave_screen().map_err(|e| io_error("failed to restore terminal", e))?;
    terminal
        .show_cursor()
        .map_err(|e| io_error("failed to show cursor", e))
}

fn leave_screen() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)
}

/// Restores the screen before the default panic output is printed.
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = leave_screen();
        previous(info);
    }));
}

fn io_error(context: &str, e: io::Error) -> DepthviewError {
    DepthviewError::Io(format!("{context}: {e}"))
}
