//! Terminal mode ownership for the board host.
//!
//! Entering the board switches to raw mode, the alternate screen and mouse
//! capture. [`TerminalGuard`] undoes all three when dropped, and a panic hook
//! does the same for panics that happen while the guard is alive.

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, Stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::OnceLock;

/// Set while the terminal is in board mode.
static BOARD_MODE: AtomicBool = AtomicBool::new(false);

/// Keeps the terminal in board mode until dropped.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    fn enter(stdout: &mut Stdout) -> io::Result<Self> {
        if BOARD_MODE.swap(true, Ordering::SeqCst) {
            return Err(io::Error::other("terminal is already in board mode"));
        }
        // Built before the mode switches so a failure below still restores.
        let guard = Self { _private: () };
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)?;
        install_panic_hook();
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore_terminal();
    }
}

/// Leaves board mode. Does nothing unless the terminal is in board mode, so
/// the guard and the panic hook can both call it.
pub fn restore_terminal() -> bool {
    if !BOARD_MODE.swap(false, Ordering::SeqCst) {
        return false;
    }
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen, Show);
    true
}

fn install_panic_hook() {
    static HOOK: OnceLock<()> = OnceLock::new();
    HOOK.get_or_init(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            restore_terminal();
            previous(info);
        }));
    });
}

pub fn setup_terminal() -> io::Result<(Terminal<CrosstermBackend<Stdout>>, TerminalGuard)> {
    let mut stdout = io::stdout();
    let guard = TerminalGuard::enter(&mut stdout)?;
    let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
    Ok((terminal, guard))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_outside_board_mode_is_noop() {
        assert!(!restore_terminal());
        assert!(!restore_terminal());
    }
}
