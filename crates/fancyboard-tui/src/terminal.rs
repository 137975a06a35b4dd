//! Terminal ownership for the keyboard.
//!
//! `KeyboardTerminal::enter` switches the terminal into keyboard mode in one
//! step. Dropping it, or panicking while it is alive, puts the terminal back.
//! Ctrl+C arrives as a key event in raw mode and quits through the reducer,
//! so there is no signal path to restore from.

use std::io::{self, Stdout, Write};
use std::panic;
use std::sync::Once;

use anyhow::{Context, Result};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::queue;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;
use ratatui::{Frame, Terminal};

static PANIC_HOOK: Once = Once::new();

/// Raw-mode, alternate-screen terminal with mouse capture and bracketed
/// paste. Restored on drop.
pub struct KeyboardTerminal {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl KeyboardTerminal {
    /// Enters keyboard mode.
    ///
    /// Anything already switched on is switched back off if a later step
    /// fails.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be configured.
    pub fn enter() -> Result<Self> {
        install_panic_hook();

        enable_raw_mode().context("Failed to enable raw mode")?;
        match Self::enter_screen() {
            Ok(terminal) => Ok(Self { terminal }),
            Err(err) => {
                let _ = leave();
                Err(err)
            }
        }
    }

    fn enter_screen() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        let mut stdout = io::stdout();
        write_enter(&mut stdout).context("Failed to enter alternate screen")?;
        Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")
    }

    /// Draws one frame.
    ///
    /// # Errors
    /// Returns an error if writing to the terminal fails.
    pub fn draw(&mut self, render: impl FnOnce(&mut Frame)) -> Result<()> {
        self.terminal.draw(render)?;
        Ok(())
    }
}

impl Drop for KeyboardTerminal {
    fn drop(&mut self) {
        if let Err(err) = leave() {
            tracing::warn!(error = %err, "failed to restore terminal");
        }
    }
}

/// Queues the sequences that switch keyboard mode on, then flushes.
fn write_enter(out: &mut impl Write) -> io::Result<()> {
    queue!(out, EnterAlternateScreen, EnableBracketedPaste, EnableMouseCapture)?;
    out.flush()
}

/// Queues the sequences that switch keyboard mode off, then flushes.
/// Mouse capture goes first; some terminals keep reporting otherwise.
fn write_leave(out: &mut impl Write) -> io::Result<()> {
    queue!(out, DisableMouseCapture, DisableBracketedPaste, LeaveAlternateScreen)?;
    out.flush()
}

/// Idempotent.
fn leave() -> io::Result<()> {
    let written = write_leave(&mut io::stdout());
    disable_raw_mode()?;
    written
}

fn install_panic_hook() {
    PANIC_HOOK.call_once(|| {
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = leave();
            original_hook(panic_info);
        }));
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(haystack: &str, needle: &str) -> usize {
        haystack
            .find(needle)
            .unwrap_or_else(|| panic!("missing {needle:?} in {haystack:?}"))
    }

    #[test]
    fn enter_switches_on_screen_paste_and_mouse() {
        let mut out = Vec::new();
        write_enter(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        let screen = position(&out, "\x1b[?1049h");
        assert!(screen < position(&out, "\x1b[?2004h"));
        assert!(screen < position(&out, "\x1b[?1000h"));
    }

    #[test]
    fn leave_releases_mouse_before_leaving_screen() {
        let mut out = Vec::new();
        write_leave(&mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        let screen = position(&out, "\x1b[?1049l");
        assert!(position(&out, "\x1b[?1000l") < screen);
        assert!(position(&out, "\x1b[?2004l") < screen);
    }
}
