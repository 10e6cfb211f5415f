//! Raw mode and alternate screen handling
//!
//! [`TerminalModes::enable`] switches the terminal into the state the editor
//! draws in; dropping the value (or calling [`TerminalModes::undo`]) puts it
//! back. [`emergency_cleanup`] is for the panic hook, where the guard may not
//! get a chance to drop.

use anyhow::{Context, Result};
use crossterm::cursor::Show;
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use std::io::{self, Write};

/// Terminal state guard
pub struct TerminalModes {
    active: bool,
}

impl TerminalModes {
    pub fn enable() -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        execute!(io::stdout(), EnterAlternateScreen).context("Failed to enter alternate screen")?;
        tracing::debug!("Terminal modes enabled");
        Ok(Self { active: true })
    }

    /// Restore the terminal; safe to call more than once
    pub fn undo(&mut self) {
        if !self.active {
            return;
        }
        self.active = false;
        restore();
        tracing::debug!("Terminal modes restored");
    }
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        self.undo();
    }
}

/// Best-effort restore for the panic path
pub fn emergency_cleanup() {
    restore();
}

fn restore() {
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen, Show);
    let _ = disable_raw_mode();
    let _ = stdout.flush();
}
