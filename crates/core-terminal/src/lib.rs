//! Terminal backend abstraction and crossterm implementation.
//!
//! Raw mode is a scoped resource: `enter_guard` switches the terminal into raw
//! mode and hands back a `TerminalGuard` that restores it exactly once,
//! either explicitly through `TerminalGuard::restore` (so a failure can be
//! reported) or on drop (early return, error propagation, panic unwind).

use crossterm::{
    Command, queue,
    terminal::{self, Clear, ClearType, disable_raw_mode, enable_raw_mode},
};
use std::fmt;
use std::io::{self, Write, stdout};
use thiserror::Error;

/// `ESC [ H`: cursor to the top-left cell without explicit coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveHome;

impl Command for MoveHome {
    fn write_ansi(&self, f: &mut impl fmt::Write) -> fmt::Result {
        f.write_str("\x1b[H")
    }

    #[cfg(windows)]
    fn execute_winapi(&self) -> io::Result<()> {
        crossterm::cursor::MoveTo(0, 0).execute_winapi()
    }
}

#[derive(Debug, Error)]
pub enum TerminalError {
    #[error("cannot query terminal size: {0}")]
    Size(#[source] io::Error),
    #[error("cannot enter raw mode: {0}")]
    RawMode(#[source] io::Error),
    #[error("cannot restore terminal: {0}")]
    Restore(#[source] io::Error),
}

pub trait TerminalBackend {
    fn enter(&mut self) -> Result<(), TerminalError>;
    fn leave(&mut self) -> Result<(), TerminalError>;
    /// Current size as `(rows, cols)`.
    fn size(&self) -> Result<(usize, usize), TerminalError>;

    /// Enter and return a guard that will leave on drop.
    fn enter_guard(&mut self) -> Result<TerminalGuard<'_, Self>, TerminalError>
    where
        Self: Sized,
    {
        self.enter()?;
        Ok(TerminalGuard {
            backend: self,
            active: true,
        })
    }
}

/// RAII guard ensuring terminal state restoration even if caller early-returns or panics.
pub struct TerminalGuard<'a, B: TerminalBackend> {
    backend: &'a mut B,
    active: bool,
}

impl<'a, B: TerminalBackend> TerminalGuard<'a, B> {
    /// Restore now and report the outcome. Drop becomes a no-op afterwards.
    pub fn restore(mut self) -> Result<(), TerminalError> {
        self.active = false;
        self.backend.leave()
    }
}

impl<'a, B: TerminalBackend> Drop for TerminalGuard<'a, B> {
    fn drop(&mut self) {
        if self.active {
            self.active = false;
            if let Err(e) = self.backend.leave() {
                tracing::error!(target: "terminal", %e, "restore_on_drop_failed");
            }
        }
    }
}

pub struct CrosstermBackend {
    entered: bool,
}

impl Default for CrosstermBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl CrosstermBackend {
    pub fn new() -> Self {
        Self { entered: false }
    }

    fn clear_screen() -> io::Result<()> {
        let mut out = stdout();
        queue!(out, Clear(ClearType::All), MoveHome)?;
        out.flush()
    }
}

impl TerminalBackend for CrosstermBackend {
    fn enter(&mut self) -> Result<(), TerminalError> {
        if !self.entered {
            enable_raw_mode().map_err(TerminalError::RawMode)?;
            self.entered = true;
            tracing::debug!(target: "terminal", "raw_mode_entered");
        }
        Ok(())
    }

    fn leave(&mut self) -> Result<(), TerminalError> {
        if self.entered {
            self.entered = false;
            let cleared = Self::clear_screen();
            disable_raw_mode().map_err(TerminalError::Restore)?;
            cleared.map_err(TerminalError::Restore)?;
            tracing::debug!(target: "terminal", "raw_mode_left");
        }
        Ok(())
    }

    fn size(&self) -> Result<(usize, usize), TerminalError> {
        let (cols, rows) = terminal::size().map_err(TerminalError::Size)?;
        Ok((usize::from(rows), usize::from(cols)))
    }
}

impl Drop for CrosstermBackend {
    fn drop(&mut self) {
        if let Err(e) = self.leave() {
            tracing::error!(target: "terminal", %e, "backend_drop_restore_failed");
        }
    }
}
