//! Viewer session: the blocking event loop.
//!
//! One iteration renders the full frame, blocks for one input byte, then
//! dispatches the translated action. Rendering always reflects the previous
//! input before the next byte is read.
//!
//! Exit paths:
//! * Ctrl-Q moves the session to `Exiting` and the loop returns `Ok`.
//! * A failed frame write or byte read returns `SessionError` at once.
//!
//! `run_guarded` wraps the loop so that both paths end with exactly one
//! terminal restoration.

use crate::{dispatch, translate_byte};
use core_config::ViewerConfig;
use core_input::ByteSource;
use core_render::{Frame, present};
use core_state::{Geometry, ViewerState};
use core_terminal::{TerminalBackend, TerminalError, TerminalGuard};
use core_text::Document;
use std::io::{self, Write};
use thiserror::Error;
use tracing::{debug, error, info};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("cannot write to terminal: {0}")]
    Render(#[source] io::Error),
    #[error("cannot read input: {0}")]
    Input(#[source] io::Error),
    #[error(transparent)]
    Restore(#[from] TerminalError),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Running,
    Exiting,
}

pub struct Session<'a> {
    doc: &'a Document,
    config: &'a ViewerConfig,
    state: ViewerState,
    phase: SessionState,
}

impl<'a> Session<'a> {
    pub fn new(doc: &'a Document, config: &'a ViewerConfig, geometry: Geometry) -> Self {
        Self {
            doc,
            config,
            state: ViewerState::new(geometry, doc.line_count(), config.min_x()),
            phase: SessionState::Running,
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn phase(&self) -> SessionState {
        self.phase
    }

    /// Render the current state and write it to `out`.
    pub fn redraw<W: Write>(&self, out: &mut W) -> Result<(), SessionError> {
        let frame = Frame::new(self.doc, &self.state, self.config)
            .render()
            .map_err(SessionError::Render)?;
        present(out, &frame).map_err(SessionError::Render)
    }

    /// Apply one input byte.
    pub fn handle_byte(&mut self, byte: u8) {
        let Some(action) = translate_byte(byte) else {
            debug!(target: "input", byte, "unbound_byte");
            return;
        };
        if dispatch(action, &mut self.state).is_break() {
            self.phase = SessionState::Exiting;
        }
    }

    /// Loop until `Exiting` or the first I/O failure.
    pub fn run<S, W>(&mut self, input: &mut S, out: &mut W) -> Result<(), SessionError>
    where
        S: ByteSource,
        W: Write,
    {
        while self.phase == SessionState::Running {
            self.redraw(out)?;
            let byte = input.read_byte().map_err(SessionError::Input)?;
            self.handle_byte(byte);
        }
        info!(target: "runtime", "session_exit");
        Ok(())
    }
}

/// Run `session` inside an active raw-mode guard and restore the terminal
/// exactly once, whatever the loop outcome. A loop error takes precedence
/// over a restore error; the latter is then only logged.
pub fn run_guarded<B, S, W>(
    guard: TerminalGuard<'_, B>,
    session: &mut Session<'_>,
    input: &mut S,
    out: &mut W,
) -> Result<(), SessionError>
where
    B: TerminalBackend,
    S: ByteSource,
    W: Write,
{
    let outcome = session.run(input, out);
    let restored = guard.restore();
    match (outcome, restored) {
        (Ok(()), Ok(())) => Ok(()),
        (Ok(()), Err(e)) => Err(SessionError::Restore(e)),
        (Err(e), Ok(())) => Err(e),
        (Err(e), Err(restore)) => {
            error!(target: "terminal", %restore, "restore_failed_after_error");
            Err(e)
        }
    }
}
