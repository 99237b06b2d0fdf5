//! Full-frame renderer.
//!
//! Every input event regenerates the whole frame from the document, the
//! viewport and the cursor. There is no damage tracking: the frame is small
//! (one row per terminal line) and rebuilding it keeps the output a pure
//! function of its inputs.
//!
//! Frame layout, in order:
//! 1. hide cursor, cursor home.
//! 2. one row per terminal line: the filler glyph, erase-to-end-of-line, then
//!    the document line when the row maps into the document. On an empty
//!    document the row at `rows / 3` carries the centered version banner
//!    instead. Rows are separated by `\r\n` (none after the last).
//! 3. cursor placed at its screen position, show cursor.

pub mod writer;

use core_config::ViewerConfig;
use core_state::{Cursor, Geometry, ViewerState, Viewport};
use core_text::Document;
use std::io::{self, Write};
use writer::FrameWriter;

/// Everything a frame is computed from.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub doc: &'a Document,
    pub viewport: Viewport,
    pub cursor: Cursor,
    pub geometry: Geometry,
    pub config: &'a ViewerConfig,
}

impl<'a> Frame<'a> {
    pub fn new(doc: &'a Document, state: &ViewerState, config: &'a ViewerConfig) -> Self {
        Self {
            doc,
            viewport: state.viewport(),
            cursor: state.cursor(),
            geometry: state.geometry(),
            config,
        }
    }

    /// Assemble the frame bytes.
    pub fn render(&self) -> io::Result<Vec<u8>> {
        let Geometry { rows, cols } = self.geometry;
        let mut w = FrameWriter::new(cols);
        w.hide_cursor()?;
        w.home()?;

        let filler = [self.config.filler];
        for row in 0..rows {
            let line = self.viewport.start + row;
            if self.doc.is_empty() && row == rows / 3 {
                self.banner_row(&mut w)?;
                w.erase_line()?;
            } else if line < self.doc.line_count() {
                w.print(&filler)?;
                w.erase_line()?;
                w.print(self.doc.line_at(line).as_bytes())?;
            } else {
                w.print(&filler)?;
                w.erase_line()?;
            }
            if row + 1 < rows {
                w.line_break()?;
            }
        }

        w.move_to(self.cursor.screen.x, self.cursor.screen.y)?;
        w.show_cursor()?;
        Ok(w.finish())
    }

    fn banner_row(&self, w: &mut FrameWriter) -> io::Result<()> {
        let banner = self.config.banner.as_bytes();
        let padding = (self.geometry.cols as isize - banner.len() as isize) / 2;
        if padding > 0 {
            w.print(&[self.config.filler])?;
            w.print(" ".repeat(padding as usize - 1).as_bytes())?;
        }
        w.print(banner)
    }
}

/// Write a frame and flush it.
pub fn present<W: Write>(out: &mut W, frame: &[u8]) -> io::Result<()> {
    out.write_all(frame)?;
    out.flush()?;
    tracing::trace!(target: "render", bytes = frame.len(), "frame_presented");
    Ok(())
}
