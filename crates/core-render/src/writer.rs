//! Frame writer.
//!
//! Accumulates one full frame in memory so it can be handed to the terminal
//! in a single write + flush. Escape sequences go through crossterm commands;
//! content bytes are copied verbatim after truncation.
//!
//! Invariants:
//! * Content written through `print` never exceeds `content_limit` bytes per
//!   call, so a row cannot wrap onto the next line.
//! * Escape sequences are never truncated.
//! * Positions passed to `move_to` are 0-based (column, row); the emitted
//!   sequence is 1-based.

use core_terminal::MoveHome;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    queue,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

#[derive(Debug, Default)]
pub struct FrameWriter {
    buf: Vec<u8>,
    content_limit: usize,
}

impl FrameWriter {
    /// Writer for a terminal `cols` wide. Content is limited to `cols - 2`.
    pub fn new(cols: usize) -> Self {
        Self {
            buf: Vec::new(),
            content_limit: cols.saturating_sub(2),
        }
    }

    pub fn hide_cursor(&mut self) -> io::Result<()> {
        queue!(self.buf, Hide)
    }

    pub fn show_cursor(&mut self) -> io::Result<()> {
        queue!(self.buf, Show)
    }

    pub fn home(&mut self) -> io::Result<()> {
        queue!(self.buf, MoveHome)
    }

    pub fn erase_line(&mut self) -> io::Result<()> {
        queue!(self.buf, Clear(ClearType::UntilNewLine))
    }

    pub fn move_to(&mut self, col: usize, row: usize) -> io::Result<()> {
        queue!(self.buf, MoveTo(to_u16(col), to_u16(row)))
    }

    pub fn line_break(&mut self) -> io::Result<()> {
        self.buf.write_all(b"\r\n")
    }

    /// Write content bytes, truncated to the content limit.
    pub fn print(&mut self, content: &[u8]) -> io::Result<()> {
        let n = content.len().min(self.content_limit);
        self.buf.write_all(&content[..n])
    }

    pub fn finish(self) -> Vec<u8> {
        self.buf
    }
}

fn to_u16(v: usize) -> u16 {
    u16::try_from(v).unwrap_or(u16::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(w: FrameWriter) -> String {
        String::from_utf8(w.finish()).unwrap()
    }

    #[test]
    fn escape_sequences_are_exact() {
        let mut w = FrameWriter::new(80);
        w.hide_cursor().unwrap();
        w.home().unwrap();
        w.erase_line().unwrap();
        w.move_to(4, 2).unwrap();
        w.show_cursor().unwrap();
        assert_eq!(text(w), "\x1b[?25l\x1b[H\x1b[K\x1b[3;5H\x1b[?25h");
    }

    #[test]
    fn print_truncates_to_width_minus_two() {
        let mut w = FrameWriter::new(6);
        w.print(b"abcdefgh").unwrap();
        assert_eq!(text(w), "abcd");
    }

    #[test]
    fn tiny_width_drops_all_content_but_keeps_escapes() {
        let mut w = FrameWriter::new(1);
        w.print(b"abc").unwrap();
        w.erase_line().unwrap();
        assert_eq!(text(w), "\x1b[K");
    }
}
