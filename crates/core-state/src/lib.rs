//! Viewer state: cursor and viewport coordination.
//!
//! `ViewerState` is the single owned value threaded through the input loop.
//! It owns the cursor (tracked in both document and screen frames) and the
//! viewport, and it is the only place either of them is mutated.
//!
//! Invariants (hold after every public call, debug-asserted):
//! * `min_x <= cursor.doc.x <= max(cols - 1, min_x)`.
//! * `cursor.doc.y <= max(line_count - 1, 0)`.
//! * `viewport.start <= cursor.doc.y < viewport.end()`.
//! * `cursor.screen.y == cursor.doc.y - viewport.start` and
//!   `cursor.screen.x == cursor.doc.x`.
//!
//! Vertical movement is bounded by the document length. An empty document
//! (home screen) keeps the cursor on row 0.

pub mod cursor;
pub mod viewport;

pub use cursor::{Coord, Cursor};
pub use viewport::Viewport;

use cursor::step_clamped;

/// Terminal size, queried once at startup. Both dimensions are at least 1;
/// `new` clamps zero to one and `ViewerState::new` normalizes literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub rows: usize,
    pub cols: usize,
}

impl Geometry {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows: if rows == 0 { 1 } else { rows },
            cols: if cols == 0 { 1 } else { cols },
        }
    }

    /// Distance covered by a half-page move.
    pub const fn half_page(&self) -> usize {
        self.rows / 2
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerState {
    cursor: Cursor,
    viewport: Viewport,
    geometry: Geometry,
    line_count: usize,
    min_x: usize,
}

impl ViewerState {
    /// Cursor at `(min_x, 0)`, viewport at `[0, rows)`.
    pub fn new(geometry: Geometry, line_count: usize, min_x: usize) -> Self {
        let geometry = Geometry::new(geometry.rows, geometry.cols);
        let state = Self {
            cursor: Cursor::at(min_x, 0),
            viewport: Viewport::new(geometry.rows),
            geometry,
            line_count,
            min_x,
        };
        state.debug_check();
        state
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    pub fn line_count(&self) -> usize {
        self.line_count
    }

    pub fn min_x(&self) -> usize {
        self.min_x
    }

    /// Rightmost legal cursor column.
    pub fn max_x(&self) -> usize {
        self.geometry.cols.saturating_sub(1).max(self.min_x)
    }

    /// Last legal cursor line.
    pub fn max_y(&self) -> usize {
        self.line_count.saturating_sub(1)
    }

    /// Relative move. Deltas that would leave the legal area are clamped at
    /// the edge; the cursor never wraps onto a neighbouring line.
    pub fn move_by(&mut self, dx: isize, dy: isize) {
        let doc = self.cursor.doc;
        let x = step_clamped(doc.x, dx, self.min_x, self.max_x());
        let y = step_clamped(doc.y, dy, 0, self.max_y());
        self.cursor.doc = Coord::new(x, y);
        if dy != 0 {
            self.viewport.reconcile(y);
        }
        self.sync_screen();
        tracing::trace!(
            target: "state",
            dx,
            dy,
            doc_x = x,
            doc_y = y,
            screen_y = self.cursor.screen.y,
            "move_by"
        );
    }

    /// Absolute move without clamping. The caller must pass a legal target.
    pub fn move_to(&mut self, x: usize, y: usize) {
        debug_assert!(x >= self.min_x && x <= self.max_x(), "move_to x out of range");
        debug_assert!(y <= self.max_y(), "move_to y out of range");
        self.cursor.doc = Coord::new(x, y);
        self.viewport.reconcile(y);
        self.sync_screen();
    }

    fn sync_screen(&mut self) {
        let doc = self.cursor.doc;
        self.cursor.screen = Coord::new(doc.x, doc.y.saturating_sub(self.viewport.start));
        self.debug_check();
    }

    fn debug_check(&self) {
        let c = self.cursor;
        debug_assert!(c.doc.x >= self.min_x && c.doc.x <= self.max_x());
        debug_assert!(c.doc.y <= self.max_y());
        debug_assert!(self.viewport.contains(c.doc.y));
        debug_assert_eq!(c.screen.y + self.viewport.start, c.doc.y);
        debug_assert_eq!(c.screen.x, c.doc.x);
    }
}
