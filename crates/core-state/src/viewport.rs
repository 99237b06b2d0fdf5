//! Vertical viewport.
//!
//! Represents the half-open window `[start, start + rows)` of document lines
//! drawn on screen. The window is never moved directly by input handling; it
//! is only reconciled against the cursor line after a vertical cursor move.
//!
//! Guarantees (for `rows >= 1`):
//! * after `reconcile(line)`, `start <= line < end()`.
//! * the window moves by the smallest amount that satisfies the above; it
//!   never centers the cursor.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub start: usize,
    pub rows: usize,
}

impl Viewport {
    pub fn new(rows: usize) -> Self {
        Self { start: 0, rows }
    }

    pub fn end(&self) -> usize {
        self.start + self.rows
    }

    pub fn contains(&self, line: usize) -> bool {
        line >= self.start && line < self.end()
    }

    /// Scroll just far enough to bring `cursor_line` into view.
    pub fn reconcile(&mut self, cursor_line: usize) {
        let old = self.start;
        if cursor_line >= self.end() {
            self.start += cursor_line - self.end() + 1;
        } else if cursor_line < self.start {
            self.start = cursor_line;
        }
        if self.start != old {
            tracing::trace!(
                target: "state.scroll",
                old_start = old,
                new_start = self.start,
                cursor_line,
                "viewport_scrolled"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructs_viewport() {
        let vp = Viewport::new(10);
        assert_eq!(vp.start, 0);
        assert_eq!(vp.end(), 10);
    }

    #[test]
    fn cursor_inside_window_is_noop() {
        let mut vp = Viewport { start: 5, rows: 5 };
        vp.reconcile(5);
        assert_eq!(vp.start, 5);
        vp.reconcile(9);
        assert_eq!(vp, Viewport { start: 5, rows: 5 });
    }

    #[test]
    fn scrolls_forward_minimally() {
        let mut vp = Viewport::new(10);
        vp.reconcile(15);
        assert_eq!(vp.start, 6);
        assert_eq!(vp.end(), 16);
    }

    #[test]
    fn one_past_the_end_scrolls_by_one() {
        let mut vp = Viewport::new(10);
        vp.reconcile(10);
        assert_eq!(vp.start, 1);
    }

    #[test]
    fn scrolls_backward_to_cursor_line() {
        let mut vp = Viewport { start: 20, rows: 10 };
        vp.reconcile(12);
        assert_eq!(vp.start, 12);
        assert!(vp.contains(12));
    }

    #[test]
    fn single_row_window_tracks_cursor_exactly() {
        let mut vp = Viewport::new(1);
        vp.reconcile(7);
        assert_eq!(vp.start, 7);
        vp.reconcile(3);
        assert_eq!(vp.start, 3);
    }
}
