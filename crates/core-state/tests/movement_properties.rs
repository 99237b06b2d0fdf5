//! Property-based tests for cursor clamping and viewport reconciliation.

use core_state::{Geometry, Viewport, ViewerState};
use proptest::prelude::*;

fn moves() -> impl Strategy<Value = Vec<(isize, isize)>> {
    prop::collection::vec((-120isize..120, -60isize..60), 0..64)
}

proptest! {
    // No sequence of relative moves escapes the legal area.
    #[test]
    fn move_by_never_escapes_bounds(
        rows in 1usize..60,
        cols in 3usize..200,
        lines in 0usize..300,
        gutter in any::<bool>(),
        seq in moves(),
    ) {
        let min_x = if gutter { 2 } else { 0 };
        let mut st = ViewerState::new(Geometry::new(rows, cols), lines, min_x);
        for (dx, dy) in seq {
            st.move_by(dx, dy);
            let c = st.cursor();
            prop_assert!(c.doc.x >= min_x && c.doc.x <= cols - 1);
            prop_assert!(c.doc.y <= lines.saturating_sub(1));
        }
    }

    // The cursor line is visible after every move and both frames agree.
    #[test]
    fn cursor_stays_inside_viewport(
        rows in 1usize..60,
        lines in 0usize..300,
        seq in moves(),
    ) {
        let mut st = ViewerState::new(Geometry::new(rows, 80), lines, 0);
        for (dx, dy) in seq {
            st.move_by(dx, dy);
            let vp = st.viewport();
            let c = st.cursor();
            prop_assert!(vp.start <= c.doc.y && c.doc.y < vp.end());
            prop_assert_eq!(c.screen.y, c.doc.y - vp.start);
            prop_assert!(c.screen.y < rows);
            prop_assert_eq!(vp.end() - vp.start, rows);
            prop_assert!(vp.end() <= lines.max(rows));
        }
    }

    // Zero moves never change anything.
    #[test]
    fn zero_move_is_a_fixed_point(
        rows in 1usize..60,
        lines in 0usize..300,
        seq in moves(),
    ) {
        let mut st = ViewerState::new(Geometry::new(rows, 80), lines, 2);
        for (dx, dy) in seq {
            st.move_by(dx, dy);
        }
        let before = st.clone();
        st.move_by(0, 0);
        prop_assert_eq!(st, before);
    }

    // reconcile moves the window by exactly the distance needed.
    #[test]
    fn reconcile_is_minimal(start in 0usize..500, rows in 1usize..80, line in 0usize..1000) {
        let mut vp = Viewport { start, rows };
        vp.reconcile(line);
        prop_assert!(vp.contains(line));
        if line >= start + rows {
            prop_assert_eq!(vp.end(), line + 1);
        } else if line < start {
            prop_assert_eq!(vp.start, line);
        } else {
            prop_assert_eq!(vp.start, start);
        }
    }
}

#[test]
fn scroll_minimality_example() {
    let mut st = ViewerState::new(Geometry::new(10, 80), 100, 0);
    st.move_by(0, 15);
    assert_eq!(st.viewport().start, 6);
    assert_eq!(st.viewport().end(), 16);
}

#[test]
fn boundary_examples() {
    let mut st = ViewerState::new(Geometry::new(24, 80), 10, 2);
    st.move_by(3, 0);
    assert_eq!(st.cursor().doc.x, 5);
    st.move_by(-100, 0);
    assert_eq!(st.cursor().doc.x, 2);
    st.move_by(100, 0);
    assert_eq!(st.cursor().doc.x, 79);
}

#[test]
fn zero_row_geometry_behaves_like_a_single_row() {
    let mut st = ViewerState::new(Geometry { rows: 0, cols: 80 }, 10, 0);
    assert_eq!(st.geometry(), Geometry::new(1, 80));
    st.move_by(0, 1);
    assert_eq!(st.cursor().doc.y, 1);
    assert_eq!(st.viewport(), Viewport { start: 1, rows: 1 });
    assert_eq!(st.cursor().screen.y, 0);
}
