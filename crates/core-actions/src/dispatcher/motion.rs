//! Motion sub-dispatch (cursor movement).
//!
//! Every motion is a relative move; half-page motions are the same move with
//! a delta of `rows / 2`. Clamping and viewport reconciliation happen inside
//! `ViewerState::move_by`.

use crate::MotionKind;
use core_state::ViewerState;

pub(crate) fn handle_motion(kind: MotionKind, state: &mut ViewerState) {
    let half = isize::try_from(state.geometry().half_page()).unwrap_or(isize::MAX);
    let (dx, dy) = match kind {
        MotionKind::Left => (-1, 0),
        MotionKind::Right => (1, 0),
        MotionKind::Down => (0, 1),
        MotionKind::Up => (0, -1),
        MotionKind::PageHalfDown => (0, half),
        MotionKind::PageHalfUp => (0, -half),
    };
    state.move_by(dx, dy);
}
