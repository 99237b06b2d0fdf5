//! Dispatcher applying `Action` to the viewer state.
//!
//! * `motion` - cursor movement (relative moves and half-page jumps)
//!
//! Every action is followed by a full redraw, so dispatch only reports
//! whether the session should keep running. Quit does not touch state.

use crate::Action;
use core_state::ViewerState;
use std::ops::ControlFlow;

mod motion;

pub fn dispatch(action: Action, state: &mut ViewerState) -> ControlFlow<()> {
    match action {
        Action::Motion(kind) => {
            motion::handle_motion(kind, state);
            ControlFlow::Continue(())
        }
        Action::Quit => ControlFlow::Break(()),
    }
}
