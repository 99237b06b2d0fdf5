//! Input actions, dispatch and the viewer event loop.
//!
//! * `key_translator` maps one input byte to an [`Action`].
//! * `dispatcher` applies an `Action` to the owned [`core_state::ViewerState`].
//! * `session` drives the blocking read → dispatch → render loop and owns the
//!   terminal restoration path.

pub mod dispatcher;
pub mod key_translator;
pub mod session;

pub use dispatcher::dispatch;
pub use key_translator::{ctrl, translate_byte};
pub use session::{Session, SessionError, SessionState, run_guarded};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionKind {
    Left,
    Right,
    Down,
    Up,
    PageHalfDown,
    PageHalfUp,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Motion(MotionKind),
    Quit,
}
