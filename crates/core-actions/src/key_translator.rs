//! Byte → Action translation.
//!
//! Stateless: every action is a single byte, so there is no pending-key
//! state. Bytes with no binding translate to `None` and the loop keeps
//! running without touching the cursor.

use crate::{Action, MotionKind};

/// Control-key code for an ASCII letter (`ctrl(b'q') == 0x11`).
pub const fn ctrl(c: u8) -> u8 {
    c & 0x1f
}

const CTRL_D: u8 = ctrl(b'd');
const CTRL_U: u8 = ctrl(b'u');
const CTRL_Q: u8 = ctrl(b'q');

pub fn translate_byte(byte: u8) -> Option<Action> {
    let action = match byte {
        b'h' => Action::Motion(MotionKind::Left),
        b'l' => Action::Motion(MotionKind::Right),
        b'j' => Action::Motion(MotionKind::Down),
        b'k' => Action::Motion(MotionKind::Up),
        CTRL_D => Action::Motion(MotionKind::PageHalfDown),
        CTRL_U => Action::Motion(MotionKind::PageHalfUp),
        CTRL_Q => Action::Quit,
        _ => return None,
    };
    Some(action)
}
