/// A column/row pair. `x` is a byte column, `y` a line (document frame) or
/// row (screen frame).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

impl Coord {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// Cursor tracked in both coordinate frames.
///
/// `doc` indexes the loaded lines, `screen` the terminal cells. Both are
/// written by the same mutation in `ViewerState`; nothing else touches them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub doc: Coord,
    pub screen: Coord,
}

impl Cursor {
    pub const fn at(x: usize, y: usize) -> Self {
        Self {
            doc: Coord::new(x, y),
            screen: Coord::new(x, y),
        }
    }
}

/// Apply a signed delta to `value` and clamp into `[min, max]`. When
/// `max < min` the lower bound wins.
pub(crate) fn step_clamped(value: usize, delta: isize, min: usize, max: usize) -> usize {
    value
        .saturating_add_signed(delta)
        .min(max)
        .max(min)
}
