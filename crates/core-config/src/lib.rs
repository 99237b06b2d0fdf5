//! Viewer configuration.
//!
//! There is no configuration file: every option comes from command line flags
//! (see the `edit` binary) layered over the defaults defined here. The raw
//! requested left margin is retained alongside the terminal context so the
//! caller can log when a narrow terminal leaves no room right of the gutter.

use tracing::warn;

/// Version banner shown on the home screen and in the usage text.
pub const VERSION_BANNER: &str = "Edit -- Version 0.0.1";

/// Glyph drawn in column 0 of every row.
pub const FILLER_GLYPH: u8 = b'~';

/// Left margin policy for the cursor column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LeftMargin {
    /// Cursor may reach column 0.
    #[default]
    None,
    /// Two columns are reserved for the filler glyph gutter.
    Gutter,
}

impl LeftMargin {
    pub const fn columns(self) -> usize {
        match self {
            LeftMargin::None => 0,
            LeftMargin::Gutter => 2,
        }
    }

    pub const fn from_gutter_flag(gutter: bool) -> Self {
        if gutter {
            LeftMargin::Gutter
        } else {
            LeftMargin::None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewerConfig {
    pub left_margin: LeftMargin,
    pub filler: u8,
    pub banner: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            left_margin: LeftMargin::default(),
            filler: FILLER_GLYPH,
            banner: VERSION_BANNER.to_string(),
        }
    }
}

impl ViewerConfig {
    pub fn with_left_margin(mut self, left_margin: LeftMargin) -> Self {
        self.left_margin = left_margin;
        self
    }

    /// Smallest column the cursor may occupy.
    pub fn min_x(&self) -> usize {
        self.left_margin.columns()
    }

    /// Check the margin against the terminal width. The margin is never
    /// reduced; a terminal narrower than the gutter pins the cursor to it.
    pub fn apply_context(&self, cols: usize) {
        let min_x = self.min_x();
        if cols.saturating_sub(1) < min_x {
            warn!(
                target: "config",
                min_x,
                cols,
                "left_margin_exceeds_width"
            );
        }
    }
}
