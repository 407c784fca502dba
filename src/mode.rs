//! Output mode to canvas bound lookup.
//!
//! DESIGN
//! ======
//! Mode names are matched by substring against an ordered table, first hit
//! wins. Order matters: `"480"` sits ahead of `"640x480p60hz"`, so a
//! 640x480 mode resolves to the 720x480 canvas. Unknown modes fall back to
//! 1920x1080.

use crate::consts::{DEFAULT_MAX_BOTTOM, DEFAULT_MAX_RIGHT};

/// Zero-based inclusive maximum coordinate of a mode's canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bound {
    pub max_right: i32,
    pub max_bottom: i32,
}

impl Bound {
    #[must_use]
    pub const fn new(max_right: i32, max_bottom: i32) -> Self {
        Self { max_right, max_bottom }
    }

    /// Canvas width in pixels.
    #[must_use]
    pub fn width(self) -> i32 {
        self.max_right.saturating_add(1)
    }

    /// Canvas height in pixels.
    #[must_use]
    pub fn height(self) -> i32 {
        self.max_bottom.saturating_add(1)
    }
}

impl Default for Bound {
    fn default() -> Self {
        DEFAULT_BOUND
    }
}

/// Bound used when no table fragment matches.
pub const DEFAULT_BOUND: Bound = Bound::new(DEFAULT_MAX_RIGHT, DEFAULT_MAX_BOTTOM);

/// Known mode-name fragments, in match order.
pub const MODE_TABLE: [(&str, Bound); 19] = [
    ("480", Bound::new(719, 479)),
    ("576", Bound::new(719, 575)),
    ("720p", Bound::new(1279, 719)),
    ("1080", Bound::new(1919, 1079)),
    ("2160p", Bound::new(3839, 2159)),
    ("smpte", Bound::new(4095, 2159)),
    ("640x480p60hz", Bound::new(639, 479)),
    ("800x480p60hz", Bound::new(799, 479)),
    ("800x600p60hz", Bound::new(799, 599)),
    ("1024x600p60hz", Bound::new(1023, 599)),
    ("1024x768p60hz", Bound::new(1023, 767)),
    ("1280x800p60hz", Bound::new(1279, 799)),
    ("1280x1024p60hz", Bound::new(1279, 1023)),
    ("1360x768p60hz", Bound::new(1359, 767)),
    ("1366x768p60hz", Bound::new(1365, 767)),
    ("1440x900p60hz", Bound::new(1439, 899)),
    ("1600x900p60hz", Bound::new(1599, 899)),
    ("1600x1200p60hz", Bound::new(1599, 1199)),
    ("1920x1200p60hz", Bound::new(1919, 1199)),
];

/// Resolve the canvas bound for an output mode name.
#[must_use]
pub fn resolve_bound(mode: &str) -> Bound {
    MODE_TABLE
        .iter()
        .find(|(fragment, _)| mode.contains(fragment))
        .map_or(DEFAULT_BOUND, |&(_, bound)| bound)
}

#[cfg(test)]
#[path = "mode_test.rs"]
mod tests;
