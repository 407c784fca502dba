//! Overscan geometry: percent to rectangle, rectangle to percent, clamping.
//!
//! All arithmetic is `i32` with truncating division, which is floor for the
//! non-negative operands the zoom range produces.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::consts::{MAX_PERCENT, MAX_STEP, MIN_PERCENT, OFFSET_STEP};
use crate::error::OverscanError;
use crate::mode::Bound;

// =============================================================================
// TUNING
// =============================================================================

/// Zoom limits and the smoothing divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tuning {
    pub min_percent: i32,
    pub max_percent: i32,
    pub step: i32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self { min_percent: MIN_PERCENT, max_percent: MAX_PERCENT, step: OFFSET_STEP }
    }
}

impl Tuning {
    /// Clamp a percentage into `[min_percent, max_percent]`.
    #[must_use]
    pub fn clamp_percent(&self, percent: i32) -> i32 {
        percent.clamp(self.min_percent, self.max_percent)
    }

    /// Whether `percent` lies inside the closed zoom range.
    #[must_use]
    pub fn contains(&self, percent: i32) -> bool {
        (self.min_percent..=self.max_percent).contains(&percent)
    }

    /// Reject tuning the geometry cannot honour.
    ///
    /// # Errors
    ///
    /// Returns [`OverscanError::ConfigParse`] describing the first violation.
    pub fn validate(&self) -> Result<(), OverscanError> {
        if self.step <= 0 || self.step > MAX_STEP {
            return Err(OverscanError::ConfigParse(format!("step must be in 1..={MAX_STEP}, got {}", self.step)));
        }
        if self.max_percent > MAX_PERCENT {
            return Err(OverscanError::ConfigParse(format!(
                "max percent {} exceeds {MAX_PERCENT}",
                self.max_percent
            )));
        }
        if self.min_percent <= 0 || self.min_percent > self.max_percent {
            return Err(OverscanError::ConfigParse(format!(
                "min percent {} must be in 1..={}",
                self.min_percent, self.max_percent
            )));
        }
        Ok(())
    }

    /// `100 * 2 * step`, with `step` pinned to `1..=MAX_STEP` for unvalidated tuning.
    fn divisor(&self) -> i32 {
        100 * 2 * self.step.clamp(1, MAX_STEP)
    }
}

// =============================================================================
// POSITION
// =============================================================================

/// Persisted window placement: origin plus size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Position {
    #[must_use]
    pub const fn new(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self { left, top, width, height }
    }

    /// Position covering the whole canvas of `bound`.
    #[must_use]
    pub fn full(bound: Bound) -> Self {
        Self::new(0, 0, bound.width(), bound.height())
    }
}

// =============================================================================
// RECTANGLE
// =============================================================================

/// Visible window in framebuffer pixels. `right`/`bottom` are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rectangle {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub width: i32,
    pub height: i32,
}

impl Rectangle {
    /// Build from origin and size, deriving the inclusive far edges.
    ///
    /// Far edges saturate at the `i32` limits.
    #[must_use]
    pub fn from_position(pos: Position) -> Self {
        Self {
            left: pos.left,
            top: pos.top,
            right: pos.left.saturating_add(pos.width).saturating_sub(1),
            bottom: pos.top.saturating_add(pos.height).saturating_sub(1),
            width: pos.width,
            height: pos.height,
        }
    }

    #[must_use]
    pub fn position(&self) -> Position {
        Position::new(self.left, self.top, self.width, self.height)
    }

    /// Copy with left/top raised to 0 and right/bottom capped at `bound`.
    ///
    /// Width and height are left as computed.
    #[must_use]
    pub fn clamped(&self, bound: Bound) -> Self {
        Self {
            left: self.left.max(0),
            top: self.top.max(0),
            right: self.right.min(bound.max_right),
            bottom: self.bottom.min(bound.max_bottom),
            ..*self
        }
    }

    /// Driver axis string: `"left top right bottom"`.
    #[must_use]
    pub fn axis(&self) -> String {
        format!("{} {} {} {}", self.left, self.top, self.right, self.bottom)
    }

    /// Parse an axis string read back from the driver node.
    ///
    /// # Errors
    ///
    /// Returns [`OverscanError::AxisParse`] unless the input holds exactly four
    /// whitespace-separated integers.
    pub fn from_axis(raw: &str) -> Result<Self, OverscanError> {
        let fields: Vec<i32> = raw
            .split_whitespace()
            .map(i32::from_str)
            .collect::<Result<_, _>>()
            .map_err(|_| OverscanError::AxisParse(raw.to_string()))?;
        let [left, top, right, bottom] = fields[..] else {
            return Err(OverscanError::AxisParse(raw.to_string()));
        };
        Ok(Self {
            left,
            top,
            right,
            bottom,
            width: right.saturating_sub(left).saturating_add(1),
            height: bottom.saturating_sub(top).saturating_add(1),
        })
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.axis())
    }
}

// =============================================================================
// CONVERSIONS
// =============================================================================

/// Symmetric inset rectangle for `percent` on the canvas of `bound`.
#[must_use]
pub fn apply_percent(percent: i32, bound: Bound, tuning: &Tuning) -> Rectangle {
    let inset = MAX_PERCENT.saturating_sub(percent);
    let left = inset.saturating_mul(bound.max_right) / tuning.divisor();
    let top = inset.saturating_mul(bound.max_bottom) / tuning.divisor();
    let right = bound.max_right - left;
    let bottom = bound.max_bottom - top;
    Rectangle { left, top, right, bottom, width: right - left + 1, height: bottom - top + 1 }
}

/// Approximate percentage that would have produced a rectangle starting at `left`.
///
/// Lossy: only used to seed relative zoom steps at startup. The result is not
/// clamped. A `left` too large to convert yields `MAX_PERCENT`.
#[must_use]
pub fn derive_initial_percent(left: i32, bound: Bound, tuning: &Tuning) -> i32 {
    let Some(m) = tuning.divisor().checked_mul(left) else {
        warn!(left, step = tuning.step, "saved left offset out of range, starting at full canvas");
        return MAX_PERCENT;
    };
    if m == 0 {
        return MAX_PERCENT;
    }
    MAX_PERCENT.saturating_sub(m / bound.width().max(1)).saturating_sub(1)
}

#[cfg(test)]
#[path = "geometry_test.rs"]
mod tests;
