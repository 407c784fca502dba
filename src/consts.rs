//! Shared numeric constants and fixed device paths.

// ── Zoom ────────────────────────────────────────────────────────

/// Full canvas, no inset.
pub const MAX_PERCENT: i32 = 100;

/// Largest inward margin a user can request.
pub const MIN_PERCENT: i32 = 80;

/// Smoothing divisor. A 1% step moves each edge by half of what the plain
/// percentage would.
pub const OFFSET_STEP: i32 = 2;

/// Largest accepted smoothing divisor.
pub const MAX_STEP: i32 = 100;

// ── Canvas ──────────────────────────────────────────────────────

/// Inclusive maximum x used when the output mode is not recognised (1920 wide).
pub const DEFAULT_MAX_RIGHT: i32 = 1919;

/// Inclusive maximum y used when the output mode is not recognised (1080 tall).
pub const DEFAULT_MAX_BOTTOM: i32 = 1079;

// ── Device nodes ────────────────────────────────────────────────

/// Framebuffer window axis node; receives `"left top right bottom"`.
pub const FB0_WINDOW_AXIS: &str = "/sys/class/graphics/fb0/window_axis";

/// Node holding the current HDMI output mode name.
pub const DISPLAY_MODE_PATH: &str = "/sys/class/display/mode";

/// Default location of the persisted per-mode positions.
pub const DEFAULT_SETTINGS_PATH: &str = "/data/overscan/positions.json";
