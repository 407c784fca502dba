//! HDMI overscan compensation for framebuffer output.
//!
//! Keeps a zoom percentage in `[80, 100]`, turns it into a centred window on
//! the active output mode's canvas, writes that window to the framebuffer
//! axis node, and persists it per mode.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`OverscanController`]: zoom operations, change detection, save |
//! | [`geometry`] | Percent/rectangle conversions, clamping, axis strings |
//! | [`mode`] | Output mode name to canvas [`Bound`] lookup |
//! | [`provider`] | Collaborator traits the controller is built on |
//! | [`sysfs`] | Device-backed collaborators |
//! | [`store`] | JSON file of per-mode positions |
//! | [`config`] | Environment-driven configuration |
//! | [`consts`] | Zoom limits, default bound, device paths |
//! | [`error`] | [`OverscanError`] |

pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod mode;
pub mod provider;
pub mod store;
pub mod sysfs;

pub use config::OverscanConfig;
pub use controller::{OverscanController, Snapshot};
pub use error::OverscanError;
pub use geometry::{Position, Rectangle, Tuning};
pub use mode::{Bound, resolve_bound};
pub use provider::{AxisSink, OutputModeProvider};
