//! Collaborator seams used by the controller.
//!
//! DESIGN
//! ======
//! The controller never touches the filesystem directly. Mode lookup,
//! position persistence, and the OSD cursor go through
//! [`OutputModeProvider`]; the framebuffer window goes through
//! [`AxisSink`]. Both take `&self` so implementations decide their own
//! interior mutability.

use crate::error::OverscanError;
use crate::geometry::Position;

/// Source of the current output mode and store of per-mode positions.
pub trait OutputModeProvider {
    /// Name of the active output mode, e.g. `"1080p60hz"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the mode cannot be read.
    fn current_output_mode(&self) -> Result<String, OverscanError>;

    /// Persisted position for `mode`.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store is unreadable.
    fn position(&self, mode: &str) -> Result<Position, OverscanError>;

    /// Persist a position for the active mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    fn save_position(&self, position: Position) -> Result<(), OverscanError>;

    /// Move the OSD cursor/overlay to match the visible window.
    ///
    /// # Errors
    ///
    /// Returns an error if the overlay node cannot be written.
    fn set_osd_mouse(&self, position: Position) -> Result<(), OverscanError>;
}

/// Write-only sink for driver nodes.
pub trait AxisSink {
    /// Write `value` to the node at `path`.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn write_axis(&self, path: &str, value: &str) -> Result<(), OverscanError>;
}

impl<T: OutputModeProvider + ?Sized> OutputModeProvider for &T {
    fn current_output_mode(&self) -> Result<String, OverscanError> {
        (**self).current_output_mode()
    }

    fn position(&self, mode: &str) -> Result<Position, OverscanError> {
        (**self).position(mode)
    }

    fn save_position(&self, position: Position) -> Result<(), OverscanError> {
        (**self).save_position(position)
    }

    fn set_osd_mouse(&self, position: Position) -> Result<(), OverscanError> {
        (**self).set_osd_mouse(position)
    }
}

impl<T: AxisSink + ?Sized> AxisSink for &T {
    fn write_axis(&self, path: &str, value: &str) -> Result<(), OverscanError> {
        (**self).write_axis(path, value)
    }
}
