//! Overscan controller — zoom percentage, visible rectangle, persistence.
//!
//! DESIGN
//! ======
//! The controller owns the zoom percentage, the current rectangle derived
//! from it, and a snapshot of the position persisted at startup. Every zoom
//! request funnels through [`apply_percent`]; the absolute-position path
//! bypasses the percentage entirely.
//!
//! A mutating call touches three collaborators in order: driver axis write,
//! position save, OSD cursor. Each is attempted even if an earlier one
//! failed; failures are logged and the first one is returned.
//!
//! Not thread-safe. Confine an instance to one owner.

use tracing::{debug, info, warn};

use crate::consts::FB0_WINDOW_AXIS;
use crate::error::OverscanError;
use crate::geometry::{Position, Rectangle, Tuning, apply_percent, derive_initial_percent};
use crate::mode::{Bound, resolve_bound};
use crate::provider::{AxisSink, OutputModeProvider};

/// Position persisted when the controller was initialised.
///
/// `right` receives the persisted *top* value. That is how the device
/// settings layer has always filled it; nothing reads it for change
/// detection and it is kept as-is until its intent is confirmed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Snapshot {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub width: i32,
    pub height: i32,
}

impl Snapshot {
    fn seeded_from(position: Position) -> Self {
        Self {
            left: position.left,
            top: position.top,
            right: position.top,
            width: position.width,
            height: position.height,
        }
    }
}

pub struct OverscanController<P, S> {
    provider: P,
    sink: S,
    axis_path: String,
    tuning: Tuning,
    mode: String,
    bound: Bound,
    percent: i32,
    current: Rectangle,
    previous: Snapshot,
}

impl<P: OutputModeProvider, S: AxisSink> OverscanController<P, S> {
    /// Build a controller with default tuning writing to the fb0 window axis.
    ///
    /// # Errors
    ///
    /// Returns an error if the current mode or its saved position cannot be read.
    pub fn new(provider: P, sink: S) -> Result<Self, OverscanError> {
        Self::with_settings(provider, sink, FB0_WINDOW_AXIS, Tuning::default())
    }

    /// Build a controller with an explicit axis node and tuning.
    ///
    /// # Errors
    ///
    /// Returns [`OverscanError::ConfigParse`] for tuning that fails
    /// [`Tuning::validate`], or an error if the current mode or its saved
    /// position cannot be read.
    pub fn with_settings(
        provider: P,
        sink: S,
        axis_path: impl Into<String>,
        tuning: Tuning,
    ) -> Result<Self, OverscanError> {
        tuning.validate()?;
        let mut controller = Self {
            provider,
            sink,
            axis_path: axis_path.into(),
            tuning,
            mode: String::new(),
            bound: Bound::default(),
            percent: tuning.max_percent,
            current: Rectangle::default(),
            previous: Snapshot::default(),
        };
        controller.reinit()?;
        Ok(controller)
    }

    /// Re-read the mode and its saved position, reseeding all state.
    ///
    /// # Errors
    ///
    /// Returns an error if the mode or saved position cannot be read. State is
    /// left untouched in that case.
    pub fn reinit(&mut self) -> Result<(), OverscanError> {
        let mode = self.provider.current_output_mode()?;
        let bound = resolve_bound(&mode);
        let persisted = self.provider.position(&mode)?;

        self.current = Rectangle::from_position(persisted);
        self.previous = Snapshot::seeded_from(persisted);
        self.percent = derive_initial_percent(self.previous.left, bound, &self.tuning);
        self.bound = bound;
        self.mode = mode;

        info!(mode = %self.mode, percent = self.percent, ?persisted, "overscan position loaded");
        Ok(())
    }

    /// Grow the visible window by one percent.
    ///
    /// # Errors
    ///
    /// Propagates collaborator failures.
    pub fn zoom_in(&mut self) -> Result<(), OverscanError> {
        self.zoom(1)
    }

    /// Shrink the visible window by one percent.
    ///
    /// # Errors
    ///
    /// Propagates collaborator failures.
    pub fn zoom_out(&mut self) -> Result<(), OverscanError> {
        self.zoom(-1)
    }

    fn zoom(&mut self, step: i32) -> Result<(), OverscanError> {
        self.percent = self.tuning.clamp_percent(self.percent + step);
        self.zoom_by_percent(self.percent)
    }

    /// Apply `percent` to the current mode's canvas.
    ///
    /// Out-of-range values are ignored entirely: nothing is written or
    /// persisted and `Ok` is returned. This mirrors long-standing device
    /// behaviour where the clamp is computed and then discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if the mode cannot be re-read or a collaborator write fails.
    pub fn zoom_by_percent(&mut self, percent: i32) -> Result<(), OverscanError> {
        if !self.tuning.contains(percent) {
            debug!(percent, clamped = self.tuning.clamp_percent(percent), "zoom percent out of range, ignored");
            return Ok(());
        }

        self.mode = self.provider.current_output_mode()?;
        self.bound = resolve_bound(&self.mode);
        self.percent = percent;

        let rect = apply_percent(percent, self.bound, &self.tuning);
        debug!(mode = %self.mode, percent, %rect, "zoom by percent");
        self.current = rect;

        let out = rect.clamped(self.bound);
        self.commit(&out.axis(), Position::new(out.left, out.top, rect.width, rect.height))
    }

    /// Place the window at an absolute position, ignoring the canvas bound.
    ///
    /// # Errors
    ///
    /// Propagates collaborator failures.
    pub fn zoom_by_position(&mut self, x: i32, y: i32, w: i32, h: i32) -> Result<(), OverscanError> {
        let position = Position::new(x, y, w, h);
        self.current = Rectangle::from_position(position);
        debug!(rect = %self.current, "zoom by position");
        let axis = self.current.axis();
        self.commit(&axis, position)
    }

    /// Whether the current rectangle differs from the startup snapshot.
    #[must_use]
    pub fn is_position_changed(&self) -> bool {
        self.previous.left != self.current.left
            || self.previous.top != self.current.top
            || self.previous.width != self.current.width
            || self.previous.height != self.current.height
    }

    /// Persist the current rectangle if it changed. Returns whether a write happened.
    ///
    /// # Errors
    ///
    /// Returns an error if the position cannot be saved.
    pub fn save(&self) -> Result<bool, OverscanError> {
        if !self.is_position_changed() {
            debug!("position unchanged, skipping save");
            return Ok(false);
        }
        let position = self.current.position();
        self.provider.save_position(position)?;
        info!(mode = %self.mode, ?position, "overscan position saved");
        Ok(true)
    }

    fn commit(&self, axis: &str, position: Position) -> Result<(), OverscanError> {
        let steps = [
            ("write axis", self.sink.write_axis(&self.axis_path, axis)),
            ("save position", self.provider.save_position(position)),
            ("set osd mouse", self.provider.set_osd_mouse(position)),
        ];

        let mut first = None;
        for (step, result) in steps {
            if let Err(e) = result {
                warn!(error = %e, step, code = e.error_code(), "overscan update step failed");
                if first.is_none() {
                    first = Some(e);
                }
            }
        }
        first.map_or(Ok(()), Err)
    }

    // -------------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------------

    #[must_use]
    pub fn current_percent(&self) -> i32 {
        self.percent
    }

    #[must_use]
    pub fn rectangle(&self) -> Rectangle {
        self.current
    }

    #[must_use]
    pub fn previous(&self) -> Snapshot {
        self.previous
    }

    #[must_use]
    pub fn bound(&self) -> Bound {
        self.bound
    }

    #[must_use]
    pub fn mode(&self) -> &str {
        &self.mode
    }

    #[must_use]
    pub fn tuning(&self) -> Tuning {
        self.tuning
    }

    #[must_use]
    pub fn axis_path(&self) -> &str {
        &self.axis_path
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
