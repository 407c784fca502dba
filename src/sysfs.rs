//! Device-backed collaborators: sysfs nodes plus the JSON position store.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace};

use crate::error::OverscanError;
use crate::geometry::Position;
use crate::mode::resolve_bound;
use crate::provider::{AxisSink, OutputModeProvider};
use crate::store::PositionStore;

/// Read a sysfs node, trimming the trailing newline the kernel appends.
///
/// # Errors
///
/// Returns [`OverscanError::Sysfs`] if the node cannot be read.
pub fn read_node(path: &Path) -> Result<String, OverscanError> {
    fs::read_to_string(path)
        .map(|raw| raw.trim().to_string())
        .map_err(|source| OverscanError::Sysfs { path: path.to_path_buf(), source })
}

// =============================================================================
// WRITER
// =============================================================================

/// Writes values straight to sysfs nodes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SysfsWriter;

impl AxisSink for SysfsWriter {
    fn write_axis(&self, path: &str, value: &str) -> Result<(), OverscanError> {
        trace!(path, value, "sysfs write");
        fs::write(path, value).map_err(|source| OverscanError::Sysfs { path: PathBuf::from(path), source })
    }
}

// =============================================================================
// OUTPUT MODE
// =============================================================================

/// Output mode provider reading the display mode node and persisting
/// positions in a [`PositionStore`].
pub struct DeviceOutputMode {
    mode_path: PathBuf,
    osd_mouse_path: Option<PathBuf>,
    store: PositionStore,
    writer: SysfsWriter,
}

impl DeviceOutputMode {
    #[must_use]
    pub fn new(mode_path: impl Into<PathBuf>, store: PositionStore) -> Self {
        Self { mode_path: mode_path.into(), osd_mouse_path: None, store, writer: SysfsWriter }
    }

    /// Also forward OSD cursor placement to `path` as `"x y w h"`.
    #[must_use]
    pub fn with_osd_mouse(mut self, path: impl Into<PathBuf>) -> Self {
        self.osd_mouse_path = Some(path.into());
        self
    }

    #[must_use]
    pub fn store(&self) -> &PositionStore {
        &self.store
    }
}

impl OutputModeProvider for DeviceOutputMode {
    fn current_output_mode(&self) -> Result<String, OverscanError> {
        read_node(&self.mode_path)
    }

    fn position(&self, mode: &str) -> Result<Position, OverscanError> {
        match self.store.get(mode)? {
            Some(position) => Ok(position),
            None => {
                debug!(mode, "no saved position, using full canvas");
                Ok(Position::full(resolve_bound(mode)))
            }
        }
    }

    fn save_position(&self, position: Position) -> Result<(), OverscanError> {
        let mode = self.current_output_mode()?;
        self.store.set(&mode, position)
    }

    fn set_osd_mouse(&self, position: Position) -> Result<(), OverscanError> {
        let Some(path) = &self.osd_mouse_path else {
            return Ok(());
        };
        let value = format!("{} {} {} {}", position.left, position.top, position.width, position.height);
        self.writer.write_axis(&path.to_string_lossy(), &value)
    }
}

#[cfg(test)]
#[path = "sysfs_test.rs"]
mod tests;
