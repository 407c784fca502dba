//! Per-mode position store backed by a JSON file.
//!
//! Writes go to a sibling `.tmp` file which is then renamed over the
//! original, so a crash mid-write leaves the previous contents intact.

use std::collections::BTreeMap;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::OverscanError;
use crate::geometry::Position;

/// On-disk map from output mode name to its saved position.
pub type PositionMap = BTreeMap<String, Position>;

pub struct PositionStore {
    path: PathBuf,
}

impl PositionStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every saved position. A missing file is an empty map.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<PositionMap, OverscanError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(PositionMap::new()),
            Err(source) => return Err(self.io_err(source)),
        };
        if raw.trim().is_empty() {
            return Ok(PositionMap::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    /// Saved position for `mode`, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be loaded.
    pub fn get(&self, mode: &str) -> Result<Option<Position>, OverscanError> {
        Ok(self.load()?.get(mode).copied())
    }

    /// Save `position` for `mode`, keeping entries for other modes.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be loaded or rewritten.
    pub fn set(&self, mode: &str, position: Position) -> Result<(), OverscanError> {
        let mut map = self.load()?;
        map.insert(mode.to_string(), position);
        self.write(&map)?;
        debug!(mode, ?position, path = %self.path.display(), "position stored");
        Ok(())
    }

    fn write(&self, map: &PositionMap) -> Result<(), OverscanError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| self.io_err(e))?;
        }
        let body = serde_json::to_vec_pretty(map)?;
        let temp_path = self.path.with_extension("tmp");
        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .map_err(|e| self.io_err(e))?;
            file.write_all(&body).map_err(|e| self.io_err(e))?;
            file.sync_all().map_err(|e| self.io_err(e))?;
        }
        fs::rename(&temp_path, &self.path).map_err(|e| self.io_err(e))
    }

    fn io_err(&self, source: std::io::Error) -> OverscanError {
        OverscanError::StoreIo { path: self.path.clone(), source }
    }
}

#[cfg(test)]
#[path = "store_test.rs"]
mod tests;
