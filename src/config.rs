//! Runtime configuration parsed from environment variables.

use std::path::PathBuf;

use crate::consts::{DEFAULT_SETTINGS_PATH, DISPLAY_MODE_PATH, FB0_WINDOW_AXIS, MAX_PERCENT, MIN_PERCENT, OFFSET_STEP};
use crate::error::OverscanError;
use crate::geometry::Tuning;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverscanConfig {
    pub axis_path: String,
    pub mode_path: PathBuf,
    pub osd_mouse_path: Option<PathBuf>,
    pub settings_path: PathBuf,
    pub tuning: Tuning,
}

impl Default for OverscanConfig {
    fn default() -> Self {
        Self {
            axis_path: FB0_WINDOW_AXIS.to_string(),
            mode_path: PathBuf::from(DISPLAY_MODE_PATH),
            osd_mouse_path: None,
            settings_path: PathBuf::from(DEFAULT_SETTINGS_PATH),
            tuning: Tuning::default(),
        }
    }
}

impl OverscanConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `OVERSCAN_AXIS_PATH`: framebuffer window axis node
    /// - `OVERSCAN_MODE_PATH`: current output mode node
    /// - `OVERSCAN_OSD_MOUSE_PATH`: OSD cursor node, unset to skip
    /// - `OVERSCAN_SETTINGS_PATH`: JSON position store
    /// - `OVERSCAN_MIN_PERCENT`: default 80
    /// - `OVERSCAN_MAX_PERCENT`: default 100
    /// - `OVERSCAN_STEP`: default 2
    ///
    /// Unparseable numbers fall back to their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OverscanError::ConfigParse`] if the resulting tuning is inconsistent.
    pub fn from_env() -> Result<Self, OverscanError> {
        let defaults = Self::default();
        let config = Self {
            axis_path: std::env::var("OVERSCAN_AXIS_PATH").unwrap_or(defaults.axis_path),
            mode_path: env_path("OVERSCAN_MODE_PATH").unwrap_or(defaults.mode_path),
            osd_mouse_path: env_path("OVERSCAN_OSD_MOUSE_PATH"),
            settings_path: env_path("OVERSCAN_SETTINGS_PATH").unwrap_or(defaults.settings_path),
            tuning: Tuning {
                min_percent: env_parse("OVERSCAN_MIN_PERCENT", MIN_PERCENT),
                max_percent: env_parse("OVERSCAN_MAX_PERCENT", MAX_PERCENT),
                step: env_parse("OVERSCAN_STEP", OFFSET_STEP),
            },
        };
        config.tuning.validate()?;
        Ok(config)
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    match std::env::var(key) {
        Ok(v) if !v.trim().is_empty() => Some(PathBuf::from(v)),
        _ => None,
    }
}

fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    match std::env::var(key) {
        Ok(v) => v.trim().parse::<T>().unwrap_or(default),
        Err(_) => default,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
