//! Crate error type.

use std::path::PathBuf;

/// Errors produced by the overscan collaborators and configuration.
#[derive(Debug, thiserror::Error)]
pub enum OverscanError {
    /// Reading or writing a device node failed.
    #[error("sysfs access to {path} failed: {source}")]
    Sysfs {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The position store could not be read or written.
    #[error("position store I/O failed at {path}: {source}")]
    StoreIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The position store file is not valid JSON.
    #[error("position store parse failed: {0}")]
    StoreParse(#[from] serde_json::Error),

    /// A configuration value is missing or inconsistent.
    #[error("config parse failed: {0}")]
    ConfigParse(String),

    /// An axis string did not hold four integers.
    #[error("malformed axis string: {0:?}")]
    AxisParse(String),
}

impl OverscanError {
    /// Stable machine-readable code for this error.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Sysfs { .. } => "E_SYSFS",
            Self::StoreIo { .. } => "E_STORE_IO",
            Self::StoreParse(_) => "E_STORE_PARSE",
            Self::ConfigParse(_) => "E_CONFIG_PARSE",
            Self::AxisParse(_) => "E_AXIS_PARSE",
        }
    }

    /// Whether retrying the same call could succeed.
    #[must_use]
    pub fn retryable(&self) -> bool {
        matches!(self, Self::Sysfs { .. } | Self::StoreIo { .. })
    }
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
