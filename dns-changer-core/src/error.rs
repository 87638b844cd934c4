//! Unified error type definition

use std::path::PathBuf;

use thiserror::Error;

/// Core layer error type
#[derive(Error, Debug)]
pub enum CoreError {
    /// File system error on a specific path
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Preset list is not a valid JSON array of presets
    #[error("Invalid preset file {path}: {message}")]
    InvalidPresetFile { path: PathBuf, message: String },

    /// The gateway query produced no address
    #[error("No default gateway found")]
    GatewayNotFound,

    /// External command could not be run or exited unsuccessfully
    #[error("Command `{command}` failed: {message}")]
    CommandFailed { command: String, message: String },
}

impl CoreError {
    /// Build an `Io` error bound to `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether it is expected behavior (missing gateway, absent tool, etc.) is used for log classification.
    ///
    /// Level `warn` should be used when returning `true` and level `error` when returning `false`.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::InvalidPresetFile { .. } | Self::GatewayNotFound | Self::CommandFailed { .. } => {
                true
            }
            Self::Io { .. } => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;
