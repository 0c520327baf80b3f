//! Error types for modbuild
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for modbuild operations
pub type ModbuildResult<T> = Result<T, ModbuildError>;

/// Main error type for modbuild operations
#[derive(Error, Debug)]
pub enum ModbuildError {
    /// Module path has no final segment to derive a module name from
    #[error("invalid module path '{}': cannot derive a module name", .path.display())]
    InvalidModulePath { path: PathBuf },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {}: {message}", .file.display())]
    InvalidConfig { file: PathBuf, message: String },

    /// Configuration value has an unsupported value
    #[error("invalid value '{value}' for {key}")]
    InvalidConfigValue { key: String, value: String },

    /// Manifest loading error
    #[error(transparent)]
    Manifest(#[from] crate::domain::ports::ManifestError),

    /// File system error
    #[error(transparent)]
    Fs(#[from] crate::domain::ports::FsError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
