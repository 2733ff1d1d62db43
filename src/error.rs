//! Error types for confgen
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result type alias for confgen operations
pub type ConfgenResult<T> = Result<T, ConfgenError>;

/// Main error type for confgen operations
#[derive(Error, Debug)]
pub enum ConfgenError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization or parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The probe binary could not be started
    #[error("failed to launch '{binary}': {source}")]
    ProbeLaunch {
        binary: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The probe ran but exited unsuccessfully
    #[error("probe exited with {status}: {stderr}")]
    ProbeFailed { status: ExitStatus, stderr: String },

    /// User configuration directory could not be determined
    #[error("could not determine the user configuration directory")]
    ConfigDirNotFound,
}
