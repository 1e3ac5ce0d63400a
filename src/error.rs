//! Error types for sync-version.
//!
//! All operations return `Result<T>` which aliases `Result<T, SyncError>`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors from version sync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Manifest missing or unreadable.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Source manifest is not a JSON object.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Source manifest has no `version` field (or it is `null`).
    #[error("No `version` field in {}", .0.display())]
    MissingVersion(PathBuf),

    /// Source `version` is present but not a string.
    #[error("`version` in {} must be a string, found {found}", .path.display())]
    InvalidVersion { path: PathBuf, found: String },

    /// Target manifest could not be written.
    ///
    /// The file on disk keeps its pre-run content.
    #[error("Failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error in the target manifest.
    #[error("TOML error: {0}")]
    Toml(#[from] toml_edit::TomlError),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for sync-version operations.
pub type Result<T> = std::result::Result<T, SyncError>;
