//! Error types for scanning, store mutation and rendering.

use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the inner layers of treegen.
///
/// Only [`TreeError::UnsupportedFormat`] is meant to reach callers of the
/// facade; every other variant is absorbed at the boundary and turned into an
/// omitted entry or an empty rendering.
#[derive(Debug, Error)]
pub enum TreeError {
    /// Permission denied for a path.
    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    /// Path not found.
    #[error("Path not found: {path}")]
    NotFound { path: PathBuf },

    /// Generic I/O error.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Path exists but is not a regular file.
    #[error("Not a regular file: {path}")]
    NotAFile { path: PathBuf },

    /// Error reported by the directory walker.
    #[error("Walk error: {message}")]
    Walk { message: String },

    /// JSON serialization failed.
    #[error("Serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Requested output format is not known.
    #[error("Unsupported format: {format}")]
    UnsupportedFormat { format: String },
}

impl TreeError {
    /// Create an I/O error with path context.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            std::io::ErrorKind::NotFound => Self::NotFound { path },
            _ => Self::Io { path, source },
        }
    }
}
