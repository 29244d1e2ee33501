//! Error types for scanning operations.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fatal errors that abort a scan before or while resolving the root.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The requested root does not exist.
    #[error("Directory does not exist: {input}")]
    NotFound { input: String },

    /// The requested root exists but is not a directory.
    #[error("Path is not a directory: {input}")]
    NotADirectory { input: String },

    /// Any other I/O failure while resolving the root.
    #[error("{source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ScanError {
    /// Create an I/O error with path context.
    ///
    /// `input` is the path as the user typed it; it is what `NotFound` reports.
    pub fn io(input: &str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        match source.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound {
                input: input.to_string(),
            },
            _ => Self::Io {
                path: path.into(),
                source,
            },
        }
    }
}

/// Why a single file was left out of a walk.
///
/// Every reason is non-fatal: the file is skipped and the walk continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SkipReason {
    /// The file vanished between listing and stat.
    NotFound,
    /// Metadata could not be read.
    PermissionDenied,
    /// Symbolic link whose target does not exist.
    BrokenLink,
    /// The directory listing itself failed.
    ReadError,
    /// Any other metadata failure.
    Other,
}

impl SkipReason {
    /// Classify an I/O error raised while reading a file's metadata.
    pub fn from_io(err: &std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound,
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied,
            _ => Self::Other,
        }
    }
}
