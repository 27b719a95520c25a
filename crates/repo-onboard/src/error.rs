//! Error types for onboarding splice operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors for insert-if-absent splice operations.
///
/// A missing anchor aborts the operation before anything is written, so the
/// target document is never left half-edited.
#[derive(Debug, Error)]
pub enum OnboardError {
    /// Failed to read a target document.
    #[error("Failed to read {0}: {1}")]
    Read(PathBuf, #[source] std::io::Error),

    /// Failed to write a target document back.
    #[error("Failed to write {0}: {1}")]
    Write(PathBuf, #[source] std::io::Error),

    /// Failed to create the repository's docs directory.
    #[error("Failed to create {0}: {1}")]
    CreateDir(PathBuf, #[source] std::io::Error),

    /// An expected anchor was not found in the target document.
    #[error("Anchor `{anchor}` not found in {path}")]
    AnchorNotFound {
        /// Document that was searched.
        path: PathBuf,
        /// The anchor text that could not be located.
        anchor: String,
    },
}
