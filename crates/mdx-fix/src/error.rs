//! Error types for the MDX compatibility pipeline.
//!
//! Library code uses `thiserror` for explicit error enums.

use std::path::PathBuf;
use thiserror::Error;

/// Errors for per-document pipeline stages.
///
/// Each variant carries enough context for the run controller to record the
/// failure against its path and continue with the next document.
#[derive(Debug, Error)]
pub enum FixError {
    /// Failed to read a source document.
    #[error("Failed to read {0}: {1}")]
    Read(PathBuf, #[source] std::io::Error),

    /// The commonmark formatter failed on the rewritten tree.
    #[error("Failed to serialize markdown tree: {0}")]
    Render(#[source] std::io::Error),

    /// The serialized tree was not valid UTF-8.
    #[error("Serialized markdown is not valid UTF-8")]
    Encoding,

    /// Failed to write a backup copy.
    #[error("Failed to write backup {0}: {1}")]
    Backup(PathBuf, #[source] std::io::Error),

    /// Failed to write a rewritten document.
    #[error("Failed to write {0}: {1}")]
    Write(PathBuf, #[source] std::io::Error),
}
