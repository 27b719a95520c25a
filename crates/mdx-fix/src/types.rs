//! Report types for the MDX compatibility pipeline.
//!
//! Defines the data structures the run controller builds up and the CLI
//! renders as text or JSON.

use serde::Serialize;
use std::path::PathBuf;

/// Configuration for a single run.
///
/// Defaults to a dry run with backups enabled, scanning the standard hub
/// content roots.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Root directories scanned for markdown documents.
    pub roots: Vec<PathBuf>,
    /// Write rewritten documents back to disk. Off means dry-run.
    pub apply: bool,
    /// Write a `.bak` sibling before overwriting (only meaningful with `apply`).
    pub backup: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from("docs"), PathBuf::from("blog")],
            apply: false,
            backup: true,
        }
    }
}

/// A suspicious curly-brace construct flagged for human review.
///
/// Produced by the diagnostic scanner, never mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct DiagnosticRecord {
    /// Document the construct was found in.
    pub source_path: PathBuf,
    /// First 100 characters of the offending text node.
    pub excerpt: String,
    /// The literal matched substrings.
    pub matches: Vec<String>,
}

/// A per-document failure that did not abort the run.
#[derive(Debug, Clone, Serialize)]
pub struct FileError {
    /// Document that failed.
    pub path: PathBuf,
    /// Human-readable failure description.
    pub message: String,
}

/// Aggregate result of one run.
///
/// Built incrementally by the run controller, finalized once per invocation.
#[derive(Debug, Default, Serialize)]
pub struct RunSummary {
    /// Number of documents processed (including failed ones).
    pub files_scanned: usize,
    /// Number of documents at least one rewrite pass mutated.
    pub files_changed: usize,
    /// Number of diagnostic records produced.
    pub warnings_found: usize,
    /// Paths of the changed documents, in processing order.
    pub changed_files: Vec<PathBuf>,
    /// All diagnostic records, in processing order.
    pub warnings: Vec<DiagnosticRecord>,
    /// Per-document failures, in processing order.
    pub errors: Vec<FileError>,
}
