//! Run controller: load → parse → rewrite → scan → (serialize → write).
//!
//! Documents are processed strictly sequentially in discovery order. A
//! per-document failure is recorded against its path and the run continues;
//! only the aggregate summary crosses document boundaries.

use std::fs;
use std::path::{Path, PathBuf};

use comrak::Arena;

use crate::error::FixError;
use crate::loader::find_markdown_files;
use crate::passes;
use crate::scan;
use crate::tree;
use crate::types::{DiagnosticRecord, FileError, RunConfig, RunSummary};

/// Suffix appended to a document path for its backup sibling.
const BACKUP_SUFFIX: &str = ".bak";

/// Outcome of one document's trip through the pipeline.
struct FileOutcome {
    changed: bool,
    warnings: Vec<DiagnosticRecord>,
}

/// Process every eligible document under the configured roots.
///
/// In dry-run mode (the default) nothing on disk is touched; with `apply`
/// set, changed documents are rewritten in place, preceded by a `.bak`
/// backup unless suppressed.
#[must_use]
pub fn run(config: &RunConfig) -> RunSummary {
    let files = find_markdown_files(&config.roots);
    tracing::info!("found {} markdown documents", files.len());

    let mut summary = RunSummary::default();
    for path in files {
        summary.files_scanned += 1;
        match process_file(&path, config) {
            Ok(outcome) => {
                if outcome.changed {
                    summary.files_changed += 1;
                    summary.changed_files.push(path);
                }
                summary.warnings_found += outcome.warnings.len();
                summary.warnings.extend(outcome.warnings);
            }
            Err(err) => {
                tracing::warn!("skipping {}: {err}", path.display());
                summary.errors.push(FileError {
                    path,
                    message: err.to_string(),
                });
            }
        }
    }
    summary
}

/// Run one document through parse, rewrite, scan, and (when applying) write.
fn process_file(path: &Path, config: &RunConfig) -> Result<FileOutcome, FixError> {
    let raw = fs::read_to_string(path).map_err(|e| FixError::Read(path.to_path_buf(), e))?;

    let arena = Arena::new();
    let root = tree::parse_markdown(&arena, &raw);

    let changed = passes::apply_all(root);
    let warnings = scan::scan_braces(root, path);

    if changed && config.apply {
        let rendered = tree::render_markdown(root)?;
        if config.backup {
            let backup = backup_path(path);
            fs::write(&backup, &raw).map_err(|e| FixError::Backup(backup.clone(), e))?;
        }
        fs::write(path, rendered).map_err(|e| FixError::Write(path.to_path_buf(), e))?;
        tracing::info!("rewrote {}", path.display());
    }

    Ok(FileOutcome { changed, warnings })
}

/// Sibling path carrying the backup suffix.
///
/// An existing backup at that path is overwritten without warning.
fn backup_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(BACKUP_SUFFIX);
    PathBuf::from(name)
}
