#![allow(clippy::doc_markdown)]

//! mdx-fix - AST-based markdown to MDX compatibility fixer
//!
//! Parses markdown documents into a syntax tree, applies structural rewrite
//! passes that neutralize constructs an MDX-aware renderer would reject, and
//! serializes the tree back to text without ever touching code blocks.
//!
//! # Features
//!
//! - **Text escaping**: every literal `<` in prose becomes `&lt;`
//! - **Comment conversion**: `<!-- ... -->` becomes `{/* ... */}`
//! - **Void-tag repair**: `<img ...>` becomes `<img ... />`
//! - **Link rewriting**: leading `docs/` prefix stripped from relative links
//! - **Brace diagnostics**: suspicious `{...}` spans flagged, never auto-fixed
//! - **Dry-run by default**: nothing is written without `apply`; backups on
//!
//! # Architecture
//!
//! ```text
//! mdx-fix/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # FixError enum (thiserror)
//! ├── types.rs    # RunConfig, RunSummary, DiagnosticRecord, FileError
//! ├── loader.rs   # Markdown file discovery under the content roots
//! ├── tree.rs     # comrak parse/serialize with one fixed configuration
//! ├── passes.rs   # The four rewrite passes
//! ├── scan.rs     # Read-only curly-brace diagnostics
//! └── runner.rs   # Sequential run controller (dry-run/apply/backup)
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use mdx_fix::{run, RunConfig};
//!
//! // Dry-run over the default docs/ and blog/ roots
//! let summary = run(&RunConfig::default());
//! println!("{} of {} files would change", summary.files_changed, summary.files_scanned);
//!
//! // Apply in place, keeping .bak backups
//! let summary = run(&RunConfig { apply: true, ..RunConfig::default() });
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
mod loader;
mod passes;
mod runner;
mod scan;
mod tree;
mod types;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use error::FixError;
pub use loader::find_markdown_files;
pub use runner::run;
pub use types::{DiagnosticRecord, FileError, RunConfig, RunSummary};
