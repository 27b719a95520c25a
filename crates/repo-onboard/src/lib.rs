#![allow(clippy::doc_markdown)]

//! repo-onboard - idempotent onboarding of a repository into the docs hub
//!
//! Splices a new repository into the hub's three control documents: the
//! docs-sync CI workflow (checkout, sync, and cleanup steps), the sidebars
//! document (an autogenerated sidebar), and the site configuration (a navbar
//! item with a derived label). Every edit is insert-if-absent and anchored
//! on existing text, so the tool is safe to run repeatedly and a missing
//! anchor aborts the edit with the target file untouched.
//!
//! # Architecture
//!
//! ```text
//! repo-onboard/src/
//! ├── lib.rs      # Re-exports (this file)
//! ├── error.rs    # OnboardError enum (thiserror)
//! ├── repo.rs     # Repository-name extraction and label derivation
//! └── splice.rs   # Anchor-validated insert operations
//! ```
//!
//! # Example
//!
//! ```rust,ignore
//! use repo_onboard::{add_workflow_steps, extract_repo_name, OnboardConfig};
//!
//! let repo = extract_repo_name("https://github.com/mwinfiel0331/nextinvestment");
//! let config = OnboardConfig::default();
//! let outcome = add_workflow_steps(&config, &repo)?;
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod error;
mod repo;
mod splice;

// ============================================================================
// Public Re-exports
// ============================================================================

pub use error::OnboardError;
pub use repo::{extract_repo_name, to_title_case};
pub use splice::{
    OnboardConfig, SpliceOutcome, add_navbar_item, add_sidebar_entry, add_workflow_steps,
    ensure_docs_dir,
};
