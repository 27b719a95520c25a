//! Diagnostic scanner for curly-brace constructs.
//!
//! Curly braces are expression syntax to an MDX-aware renderer and cannot be
//! auto-fixed safely, so they are only flagged for human review. Read-only:
//! the scanner never mutates the tree and never marks a document changed.

use std::path::Path;
use std::sync::LazyLock;

use comrak::nodes::{AstNode, NodeValue};
use regex::Regex;

use crate::types::DiagnosticRecord;

/// Excerpt length recorded per flagged text node.
const EXCERPT_CHARS: usize = 100;

/// Opening brace not followed by whitespace or a comment-start marker,
/// arbitrary non-brace content, closing brace. Coarse on purpose: tightening
/// the heuristic risks suppressing legitimate warnings.
static UNSAFE_BRACES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{[^/*\s][^}]*\}")
        .unwrap_or_else(|err| panic!("invalid UNSAFE_BRACES regex: {err}"))
});

/// Flag suspicious curly-brace spans in every text node.
///
/// Each flagged node yields one record carrying a bounded excerpt and the
/// literal matched substrings.
#[must_use]
pub fn scan_braces<'a>(root: &'a AstNode<'a>, source_path: &Path) -> Vec<DiagnosticRecord> {
    let mut records = Vec::new();
    for node in root.descendants() {
        if let NodeValue::Text(text) = &node.data.borrow().value {
            let matches: Vec<String> = UNSAFE_BRACES
                .find_iter(text)
                .map(|m| m.as_str().to_string())
                .collect();
            if !matches.is_empty() {
                tracing::debug!("flagging braces in {}: {:?}", source_path.display(), matches);
                records.push(DiagnosticRecord {
                    source_path: source_path.to_path_buf(),
                    excerpt: text.chars().take(EXCERPT_CHARS).collect(),
                    matches,
                });
            }
        }
    }
    records
}
