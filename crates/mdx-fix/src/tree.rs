//! Markdown tree building and serialization.
//!
//! Wraps comrak parse/format behind one fixed configuration so that repeated
//! parse→serialize cycles reach a stable fixed point: a document that already
//! satisfies the formatting convention serializes back to itself.

use comrak::nodes::{AstNode, NodeValue};
use comrak::{Arena, ListStyleType, Options, format_commonmark, parse_document};

use crate::error::FixError;

/// The fixed parse/render configuration.
///
/// No syntax extensions; render options pinned to backtick code fences and
/// dash list markers so serialization is deterministic across runs.
fn fixed_options() -> Options<'static> {
    let mut options = Options::default();
    options.render.prefer_fenced = true;
    options.render.list_style = ListStyleType::Dash;
    options
}

/// Parse raw markdown into an arena-allocated tree.
///
/// Total for any input string; markdown parsers accept arbitrary text.
pub fn parse_markdown<'a>(arena: &'a Arena<'a>, text: &str) -> &'a AstNode<'a> {
    parse_document(arena, text, &fixed_options())
}

/// Serialize a tree back to commonmark text with the fixed configuration.
pub fn serialize_markdown<'a>(root: &'a AstNode<'a>) -> Result<String, FixError> {
    let mut buf = String::new();
    format_commonmark(root, &fixed_options(), &mut buf)
        .map_err(|e| FixError::Render(std::io::Error::other(e)))?;
    Ok(buf)
}

/// Serialize a tree for writing back to disk.
///
/// The commonmark formatter backslash-escapes an ampersand that starts an
/// entity-like sequence, which would turn the `&lt;` escapes written into
/// text nodes into `\&lt;`. Output destined for disk restores the entity
/// form so escaped angle brackets survive as `&lt;`.
pub fn render_markdown<'a>(root: &'a AstNode<'a>) -> Result<String, FixError> {
    Ok(serialize_markdown(root)?.replace("\\&lt;", "&lt;"))
}

/// Visit every node's value, collecting whether any callback reported a change.
///
/// The node-tag set is small and closed, so passes match the tagged
/// `NodeValue` variant inside the callback rather than registering per-tag
/// visitors.
pub fn visit_values<'a, F>(root: &'a AstNode<'a>, mut f: F) -> bool
where
    F: FnMut(&mut NodeValue) -> bool,
{
    let mut changed = false;
    for node in root.descendants() {
        let mut data = node.data.borrow_mut();
        changed |= f(&mut data.value);
    }
    changed
}
