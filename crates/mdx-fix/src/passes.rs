//! Rewrite passes that make markdown safe for an MDX-aware renderer.
//!
//! Each pass mutates node payloads in place and reports whether it changed
//! anything; a document's changed flag is the OR across all passes. Passes
//! only touch the string payload of text nodes, raw-html nodes, and link
//! URLs. Code blocks are distinct node variants and are never visited, so
//! code content survives every pass byte for byte.

use std::borrow::Cow;
use std::sync::LazyLock;

use comrak::nodes::{AstNode, NodeValue};
use regex::Regex;

use crate::tree::visit_values;

/// HTML comment, matched across line breaks, body trimmed as captured.
static HTML_COMMENT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)<!--\s*(?P<body>.*?)\s*-->")
        .unwrap_or_else(|err| panic!("invalid HTML_COMMENT regex: {err}"))
});

/// Opening void-element tag with attributes that does not already end in `/>`.
///
/// The final `[^/]` keeps an already self-closed tag from matching, so the
/// pass never double-rewrites. Single-pass regex over raw markup is a known
/// heuristic: quoted `>` characters inside attributes can defeat it.
static VOID_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)<((?:img|br|hr|input|meta|link|area|base|col|embed|param|source|track|wbr)\s+[^>]*[^/])>",
    )
    .unwrap_or_else(|err| panic!("invalid VOID_TAG regex: {err}"))
});

/// Path prefix stripped from relative link targets.
const LINK_PREFIX: &str = "docs/";

/// Escape every literal `<` in text nodes as `&lt;`.
///
/// Unconditional: no attempt to distinguish a would-be tag from a comparison
/// operator. An MDX-aware renderer treats any unescaped `<` in prose as the
/// start of a component reference, so prose is neutralized wholesale.
pub fn escape_text_angle_brackets<'a>(root: &'a AstNode<'a>) -> bool {
    visit_values(root, |value| match value {
        NodeValue::Text(text) if text.contains('<') => {
            tracing::debug!("escaping < in text node: {:.50}", text.as_ref());
            *text = text.replace('<', "&lt;").into();
            true
        }
        _ => false,
    })
}

/// Convert `<!-- body -->` comments in raw-html nodes to `{/* body */}`.
///
/// Multiple comments within the same node each convert independently.
pub fn convert_html_comments<'a>(root: &'a AstNode<'a>) -> bool {
    rewrite_raw_html(root, &HTML_COMMENT, "{/* $body */}")
}

/// Rewrite `<tag attrs>` to `<tag attrs />` for the fixed void-element list.
///
/// Tag-name matching is case-insensitive and attributes are preserved
/// verbatim. Bare tags without attributes are left alone.
pub fn close_void_tags<'a>(root: &'a AstNode<'a>) -> bool {
    rewrite_raw_html(root, &VOID_TAG, "<${1} />")
}

/// Strip the leading `docs/` segment from relative link targets.
///
/// Only the URL is touched; fragments and display text pass through.
pub fn strip_docs_link_prefix<'a>(root: &'a AstNode<'a>) -> bool {
    visit_values(root, |value| match value {
        NodeValue::Link(link) if link.url.starts_with(LINK_PREFIX) => {
            tracing::debug!("stripping link prefix: {}", link.url);
            link.url.drain(..LINK_PREFIX.len());
            true
        }
        _ => false,
    })
}

/// Run all four passes in their fixed order.
///
/// Comment conversion and tag repair work on raw-html nodes, which are
/// distinct from the text nodes the escape pass mutates, so no two passes
/// compete for the same substring.
pub fn apply_all<'a>(root: &'a AstNode<'a>) -> bool {
    let mut changed = escape_text_angle_brackets(root);
    changed |= convert_html_comments(root);
    changed |= close_void_tags(root);
    changed |= strip_docs_link_prefix(root);
    changed
}

/// Apply a regex rewrite to every raw-html payload (block and inline).
fn rewrite_raw_html<'a>(root: &'a AstNode<'a>, pattern: &Regex, replacement: &str) -> bool {
    visit_values(root, |value| {
        let literal = match value {
            NodeValue::HtmlBlock(block) => &mut block.literal,
            NodeValue::HtmlInline(raw) => raw,
            _ => return false,
        };
        match pattern.replace_all(literal, replacement) {
            Cow::Owned(updated) => {
                tracing::debug!("rewrote raw html node: {:.50}", literal.as_str());
                *literal = updated;
                true
            }
            Cow::Borrowed(_) => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use comrak::Arena;

    use crate::tree::{parse_markdown, render_markdown, serialize_markdown};

    fn fix(text: &str) -> (String, bool) {
        let arena = Arena::new();
        let root = parse_markdown(&arena, text);
        let changed = apply_all(root);
        (render_markdown(root).unwrap(), changed)
    }

    #[test]
    fn test_escape_scenario() {
        let (out, changed) = fix("Budget < 500\n");
        assert!(changed);
        assert!(out.contains("Budget &lt; 500"), "got {out:?}");
    }

    #[test]
    fn test_escape_totality() {
        let arena = Arena::new();
        let root = parse_markdown(&arena, "a < b, c<d, <Widget> and < the end\n");
        escape_text_angle_brackets(root);
        for node in root.descendants() {
            if let NodeValue::Text(text) = &node.data.borrow().value {
                assert!(!text.contains('<'), "unescaped < left in {text:?}");
            }
        }
    }

    #[test]
    fn test_escape_leaves_code_alone() {
        let (out, changed) = fix("Prose < here\n\n```\nif a < b {}\n```\n\nAnd `x < y` inline.\n");
        assert!(changed);
        assert!(out.contains("if a < b {}"));
        assert!(out.contains("`x < y`"));
    }

    #[test]
    fn test_escape_idempotent() {
        let arena = Arena::new();
        let root = parse_markdown(&arena, "Budget < 500 and a<b\n");
        assert!(escape_text_angle_brackets(root));
        let first = serialize_markdown(root).unwrap();
        assert!(!escape_text_angle_brackets(root));
        assert_eq!(first, serialize_markdown(root).unwrap());
    }

    #[test]
    fn test_comment_scenario_trims_surrounding_space() {
        let (out, changed) = fix("<div>\n<!--   note here   -->\n</div>\n");
        assert!(changed);
        assert!(out.contains("{/* note here */}"), "got {out:?}");
        assert!(!out.contains("<!--"));
    }

    #[test]
    fn test_comment_multiline_and_multiple() {
        let (out, _) = fix("<section>\n<!-- first -->\n<!-- second\nspans lines -->\n</section>\n");
        assert!(out.contains("{/* first */}"));
        assert!(out.contains("{/* second\nspans lines */}"));
    }

    #[test]
    fn test_comment_pass_idempotent() {
        let arena = Arena::new();
        let root = parse_markdown(&arena, "<div>\n<!-- note -->\n</div>\n");
        assert!(convert_html_comments(root));
        let first = serialize_markdown(root).unwrap();
        assert!(!convert_html_comments(root));
        assert_eq!(first, serialize_markdown(root).unwrap());
    }

    #[test]
    fn test_void_tag_gains_slash() {
        let (out, changed) = fix("<img src=\"logo.png\" alt=\"logo\">\n");
        assert!(changed);
        assert!(out.contains("<img src=\"logo.png\" alt=\"logo\" />"), "got {out:?}");
    }

    #[test]
    fn test_void_tag_case_insensitive() {
        let (out, _) = fix("<IMG SRC=\"a.png\">\n");
        assert!(out.contains("<IMG SRC=\"a.png\" />"), "got {out:?}");
    }

    #[test]
    fn test_already_closed_tag_untouched() {
        let arena = Arena::new();
        let root = parse_markdown(&arena, "<img src=\"x\" />\n");
        assert!(!close_void_tags(root));
        let out = serialize_markdown(root).unwrap();
        assert!(out.contains("<img src=\"x\" />"));
        assert!(!out.contains("/ />"));
    }

    #[test]
    fn test_bare_void_tag_untouched() {
        let arena = Arena::new();
        let root = parse_markdown(&arena, "line one<br>\nline two\n");
        assert!(!close_void_tags(root));
    }

    #[test]
    fn test_non_void_tag_untouched() {
        let arena = Arena::new();
        let root = parse_markdown(&arena, "<div class=\"wide\">\n</div>\n");
        assert!(!close_void_tags(root));
    }

    #[test]
    fn test_link_prefix_strip_keeps_fragment() {
        let (out, changed) = fix("[setup](docs/guide.md#setup)\n");
        assert!(changed);
        assert!(out.contains("(guide.md#setup)"), "got {out:?}");
        assert!(out.contains("[setup]"));
    }

    #[test]
    fn test_other_prefix_untouched() {
        let arena = Arena::new();
        let root = parse_markdown(&arena, "[guide](other/guide.md)\n");
        assert!(!strip_docs_link_prefix(root));
    }

    #[test]
    fn test_link_pass_idempotent() {
        let arena = Arena::new();
        let root = parse_markdown(&arena, "[a](docs/a.md) and [b](docs/b.md#top)\n");
        assert!(strip_docs_link_prefix(root));
        let first = serialize_markdown(root).unwrap();
        assert!(!strip_docs_link_prefix(root));
        assert_eq!(first, serialize_markdown(root).unwrap());
    }

    #[test]
    fn test_image_urls_not_rewritten() {
        let arena = Arena::new();
        let root = parse_markdown(&arena, "![diagram](docs/diagram.png)\n");
        assert!(!strip_docs_link_prefix(root));
    }

    #[test]
    fn test_apply_all_runs_every_pass() {
        let (out, changed) = fix(
            "A < B\n\n<img src=\"x.png\" width=\"10\">\n<!-- keep -->\n\n[g](docs/g.md)\n",
        );
        assert!(changed);
        assert!(out.contains("&lt;"));
        assert!(out.contains("<img src=\"x.png\" width=\"10\" />"));
        assert!(out.contains("{/* keep */}"));
        assert!(out.contains("(g.md)"));
    }
}
