//! Repository identifier handling.

use std::sync::LazyLock;

use regex::Regex;

/// `owner/name` tail of a source-hosting URL.
static GITHUB_REPO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"github\.com/[^/]+/([^/\s]+)")
        .unwrap_or_else(|err| panic!("invalid GITHUB_REPO regex: {err}"))
});

/// camelCase boundary, for label derivation.
static CAMEL_BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([a-z])([A-Z])")
        .unwrap_or_else(|err| panic!("invalid CAMEL_BOUNDARY regex: {err}"))
});

/// Extract a bare repository name from a plain name or source-hosting URL.
///
/// A trailing `.git` is dropped; a plain name passes through trimmed.
#[must_use]
pub fn extract_repo_name(input: &str) -> String {
    if let Some(caps) = GITHUB_REPO.captures(input) {
        let name = caps.get(1).map_or("", |m| m.as_str());
        return name.strip_suffix(".git").unwrap_or(name).to_string();
    }
    input.trim().to_string()
}

/// Convert kebab-case, snake_case, or camelCase to a Title Case label.
#[must_use]
pub fn to_title_case(name: &str) -> String {
    let spaced = CAMEL_BOUNDARY.replace_all(name, "$1 $2");
    spaced
        .split(['-', '_', ' '])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars.next().map_or_else(String::new, |first| {
                first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect()
            })
        })
        .collect::<Vec<_>>()
        .join(" ")
}
