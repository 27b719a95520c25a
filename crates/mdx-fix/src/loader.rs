//! Document discovery.

use std::path::PathBuf;
use walkdir::WalkDir;

/// Collect every markdown file under the given roots.
///
/// Roots are walked recursively; only regular files with an `md` extension
/// are kept. A missing root is skipped silently, as are entries the walk
/// cannot read. Entries are visited in lexical per-directory order so
/// repeated runs report files in the same order.
#[must_use]
pub fn find_markdown_files(roots: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for root in roots {
        if !root.is_dir() {
            tracing::debug!("skipping missing root {}", root.display());
            continue;
        }
        for entry in WalkDir::new(root)
            .follow_links(false)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            if entry.file_type().is_file()
                && entry.path().extension().map_or(false, |ext| ext == "md")
            {
                files.push(entry.path().to_path_buf());
            }
        }
    }
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_finds_nested_markdown_only() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("docs/sub")).unwrap();
        std::fs::write(dir.path().join("docs/b.md"), "b").unwrap();
        std::fs::write(dir.path().join("docs/a.md"), "a").unwrap();
        std::fs::write(dir.path().join("docs/sub/c.md"), "c").unwrap();
        std::fs::write(dir.path().join("docs/notes.txt"), "x").unwrap();

        let files = find_markdown_files(&[dir.path().join("docs")]);
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(dir.path()).unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["docs/a.md", "docs/b.md", "docs/sub/c.md"]);
    }

    #[test]
    fn test_missing_root_is_skipped() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("docs")).unwrap();
        std::fs::write(dir.path().join("docs/a.md"), "a").unwrap();

        let files = find_markdown_files(&[
            dir.path().join("docs"),
            dir.path().join("no-such-root"),
        ]);
        assert_eq!(files.len(), 1);
    }
}
