//! Anchor-validated, idempotent text-splice operations.
//!
//! Every operation reads its target into memory, checks whether the edit is
//! already present (so repeat invocations are safe), locates each required
//! anchor, and only then writes the spliced result back in one go. A missing
//! anchor aborts the operation with the file untouched.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::OnboardError;
use crate::repo::to_title_case;

/// End of a template sync block: its closing `fi` followed by a blank line.
static SYNC_BLOCK_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\n          fi\r?\n\s*\r?\n")
        .unwrap_or_else(|err| panic!("invalid SYNC_BLOCK_END regex: {err}"))
});

/// Leading whitespace and opening brace of the navbar's GitHub link entry.
static GITHUB_NAVBAR_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\s*\{\s*href:\s*['"]https://github\.com"#)
        .unwrap_or_else(|err| panic!("invalid GITHUB_NAVBAR_LINK regex: {err}"))
});

/// Result of one insert-if-absent operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpliceOutcome {
    /// The entry was inserted and the file rewritten.
    Inserted,
    /// The entry already existed; the file was left untouched.
    AlreadyPresent,
}

/// Paths and anchors for one onboarding run.
#[derive(Debug, Clone)]
pub struct OnboardConfig {
    /// Directory the target documents are resolved against.
    pub site_root: PathBuf,
    /// Pipeline-definition document (CI workflow).
    pub workflow_path: PathBuf,
    /// Navigation-sidebar document.
    pub sidebars_path: PathBuf,
    /// Site-configuration document.
    pub config_path: PathBuf,
    /// Owner every generated checkout step references.
    pub owner: String,
    /// Existing repository whose workflow sections anchor the inserts.
    pub template_repo: String,
}

impl Default for OnboardConfig {
    fn default() -> Self {
        Self {
            site_root: PathBuf::from("."),
            workflow_path: PathBuf::from(".github/workflows/sync-docs.yml"),
            sidebars_path: PathBuf::from("sidebars.ts"),
            config_path: PathBuf::from("docusaurus.config.ts"),
            owner: "mwinfiel0331".to_string(),
            template_repo: "birddogger".to_string(),
        }
    }
}

impl OnboardConfig {
    fn workflow(&self) -> PathBuf {
        self.site_root.join(&self.workflow_path)
    }

    fn sidebars(&self) -> PathBuf {
        self.site_root.join(&self.sidebars_path)
    }

    fn site_config(&self) -> PathBuf {
        self.site_root.join(&self.config_path)
    }
}

/// Add checkout, sync, and cleanup steps for `repo` to the CI workflow.
///
/// All three inserts are anchored off the template repository's existing
/// sections; the file is written back once, after every anchor resolved.
pub fn add_workflow_steps(
    config: &OnboardConfig,
    repo: &str,
) -> Result<SpliceOutcome, OnboardError> {
    let path = config.workflow();
    let mut workflow = read_text(&path)?;

    // Exact step-name match to the end of line, so `next` never collides
    // with an existing `nextinvestment` checkout.
    let checkout_present = compile_regex(&format!(
        r"(?m)- name: Checkout {}\s*$",
        regex::escape(repo)
    ));
    if checkout_present.is_match(&workflow) {
        return Ok(SpliceOutcome::AlreadyPresent);
    }

    // Checkout step goes after the template repo's checkout step.
    let template_checkout = format!("- name: Checkout {}", config.template_repo);
    let checkout_at = workflow
        .find(&template_checkout)
        .ok_or_else(|| anchor_missing(&path, &template_checkout))?;
    let next_step_at = workflow[checkout_at + 1..]
        .find("\n      - name:")
        .map(|i| checkout_at + 1 + i)
        .ok_or_else(|| anchor_missing(&path, "step following the template checkout"))?;
    workflow.insert_str(next_step_at, &checkout_step(&config.owner, repo));

    // Sync block goes after the closing `fi` of the template sync block.
    let sync_anchor = format!("# Sync {} docs", config.template_repo);
    let sync_at = workflow
        .find(&sync_anchor)
        .ok_or_else(|| anchor_missing(&path, &sync_anchor))?;
    let block_start = sync_at + sync_anchor.len();
    let block_end = SYNC_BLOCK_END
        .find(&workflow[block_start..])
        .map(|m| block_start + m.end())
        .ok_or_else(|| anchor_missing(&path, "end of the template sync block"))?;
    workflow.insert_str(block_end, &sync_section(repo));

    // Cleanup line goes after the template repo's cleanup line.
    let cleanup_anchor = format!("rm -rf _source_{}", config.template_repo);
    let cleanup_at = workflow
        .find(&cleanup_anchor)
        .ok_or_else(|| anchor_missing(&path, &cleanup_anchor))?;
    let line_end = workflow[cleanup_at..]
        .find('\n')
        .map(|i| cleanup_at + i)
        .ok_or_else(|| anchor_missing(&path, "newline after the template cleanup"))?;
    workflow.insert_str(line_end, &format!("\n{}", cleanup_line(repo)));

    write_text(&path, &workflow)?;
    Ok(SpliceOutcome::Inserted)
}

/// Add an autogenerated sidebar for `repo` to the sidebars document.
pub fn add_sidebar_entry(
    config: &OnboardConfig,
    repo: &str,
) -> Result<SpliceOutcome, OnboardError> {
    let path = config.sidebars();
    let mut sidebars = read_text(&path)?;

    let key = format!("{repo}Sidebar");
    if sidebars.contains(&key) {
        return Ok(SpliceOutcome::AlreadyPresent);
    }

    // Quote the key unless it is a bare identifier.
    let quoted = if key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
    {
        key
    } else {
        format!("'{key}'")
    };
    let entry = format!(
        "  // {repo} sidebar\n  {quoted}: [\n    {{\n      type: 'autogenerated',\n      dirName: '{repo}',\n    }},\n  ],\n"
    );

    let export_anchor = "export default sidebars;";
    let export_at = sidebars
        .find(export_anchor)
        .ok_or_else(|| anchor_missing(&path, export_anchor))?;
    let brace_at = sidebars[..export_at]
        .rfind("};")
        .ok_or_else(|| anchor_missing(&path, "closing brace before the export"))?;
    sidebars.insert_str(brace_at, &entry);

    write_text(&path, &sidebars)?;
    Ok(SpliceOutcome::Inserted)
}

/// Add a `docSidebar` navbar item for `repo` to the site configuration.
///
/// The human-readable label is derived from the repository name.
pub fn add_navbar_item(config: &OnboardConfig, repo: &str) -> Result<SpliceOutcome, OnboardError> {
    let path = config.site_config();
    let mut site = read_text(&path)?;

    let sidebar_id = format!("{repo}Sidebar");
    if site.contains(&format!("sidebarId: '{sidebar_id}'"))
        || site.contains(&format!("sidebarId: \"{sidebar_id}\""))
    {
        return Ok(SpliceOutcome::AlreadyPresent);
    }

    let github_at = GITHUB_NAVBAR_LINK
        .find(&site)
        .map(|m| m.start())
        .ok_or_else(|| anchor_missing(&path, "GitHub link in navbar"))?;

    let label = to_title_case(repo);
    let entry = format!(
        "        {{\n          type: 'docSidebar',\n          sidebarId: '{sidebar_id}',\n          position: 'left',\n          label: '{label}',\n        }},\n"
    );
    site.insert_str(github_at, &entry);

    write_text(&path, &site)?;
    Ok(SpliceOutcome::Inserted)
}

/// Create the repository's docs directory if it does not exist yet.
pub fn ensure_docs_dir(config: &OnboardConfig, repo: &str) -> Result<PathBuf, OnboardError> {
    let path = config.site_root.join("docs").join(repo);
    fs::create_dir_all(&path).map_err(|e| OnboardError::CreateDir(path.clone(), e))?;
    Ok(path)
}

fn checkout_step(owner: &str, repo: &str) -> String {
    format!(
        "\n      - name: Checkout {repo}\n        uses: actions/checkout@v4\n        with:\n          repository: {owner}/{repo}\n          ref: main\n          path: _source_{repo}\n          token: ${{{{ secrets.DOCS_REPO_TOKEN }}}}"
    )
}

fn sync_section(repo: &str) -> String {
    format!(
        "\n          # Sync {repo} docs\n          if [ -d \"_source_{repo}/docs\" ]; then\n            rm -rf docs/{repo}\n            mkdir -p docs/{repo}\n            rsync -a --delete _source_{repo}/docs/ docs/{repo}/\n          fi\n"
    )
}

fn cleanup_line(repo: &str) -> String {
    format!("          rm -rf _source_{repo}")
}

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(_compile_err) => match Regex::new(r"$^") {
            Ok(fallback) => fallback,
            Err(fallback_err) => panic!("hardcoded fallback regex must compile: {fallback_err}"),
        },
    }
}

fn read_text(path: &Path) -> Result<String, OnboardError> {
    fs::read_to_string(path).map_err(|e| OnboardError::Read(path.to_path_buf(), e))
}

fn write_text(path: &Path, content: &str) -> Result<(), OnboardError> {
    fs::write(path, content).map_err(|e| OnboardError::Write(path.to_path_buf(), e))
}

fn anchor_missing(path: &Path, anchor: &str) -> OnboardError {
    OnboardError::AnchorNotFound {
        path: path.to_path_buf(),
        anchor: anchor.to_string(),
    }
}
