//! mdx-fix CLI: sweep the hub's markdown for MDX compatibility problems.
//!
//! Dry-run by default; `--apply` rewrites changed documents in place with
//! `.bak` backups unless `--no-backup` is given.
//!
//! Logging: set `RUST_LOG=mdx_fix=debug` (or pass `--verbose`) to see
//! per-node rewrite traces on stderr.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use mdx_fix::{RunConfig, RunSummary, run};

/// Warnings shown in full in the text report; the rest are only counted.
const WARNING_PREVIEW: usize = 5;

#[derive(Parser, Debug)]
#[command(
    name = "mdx-fix",
    about = "AST-based markdown to MDX compatibility fixer",
    version
)]
struct Cli {
    /// Write rewritten documents back to disk (default: dry-run).
    #[arg(long, short = 'a')]
    apply: bool,

    /// Do not write `.bak` backups when applying.
    #[arg(long = "no-backup")]
    no_backup: bool,

    /// Emit per-node rewrite traces on stderr.
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Root directories to sweep (repeatable).
    #[arg(long = "root", value_name = "DIR", default_values_os_t = vec![PathBuf::from("docs"), PathBuf::from("blog")])]
    roots: Vec<PathBuf>,

    /// Output format.
    #[arg(long, short = 'o', value_enum, default_value_t = OutputFormat::Text)]
    output: OutputFormat,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing: RUST_LOG overrides; --verbose => debug; else warn
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "mdx_fix=debug"
        } else {
            "mdx_fix=warn"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let config = RunConfig {
        roots: cli.roots,
        apply: cli.apply,
        backup: !cli.no_backup,
    };

    let summary = run(&config);

    if summary.files_scanned == 0 {
        let roots = config
            .roots
            .iter()
            .map(|r| r.display().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        anyhow::bail!("no markdown documents found under {roots}; pass --root <DIR> to sweep another tree");
    }

    match cli.output {
        OutputFormat::Text => print_text_report(&summary, config.apply),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summary)?),
    }

    Ok(())
}

fn print_text_report(summary: &RunSummary, apply: bool) {
    for error in &summary.errors {
        println!("[ERROR]  {}: {}", error.path.display(), error.message);
    }
    for path in &summary.changed_files {
        println!("[MODIFY] {}", path.display());
    }

    println!();
    println!(
        "Processed {} files: {} changed{}, {} warnings, {} errors",
        summary.files_scanned,
        summary.files_changed,
        if apply { "" } else { " (dry-run)" },
        summary.warnings_found,
        summary.errors.len()
    );

    if !summary.warnings.is_empty() {
        println!();
        println!("Curly-brace constructs needing manual review:");
        for warning in summary.warnings.iter().take(WARNING_PREVIEW) {
            println!(
                "  {}: {}",
                warning.source_path.display(),
                warning.matches.join(", ")
            );
        }
        if summary.warnings.len() > WARNING_PREVIEW {
            println!("  ... and {} more", summary.warnings.len() - WARNING_PREVIEW);
        }
    }

    if !apply && summary.files_changed > 0 {
        println!();
        println!("Run with --apply to write these changes");
    }
}
