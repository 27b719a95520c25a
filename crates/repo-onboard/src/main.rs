//! repo-onboard CLI: add a repository to the docs hub.
//!
//! Accepts a bare repository name or a source-hosting URL. Edits the sync
//! workflow, the sidebars document, and the site configuration with
//! insert-if-absent splices, so running it twice is harmless.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use repo_onboard::{
    OnboardConfig, SpliceOutcome, add_navbar_item, add_sidebar_entry, add_workflow_steps,
    ensure_docs_dir, extract_repo_name,
};

#[derive(Parser, Debug)]
#[command(
    name = "repo-onboard",
    about = "Add a repository to the docs hub: workflow, sidebar, and navbar",
    version
)]
struct Cli {
    /// Repository name or source-hosting URL.
    repo: String,

    /// Site root containing the workflow, sidebars, and config documents.
    #[arg(long, value_name = "DIR", default_value = ".")]
    site_root: PathBuf,

    /// GitHub owner for generated checkout steps.
    #[arg(long, default_value = "mwinfiel0331")]
    owner: String,

    /// Existing repository whose workflow sections anchor the inserts.
    #[arg(long, default_value = "birddogger")]
    template_repo: String,

    /// Emit per-step traces on stderr.
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if cli.verbose {
            "repo_onboard=debug"
        } else {
            "repo_onboard=warn"
        })
    });
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    let repo = extract_repo_name(&cli.repo);
    let config = OnboardConfig {
        site_root: cli.site_root,
        owner: cli.owner,
        template_repo: cli.template_repo,
        ..OnboardConfig::default()
    };

    println!("Onboarding {}/{repo}", config.owner);

    // The workflow edit is the one the rest of the pipeline depends on;
    // a failure there ends the run before any other document is touched.
    match add_workflow_steps(&config, &repo) {
        Ok(outcome) => report("workflow", &config.workflow_path, outcome),
        Err(err) => {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    match ensure_docs_dir(&config, &repo) {
        Ok(path) => println!("  docs folder ready: {}", path.display()),
        Err(err) => eprintln!("warning: {err}"),
    }

    match add_sidebar_entry(&config, &repo) {
        Ok(outcome) => report("sidebar", &config.sidebars_path, outcome),
        Err(err) => eprintln!("warning: {err}"),
    }

    match add_navbar_item(&config, &repo) {
        Ok(outcome) => report("navbar", &config.config_path, outcome),
        Err(err) => eprintln!("warning: {err}"),
    }

    println!("Done. Commit the changes and run the docs-sync workflow.");
    ExitCode::SUCCESS
}

fn report(step: &str, path: &std::path::Path, outcome: SpliceOutcome) {
    match outcome {
        SpliceOutcome::Inserted => println!("  {step}: updated {}", path.display()),
        SpliceOutcome::AlreadyPresent => {
            println!("  {step}: already present in {}", path.display());
        }
    }
}
