//! CLI for the update bot.
//!
//! Checks every tracked repository once for outdated Firefox and addon
//! versions and keeps each project's tracking issue up to date.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use update_bot::{RunSummary, Runner, RunnerConfig, RunnerError};

/// Update bot - Report outdated gluon.json dependencies as tracking issues.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the tracked repository list.
    #[arg(long, default_value = "repos.json")]
    repos_path: PathBuf,

    /// Path to an optional settings file.
    #[arg(long)]
    settings_path: Option<PathBuf>,

    /// GitHub Personal Access Token.
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Print drift reports without touching the issue tracker.
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // octocrab and reqwest both use rustls; pin the provider before either builds a client.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    // Per-repository failures are logged during the run and don't affect the exit code.
    match run(args).await {
        Ok(summary) => {
            print_summary(&summary);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunSummary, RunnerError> {
    let mut config = RunnerConfig::new(args.repos_path, args.token, args.dry_run);
    if let Some(path) = args.settings_path {
        config = config.with_settings_path(path);
    }
    let runner = Runner::new(config)?;
    Ok(runner.run().await)
}

/// Prints the final run summary.
fn print_summary(summary: &RunSummary) {
    println!("\nSummary:");
    println!(
        "  Mode: {}",
        if summary.dry_run { "Dry Run" } else { "Live" }
    );
    println!("  Repositories checked: {}", summary.repositories_checked);
    println!("  Up to date: {}", summary.up_to_date);

    if summary.dry_run {
        println!("  Drift previewed: {}", summary.previewed);
    } else {
        println!("  Issues updated: {}", summary.issues_updated);
    }

    println!("  Failed: {}", summary.failed);
}
