//! Orchestrates a full pass over the tracked repositories.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::{CheckError, RunnerError};

use crate::config::{load_repositories, Settings, TrackedRepository};
use crate::drift::{compute_drift, DriftRecord};
use crate::github::GitHubClient;
use crate::http::{HttpClient, JsonSource};
use crate::issues::{ensure_tracking_issue, update_issue_body, IssueTracker};
use crate::manifest::fetch_manifest;
use crate::summary::{CheckOutcome, RunSummary};
use crate::templates::TemplateRenderer;
use crate::versions::{resolve_channel_version, ReleaseSource, VersionResolver};
use std::sync::Arc;
use tracing::{error, info, info_span, warn, Instrument};

/// External services a run talks to.
#[derive(Clone)]
pub struct Clients {
    /// Manifest host, product-details feed and addon registry.
    pub json: Arc<dyn JsonSource>,
    /// GitHub releases of GitHub-hosted addons.
    pub releases: Arc<dyn ReleaseSource>,
    /// Tracking issue operations.
    pub tracker: Arc<dyn IssueTracker>,
}

/// Checks every tracked repository once, in order.
pub struct Runner {
    repositories: Vec<TrackedRepository>,
    settings: Settings,
    clients: Clients,
    renderer: TemplateRenderer,
    dry_run: bool,
}

impl Runner {
    /// Builds a runner from the provided configuration, loading the
    /// repository list and settings and connecting the real clients.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let settings = Settings::load(config.settings_path())?;
        let repositories = load_repositories(config.repos_path())?;

        let github = Arc::new(GitHubClient::new(config.token())?);
        let clients = Clients {
            json: Arc::new(HttpClient::new(&settings.user_agent)?),
            releases: github.clone(),
            tracker: github,
        };

        Ok(Self::with_clients(
            repositories,
            settings,
            clients,
            config.dry_run(),
        ))
    }

    /// Builds a runner over an explicit repository list and clients.
    pub fn with_clients(
        repositories: Vec<TrackedRepository>,
        settings: Settings,
        clients: Clients,
        dry_run: bool,
    ) -> Self {
        Self {
            repositories,
            settings,
            clients,
            renderer: TemplateRenderer::new(),
            dry_run,
        }
    }

    /// Executes one full pass.
    ///
    /// A failing repository is logged and recorded; it never stops the pass.
    /// The runner waits the configured pacing delay after every repository.
    pub async fn run(&self) -> RunSummary {
        let mut summary = RunSummary::new(self.dry_run);

        if self.repositories.is_empty() {
            warn!("No tracked repositories configured");
            return summary;
        }

        info!(count = self.repositories.len(), "Checking tracked repositories");
        let pacing = self.settings.pacing();

        for repository in &self.repositories {
            let span = info_span!("check", repo = %repository.repo, branch = %repository.branch);

            let outcome = match self.check_repository(repository).instrument(span).await {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!(
                        repo = %repository.repo,
                        name = %repository.name,
                        error = %e,
                        "Repository check failed"
                    );
                    CheckOutcome::Failed {
                        error: e.to_string(),
                    }
                }
            };
            summary.record_outcome(&outcome);

            if !pacing.is_zero() {
                tokio::time::sleep(pacing).await;
            }
        }

        summary
    }

    /// Checks a single repository and reports its drift.
    ///
    /// # Errors
    ///
    /// Returns the first error hit; nothing is written to the tracker in
    /// that case.
    pub async fn check_repository(
        &self,
        repository: &TrackedRepository,
    ) -> Result<CheckOutcome, CheckError> {
        info!(name = %repository.name, "Checking repository");

        let manifest = fetch_manifest(
            self.clients.json.as_ref(),
            &self.settings.manifest_base_url,
            &repository.repo,
            &repository.branch,
        )
        .await?;

        let latest_channel_version = resolve_channel_version(
            self.clients.json.as_ref(),
            &self.settings.product_details_url,
            manifest.version.product,
        )
        .await?;

        let resolver = VersionResolver::new(
            self.clients.json.as_ref(),
            self.clients.releases.as_ref(),
            &self.settings.amo_api_base_url,
        );
        let resolved = resolver.resolve_addon_versions(&manifest.addons).await?;

        let drift = compute_drift(&manifest, &latest_channel_version, &resolved);
        if drift.is_empty() {
            info!(project = %manifest.name, "All dependencies are up to date");
            return Ok(CheckOutcome::UpToDate);
        }

        info!(
            project = %manifest.name,
            outdated = drift.len(),
            "Found outdated dependencies"
        );

        if self.dry_run {
            self.print_dry_run_preview(repository, &manifest.name, &drift);
            return Ok(CheckOutcome::Previewed {
                outdated: drift.len(),
            });
        }

        let tracker = self.clients.tracker.as_ref();
        let issue_number =
            ensure_tracking_issue(tracker, &self.settings, repository, &manifest.name).await?;
        update_issue_body(
            tracker,
            &self.renderer,
            &repository.repo,
            issue_number,
            &drift,
        )
        .await?;

        Ok(CheckOutcome::Reported {
            issue_number,
            outdated: drift.len(),
        })
    }

    fn print_dry_run_preview(
        &self,
        repository: &TrackedRepository,
        project_name: &str,
        drift: &[DriftRecord],
    ) {
        println!("\n[DRY RUN] {} ({})", project_name, repository.repo);
        println!(
            "  Would update the '{}' tracking issue with:\n",
            repository.issue_label
        );

        match self.renderer.render_issue_body(drift) {
            Ok(body) => {
                for line in body.lines() {
                    println!("    {line}");
                }
            }
            Err(e) => warn!(error = %e, "Failed to render preview"),
        }

        println!();
    }
}
