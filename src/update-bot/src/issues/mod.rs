//! Tracking issue management.
//!
//! Each project has at most one open tracking issue, filed by the bot user and
//! tagged with the project's issue label. It is reused across runs and its
//! body is replaced with the latest drift report every time.

mod error;

pub use error::TrackerError;

use crate::config::{LookupFailurePolicy, RepositoryId, Settings, TrackedRepository};
use crate::drift::DriftRecord;
use crate::templates::{generate_issue_title, TemplateRenderer};
use async_trait::async_trait;
use tracing::{info, info_span, warn, Instrument};

/// Fields of an issue to be created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    /// Issue title.
    pub title: String,

    /// Issue body.
    pub body: String,

    /// Labels applied on creation.
    pub labels: Vec<String>,

    /// Users assigned on creation.
    pub assignees: Vec<String>,
}

/// The issue API operations the bot relies on.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Lists the numbers of open issues in `repo` created by `creator` and
    /// carrying `label`, in the order the tracker returns them.
    async fn list_issues(
        &self,
        repo: &RepositoryId,
        creator: &str,
        label: &str,
    ) -> Result<Vec<u64>, TrackerError>;

    /// Creates an issue and returns its number.
    async fn create_issue(&self, repo: &RepositoryId, issue: &NewIssue)
        -> Result<u64, TrackerError>;

    /// Replaces the body of an existing issue.
    async fn set_issue_body(
        &self,
        repo: &RepositoryId,
        issue_number: u64,
        body: &str,
    ) -> Result<(), TrackerError>;
}

/// Returns the bot user followed by the configured users, without duplicates.
#[must_use]
pub fn tracking_assignees(bot_user: &str, assigned_users: &[String]) -> Vec<String> {
    let mut assignees = vec![bot_user.to_string()];
    for user in assigned_users {
        if !assignees.contains(user) {
            assignees.push(user.clone());
        }
    }
    assignees
}

/// Finds the open tracking issue of a repository, creating it if needed.
///
/// If the tracker lists several matching issues, the first one is reused.
///
/// # Errors
///
/// Returns [`TrackerError`] if creation fails, or if the lookup fails while
/// [`LookupFailurePolicy::Abort`] is configured.
pub async fn ensure_tracking_issue(
    tracker: &dyn IssueTracker,
    settings: &Settings,
    repository: &TrackedRepository,
    project_name: &str,
) -> Result<u64, TrackerError> {
    let span = info_span!(
        "ensure_tracking_issue",
        repo = %repository.repo,
        label = %repository.issue_label
    );

    async {
        let existing = match tracker
            .list_issues(&repository.repo, &settings.bot_user, &repository.issue_label)
            .await
        {
            Ok(numbers) => numbers.first().copied(),
            Err(e) if settings.lookup_failure == LookupFailurePolicy::Create => {
                warn!(error = %e, "Issue lookup failed, creating a new tracking issue");
                None
            }
            Err(e) => return Err(e),
        };

        if let Some(number) = existing {
            info!(issue_number = number, "Found existing tracking issue");
            return Ok(number);
        }

        let issue = NewIssue {
            title: generate_issue_title(project_name),
            body: String::new(),
            labels: vec![repository.issue_label.clone()],
            assignees: tracking_assignees(&settings.bot_user, &repository.assigned_users),
        };

        let number = tracker.create_issue(&repository.repo, &issue).await?;
        info!(issue_number = number, "Created tracking issue");
        Ok(number)
    }
    .instrument(span)
    .await
}

/// Replaces a tracking issue's body with the current drift report.
///
/// # Errors
///
/// Returns [`TrackerError`] if rendering or the update call fails.
pub async fn update_issue_body(
    tracker: &dyn IssueTracker,
    renderer: &TemplateRenderer,
    repo: &RepositoryId,
    issue_number: u64,
    drift: &[DriftRecord],
) -> Result<(), TrackerError> {
    let span = info_span!("update_issue", repo = %repo, issue_number = issue_number);

    async {
        let body = renderer
            .render_issue_body(drift)
            .map_err(|e| TrackerError::TemplateError(e.to_string()))?;

        tracker.set_issue_body(repo, issue_number, &body).await?;

        info!(outdated = drift.len(), "Issue updated successfully");
        Ok(())
    }
    .instrument(span)
    .await
}
