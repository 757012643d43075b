//! GitHub access through octocrab.
//!
//! [`GitHubClient`] backs both the tracking issue operations and the release
//! lookups of GitHub-hosted addons.

use crate::config::RepositoryId;
use crate::issues::{IssueTracker, NewIssue, TrackerError};
use crate::versions::{ReleaseSource, VersionError};
use async_trait::async_trait;
use octocrab::{params, Octocrab};
use tracing::{debug, warn};

/// Issues listed per page during tracking issue lookup.
const ISSUES_PER_PAGE: u8 = 100;

/// Authenticated (or anonymous) GitHub API client.
#[derive(Clone)]
pub struct GitHubClient {
    octocrab: Octocrab,
}

impl GitHubClient {
    /// Builds a client, authenticated with `token` when one is given.
    ///
    /// Without a token every write call is rejected by GitHub.
    ///
    /// # Errors
    ///
    /// Returns an error if the octocrab client can't be built.
    pub fn new(token: Option<&str>) -> Result<Self, octocrab::Error> {
        let builder = Octocrab::builder();
        let octocrab = match token {
            Some(token) => builder.personal_token(token.to_string()).build()?,
            None => {
                warn!("No GitHub token provided, issue tracker calls will fail");
                builder.build()?
            }
        };
        Ok(Self { octocrab })
    }
}

#[async_trait]
impl IssueTracker for GitHubClient {
    async fn list_issues(
        &self,
        repo: &RepositoryId,
        creator: &str,
        label: &str,
    ) -> Result<Vec<u64>, TrackerError> {
        debug!(repo = %repo, creator, label, "Listing tracking issues");

        let labels = [label.to_string()];
        let page = self
            .octocrab
            .issues(&repo.owner, &repo.name)
            .list()
            .creator(creator)
            .labels(&labels)
            .state(params::State::Open)
            .per_page(ISSUES_PER_PAGE)
            .send()
            .await?;

        // The issues endpoint also returns pull requests.
        Ok(page
            .items
            .iter()
            .filter(|issue| issue.pull_request.is_none())
            .map(|issue| issue.number)
            .collect())
    }

    async fn create_issue(
        &self,
        repo: &RepositoryId,
        issue: &NewIssue,
    ) -> Result<u64, TrackerError> {
        let created = self
            .octocrab
            .issues(&repo.owner, &repo.name)
            .create(&issue.title)
            .body(&issue.body)
            .labels(issue.labels.clone())
            .assignees(issue.assignees.clone())
            .send()
            .await?;

        Ok(created.number)
    }

    async fn set_issue_body(
        &self,
        repo: &RepositoryId,
        issue_number: u64,
        body: &str,
    ) -> Result<(), TrackerError> {
        self.octocrab
            .issues(&repo.owner, &repo.name)
            .update(issue_number)
            .body(body)
            .send()
            .await?;

        Ok(())
    }
}

#[async_trait]
impl ReleaseSource for GitHubClient {
    async fn latest_release_tag(&self, repo: &RepositoryId) -> Result<String, VersionError> {
        debug!(repo = %repo, "Fetching latest release");

        let release = self
            .octocrab
            .repos(&repo.owner, &repo.name)
            .releases()
            .get_latest()
            .await
            .map_err(|e| VersionError::UpstreamUnavailable {
                service: format!("GitHub releases of {repo}"),
                message: e.to_string(),
            })?;

        Ok(release.tag_name)
    }
}
