//! In-memory stand-ins for the external services.

#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Mutex;
use update_bot::{
    manifest_url, FetchError, IssueTracker, JsonSource, NewIssue, ReleaseSource, RepositoryId,
    Settings, TrackedRepository, TrackerError, VersionError,
};

/// Serves canned JSON documents by URL and records every request.
#[derive(Default)]
pub struct FakeJson {
    docs: HashMap<String, Value>,
    calls: Mutex<Vec<String>>,
}

impl FakeJson {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, doc: Value) -> Self {
        self.docs.insert(url.into(), doc);
        self
    }

    pub fn with_manifest(self, repo: &str, branch: &str, manifest: Value) -> Self {
        let repo: RepositoryId = repo.parse().unwrap();
        let url = manifest_url(&Settings::default().manifest_base_url, &repo, branch);
        self.with(url, manifest)
    }

    pub fn with_feed(self, feed: Value) -> Self {
        let url = Settings::default().product_details_url;
        self.with(url, feed)
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl JsonSource for FakeJson {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        self.calls.lock().unwrap().push(url.to_string());
        self.docs.get(url).cloned().ok_or_else(|| FetchError::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}

/// Serves release tags by repository and counts lookups.
#[derive(Default)]
pub struct FakeReleases {
    tags: HashMap<String, String>,
    calls: Mutex<usize>,
}

impl FakeReleases {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, repo: &str, tag: &str) -> Self {
        self.tags.insert(repo.to_string(), tag.to_string());
        self
    }

    pub fn call_count(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl ReleaseSource for FakeReleases {
    async fn latest_release_tag(&self, repo: &RepositoryId) -> Result<String, VersionError> {
        *self.calls.lock().unwrap() += 1;
        self.tags
            .get(&repo.to_string())
            .cloned()
            .ok_or_else(|| VersionError::UpstreamUnavailable {
                service: "GitHub releases".to_string(),
                message: format!("{repo} has no releases"),
            })
    }
}

/// An issue held by [`FakeTracker`].
#[derive(Debug, Clone)]
pub struct StoredIssue {
    pub repo: RepositoryId,
    pub number: u64,
    pub creator: String,
    pub labels: Vec<String>,
    pub assignees: Vec<String>,
    pub title: String,
    pub body: String,
}

#[derive(Default)]
struct TrackerState {
    issues: Vec<StoredIssue>,
    next_number: u64,
    list_calls: usize,
    create_calls: usize,
    update_calls: usize,
}

/// Issue tracker keeping issues in memory.
///
/// Issues it creates are attributed to `creator`.
pub struct FakeTracker {
    creator: String,
    fail_lookup: bool,
    state: Mutex<TrackerState>,
}

impl FakeTracker {
    pub fn new(creator: &str) -> Self {
        Self {
            creator: creator.to_string(),
            fail_lookup: false,
            state: Mutex::new(TrackerState {
                next_number: 1,
                ..TrackerState::default()
            }),
        }
    }

    pub fn failing_lookup(mut self) -> Self {
        self.fail_lookup = true;
        self
    }

    pub fn with_issue(self, repo: &str, creator: &str, label: &str) -> Self {
        {
            let mut state = self.state.lock().unwrap();
            let number = state.next_number;
            state.next_number += 1;
            state.issues.push(StoredIssue {
                repo: repo.parse().unwrap(),
                number,
                creator: creator.to_string(),
                labels: vec![label.to_string()],
                assignees: Vec::new(),
                title: "existing".to_string(),
                body: String::new(),
            });
        }
        self
    }

    pub fn issues(&self) -> Vec<StoredIssue> {
        self.state.lock().unwrap().issues.clone()
    }

    pub fn list_calls(&self) -> usize {
        self.state.lock().unwrap().list_calls
    }

    pub fn create_calls(&self) -> usize {
        self.state.lock().unwrap().create_calls
    }

    pub fn update_calls(&self) -> usize {
        self.state.lock().unwrap().update_calls
    }

    pub fn write_calls(&self) -> usize {
        self.create_calls() + self.update_calls()
    }
}

#[async_trait]
impl IssueTracker for FakeTracker {
    async fn list_issues(
        &self,
        repo: &RepositoryId,
        creator: &str,
        label: &str,
    ) -> Result<Vec<u64>, TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.list_calls += 1;

        if self.fail_lookup {
            return Err(TrackerError::Rejected {
                operation: "list",
                message: "service unavailable".to_string(),
            });
        }

        Ok(state
            .issues
            .iter()
            .filter(|i| &i.repo == repo && i.creator == creator && i.labels.iter().any(|l| l == label))
            .map(|i| i.number)
            .collect())
    }

    async fn create_issue(
        &self,
        repo: &RepositoryId,
        issue: &NewIssue,
    ) -> Result<u64, TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.create_calls += 1;

        let number = state.next_number;
        state.next_number += 1;
        state.issues.push(StoredIssue {
            repo: repo.clone(),
            number,
            creator: self.creator.clone(),
            labels: issue.labels.clone(),
            assignees: issue.assignees.clone(),
            title: issue.title.clone(),
            body: issue.body.clone(),
        });
        Ok(number)
    }

    async fn set_issue_body(
        &self,
        repo: &RepositoryId,
        issue_number: u64,
        body: &str,
    ) -> Result<(), TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.update_calls += 1;

        let issue = state
            .issues
            .iter_mut()
            .find(|i| &i.repo == repo && i.number == issue_number)
            .ok_or(TrackerError::Rejected {
                operation: "update",
                message: format!("{repo}#{issue_number} not found"),
            })?;
        issue.body = body.to_string();
        Ok(())
    }
}

/// A tracked repository on the `main` branch labelled `upstream`.
pub fn tracked(repo: &str, assigned_users: &[&str]) -> TrackedRepository {
    serde_json::from_value(json!({
        "name": repo,
        "repo": repo,
        "branch": "main",
        "assignedUsers": assigned_users,
        "issueLabel": "upstream",
    }))
    .unwrap()
}

/// Default settings without the pacing delay.
pub fn test_settings() -> Settings {
    Settings {
        pacing_secs: 0,
        ..Settings::default()
    }
}

/// A product-details feed with every channel key.
pub fn feed(release: &str) -> Value {
    json!({
        "LATEST_FIREFOX_VERSION": release,
        "LATEST_FIREFOX_DEVEL_VERSION": "122.0b3",
        "FIREFOX_DEVEDITION": "122.0b3",
        "FIREFOX_ESR": "115.6.0esr",
        "FIREFOX_ESR_NEXT": "",
        "FIREFOX_NIGHTLY": "123.0a1",
    })
}
