#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod drift;
pub mod github;
pub mod http;
pub mod issues;
pub mod manifest;
pub mod runner;
pub mod summary;
pub mod templates;
pub mod versions;

pub use config::{
    load_repositories, ConfigError, LookupFailurePolicy, RepositoryId, Settings, TrackedRepository,
};
pub use drift::{compute_drift, DriftRecord};
pub use github::GitHubClient;
pub use http::{FetchError, HttpClient, JsonSource};
pub use issues::{
    ensure_tracking_issue, tracking_assignees, update_issue_body, IssueTracker, NewIssue,
    TrackerError,
};
pub use manifest::{fetch_manifest, manifest_url, Addon, AddonDeclaration, Manifest, ManifestError};
pub use runner::{CheckError, Clients, Runner, RunnerConfig, RunnerError};
pub use summary::{CheckOutcome, RunSummary};
pub use templates::{generate_issue_title, TemplateError, TemplateRenderer};
pub use versions::{
    resolve_channel_version, ReleaseChannel, ReleaseSource, VersionError, VersionResolver,
};
