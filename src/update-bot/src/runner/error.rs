//! Runner error types.

use crate::config::ConfigError;
use crate::http::FetchError;
use crate::issues::TrackerError;
use crate::manifest::ManifestError;
use crate::versions::VersionError;

/// Errors that prevent a run from starting.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Repository list or settings loading errors.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// GitHub API client initialization errors.
    #[error(transparent)]
    Octocrab(#[from] octocrab::Error),

    /// HTTP client initialization errors.
    #[error(transparent)]
    Http(#[from] FetchError),
}

/// Errors that abort the check of a single repository.
#[derive(Debug, thiserror::Error)]
pub enum CheckError {
    /// The manifest couldn't be fetched or parsed.
    #[error(transparent)]
    Manifest(#[from] ManifestError),

    /// A version authority failed.
    #[error(transparent)]
    Upstream(#[from] VersionError),

    /// An issue tracker call failed.
    #[error(transparent)]
    Tracker(#[from] TrackerError),
}
