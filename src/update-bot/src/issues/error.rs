//! Issue tracker error types.

use thiserror::Error;

/// Errors that can occur during issue operations.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// GitHub API error.
    #[error("GitHub API error: {0}")]
    GitHubError(#[from] octocrab::Error),

    /// The tracker refused a request.
    #[error("Issue {operation} failed: {message}")]
    Rejected {
        operation: &'static str,
        message: String,
    },

    /// Template rendering error.
    #[error("Template rendering error: {0}")]
    TemplateError(String),
}
