//! Manifest error types.

use thiserror::Error;

/// Errors that can occur while fetching a project's `gluon.json`.
#[derive(Debug, Error)]
pub enum ManifestError {
    /// The manifest couldn't be retrieved (network error or non-2xx status).
    #[error("Manifest unavailable at {url}: {message}")]
    Unavailable { url: String, message: String },

    /// The manifest isn't valid JSON or lacks a required field.
    #[error("Manifest at {url} is malformed: {message}")]
    Malformed { url: String, message: String },
}
