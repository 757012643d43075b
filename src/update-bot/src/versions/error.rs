//! Version lookup error types.

use thiserror::Error;

/// Errors that can occur while looking up the latest published version.
#[derive(Debug, Error)]
pub enum VersionError {
    /// A version authority failed or answered with an unexpected shape.
    #[error("{service} unavailable: {message}")]
    UpstreamUnavailable { service: String, message: String },
}

impl VersionError {
    pub(crate) fn upstream(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable {
            service: service.into(),
            message: message.into(),
        }
    }
}
