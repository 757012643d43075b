//! HTTP fetch error types.

use thiserror::Error;

/// Errors that can occur while fetching a JSON document.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the connection failed.
    #[error("Request to {url} failed: {message}")]
    Network { url: String, message: String },

    /// The server answered with a non-success status.
    #[error("Request to {url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The body was not valid JSON.
    #[error("Response from {url} is not valid JSON: {message}")]
    InvalidJson { url: String, message: String },
}
