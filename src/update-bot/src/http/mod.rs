//! Plain HTTP access for the manifest host, the product-details feed and the
//! addon registry.

mod error;

pub use error::FetchError;

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Default timeout for HTTP requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of JSON documents addressed by URL.
#[async_trait]
pub trait JsonSource: Send + Sync {
    /// Fetches `url` and parses the body as JSON.
    async fn get_json(&self, url: &str) -> Result<Value, FetchError>;
}

/// [`JsonSource`] backed by a reqwest client.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a client that identifies itself with `user_agent`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Network`] if the underlying client can't be built.
    pub fn new(user_agent: &str) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(DEFAULT_TIMEOUT)
            .user_agent(user_agent)
            .build()
            .map_err(|e| FetchError::Network {
                url: String::new(),
                message: format!("failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client })
    }
}

#[async_trait]
impl JsonSource for HttpClient {
    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        debug!(url, "GET");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                FetchError::InvalidJson {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            } else {
                FetchError::Network {
                    url: url.to_string(),
                    message: e.to_string(),
                }
            }
        })
    }
}

