//! Firefox release channels and the product-details feed.

use crate::http::JsonSource;
use crate::versions::VersionError;
use serde::Deserialize;
use std::fmt;
use tracing::debug;

/// A Firefox release train with its own version numbering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum ReleaseChannel {
    #[serde(rename = "firefox")]
    Firefox,
    #[serde(rename = "firefox-beta")]
    FirefoxBeta,
    #[serde(rename = "firefox-dev")]
    FirefoxDev,
    #[serde(rename = "firefox-esr")]
    FirefoxEsr,
    #[serde(rename = "firefox-esr-next")]
    FirefoxEsrNext,
    #[serde(rename = "firefox-nightly")]
    FirefoxNightly,
}

impl ReleaseChannel {
    /// Product name as written in `gluon.json`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Firefox => "firefox",
            Self::FirefoxBeta => "firefox-beta",
            Self::FirefoxDev => "firefox-dev",
            Self::FirefoxEsr => "firefox-esr",
            Self::FirefoxEsrNext => "firefox-esr-next",
            Self::FirefoxNightly => "firefox-nightly",
        }
    }

    /// Key of this channel in the product-details feed.
    #[must_use]
    pub fn feed_key(self) -> &'static str {
        match self {
            Self::Firefox => "LATEST_FIREFOX_VERSION",
            Self::FirefoxBeta => "LATEST_FIREFOX_DEVEL_VERSION",
            Self::FirefoxDev => "FIREFOX_DEVEDITION",
            Self::FirefoxEsr => "FIREFOX_ESR",
            Self::FirefoxEsrNext => "FIREFOX_ESR_NEXT",
            Self::FirefoxNightly => "FIREFOX_NIGHTLY",
        }
    }
}

impl fmt::Display for ReleaseChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returns the latest published version of `channel`.
///
/// # Errors
///
/// Returns [`VersionError::UpstreamUnavailable`] if the feed can't be fetched
/// or has no string value for the channel.
pub async fn resolve_channel_version(
    source: &dyn JsonSource,
    feed_url: &str,
    channel: ReleaseChannel,
) -> Result<String, VersionError> {
    debug!(channel = %channel, "Resolving channel version");

    let feed = source
        .get_json(feed_url)
        .await
        .map_err(|e| VersionError::upstream("product-details", e.to_string()))?;

    feed.get(channel.feed_key())
        .and_then(|v| v.as_str())
        .map(str::to_owned)
        .ok_or_else(|| {
            VersionError::upstream(
                "product-details",
                format!("feed has no version for {}", channel.feed_key()),
            )
        })
}
