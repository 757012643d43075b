//! Project manifest retrieval.
//!
//! Every tracked project keeps a `gluon.json` at the root of its branch. The
//! bot reads it straight from the raw content host.

mod error;
mod types;

pub use error::ManifestError;
pub use types::{Addon, AddonDeclaration, AmoAddon, GithubAddon, Manifest, ProductVersion, UrlAddon};

use crate::config::RepositoryId;
use crate::http::{FetchError, JsonSource};
use tracing::debug;

/// File name of the manifest at the branch root.
pub const MANIFEST_FILE: &str = "gluon.json";

/// Builds the raw-content URL of a repository's manifest.
///
/// Format: `{base}/{owner}/{name}/{branch}/gluon.json`
#[must_use]
pub fn manifest_url(base_url: &str, repo: &RepositoryId, branch: &str) -> String {
    format!(
        "{}/{}/{}/{}/{}",
        base_url.trim_end_matches('/'),
        repo.owner,
        repo.name,
        branch,
        MANIFEST_FILE
    )
}

/// Fetches and parses a repository's `gluon.json`.
///
/// # Errors
///
/// Returns [`ManifestError::Unavailable`] if the document can't be retrieved
/// and [`ManifestError::Malformed`] if it isn't JSON or lacks a required field.
pub async fn fetch_manifest(
    source: &dyn JsonSource,
    base_url: &str,
    repo: &RepositoryId,
    branch: &str,
) -> Result<Manifest, ManifestError> {
    let url = manifest_url(base_url, repo, branch);
    debug!(url = %url, "Fetching manifest");

    let value = source.get_json(&url).await.map_err(|e| match e {
        FetchError::InvalidJson { message, .. } => ManifestError::Malformed {
            url: url.clone(),
            message,
        },
        other => ManifestError::Unavailable {
            url: url.clone(),
            message: other.to_string(),
        },
    })?;

    serde_json::from_value(value).map_err(|e| ManifestError::Malformed {
        url,
        message: e.to_string(),
    })
}
