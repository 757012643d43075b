//! Latest-version lookup for addons.

use crate::config::{InvalidRepositoryId, RepositoryId};
use crate::http::JsonSource;
use crate::manifest::{Addon, AddonDeclaration};
use crate::versions::VersionError;
use async_trait::async_trait;
use std::collections::HashMap;
use tracing::debug;

/// Source of published releases on the code host.
#[async_trait]
pub trait ReleaseSource: Send + Sync {
    /// Returns the tag of the latest published release of `repo`.
    async fn latest_release_tag(&self, repo: &RepositoryId) -> Result<String, VersionError>;
}

/// Resolves the latest version of an addon from its distribution platform.
pub struct VersionResolver<'a> {
    json: &'a dyn JsonSource,
    releases: &'a dyn ReleaseSource,
    amo_api_base_url: &'a str,
}

impl<'a> VersionResolver<'a> {
    /// Creates a resolver over the given sources.
    pub fn new(
        json: &'a dyn JsonSource,
        releases: &'a dyn ReleaseSource,
        amo_api_base_url: &'a str,
    ) -> Self {
        Self {
            json,
            releases,
            amo_api_base_url,
        }
    }

    /// Returns the latest published version of `addon`.
    ///
    /// Fixed-URL addons return their declared version without a network call.
    ///
    /// # Errors
    ///
    /// Returns [`VersionError::UpstreamUnavailable`] if the platform lookup
    /// fails or has no published version, if a GitHub addon's repository is
    /// not in `owner/name` form, or if a fixed-URL addon declares no version.
    pub async fn resolve_latest_version(
        &self,
        addon: &AddonDeclaration,
    ) -> Result<String, VersionError> {
        match addon {
            AddonDeclaration::Github(github) => {
                let repo: RepositoryId = github.repo.parse().map_err(|e: InvalidRepositoryId| {
                    VersionError::upstream("GitHub releases", e.to_string())
                })?;
                self.releases.latest_release_tag(&repo).await
            }
            AddonDeclaration::Amo(amo) => self.latest_amo_version(&amo.amo_id).await,
            AddonDeclaration::Url(url) => url
                .version
                .clone()
                .ok_or_else(|| VersionError::upstream("url", "no declared version")),
        }
    }

    /// Resolves every addon that can drift, in order, keyed by addon name.
    ///
    /// # Errors
    ///
    /// Stops at the first failed lookup.
    pub async fn resolve_addon_versions(
        &self,
        addons: &[Addon],
    ) -> Result<HashMap<String, String>, VersionError> {
        let mut resolved = HashMap::with_capacity(addons.len());

        for addon in addons.iter().filter(|a| !a.declaration.is_fixed()) {
            let latest = self.resolve_latest_version(&addon.declaration).await?;
            debug!(addon = %addon.name, latest = %latest, "Resolved addon version");
            resolved.insert(addon.name.clone(), latest);
        }

        Ok(resolved)
    }

    async fn latest_amo_version(&self, amo_id: &str) -> Result<String, VersionError> {
        let url = amo_versions_url(self.amo_api_base_url, amo_id);

        let listing = self
            .json
            .get_json(&url)
            .await
            .map_err(|e| VersionError::upstream("addons.mozilla.org", e.to_string()))?;

        // Versions are listed newest first.
        listing
            .get("results")
            .and_then(|r| r.get(0))
            .and_then(|v| v.get("version"))
            .and_then(|v| v.as_str())
            .map(str::to_owned)
            .ok_or_else(|| {
                VersionError::upstream(
                    "addons.mozilla.org",
                    format!("no published versions for '{amo_id}'"),
                )
            })
    }
}

/// Builds the AMO version listing URL for an addon.
#[must_use]
pub fn amo_versions_url(base_url: &str, amo_id: &str) -> String {
    format!(
        "{}/addons/addon/{}/versions/",
        base_url.trim_end_matches('/'),
        amo_id
    )
}
