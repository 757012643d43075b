//! Comparison of declared and latest versions.

use crate::manifest::Manifest;
use serde::Serialize;
use std::collections::HashMap;

/// Name used for the browser engine in drift reports.
pub const ENGINE_DEPENDENCY: &str = "firefox";

/// A dependency whose declared version is behind the latest one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriftRecord {
    /// Dependency name (`firefox` or the addon key).
    pub name: String,

    /// Version declared in the manifest.
    #[serde(rename = "old")]
    pub previous: String,

    /// Latest published version.
    #[serde(rename = "new")]
    pub latest: String,
}

impl DriftRecord {
    /// Creates a drift record.
    pub fn new(
        name: impl Into<String>,
        previous: impl Into<String>,
        latest: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            previous: previous.into(),
            latest: latest.into(),
        }
    }
}

/// Lists every outdated dependency of `manifest`.
///
/// The engine record comes first, followed by addons in manifest order.
/// Fixed-URL addons and addons without a resolved version are never reported.
#[must_use]
pub fn compute_drift(
    manifest: &Manifest,
    latest_channel_version: &str,
    resolved_addon_versions: &HashMap<String, String>,
) -> Vec<DriftRecord> {
    let mut drift = Vec::new();

    if manifest.version.version != latest_channel_version {
        drift.push(DriftRecord::new(
            ENGINE_DEPENDENCY,
            &manifest.version.version,
            latest_channel_version,
        ));
    }

    for addon in &manifest.addons {
        if addon.declaration.is_fixed() {
            continue;
        }

        let Some(latest) = resolved_addon_versions.get(&addon.name) else {
            continue;
        };

        let Some(declared) = addon.declaration.declared_version() else {
            continue;
        };

        if declared != latest {
            drift.push(DriftRecord::new(&addon.name, declared, latest));
        }
    }

    drift
}
