//! `gluon.json` manifest types.
//!
//! Only the fields the bot reads are modelled; everything else in the
//! document is ignored.

use crate::versions::ReleaseChannel;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// The subset of a project's `gluon.json` the bot cares about.
#[derive(Debug, Clone, Deserialize)]
pub struct Manifest {
    /// Project name, used in the tracking issue title.
    pub name: String,

    /// Firefox release channel and version the project is built on.
    pub version: ProductVersion,

    /// Addons bundled with the project, in document order.
    #[serde(default, deserialize_with = "ordered_addons")]
    pub addons: Vec<Addon>,
}

/// Declared browser engine version.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductVersion {
    /// Release channel the version belongs to.
    pub product: ReleaseChannel,

    /// Declared version string.
    pub version: String,
}

/// A named addon entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Addon {
    /// Key of the entry in the `addons` object.
    pub name: String,

    /// Where the addon is distributed from.
    pub declaration: AddonDeclaration,
}

/// Distribution platform of an addon, tagged by the `platform` field.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "platform", rename_all = "lowercase")]
pub enum AddonDeclaration {
    /// Released through GitHub releases.
    Github(GithubAddon),

    /// Listed on addons.mozilla.org.
    Amo(AmoAddon),

    /// Downloaded from a fixed URL; its version is authoritative.
    Url(UrlAddon),
}

/// Addon released on GitHub.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GithubAddon {
    /// Source repository, expected in `owner/name` form.
    pub repo: String,

    /// Declared release tag.
    pub version: String,
}

/// Addon listed on addons.mozilla.org.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AmoAddon {
    /// AMO slug or numeric id.
    #[serde(deserialize_with = "string_or_number")]
    pub amo_id: String,

    /// Declared version.
    pub version: String,
}

/// Addon pinned to a fixed download URL.
///
/// Nothing in the entry is required since it is never compared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UrlAddon {
    /// Declared version, if any.
    #[serde(default)]
    pub version: Option<String>,
}

impl AddonDeclaration {
    /// The version the manifest currently pins.
    #[must_use]
    pub fn declared_version(&self) -> Option<&str> {
        match self {
            Self::Github(addon) => Some(&addon.version),
            Self::Amo(addon) => Some(&addon.version),
            Self::Url(addon) => addon.version.as_deref(),
        }
    }

    /// Whether the declared version is authoritative and never drifts.
    #[must_use]
    pub fn is_fixed(&self) -> bool {
        matches!(self, Self::Url(_))
    }
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected a string or number, found {other}"
        ))),
    }
}

fn ordered_addons<'de, D>(deserializer: D) -> Result<Vec<Addon>, D::Error>
where
    D: Deserializer<'de>,
{
    // serde_json's `preserve_order` keeps the object in document order.
    let raw = serde_json::Map::<String, Value>::deserialize(deserializer)?;

    raw.into_iter()
        .map(|(name, value)| {
            let declaration = serde_json::from_value(value).map_err(|e| {
                serde::de::Error::custom(format!("addon '{name}': {e}"))
            })?;
            Ok(Addon { name, declaration })
        })
        .collect()
}
