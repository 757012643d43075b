//! Bot settings deserialization.

use crate::config::ConfigError;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::debug;
use url::Url;

/// What to do when listing existing tracking issues fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LookupFailurePolicy {
    /// Abort the repository check and report the error.
    #[default]
    Abort,

    /// Treat the failure as "no issue found" and create a new one.
    Create,
}

/// Parsed contents of the optional settings TOML file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Settings {
    /// Login of the account that files and is assigned tracking issues.
    pub bot_user: String,

    /// User-Agent sent with every request.
    pub user_agent: String,

    /// Seconds to wait after each repository.
    pub pacing_secs: u64,

    /// Base URL raw manifests are served from.
    pub manifest_base_url: String,

    /// Product-details feed with the latest version of every release channel.
    pub product_details_url: String,

    /// Base URL of the addons.mozilla.org API.
    pub amo_api_base_url: String,

    /// Behaviour when the issue lookup call fails.
    pub lookup_failure: LookupFailurePolicy,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot_user: "fushra-robot".to_string(),
            user_agent: "pulse-update-checker".to_string(),
            pacing_secs: 30,
            manifest_base_url: "https://raw.githubusercontent.com".to_string(),
            product_details_url: "https://product-details.mozilla.org/1.0/firefox_versions.json"
                .to_string(),
            amo_api_base_url: "https://addons.mozilla.org/api/v4".to_string(),
            lookup_failure: LookupFailurePolicy::default(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file, or returns the defaults when no path is given.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file is missing, unreadable, or fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            debug!("No settings file given, using defaults");
            return Ok(Self::default());
        };

        if !path.exists() {
            return Err(ConfigError::MissingFile {
                path: path.display().to_string(),
            });
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

        let settings: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })?;

        settings.validate(path)?;
        debug!(path = %path.display(), bot_user = %settings.bot_user, "Loaded settings");
        Ok(settings)
    }

    /// Validates the loaded values.
    fn validate(&self, path: &Path) -> Result<(), ConfigError> {
        if self.bot_user.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: "bot-user must not be empty".to_string(),
            });
        }

        for (key, value) in [
            ("manifest-base-url", &self.manifest_base_url),
            ("product-details-url", &self.product_details_url),
            ("amo-api-base-url", &self.amo_api_base_url),
        ] {
            if let Err(e) = Url::parse(value) {
                return Err(ConfigError::ValidationError {
                    path: path.display().to_string(),
                    message: format!("{key} is not a valid URL ({e}): {value}"),
                });
            }
        }

        Ok(())
    }

    /// Delay between two repository checks.
    #[must_use]
    pub fn pacing(&self) -> Duration {
        Duration::from_secs(self.pacing_secs)
    }
}
