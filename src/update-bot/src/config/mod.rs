//! Configuration loading.
//!
//! This module handles parsing the tracked repository list (`repos.json`)
//! and the optional bot settings file.

mod error;
mod repository;
mod settings;

pub use error::ConfigError;
pub use repository::{InvalidRepositoryId, RepositoryId, TrackedRepository};
pub use settings::{LookupFailurePolicy, Settings};

use std::path::Path;
use tracing::info;

/// Loads the ordered list of tracked repositories.
///
/// The file is a JSON array:
/// ```text
/// [
///   {
///     "name": "Pulse Browser",
///     "repo": "pulse-browser/browser",
///     "branch": "alpha",
///     "assignedUsers": ["trickypr"],
///     "issueLabel": "upstream"
///   }
/// ]
/// ```
///
/// # Errors
///
/// Returns an error if the file doesn't exist, can't be parsed, or an entry
/// has an empty branch or issue label.
pub fn load_repositories(path: &Path) -> Result<Vec<TrackedRepository>, ConfigError> {
    info!(path = %path.display(), "Loading tracked repositories");

    if !path.exists() {
        return Err(ConfigError::MissingFile {
            path: path.display().to_string(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
        path: path.display().to_string(),
        source: e,
    })?;

    let repositories: Vec<TrackedRepository> =
        serde_json::from_str(&content).map_err(|e| ConfigError::JsonError {
            path: path.display().to_string(),
            source: e,
        })?;

    for repository in &repositories {
        let missing = if repository.branch.trim().is_empty() {
            Some("branch")
        } else if repository.issue_label.trim().is_empty() {
            Some("issueLabel")
        } else {
            None
        };

        if let Some(field) = missing {
            return Err(ConfigError::ValidationError {
                path: path.display().to_string(),
                message: format!("{} has an empty {field}", repository.repo),
            });
        }
    }

    info!(count = repositories.len(), "Loaded tracked repositories");
    Ok(repositories)
}
