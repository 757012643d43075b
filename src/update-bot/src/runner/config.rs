//! Runner configuration.

use std::path::{Path, PathBuf};

/// Configuration for running the update bot.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the tracked repository list.
    repos_path: PathBuf,
    /// Path to the optional settings file.
    settings_path: Option<PathBuf>,
    /// GitHub token used for API calls.
    token: Option<String>,
    /// Whether to report drift without touching the issue tracker.
    dry_run: bool,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(repos_path: PathBuf, token: Option<String>, dry_run: bool) -> Self {
        Self {
            repos_path,
            settings_path: None,
            token,
            dry_run,
        }
    }

    /// Sets a settings file to load instead of the defaults.
    pub fn with_settings_path(mut self, settings_path: PathBuf) -> Self {
        self.settings_path = Some(settings_path);
        self
    }

    /// Returns the tracked repository list path.
    pub fn repos_path(&self) -> &Path {
        &self.repos_path
    }

    /// Returns the settings file path, if any.
    pub fn settings_path(&self) -> Option<&Path> {
        self.settings_path.as_deref()
    }

    /// Returns the configured GitHub token.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// Returns whether dry-run mode is enabled.
    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}
