//! Tracked repository definitions.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when a repository identifier is not in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid repository identifier '{0}', expected 'owner/name'")]
pub struct InvalidRepositoryId(pub String);

/// A GitHub repository identifier in `owner/name` form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct RepositoryId {
    /// Repository owner (user or organization).
    pub owner: String,

    /// Repository name.
    pub name: String,
}

impl RepositoryId {
    /// Creates an identifier from its parts.
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }
}

impl FromStr for RepositoryId {
    type Err = InvalidRepositoryId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((owner, name))
                if !owner.is_empty() && !name.is_empty() && !name.contains('/') =>
            {
                Ok(Self::new(owner, name))
            }
            _ => Err(InvalidRepositoryId(s.to_string())),
        }
    }
}

impl TryFrom<String> for RepositoryId {
    type Error = InvalidRepositoryId;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for RepositoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// A repository whose `gluon.json` is checked on every run.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedRepository {
    /// Display name, used in logs.
    pub name: String,

    /// Repository holding both the manifest and the tracking issue.
    pub repo: RepositoryId,

    /// Branch the manifest is read from.
    pub branch: String,

    /// Users assigned to a newly created tracking issue.
    #[serde(default)]
    pub assigned_users: Vec<String>,

    /// Label used to find and tag the tracking issue.
    pub issue_label: String,
}
