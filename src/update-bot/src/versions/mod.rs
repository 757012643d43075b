//! Latest-version lookups against the version authorities.
//!
//! The browser engine version comes from Mozilla's product-details feed;
//! addon versions come from GitHub releases or addons.mozilla.org.

mod channel;
mod error;
mod resolver;

pub use channel::{resolve_channel_version, ReleaseChannel};
pub use error::VersionError;
pub use resolver::{amo_versions_url, ReleaseSource, VersionResolver};
