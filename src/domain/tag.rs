use std::fmt;

use crate::domain::version::{Channel, ReleaseVersion};
use crate::error::{Result, TagReleaseError};

pub const DEFAULT_RELEASE_PREFIX: &str = "releases/";
pub const DEFAULT_PRERELEASE_PREFIX: &str = "pre-releases/";

/// Represents a git tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    pub name: String,
}

impl Tag {
    /// Create a new tag from a string
    pub fn new(name: impl Into<String>) -> Self {
        Tag { name: name.into() }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Tag namespaces for the two release channels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagScheme {
    pub release_prefix: String,
    pub prerelease_prefix: String,
}

impl TagScheme {
    /// Create a scheme, rejecting empty or identical prefixes
    pub fn new(release_prefix: impl Into<String>, prerelease_prefix: impl Into<String>) -> Result<Self> {
        let release_prefix = release_prefix.into();
        let prerelease_prefix = prerelease_prefix.into();

        if release_prefix.trim().is_empty() || prerelease_prefix.trim().is_empty() {
            return Err(TagReleaseError::tag("Tag prefixes must not be empty"));
        }
        if release_prefix == prerelease_prefix {
            return Err(TagReleaseError::tag(format!(
                "Release and pre-release prefixes must differ (both '{}')",
                release_prefix
            )));
        }

        Ok(TagScheme {
            release_prefix,
            prerelease_prefix,
        })
    }

    /// Prefix used for a channel
    pub fn prefix(&self, channel: Channel) -> &str {
        match channel {
            Channel::Release => &self.release_prefix,
            Channel::PreRelease => &self.prerelease_prefix,
        }
    }

    /// Tag name for a resolved version
    /// Example: "3.0.0-alpha.6" -> "pre-releases/3.0.0-alpha.6"
    pub fn tag_for(&self, version: &ReleaseVersion) -> Tag {
        Tag::new(format!("{}{}", self.prefix(version.channel), version.version))
    }
}

impl Default for TagScheme {
    fn default() -> Self {
        TagScheme {
            release_prefix: DEFAULT_RELEASE_PREFIX.to_string(),
            prerelease_prefix: DEFAULT_PRERELEASE_PREFIX.to_string(),
        }
    }
}
