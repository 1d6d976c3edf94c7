use std::fmt;

use crate::domain::{Channel, ReleaseVersion, VersionSource};

/// Non-fatal issues noticed while preparing a release.
/// These are reported to the user but never stop the release.
#[derive(Debug, Clone, PartialEq)]
pub enum ReleaseWarning {
    /// The version will be published but is not valid semver
    NotSemver { version: String, reason: String },
    /// The manifest already carried this version
    VersionUnchanged { version: String },
}

impl fmt::Display for ReleaseWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReleaseWarning::NotSemver { version, reason } => {
                write!(f, "Version '{}' is not valid semver: {}", version, reason)
            }
            ReleaseWarning::VersionUnchanged { version } => {
                write!(
                    f,
                    "Manifest already at version '{}'; the commit may be empty",
                    version
                )
            }
        }
    }
}

/// Check a resolved version against semver.
///
/// Timestamp versions are four-part by construction and are not checked.
pub fn check_semver(version: &ReleaseVersion, source: VersionSource) -> Option<ReleaseWarning> {
    if source == VersionSource::Timestamp && version.channel == Channel::Release {
        return None;
    }

    semver::Version::parse(&version.version)
        .err()
        .map(|e| ReleaseWarning::NotSemver {
            version: version.version.clone(),
            reason: e.to_string(),
        })
}

/// Warn when the manifest version did not change
pub fn check_unchanged(previous: Option<&str>, version: &str) -> Option<ReleaseWarning> {
    (previous == Some(version)).then(|| ReleaseWarning::VersionUnchanged {
        version: version.to_string(),
    })
}
