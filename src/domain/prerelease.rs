//! Pre-release markers recognised in version strings
//!
//! Each marker has a semver label (`alpha`, `beta`, `rc`) used after a hyphen,
//! and a PEP 440 short form (`a`, `b`, `rc`) written directly after the patch
//! number.

use std::fmt;

/// Pre-release identifier type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreReleaseType {
    /// Alpha pre-release
    Alpha,
    /// Beta pre-release
    Beta,
    /// Release candidate
    ReleaseCandidate,
}

impl PreReleaseType {
    /// All markers, in release order
    pub const ALL: [PreReleaseType; 3] = [
        PreReleaseType::Alpha,
        PreReleaseType::Beta,
        PreReleaseType::ReleaseCandidate,
    ];

    /// Label used in a semver pre-release segment (`1.0.0-<label>.N`)
    pub fn semver_label(&self) -> &'static str {
        match self {
            PreReleaseType::Alpha => "alpha",
            PreReleaseType::Beta => "beta",
            PreReleaseType::ReleaseCandidate => "rc",
        }
    }

    /// Compact PEP 440 marker (`1.0.0<marker>N`)
    pub fn pep440_marker(&self) -> &'static str {
        match self {
            PreReleaseType::Alpha => "a",
            PreReleaseType::Beta => "b",
            PreReleaseType::ReleaseCandidate => "rc",
        }
    }

    /// Look up a marker by its PEP 440 short form
    pub fn from_pep440_marker(marker: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.pep440_marker() == marker)
    }

    /// The hyphenated segment whose presence marks a pre-release (`-alpha`)
    pub fn segment(&self) -> String {
        format!("-{}", self.semver_label())
    }
}

impl fmt::Display for PreReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.semver_label())
    }
}
