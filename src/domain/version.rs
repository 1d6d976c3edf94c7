//! Version normalization and release-channel classification
//!
//! Accepts semver-style versions (`3.0.0`, `3.0.0-beta.1`) and the compact
//! PEP 440 pre-release forms (`3.0.0a6`, `3.0.0b1`, `3.0.0rc2`). The PEP 440
//! forms are rewritten to semver; everything else passes through untouched.

use std::borrow::Cow;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::prerelease::PreReleaseType;

/// `MAJOR.MINOR.PATCH` immediately followed by `a`, `b` or `rc` and a number
static PEP440_PRERELEASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+\.\d+\.\d+)(a|b|rc)(\d+)$").expect("PEP 440 pattern is valid")
});

/// Release channel a version is published on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Release,
    PreRelease,
}

impl Channel {
    pub fn is_prerelease(&self) -> bool {
        matches!(self, Channel::PreRelease)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Channel::Release => "release",
            Channel::PreRelease => "pre-release",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rewrite a PEP 440 pre-release shorthand into semver form.
///
/// `3.0.0a6` -> `3.0.0-alpha.6`, `3.0.0b1` -> `3.0.0-beta.1`,
/// `3.0.0rc2` -> `3.0.0-rc.2`. Any other input is returned unchanged, which
/// makes the function idempotent.
pub fn normalize(input: &str) -> Cow<'_, str> {
    let Some(caps) = PEP440_PRERELEASE.captures(input) else {
        return Cow::Borrowed(input);
    };

    // The alternation only admits known markers
    match PreReleaseType::from_pep440_marker(&caps[2]) {
        Some(kind) => Cow::Owned(format!("{}-{}.{}", &caps[1], kind.semver_label(), &caps[3])),
        None => Cow::Borrowed(input),
    }
}

/// Classify an (already normalized) version string.
///
/// Any `-alpha`, `-beta` or `-rc` segment marks a pre-release.
pub fn classify(version: &str) -> Channel {
    let is_prerelease = PreReleaseType::ALL
        .iter()
        .any(|kind| version.contains(&kind.segment()));

    if is_prerelease {
        Channel::PreRelease
    } else {
        Channel::Release
    }
}

/// A version as supplied, its canonical form, and the channel it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseVersion {
    pub input: String,
    pub version: String,
    pub channel: Channel,
}

impl ReleaseVersion {
    /// Normalize (when `convert` is set) and classify `input`.
    pub fn resolve(input: &str, convert: bool) -> Self {
        let version = if convert {
            normalize(input).into_owned()
        } else {
            input.to_string()
        };
        let channel = classify(&version);

        ReleaseVersion {
            input: input.to_string(),
            version,
            channel,
        }
    }

    /// Whether normalization rewrote the input
    pub fn converted(&self) -> bool {
        self.input != self.version
    }
}

impl fmt::Display for ReleaseVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.version)
    }
}
