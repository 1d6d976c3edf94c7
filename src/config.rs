use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::tag::{DEFAULT_PRERELEASE_PREFIX, DEFAULT_RELEASE_PREFIX};
use crate::domain::{TagScheme, VersionSource};
use crate::error::{Result, TagReleaseError};

/// File name looked up in the current directory
pub const CONFIG_FILE_NAME: &str = "tagrelease.toml";

/// Represents the complete configuration for tag-release.
///
/// Contains the manifest location, remote, commit message template, version
/// handling, tag namespaces and the optional stamping helper.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_manifest")]
    pub manifest: PathBuf,

    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_commit_message")]
    pub commit_message: String,

    #[serde(default)]
    pub version: VersionConfig,

    #[serde(default)]
    pub tags: TagsConfig,

    #[serde(default)]
    pub stamp: StampConfig,
}

fn default_manifest() -> PathBuf {
    PathBuf::from("package.json")
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_commit_message() -> String {
    "Finalize version: {version}".to_string()
}

fn default_true() -> bool {
    true
}

/// How the release version is obtained and interpreted.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct VersionConfig {
    #[serde(default)]
    pub source: VersionSource,

    /// Rewrite PEP 440 pre-release shorthand (`3.0.0a6`) to semver
    #[serde(default = "default_true")]
    pub convert_pep440: bool,
}

impl Default for VersionConfig {
    fn default() -> Self {
        VersionConfig {
            source: VersionSource::Manual,
            convert_pep440: true,
        }
    }
}

/// Tag namespaces per release channel.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TagsConfig {
    #[serde(default = "default_release_prefix")]
    pub release_prefix: String,

    #[serde(default = "default_prerelease_prefix")]
    pub prerelease_prefix: String,
}

fn default_release_prefix() -> String {
    DEFAULT_RELEASE_PREFIX.to_string()
}

fn default_prerelease_prefix() -> String {
    DEFAULT_PRERELEASE_PREFIX.to_string()
}

impl Default for TagsConfig {
    fn default() -> Self {
        TagsConfig {
            release_prefix: default_release_prefix(),
            prerelease_prefix: default_prerelease_prefix(),
        }
    }
}

impl TagsConfig {
    /// Validated tag scheme for these prefixes
    pub fn scheme(&self) -> Result<TagScheme> {
        TagScheme::new(self.release_prefix.clone(), self.prerelease_prefix.clone())
    }
}

/// Optional helper run after the manifest is updated.
///
/// `command` is an argv list; `{version}`, `{channel}` and `{tag}` are
/// substituted in each argument. `stage` lists extra paths the helper writes
/// that must be committed along with the manifest.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct StampConfig {
    #[serde(default)]
    pub command: Vec<String>,

    #[serde(default)]
    pub stage: Vec<PathBuf>,
}

impl StampConfig {
    pub fn is_enabled(&self) -> bool {
        !self.command.is_empty()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            manifest: default_manifest(),
            remote: default_remote(),
            commit_message: default_commit_message(),
            version: VersionConfig::default(),
            tags: TagsConfig::default(),
            stamp: StampConfig::default(),
        }
    }
}

impl Config {
    /// Commit message for a version, filling the `{version}` placeholder
    pub fn commit_message_for(&self, version: &str) -> String {
        self.commit_message.replace("{version}", version)
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `tagrelease.toml` in current directory
/// 3. `.tagrelease.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let path = match config_path {
        Some(path) => Some(path.to_path_buf()),
        None => discover_config_file(),
    };

    let Some(path) = path else {
        tracing::debug!("no configuration file found, using defaults");
        return Ok(Config::default());
    };

    tracing::debug!(path = %path.display(), "loading configuration");
    let config_str = fs::read_to_string(&path).map_err(|e| {
        TagReleaseError::config(format!("Cannot read {}: {}", path.display(), e))
    })?;

    parse_config(&config_str).map_err(|e| match e {
        TagReleaseError::Config(msg) => {
            TagReleaseError::config(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

/// Parse configuration text and validate the tag namespaces
pub fn parse_config(config_str: &str) -> Result<Config> {
    let config: Config =
        toml::from_str(config_str).map_err(|e| TagReleaseError::config(e.to_string()))?;
    config.tags.scheme()?;
    Ok(config)
}

fn discover_config_file() -> Option<PathBuf> {
    let local = Path::new(".").join(CONFIG_FILE_NAME);
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join(format!(".{}", CONFIG_FILE_NAME));
    user.exists().then_some(user)
}
