//! JSON manifest version field updates
//!
//! The manifest is read whole, the `version` key is replaced in memory, and
//! the document is written back through a temporary file in the same
//! directory that is then renamed over the original. Key order is preserved.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tempfile::NamedTempFile;

use crate::error::{Result, TagReleaseError};

pub const VERSION_KEY: &str = "version";

/// A manifest file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    path: PathBuf,
}

impl Manifest {
    /// Locate a manifest, failing if the file does not exist
    pub fn locate(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(TagReleaseError::ManifestNotFound(path));
        }
        Ok(Manifest { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Replace the `version` field and write the manifest back.
    ///
    /// Returns the previous version string, if there was one.
    pub fn set_version(&self, version: &str) -> Result<Option<String>> {
        let mut document = self.read()?;

        let object = document.as_object_mut().ok_or_else(|| {
            TagReleaseError::manifest(format!(
                "{} does not contain a JSON object",
                self.path.display()
            ))
        })?;
        let previous = object
            .insert(VERSION_KEY.to_string(), Value::String(version.to_string()))
            .and_then(|old| old.as_str().map(str::to_string));

        self.write(&document)?;
        tracing::debug!(
            path = %self.path.display(),
            previous = previous.as_deref().unwrap_or("<none>"),
            version,
            "manifest version updated"
        );
        Ok(previous)
    }

    fn read(&self) -> Result<Value> {
        let contents = fs::read_to_string(&self.path)?;
        serde_json::from_str(&contents).map_err(|e| {
            TagReleaseError::manifest(format!("Cannot parse {}: {}", self.path.display(), e))
        })
    }

    fn write(&self, document: &Value) -> Result<()> {
        let mut rendered = serde_json::to_string_pretty(document)?;
        rendered.push('\n');

        // Replace the link target, not a symlink pointing at it
        let target = fs::canonicalize(&self.path)?;
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let mut staged = NamedTempFile::new_in(dir)?;
        staged.write_all(rendered.as_bytes())?;
        staged.as_file().sync_all()?;
        fs::set_permissions(staged.path(), fs::metadata(&target)?.permissions())?;
        staged
            .persist(&target)
            .map_err(|e| TagReleaseError::Io(e.error))?;
        Ok(())
    }
}
