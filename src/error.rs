use std::path::PathBuf;

use thiserror::Error;

/// Unified error type for tag-release operations
#[derive(Error, Debug)]
pub enum TagReleaseError {
    #[error("Usage error: {0}")]
    Usage(String),

    #[error("Manifest not found at {}", .0.display())]
    ManifestNotFound(PathBuf),

    #[error("Manifest error: {0}")]
    Manifest(String),

    #[error("Command failed: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Tag error: {0}")]
    Tag(String),

    #[error("Git repository error: {0}")]
    Git(#[from] git2::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in tag-release
pub type Result<T> = std::result::Result<T, TagReleaseError>;

impl TagReleaseError {
    /// Create a usage error with context
    pub fn usage(msg: impl Into<String>) -> Self {
        TagReleaseError::Usage(msg.into())
    }

    /// Create a manifest format error with context
    pub fn manifest(msg: impl Into<String>) -> Self {
        TagReleaseError::Manifest(msg.into())
    }

    /// Create a configuration error with context
    pub fn config(msg: impl Into<String>) -> Self {
        TagReleaseError::Config(msg.into())
    }

    /// Create a tag error with context
    pub fn tag(msg: impl Into<String>) -> Self {
        TagReleaseError::Tag(msg.into())
    }

    /// Record a failed external command together with its exit status
    pub fn command_failed(command: impl Into<String>, code: Option<i32>) -> Self {
        TagReleaseError::CommandFailed {
            command: command.into(),
            code,
        }
    }

    /// Process exit status for this error.
    ///
    /// Every failure terminates with status 1.
    pub fn exit_code(&self) -> i32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TagReleaseError::config("test config issue");
        assert_eq!(err.to_string(), "Configuration error: test config issue");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: TagReleaseError = io_err.into();
        assert!(err.to_string().contains("I/O error"));
    }

    #[test]
    fn test_command_failed_names_command() {
        let err = TagReleaseError::command_failed("git commit -m 'Finalize version: 1.0.0'", Some(1));
        assert_eq!(
            err.to_string(),
            "Command failed: git commit -m 'Finalize version: 1.0.0'"
        );
    }

    #[test]
    fn test_manifest_not_found_shows_path() {
        let err = TagReleaseError::ManifestNotFound(PathBuf::from("/work/package.json"));
        assert_eq!(err.to_string(), "Manifest not found at /work/package.json");
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ not json").unwrap_err();
        let err: TagReleaseError = json_err.into();
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_every_error_exits_with_one() {
        let errors = vec![
            TagReleaseError::usage("missing version"),
            TagReleaseError::ManifestNotFound(PathBuf::from("package.json")),
            TagReleaseError::manifest("root is not an object"),
            TagReleaseError::command_failed("git push origin HEAD", Some(128)),
            TagReleaseError::config("bad"),
            TagReleaseError::tag("bad"),
        ];

        for err in errors {
            assert_eq!(err.exit_code(), 1, "unexpected exit code for {}", err);
        }
    }

    #[test]
    fn test_error_messages_are_descriptive() {
        let error_pairs = vec![
            (TagReleaseError::usage("x"), "Usage error"),
            (TagReleaseError::manifest("x"), "Manifest error"),
            (TagReleaseError::config("x"), "Configuration error"),
            (TagReleaseError::tag("x"), "Tag error"),
        ];

        for (err, expected_prefix) in error_pairs {
            let msg = err.to_string();
            assert!(
                msg.starts_with(expected_prefix),
                "Error message should start with '{}', but got '{}'",
                expected_prefix,
                msg
            );
        }
    }
}
