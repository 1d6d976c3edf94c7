use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::{Result, TagReleaseError};
use crate::git::{CommandLine, CommandRunner};

/// Command runner for testing without spawning processes.
///
/// Records every invocation. When a failure trigger is set, the first command
/// whose rendered line starts with it fails (after being recorded) with exit
/// code 1.
#[derive(Debug, Default)]
pub struct RecordingRunner {
    invocations: Mutex<Vec<(CommandLine, PathBuf)>>,
    fail_on: Option<String>,
}

impl RecordingRunner {
    /// Create a runner on which every command succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a runner that fails on commands starting with `prefix`
    /// (e.g. `"git commit"`)
    pub fn failing_on(prefix: impl Into<String>) -> Self {
        RecordingRunner {
            invocations: Mutex::new(Vec::new()),
            fail_on: Some(prefix.into()),
        }
    }

    /// Every command run so far, with its working directory
    pub fn invocations(&self) -> Vec<(CommandLine, PathBuf)> {
        self.lock().clone()
    }

    /// Rendered command lines, in execution order
    pub fn command_lines(&self) -> Vec<String> {
        self.lock().iter().map(|(cmd, _)| cmd.to_string()).collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<(CommandLine, PathBuf)>> {
        self.invocations
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<()> {
        let line = command.to_string();
        self.lock().push((command.clone(), cwd.to_path_buf()));

        match &self.fail_on {
            Some(prefix) if line.starts_with(prefix.as_str()) => {
                Err(TagReleaseError::command_failed(line, Some(1)))
            }
            _ => Ok(()),
        }
    }
}
