use std::path::Path;
use std::process::Command;

use crate::error::{Result, TagReleaseError};
use crate::git::{CommandLine, CommandRunner};

/// Runs commands as child processes, inheriting stdout and stderr
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        SystemRunner
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<()> {
        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args).current_dir(cwd);
        for (key, value) in &command.env {
            cmd.env(key, value);
        }

        let status = cmd.status().map_err(|e| {
            tracing::debug!(%command, error = %e, "failed to spawn");
            TagReleaseError::command_failed(command.to_string(), None)
        })?;

        if !status.success() {
            tracing::debug!(%command, code = ?status.code(), "command exited unsuccessfully");
            return Err(TagReleaseError::command_failed(
                command.to_string(),
                status.code(),
            ));
        }

        Ok(())
    }
}
