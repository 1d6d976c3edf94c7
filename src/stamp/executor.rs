use std::path::Path;

use crate::config::StampConfig;
use crate::error::{Result, TagReleaseError};
use crate::git::{CommandLine, CommandRunner};
use crate::stamp::StampContext;

/// Runs the configured stamping helper
pub struct StampExecutor;

impl StampExecutor {
    /// Build the helper invocation for a context
    ///
    /// # Returns
    /// * `Ok(None)` if no helper is configured
    /// * `Err` if the command list has an empty program name
    pub fn command_for(config: &StampConfig, context: &StampContext) -> Result<Option<CommandLine>> {
        let Some((program, args)) = config.command.split_first() else {
            return Ok(None);
        };
        if program.trim().is_empty() {
            return Err(TagReleaseError::config("stamp.command has an empty program name"));
        }

        let mut command = CommandLine::new(
            context.expand(program),
            args.iter().map(|arg| context.expand(arg)),
        );
        let mut env: Vec<_> = context.to_env_vars().into_iter().collect();
        env.sort();
        for (key, value) in env {
            command = command.with_env(key, value);
        }
        Ok(Some(command))
    }

    /// Run the helper in `cwd`. A non-zero exit aborts the release.
    ///
    /// # Returns
    /// * `Ok(true)` if the helper ran and succeeded
    /// * `Ok(false)` if no helper is configured
    pub fn execute<R: CommandRunner + ?Sized>(
        config: &StampConfig,
        context: &StampContext,
        runner: &R,
        cwd: &Path,
    ) -> Result<bool> {
        let Some(command) = Self::command_for(config, context)? else {
            return Ok(false);
        };

        tracing::debug!(%command, "running stamp helper");
        runner.run(&command, cwd)?;
        Ok(true)
    }
}
