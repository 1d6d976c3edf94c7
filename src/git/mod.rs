//! Git command layer
//!
//! Every version-control side effect goes through the `git` executable via a
//! [CommandRunner]. The runner is the seam used by tests:
//!
//! - [runner::SystemRunner]: spawns real processes and waits for them
//! - [mock::RecordingRunner]: records invocations and can simulate failures
//!
//! [GitCli] builds the individual commands of a release (add, commit, tag,
//! push). [repository] uses `git2` to locate the work tree the commands run in.

pub mod mock;
pub mod repository;
pub mod runner;

pub use mock::RecordingRunner;
pub use runner::SystemRunner;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A single external program invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
    /// Extra environment variables for the child process
    pub env: Vec<(String, String)>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandLine {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
            env: Vec::new(),
        }
    }

    pub fn git<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new("git", args)
    }

    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.push((key.into(), value.into()));
        self
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            if arg.is_empty() || arg.contains(char::is_whitespace) {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Runs external commands to completion.
///
/// Implementations must return [crate::error::TagReleaseError::CommandFailed]
/// when the program exits unsuccessfully, so callers can stop at the first
/// failing step.
pub trait CommandRunner: Send + Sync {
    /// Run `command` in `cwd`, blocking until it exits
    fn run(&self, command: &CommandLine, cwd: &Path) -> Result<()>;
}

/// Release steps expressed as `git` invocations
pub struct GitCli<'a, R: CommandRunner + ?Sized> {
    runner: &'a R,
    work_tree: PathBuf,
}

impl<'a, R: CommandRunner + ?Sized> GitCli<'a, R> {
    pub fn new(runner: &'a R, work_tree: impl Into<PathBuf>) -> Self {
        GitCli {
            runner,
            work_tree: work_tree.into(),
        }
    }

    /// `git add <paths...>`
    pub fn stage(&self, paths: &[PathBuf]) -> Result<()> {
        let mut args = vec!["add".to_string()];
        args.extend(paths.iter().map(|p| p.display().to_string()));
        self.git(args)
    }

    /// `git commit -m <message>`
    pub fn commit(&self, message: &str) -> Result<()> {
        self.git(["commit", "-m", message])
    }

    /// `git tag <name>` (lightweight)
    pub fn tag(&self, name: &str) -> Result<()> {
        self.git(["tag", name])
    }

    /// `git push <remote> <refspec>`
    pub fn push(&self, remote: &str, refspec: &str) -> Result<()> {
        self.git(["push", remote, refspec])
    }

    fn git<I, S>(&self, args: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let command = CommandLine::git(args);
        tracing::debug!(%command, cwd = %self.work_tree.display(), "running git");
        self.runner.run(&command, &self.work_tree)
    }
}
