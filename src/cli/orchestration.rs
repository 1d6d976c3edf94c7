//! Release workflow orchestration
//!
//! Runs the release as a fixed sequence of steps and stops at the first one
//! that fails. Nothing already done (manifest write, commit, local tag) is
//! rolled back.

use std::path::{Path, PathBuf};

use crate::boundary;
use crate::config::Config;
use crate::domain::timestamp::current_timestamp_version;
use crate::domain::{ReleaseVersion, Tag, VersionSource};
use crate::error::{Result, TagReleaseError};
use crate::git::{CommandRunner, GitCli, RecordingRunner};
use crate::manifest::Manifest;
use crate::stamp::{StampContext, StampExecutor};
use crate::ui;

/// Arguments for the release workflow
///
/// Mirrors the CLI arguments so the workflow can be driven without clap.
/// `None` fields fall back to the configuration file.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ReleaseWorkflowArgs {
    /// Explicit version; generated from the clock when omitted in timestamp mode
    pub version: Option<String>,

    /// Manifest path override
    pub manifest: Option<PathBuf>,

    /// Remote override
    pub remote: Option<String>,

    /// Version source override
    pub source: Option<VersionSource>,

    /// PEP 440 conversion override
    pub convert: Option<bool>,

    /// Print the planned commands instead of running them
    pub dry_run: bool,
}

impl ReleaseWorkflowArgs {
    /// Anchor a relative manifest override at `base`.
    ///
    /// A path typed on the command line refers to the caller's directory,
    /// while the configured default is relative to the work-tree root.
    pub fn with_manifest_base(mut self, base: &Path) -> Self {
        if let Some(path) = self.manifest.as_mut() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }
}

/// Result of a successful release workflow
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOutcome {
    pub version: ReleaseVersion,
    pub tag: Tag,
    pub manifest: PathBuf,
    /// False for dry runs
    pub published: bool,
}

/// Determine the version to release.
///
/// An explicit version always wins. Without one, timestamp mode generates a
/// version from the current local time and manual mode is a usage error.
/// Generated versions are never PEP 440 converted.
pub fn resolve_version(args: &ReleaseWorkflowArgs, config: &Config) -> Result<ReleaseVersion> {
    let source = args.source.unwrap_or(config.version.source);
    let convert = args.convert.unwrap_or(config.version.convert_pep440);

    match (&args.version, source) {
        (Some(input), _) if input.is_empty() => {
            Err(TagReleaseError::usage("Version must not be empty"))
        }
        (Some(input), _) => Ok(ReleaseVersion::resolve(input, convert)),
        (None, VersionSource::Timestamp) => {
            Ok(ReleaseVersion::resolve(&current_timestamp_version(), false))
        }
        (None, VersionSource::Manual) => Err(TagReleaseError::usage(
            "Expected exactly one version argument",
        )),
    }
}

/// Manifest location: CLI override, then config. Relative paths that are
/// still relative here resolve against the work tree.
pub fn resolve_manifest_path(args: &ReleaseWorkflowArgs, config: &Config, work_tree: &Path) -> PathBuf {
    let path = args.manifest.as_deref().unwrap_or(&config.manifest);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        work_tree.join(path)
    }
}

/// Main release workflow
///
/// 1. Resolve, normalize and classify the version; derive the tag
/// 2. Check the manifest exists
/// 3. Write the new version into the manifest
/// 4. Run the stamping helper, if configured
/// 5. Stage, commit, tag, push HEAD, push tag
///
/// All commands run in `work_tree` through `runner`.
pub fn run_release_workflow<R: CommandRunner + ?Sized>(
    args: &ReleaseWorkflowArgs,
    config: &Config,
    runner: &R,
    work_tree: &Path,
) -> Result<ReleaseOutcome> {
    let scheme = config.tags.scheme()?;
    let version = resolve_version(args, config)?;
    let tag = scheme.tag_for(&version);

    ui::display_version_resolution(&version, &tag.name);
    let source = args.source.unwrap_or(config.version.source);
    if let Some(warning) = boundary::check_semver(&version, source) {
        ui::display_warning(&warning);
    }

    let manifest = Manifest::locate(resolve_manifest_path(args, config, work_tree))?;
    let manifest_label = display_path(manifest.path(), work_tree);
    let remote = args.remote.as_deref().unwrap_or(&config.remote);
    let context = StampContext::new(&version, &tag);
    let stage = stage_paths(&manifest, config, work_tree);

    if args.dry_run {
        let recorder = RecordingRunner::new();
        StampExecutor::execute(&config.stamp, &context, &recorder, work_tree)?;
        publish(&GitCli::new(&recorder, work_tree), config, &version, &tag, remote, &stage)?;
        let planned: Vec<_> = recorder.invocations().into_iter().map(|(cmd, _)| cmd).collect();
        ui::display_dry_run(&manifest_label, &version.version, &planned);

        return Ok(ReleaseOutcome {
            version,
            tag,
            manifest: manifest.path().to_path_buf(),
            published: false,
        });
    }

    ui::display_status(&format!(
        "Updating {} version to {}...",
        manifest_label, version.version
    ));
    let previous = manifest.set_version(&version.version)?;
    if let Some(warning) = boundary::check_unchanged(previous.as_deref(), &version.version) {
        ui::display_warning(&warning);
    }

    if config.stamp.is_enabled() {
        ui::display_status("Running stamping helper...");
        StampExecutor::execute(&config.stamp, &context, runner, work_tree)?;
        ui::display_success("Stamping helper finished");
    }

    publish(&GitCli::new(runner, work_tree), config, &version, &tag, remote, &stage)?;

    ui::display_completion(&tag.name, &version.version);
    Ok(ReleaseOutcome {
        version,
        tag,
        manifest: manifest.path().to_path_buf(),
        published: true,
    })
}

fn publish<R: CommandRunner + ?Sized>(
    git: &GitCli<'_, R>,
    config: &Config,
    version: &ReleaseVersion,
    tag: &Tag,
    remote: &str,
    stage: &[PathBuf],
) -> Result<()> {
    tracing::info!(version = %version, tag = %tag, remote, "publishing release");

    git.stage(stage)?;
    git.commit(&config.commit_message_for(&version.version))?;
    git.tag(&tag.name)?;
    git.push(remote, "HEAD")?;
    git.push(remote, &tag.name)?;
    Ok(())
}

fn stage_paths(manifest: &Manifest, config: &Config, work_tree: &Path) -> Vec<PathBuf> {
    let mut paths = vec![relative_to(manifest.path(), work_tree)];
    paths.extend(config.stamp.stage.iter().cloned());
    paths
}

fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}

fn display_path(path: &Path, base: &Path) -> String {
    relative_to(path, base).display().to_string()
}
