use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;

use tag_release::cli::{run_release_workflow, ReleaseWorkflowArgs};
use tag_release::config;
use tag_release::domain::VersionSource;
use tag_release::git::repository::resolve_work_tree;
use tag_release::git::SystemRunner;
use tag_release::ui;
use tag_release::TagReleaseError;

#[derive(clap::Parser)]
#[command(
    name = "tag-release",
    version,
    about = "Set the manifest version, commit, and push a releases/ or pre-releases/ tag"
)]
struct Args {
    #[arg(
        value_name = "VERSION",
        help = "Version to release, e.g. 3.0.0, 3.0.0a6, 3.0.0-beta.1"
    )]
    release_version: Option<String>,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<PathBuf>,

    #[arg(short, long, help = "Manifest file to update (default: package.json)")]
    manifest: Option<PathBuf>,

    #[arg(short, long, help = "Remote to push to (default: origin)")]
    remote: Option<String>,

    #[arg(long, help = "Generate the version from the current time when none is given")]
    timestamp: bool,

    #[arg(long, help = "Do not convert PEP 440 pre-release versions to semver")]
    no_convert: bool,

    #[arg(long, help = "Preview what would happen without making changes")]
    dry_run: bool,

    #[arg(short, long, action = ArgAction::Count, help = "Increase log verbosity")]
    verbose: u8,
}

impl Args {
    fn workflow_args(&self) -> ReleaseWorkflowArgs {
        ReleaseWorkflowArgs {
            version: self.release_version.clone(),
            manifest: self.manifest.clone(),
            remote: self.remote.clone(),
            source: self.timestamp.then_some(VersionSource::Timestamp),
            convert: self.no_convert.then_some(false),
            dry_run: self.dry_run,
        }
    }
}

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(1),
            };
        }
    };

    init_logging(args.verbose);

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            report(&e);
            let code = e
                .downcast_ref::<TagReleaseError>()
                .map(TagReleaseError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code as u8)
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref())?;
    let cwd = std::env::current_dir().context("Cannot determine current directory")?;
    let work_tree = resolve_work_tree(&cwd);

    let workflow_args = args.workflow_args().with_manifest_base(&cwd);
    run_release_workflow(&workflow_args, &config, &SystemRunner::new(), &work_tree)?;
    Ok(())
}

fn report(error: &anyhow::Error) {
    match error.downcast_ref::<TagReleaseError>() {
        Some(TagReleaseError::Usage(msg)) => {
            ui::display_error(msg);
            ui::display_usage_hint();
        }
        Some(TagReleaseError::CommandFailed { command, code }) => {
            let status = code.map_or_else(|| "did not start".to_string(), |c| format!("exit {}", c));
            ui::display_error(&format!("Command failed ({}): {}", status, command));
        }
        Some(other) => ui::display_error(&other.to_string()),
        None => ui::display_error(&format!("{:#}", error)),
    }
}

fn init_logging(verbosity: u8) {
    let default_level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
