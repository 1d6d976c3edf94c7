//! User-facing output.
//!
//! - `formatter` - status, warning and summary lines
//! - This module - multi-line blocks (usage hints, dry-run plan)

use console::style;

use crate::git::CommandLine;

pub mod formatter;

pub use formatter::{
    display_completion, display_error, display_status, display_success,
    display_version_resolution, display_warning,
};

/// Example versions shown with usage errors
pub const USAGE_EXAMPLES: &str = "3.0.0, 3.0.0a6, 3.0.0-alpha.6, 3.0.0-beta.1";

/// Print the usage hint after a usage error.
pub fn display_usage_hint() {
    eprintln!("Usage: tag-release [OPTIONS] <VERSION>");
    eprintln!("Examples: {}", USAGE_EXAMPLES);
    eprintln!("Run with --timestamp to generate a version from the current time.");
}

/// Show the commands a release would run, without running them.
pub fn display_dry_run(manifest: &str, version: &str, commands: &[CommandLine]) {
    println!("\n{}", style("Dry run:").bold());
    println!("  Step 1: set \"version\" in {} to {}", manifest, version);
    for (i, command) in commands.iter().enumerate() {
        println!("  Step {}: {}", i + 2, style(command).cyan());
    }
}
