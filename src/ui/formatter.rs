//! Formatting functions for status output.
//!
//! Message text is built by the `*_message` functions so it can be tested
//! without capturing stdout; the `display_*` functions add colour and print.

use console::style;

use crate::boundary::ReleaseWarning;
use crate::domain::ReleaseVersion;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display a release warning to the user.
pub fn display_warning(warning: &ReleaseWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

pub fn conversion_message(version: &ReleaseVersion) -> Option<String> {
    version.converted().then(|| {
        format!(
            "Converted PEP 440 -> semver: {} -> {}",
            version.input, version.version
        )
    })
}

pub fn channel_message(version: &ReleaseVersion) -> String {
    if version.channel.is_prerelease() {
        format!("Pre-release version detected: {}", version.version)
    } else {
        format!("Release version detected: {}", version.version)
    }
}

/// Display how the input version was interpreted.
///
/// Shows the PEP 440 conversion (only when one happened), the detected
/// channel, and the tag that will be created.
pub fn display_version_resolution(version: &ReleaseVersion, tag: &str) {
    if let Some(message) = conversion_message(version) {
        display_status(&message);
    }
    display_status(&channel_message(version));
    display_status(&format!("Tag: {}", style(tag).cyan()));
}

/// Display the final summary after the tag was pushed.
pub fn display_completion(tag: &str, version: &str) {
    println!(
        "\n{} Tagged and pushed {}",
        style("✓").green(),
        style(tag).bold()
    );
    println!(
        "\nVersion {} will be built and released automatically.",
        version
    );
}
