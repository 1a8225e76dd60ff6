//! Formatting functions for console output.
//!
//! Every line here goes to stderr. Stdout is reserved for the `key=value`
//! outputs, which a pipeline may capture when no output file is configured.
//!
//! Colors come from `console`, which drops styling when the output is not a
//! terminal or `NO_COLOR` is set, so CI logs stay readable.

use console::style;

use crate::boundary::BoundaryWarning;
use crate::domain::{Commit, Version};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    eprintln!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    eprintln!("{} {}", style("→").yellow(), message);
}

/// Display a boundary warning to the user.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("⚠ WARNING:").yellow(), warning);
}

pub fn display_current_version(version: &Version) {
    display_status(&format!("Read current version: {}", style(version).green()));
}

/// Shows the first line of the commit that decides the bump.
pub fn display_commit(commit: &Commit) {
    display_status(&format!(
        "Determine new version based on commit: {}",
        style(commit).green()
    ));
}

/// Shows the resulting version, marking whether it is a new release.
pub fn display_new_version(version: &Version, is_new_release: bool) {
    if is_new_release {
        display_success(&format!("New version: {}", style(version).green().bold()));
    } else {
        display_status(&format!("Version unchanged: {}", style(version).green()));
    }
}
