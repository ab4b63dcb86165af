//! Pure formatting functions for UI output.
//!
//! Everything here builds strings; printing is left to the reporters in the
//! parent module so the same text can be captured in tests.

use console::style;

use crate::domain::Version;

/// Banner printed at the start of a run.
pub const START_BANNER: &str = "## Version Updater ##";

/// Banner printed after a successful run.
pub const DONE_BANNER: &str = "## Version updated successfully ##";

/// Format an error line in red.
pub fn format_error(message: &str) -> String {
    format!("{} {}", style("ERROR:").red(), message)
}

/// Format a success line with green checkmark.
pub fn format_success(message: &str) -> String {
    format!("{} {}", style("✓").green(), message)
}

/// Format a status line with yellow arrow.
pub fn format_status(message: &str) -> String {
    format!("{} {}", style("→").yellow(), message)
}

/// Format a warning line.
pub fn format_warning(message: &str) -> String {
    format!("{} {}", style("⚠ WARNING:").yellow(), message)
}

/// Format a bold header line.
pub fn format_header(message: &str) -> String {
    style(message).bold().to_string()
}

/// Describe a pending version change.
///
/// Shows either:
/// - If changing: "From: 1.0.0 -> To: 1.1.0"
/// - If unchanged: "Version: 1.0.0 (unchanged)"
pub fn format_transition(current: &Version, new: &Version) -> String {
    if current == new {
        format!("Version: {} (unchanged)", style(new).cyan())
    } else {
        format!("From: {} -> To: {}", style(current).red(), style(new).green())
    }
}

/// Render a commit message template.
///
/// Supported placeholders are `{version}` and `{previous}`.
pub fn render_commit_message(template: &str, previous: &Version, new: &Version) -> String {
    template
        .replace("{version}", &new.to_string())
        .replace("{previous}", &previous.to_string())
}
