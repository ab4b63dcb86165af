use std::fmt;

use crate::domain::{OrderingViolation, Version};

/// Non-fatal conditions met while bumping a version.
/// These are reported to the user but never change the exit status.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryWarning {
    /// Requested version equals the one already in the manifest
    UnchangedVersion { version: Version },
    /// `+force` let through a transition the policy would have rejected
    ForcedRegression { violation: OrderingViolation },
    /// Manifest was written but the commit step failed
    CommitFailed { version: Version, reason: String },
    /// Commit was requested during a dry run
    CommitSkippedDryRun,
}

impl fmt::Display for BoundaryWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoundaryWarning::UnchangedVersion { version } => {
                write!(f, "New version {} is the same as the current version", version)
            }
            BoundaryWarning::ForcedRegression { violation } => {
                write!(
                    f,
                    "Forcing {} -> {} despite a {} version regression",
                    violation.current, violation.candidate, violation.component
                )
            }
            BoundaryWarning::CommitFailed { version, reason } => {
                write!(
                    f,
                    "Version {} was written but the git commit failed: {}",
                    version, reason
                )
            }
            BoundaryWarning::CommitSkippedDryRun => {
                write!(f, "Dry run: skipping git commit")
            }
        }
    }
}
