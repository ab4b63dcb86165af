//! Main workflow orchestration logic
//!
//! This module contains the bump workflow called by `main.rs`. It reads the
//! manifest, validates the requested transition, writes the new version and
//! optionally commits. It never exits the process; every failure is returned
//! to the caller, which owns the exit code.

use crate::boundary::BoundaryWarning;
use crate::cli::tokens::parse_tokens;
use crate::config::Config;
use crate::domain::{validate_transition, UpdateDecision, UpdateRequest, Version};
use crate::error::{BumpError, Result};
use crate::git::{CommitInfo, VersionControl};
use crate::manifest::ManifestStore;
use crate::ui::{self, Reporter};

/// Arguments for the bump workflow
///
/// Mirrors the CLI Args but in a format suitable for orchestration logic.
/// This decoupling allows the workflow to be called programmatically
/// without depending on clap.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct BumpWorkflowArgs {
    /// Free-form tokens: a version literal, `+force`, `+c`
    pub tokens: Vec<String>,

    /// Skip the monotonic-increase check (same as `+force`)
    pub force: bool,

    /// Commit after writing (same as `+c`)
    pub commit: bool,

    /// Preview mode - validate and report, write nothing
    pub dry_run: bool,
}

impl BumpWorkflowArgs {
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        BumpWorkflowArgs {
            tokens: tokens.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }
}

/// Result of a successful bump workflow
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowResult {
    /// Version found in the manifest
    pub previous: Version,

    /// Version requested
    pub new: Version,

    /// Whether the manifest was rewritten
    pub written: bool,

    /// The commit, if one was requested and succeeded
    pub commit: Option<CommitInfo>,
}

/// The collaborators a bump run works against
pub struct BumpWorkflow<'a> {
    manifest: &'a dyn ManifestStore,
    vcs: &'a dyn VersionControl,
    reporter: &'a dyn Reporter,
}

impl<'a> BumpWorkflow<'a> {
    pub fn new(
        manifest: &'a dyn ManifestStore,
        vcs: &'a dyn VersionControl,
        reporter: &'a dyn Reporter,
    ) -> Self {
        BumpWorkflow {
            manifest,
            vcs,
            reporter,
        }
    }

    /// Run the bump.
    ///
    /// Steps:
    /// 1. Read and validate the current version
    /// 2. Classify the tokens into the new version and flags
    /// 3. Check the transition unless forced
    /// 4. Write the manifest (skipped on dry run)
    /// 5. Commit if requested; a failed commit is only a warning
    ///
    /// Nothing is written unless steps 1-3 succeed.
    pub fn run(&self, args: &BumpWorkflowArgs, config: &Config) -> Result<WorkflowResult> {
        let reporter = self.reporter;
        reporter.header(ui::START_BANNER);

        reporter.status(&format!("Reading version from {}", self.manifest.name()));
        let raw_current = self.manifest.read_version()?;
        let current = Version::parse(&raw_current)?;
        reporter.status(&format!("Current version: {}", current));

        let parsed = parse_tokens(&args.tokens)?;
        let new = parsed.new_version;
        let force = args.force || parsed.force;
        let commit = args.commit || parsed.commit || config.commit.auto;
        reporter.status(&format!("New version: {}", new));

        let request = UpdateRequest::new(current, new, force);
        match request.decide() {
            UpdateDecision::Rejected(violation) => return Err(BumpError::Regression(violation)),
            UpdateDecision::Allowed if force => {
                reporter.status("Force mode enabled");
                if let UpdateDecision::Rejected(violation) =
                    validate_transition(&current, &new, false)
                {
                    reporter.boundary_warning(&BoundaryWarning::ForcedRegression { violation });
                }
            }
            UpdateDecision::Allowed => {}
        }

        if current == new {
            reporter.boundary_warning(&BoundaryWarning::UnchangedVersion { version: new });
        }

        reporter.status(&ui::format_transition(&current, &new));

        if args.dry_run {
            if commit {
                reporter.boundary_warning(&BoundaryWarning::CommitSkippedDryRun);
            }
            reporter.success(&format!(
                "Dry run: {} would be updated to {}",
                self.manifest.name(),
                new
            ));
            return Ok(WorkflowResult {
                previous: current,
                new,
                written: false,
                commit: None,
            });
        }

        reporter.status(&format!("Updating {}", self.manifest.name()));
        self.manifest.write_version(&new.to_string())?;
        reporter.success(&format!("Updated {} to {}", self.manifest.name(), new));

        let commit = if commit {
            self.commit(&config.commit.message, &current, &new)
        } else {
            None
        };

        reporter.header(ui::DONE_BANNER);

        Ok(WorkflowResult {
            previous: current,
            new,
            written: true,
            commit,
        })
    }

    fn commit(&self, template: &str, previous: &Version, new: &Version) -> Option<CommitInfo> {
        self.reporter.status("Creating new git commit...");
        let message = ui::render_commit_message(template, previous, new);

        match self.vcs.commit_all(&message) {
            Ok(info) => {
                self.reporter.success(&format!(
                    "Committed {}: {}",
                    info.short_hash(),
                    info.message
                ));
                Some(info)
            }
            Err(e) => {
                self.reporter.boundary_warning(&BoundaryWarning::CommitFailed {
                    version: *new,
                    reason: e.to_string(),
                });
                None
            }
        }
    }
}
