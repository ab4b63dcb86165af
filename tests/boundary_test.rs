use bump_version::boundary::BoundaryWarning;
use bump_version::domain::{validate_transition, Version};
use bump_version::ui::{Level, MemoryReporter, Reporter};

// ============================================================================
// BoundaryWarning Display Tests
// ============================================================================

#[test]
fn test_boundary_warning_unchanged_version_display() {
    let warning = BoundaryWarning::UnchangedVersion {
        version: Version::new(1, 2, 3),
    };

    let display_msg = warning.to_string();
    assert!(
        display_msg.contains("1.2.3"),
        "Message should contain the version, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("same as the current version"),
        "Message should explain the version is unchanged, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_forced_regression_display() {
    let violation = *validate_transition(&Version::new(2, 0, 0), &Version::new(1, 5, 0), false)
        .violation()
        .expect("2.0.0 -> 1.5.0 is a regression");

    let display_msg = BoundaryWarning::ForcedRegression { violation }.to_string();
    assert!(
        display_msg.contains("2.0.0 -> 1.5.0"),
        "Message should show the transition, got: {}",
        display_msg
    );
    assert!(
        display_msg.contains("major"),
        "Message should name the component, got: {}",
        display_msg
    );
}

#[test]
fn test_boundary_warning_commit_failed_display() {
    let warning = BoundaryWarning::CommitFailed {
        version: Version::new(0, 4, 0),
        reason: "nothing to commit".to_string(),
    };

    let display_msg = warning.to_string();
    assert!(display_msg.contains("0.4.0"), "got: {}", display_msg);
    assert!(display_msg.contains("nothing to commit"), "got: {}", display_msg);
}

#[test]
fn test_boundary_warning_commit_skipped_display() {
    assert_eq!(
        BoundaryWarning::CommitSkippedDryRun.to_string(),
        "Dry run: skipping git commit"
    );
}

#[test]
fn test_boundary_warnings_are_reported_as_warnings() {
    let reporter = MemoryReporter::new();
    let warnings = vec![
        BoundaryWarning::UnchangedVersion {
            version: Version::new(1, 0, 0),
        },
        BoundaryWarning::CommitSkippedDryRun,
    ];

    for warning in &warnings {
        reporter.boundary_warning(warning);
    }

    assert_eq!(reporter.at_level(Level::Warning).len(), warnings.len());
    assert!(reporter.at_level(Level::Error).is_empty());
}
