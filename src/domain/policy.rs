//! Monotonic-increase policy for version transitions.
//!
//! A candidate version is compared against the current one component by
//! component, major first. The first component that differs decides the
//! outcome: a lower value rejects, a higher value allows and leaves the
//! remaining components unconstrained. `2.0.0 -> 3.1.9` and `1.9.9 -> 2.0.0`
//! are both allowed, `1.2.3 -> 1.1.9` is rejected at the minor component.

use std::cmp::Ordering;
use std::fmt;

use super::version::Version;

/// Version component named in an ordering violation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Component {
    Major,
    Minor,
    Patch,
}

impl Component {
    pub fn name(&self) -> &'static str {
        match self {
            Component::Major => "major",
            Component::Minor => "minor",
            Component::Patch => "patch",
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The component at which a candidate version fell below the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderingViolation {
    pub component: Component,
    pub current: Version,
    pub candidate: Version,
}

impl OrderingViolation {
    pub fn new(component: Component, current: Version, candidate: Version) -> Self {
        OrderingViolation {
            component,
            current,
            candidate,
        }
    }
}

impl fmt::Display for OrderingViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.component.name();
        let (first, rest) = name.split_at(1);
        write!(
            f,
            "{}{} version number should be greater than or equal to current version ({} -> {}). \
             Use +force to override",
            first.to_ascii_uppercase(),
            rest,
            self.current,
            self.candidate
        )
    }
}

impl std::error::Error for OrderingViolation {}

/// Outcome of checking a version transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateDecision {
    Allowed,
    Rejected(OrderingViolation),
}

impl UpdateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, UpdateDecision::Allowed)
    }

    /// The violation behind a rejection, if any
    pub fn violation(&self) -> Option<&OrderingViolation> {
        match self {
            UpdateDecision::Allowed => None,
            UpdateDecision::Rejected(violation) => Some(violation),
        }
    }
}

/// A single requested transition from `current` to `candidate`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateRequest {
    pub current: Version,
    pub candidate: Version,
    pub force: bool,
}

impl UpdateRequest {
    pub fn new(current: Version, candidate: Version, force: bool) -> Self {
        UpdateRequest {
            current,
            candidate,
            force,
        }
    }

    /// Apply [`validate_transition`] to this request
    pub fn decide(&self) -> UpdateDecision {
        validate_transition(&self.current, &self.candidate, self.force)
    }
}

/// Compare two versions lexicographically by `(major, minor, patch)`
pub fn compare(current: &Version, candidate: &Version) -> Ordering {
    current.cmp(candidate)
}

/// Decide whether `current -> candidate` is permitted.
///
/// With `force` set every transition is allowed. Otherwise the components
/// are checked in order major, minor, patch, and the first decisive one
/// settles the result. Equal versions are allowed.
///
/// # Example
/// ```
/// # use bump_version::domain::{validate_transition, Component, UpdateDecision, Version};
/// let current = Version::new(1, 2, 3);
/// assert!(validate_transition(&current, &Version::new(2, 0, 0), false).is_allowed());
///
/// let decision = validate_transition(&current, &Version::new(1, 1, 9), false);
/// assert_eq!(decision.violation().unwrap().component, Component::Minor);
/// ```
pub fn validate_transition(current: &Version, candidate: &Version, force: bool) -> UpdateDecision {
    if force {
        return UpdateDecision::Allowed;
    }

    let reject = |component| {
        UpdateDecision::Rejected(OrderingViolation::new(component, *current, *candidate))
    };

    if candidate.major < current.major {
        return reject(Component::Major);
    }
    if candidate.major > current.major {
        return UpdateDecision::Allowed;
    }

    if candidate.minor < current.minor {
        return reject(Component::Minor);
    }
    if candidate.minor > current.minor {
        return UpdateDecision::Allowed;
    }

    if candidate.patch < current.patch {
        return reject(Component::Patch);
    }

    UpdateDecision::Allowed
}
