use crate::error::{BumpError, Result};
use std::fmt;
use std::str::FromStr;

/// Split a version literal into its three digit groups.
///
/// Returns `None` unless `text` is exactly `digits.digits.digits` with ASCII
/// digits only.
fn split_literal(text: &str) -> Option<[&str; 3]> {
    let mut parts = text.split('.');
    let groups = [parts.next()?, parts.next()?, parts.next()?];
    if parts.next().is_some() {
        return None;
    }

    groups
        .iter()
        .all(|group| !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit()))
        .then_some(groups)
}

/// Semantic version representation (`MAJOR.MINOR.PATCH`, numeric only).
///
/// The derived ordering is lexicographic over `(major, minor, patch)`,
/// matching the field declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Version {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl Version {
    /// Create a new version
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Version {
            major,
            minor,
            patch,
        }
    }

    /// Parse a version literal such as `"1.2.3"`.
    ///
    /// Anything other than exactly three dot-separated digit groups is
    /// rejected: signs, whitespace, a `v` prefix, pre-release suffixes and
    /// extra components all yield [`BumpError::InvalidFormat`]. Leading
    /// zeros are accepted and dropped, so `"01.2.3"` parses as `1.2.3`.
    ///
    /// # Example
    /// ```
    /// # use bump_version::domain::Version;
    /// assert_eq!(Version::parse("1.2.3").unwrap(), Version::new(1, 2, 3));
    /// assert!(Version::parse("1.2").is_err());
    /// assert!(Version::parse("v1.2.3").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self> {
        let [major, minor, patch] =
            split_literal(text).ok_or_else(|| BumpError::invalid_format(text))?;

        let component = |group: &str| -> Result<u64> {
            group
                .parse::<u64>()
                .map_err(|_| BumpError::invalid_format(text))
        };

        Ok(Version {
            major: component(major)?,
            minor: component(minor)?,
            patch: component(patch)?,
        })
    }

    /// Whether `text` has the shape of a version literal.
    ///
    /// Only the shape is checked; a literal whose components overflow still
    /// matches here and is rejected later by [`Version::parse`].
    pub fn is_literal(text: &str) -> bool {
        split_literal(text).is_some()
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for Version {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self> {
        Version::parse(s)
    }
}
