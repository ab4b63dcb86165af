//! Git operations abstraction layer
//!
//! The workflow only needs one git operation: record the working tree as a
//! new commit after the manifest has been rewritten. It is expressed by the
//! [`VersionControl`] trait so the workflow can be exercised without a real
//! repository.
//!
//! - [`repository::Git2Repository`]: an opened repository using the `git2` crate
//! - [`repository::RepositoryLocator`]: opens the repository lazily, on first commit
//! - [`mock::MockRepository`]: records commit messages for tests

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::{Git2Repository, RepositoryLocator};

use crate::error::Result;

/// Commit created by [`VersionControl::commit_all`]
#[derive(Debug, Clone, PartialEq)]
pub struct CommitInfo {
    /// The commit hash (full)
    pub hash: String,
    /// The commit message
    pub message: String,
    /// The commit author
    pub author: String,
}

impl CommitInfo {
    /// First seven characters of the hash
    pub fn short_hash(&self) -> &str {
        if self.hash.len() > 7 {
            &self.hash[..7]
        } else {
            &self.hash
        }
    }
}

/// Version-control operations used by the bump workflow
pub trait VersionControl {
    /// Stage every working-tree change and commit it on HEAD.
    ///
    /// Equivalent to `git add -A && git commit -m <message>`: new, modified
    /// and deleted files are all recorded. Ignored files stay out.
    ///
    /// # Arguments
    /// * `message` - Full commit message
    ///
    /// # Returns
    /// * `Ok(CommitInfo)` - The created commit
    /// * `Err` - If there is nothing to commit, no identity is configured,
    ///   or any git operation fails
    fn commit_all(&self, message: &str) -> Result<CommitInfo>;
}
