use std::cell::RefCell;

use crate::error::{BumpError, Result};
use crate::git::{CommitInfo, VersionControl};

/// Mock repository for testing without actual git operations
#[derive(Debug, Default)]
pub struct MockRepository {
    commits: RefCell<Vec<CommitInfo>>,
    failure: Option<String>,
}

impl MockRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose commits always fail with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        MockRepository {
            commits: RefCell::new(Vec::new()),
            failure: Some(reason.into()),
        }
    }

    /// Commits made so far
    pub fn commits(&self) -> Vec<CommitInfo> {
        self.commits.borrow().clone()
    }

    /// Messages of the commits made so far
    pub fn messages(&self) -> Vec<String> {
        self.commits
            .borrow()
            .iter()
            .map(|commit| commit.message.clone())
            .collect()
    }
}

impl VersionControl for MockRepository {
    fn commit_all(&self, message: &str) -> Result<CommitInfo> {
        if let Some(reason) = &self.failure {
            return Err(BumpError::commit(reason.clone()));
        }

        let mut commits = self.commits.borrow_mut();
        let info = CommitInfo {
            hash: format!("{:040x}", commits.len() + 1),
            message: message.to_string(),
            author: "Mock Author".to_string(),
        };
        commits.push(info.clone());
        Ok(info)
    }
}
