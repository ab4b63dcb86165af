use crate::error::{BumpError, Result};
use crate::git::{CommitInfo, VersionControl};
use git2::{ErrorCode, IndexAddOption, Repository as Git2Repo, RepositoryOpenFlags};
use std::env;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with our trait interface
pub struct Git2Repository {
    repo: Git2Repo,
}

impl Git2Repository {
    /// Open or discover a git repository, stopping at `GIT_CEILING_DIRECTORIES`
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_ceilings(path, env_ceiling_dirs())
    }

    /// Discover a repository upwards from `path` without searching at or
    /// above any of `ceilings`
    pub fn open_with_ceilings<P, I>(path: P, ceilings: I) -> Result<Self>
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = PathBuf>,
    {
        let repo = Git2Repo::open_ext(path, RepositoryOpenFlags::empty(), ceilings)?;

        Ok(Git2Repository { repo })
    }

    /// Create from existing git2::Repository
    pub fn from_git2(repo: Git2Repo) -> Self {
        Git2Repository { repo }
    }

    /// Current HEAD commit, or `None` on an unborn branch
    fn head_commit(&self) -> Result<Option<git2::Commit<'_>>> {
        match self.repo.head() {
            Ok(head) => Ok(Some(head.peel_to_commit()?)),
            Err(e) if e.code() == ErrorCode::UnbornBranch || e.code() == ErrorCode::NotFound => {
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

impl VersionControl for Git2Repository {
    fn commit_all(&self, message: &str) -> Result<CommitInfo> {
        let mut index = self.repo.index()?;

        // add_all picks up new and modified files, update_all removals
        index.add_all(["*"].iter(), IndexAddOption::DEFAULT, None)?;
        index.update_all(["*"].iter(), None)?;
        index.write()?;

        let tree_id = index.write_tree()?;
        let parent = self.head_commit()?;

        if let Some(parent) = &parent {
            if parent.tree_id() == tree_id {
                return Err(BumpError::commit("nothing to commit, working tree clean"));
            }
        }

        let tree = self.repo.find_tree(tree_id)?;
        let signature = self.repo.signature().map_err(|e| {
            BumpError::commit(format!("No git identity configured: {}", e.message()))
        })?;
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();

        let oid = self.repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;

        Ok(CommitInfo {
            hash: oid.to_string(),
            message: message.to_string(),
            author: signature.name().unwrap_or("unknown").to_string(),
        })
    }
}

fn env_ceiling_dirs() -> Vec<PathBuf> {
    env::var_os("GIT_CEILING_DIRECTORIES")
        .map(|value| env::split_paths(&value).collect())
        .unwrap_or_default()
}

/// Finds the repository containing a directory when a commit is requested.
///
/// Runs that never commit never touch git, so a manifest outside any
/// repository is only an error if `+c` is given.
#[derive(Debug, Clone, PartialEq)]
pub struct RepositoryLocator {
    start: PathBuf,
    ceilings: Vec<PathBuf>,
}

impl RepositoryLocator {
    pub fn new(start: impl Into<PathBuf>) -> Self {
        RepositoryLocator {
            start: start.into(),
            ceilings: Vec::new(),
        }
    }

    /// Never search `dir` or its ancestors, in addition to `GIT_CEILING_DIRECTORIES`
    pub fn with_ceiling(mut self, dir: impl Into<PathBuf>) -> Self {
        self.ceilings.push(dir.into());
        self
    }
}

impl VersionControl for RepositoryLocator {
    fn commit_all(&self, message: &str) -> Result<CommitInfo> {
        let ceilings = env_ceiling_dirs().into_iter().chain(self.ceilings.iter().cloned());
        let repo = Git2Repository::open_with_ceilings(&self.start, ceilings).map_err(|e| {
            BumpError::commit(format!(
                "Not in a git repository ({}): {}",
                self.start.display(),
                e
            ))
        })?;
        repo.commit_all(message)
    }
}
