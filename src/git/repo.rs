// SPDX-License-Identifier: MIT

//! Repository operations.

use crate::error::{GitError, RepolintError, Result};
use git2::Repository as Git2Repo;
use std::path::{Path, PathBuf};

/// Wrapper around git2::Repository with the operations the linter needs.
pub struct Repository {
    inner: Git2Repo,
}

impl Repository {
    /// Open a repository from the current directory.
    pub fn open_current() -> Result<Self> {
        let current_dir = std::env::current_dir().map_err(|e| {
            RepolintError::Git(GitError::OpenFailed {
                message: format!("Failed to get current directory: {}", e),
            })
        })?;
        Self::open(&current_dir)
    }

    /// Open a repository from a path, discovering upward.
    pub fn open(path: &Path) -> Result<Self> {
        let repo = Git2Repo::discover(path).map_err(|e| {
            if e.code() == git2::ErrorCode::NotFound {
                RepolintError::Git(GitError::NotARepository)
            } else {
                RepolintError::Git(GitError::OpenFailed {
                    message: e.message().to_string(),
                })
            }
        })?;

        Ok(Self { inner: repo })
    }

    /// Path of the hooks directory.
    pub fn hooks_dir(&self) -> PathBuf {
        self.inner.path().join("hooks")
    }

    /// Get the commit message and SHA for a reference.
    pub fn commit_message(&self, reference: &str) -> Result<(String, String)> {
        let obj = self.inner.revparse_single(reference).map_err(|e| {
            RepolintError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let commit = obj.peel_to_commit().map_err(|e| {
            RepolintError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", reference, e.message()),
            })
        })?;

        let message = commit.message().ok_or_else(|| {
            RepolintError::Git(GitError::InvalidReference {
                reference: format!("{}: Invalid message encoding", reference),
            })
        })?;

        Ok((commit.id().to_string(), message.to_string()))
    }

    /// Get commit SHAs and messages in a `a..b` range, newest first.
    pub fn commits_in_range(&self, range: &str) -> Result<Vec<(String, String)>> {
        let mut revwalk = self.inner.revwalk().map_err(|e| {
            RepolintError::Git(GitError::CommandFailed {
                command: "revwalk".to_string(),
                message: e.message().to_string(),
            })
        })?;

        revwalk.push_range(range).map_err(|e| {
            RepolintError::Git(GitError::InvalidReference {
                reference: format!("{}: {}", range, e.message()),
            })
        })?;

        let mut commits = Vec::new();
        for oid in revwalk {
            let oid = oid.map_err(|e| {
                RepolintError::Git(GitError::CommandFailed {
                    command: "revwalk".to_string(),
                    message: e.message().to_string(),
                })
            })?;

            let commit = self.inner.find_commit(oid).map_err(|e| {
                RepolintError::Git(GitError::InvalidReference {
                    reference: format!("{}: {}", oid, e.message()),
                })
            })?;

            let message = commit.message().unwrap_or_default().to_string();
            commits.push((oid.to_string(), message));
        }

        Ok(commits)
    }
}
