//! Version-control metadata embedded into builds
//!
//! The script generator takes a [`VcsInfo`] value; where it comes from is
//! decided by a [`VcsInfoProvider`].

use git2::{Repository, StatusOptions};
use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::error::{Result, XilError};
use crate::path_utils::to_forward_slashes;

/// Short commit id plus working-tree state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VcsInfo {
    pub short_id: String,
    pub dirty: bool,
}

impl VcsInfo {
    pub fn new(short_id: impl Into<String>, dirty: bool) -> Self {
        Self {
            short_id: short_id.into(),
            dirty,
        }
    }

    /// Placeholder used when the project is not under version control
    pub fn unversioned() -> Self {
        Self::new("0000000", false)
    }
}

/// Source of version-control metadata
pub trait VcsInfoProvider {
    fn vcs_info(&self) -> Result<VcsInfo>;
}

impl VcsInfoProvider for VcsInfo {
    fn vcs_info(&self) -> Result<VcsInfo> {
        Ok(self.clone())
    }
}

/// Reads HEAD and status of the git repository enclosing a directory
pub struct GitVcsProvider {
    start: PathBuf,
}

impl GitVcsProvider {
    pub fn new(start: impl Into<PathBuf>) -> Self {
        Self {
            start: start.into(),
        }
    }

    fn open(&self) -> Result<Repository> {
        Repository::discover(&self.start).map_err(|_| XilError::NotInGitRepository {
            path: to_forward_slashes(&self.start),
        })
    }
}

impl VcsInfoProvider for GitVcsProvider {
    fn vcs_info(&self) -> Result<VcsInfo> {
        let repo = self.open()?;
        let head = repo.head()?.peel_to_commit()?;
        let short_id = head
            .as_object()
            .short_id()?
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| head.id().to_string()[..7].to_string());

        Ok(VcsInfo {
            short_id,
            dirty: is_dirty(&repo)?,
        })
    }
}

/// Tracked files modified in the index or working tree; untracked files do
/// not count.
fn is_dirty(repo: &Repository) -> Result<bool> {
    let mut opts = StatusOptions::new();
    opts.include_untracked(false).include_ignored(false);
    let statuses = repo.statuses(Some(&mut opts))?;
    Ok(!statuses.is_empty())
}

/// Resolve VCS metadata, falling back to [`VcsInfo::unversioned`] when the
/// provider cannot answer.
pub fn vcs_info_or_unversioned(provider: &dyn VcsInfoProvider, context: &Path) -> VcsInfo {
    match provider.vcs_info() {
        Ok(info) => info,
        Err(e) => {
            log::warn!(
                "no version information for {}: {e}; embedding placeholder commit",
                context.display()
            );
            VcsInfo::unversioned()
        }
    }
}
