//! Version-control workflow provider port.
//!
//! The provider owns the release queue, version arithmetic and the remote side
//! of every lifecycle transition. Queue and version are read fresh on every
//! call; nothing here caches provider state.

use std::path::{Path, PathBuf};

use crate::domain::{AppError, Version};

pub trait ReleaseProvider {
    /// Branch identifiers awaiting release, front first.
    fn queue(&self) -> Result<Vec<String>, AppError>;

    /// Version of the most recently accepted release.
    fn latest_version(&self) -> Result<Version, AppError>;

    /// Cut a new release branch. Returns the created branch identifier.
    fn create_release_candidate(&self, major_increment: bool) -> Result<String, AppError>;

    /// Cut a hotfix branch against the latest accepted version.
    fn create_hotfix(&self) -> Result<String, AppError>;

    /// Download the artifacts of the front of the queue below `path`.
    ///
    /// The provider picks the sub-directory name. An existing download is kept
    /// unless `force` is set. Returns the candidate directory.
    fn download_next_in_queue(&self, path: &Path, force: bool) -> Result<PathBuf, AppError>;

    /// Promote the front of the queue to an accepted release.
    fn accept_release_candidate(&self, force: bool) -> Result<Version, AppError>;

    /// Write the release history to `path`.
    fn download_release_history(&self, path: &Path) -> Result<(), AppError>;
}
