//! Filesystem operations on the artifact tree.

use std::path::Path;

use crate::domain::AppError;

/// Port for the filesystem primitives the release workflow consumes.
///
/// Paths are absolute; the artifact tree lives outside any repository checkout.
pub trait ArtifactStore {
    /// Names of the sub-directories of `dir`. Plain files are skipped.
    fn list_subdirs(&self, dir: &Path) -> Result<Vec<String>, AppError>;

    /// Check whether a file or directory exists.
    fn exists(&self, path: &Path) -> bool;

    /// Copy a file, overwriting the destination.
    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError>;
}
