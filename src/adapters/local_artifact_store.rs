//! Filesystem adapter for the artifact tree.

use std::fs;
use std::path::Path;

use crate::domain::AppError;
use crate::ports::ArtifactStore;

/// `ArtifactStore` backed by the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalArtifactStore;

impl LocalArtifactStore {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactStore for LocalArtifactStore {
    fn list_subdirs(&self, dir: &Path) -> Result<Vec<String>, AppError> {
        let mut names = Vec::new();
        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            if !entry.file_type()?.is_dir() {
                continue;
            }
            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_string());
            }
        }
        Ok(names)
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn copy_file(&self, from: &Path, to: &Path) -> Result<(), AppError> {
        fs::copy(from, to)?;
        Ok(())
    }
}
