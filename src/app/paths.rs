//! Filesystem locations of one repository's release artifacts.
//!
//! Every location is a projection of the configuration, the repository name and
//! the workflow state handed in by the caller. Nothing is cached: the queue and
//! latest version are read from the state on every call, so two calls may see
//! different results when the provider moves on in between.

use std::path::PathBuf;

use log::warn;

use crate::adapters::BranchConventions;
use crate::domain::{AppError, ManualConvention, ReleaseConfig, Version};
use crate::ports::{ArtifactStore, NamingConventions, WorkflowState};

/// File written into the accepted directory by `download_release_history`.
pub const RELEASE_HISTORY_FILE: &str = "release-history.txt";

/// Sub-locations below the user validations directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationLocation {
    AllVersions,
    NextHotfix,
    NextRelease,
    ValidationFiles,
    SqlUpdates,
    Latest,
}

#[derive(Debug, Clone)]
pub struct PathResolver<N: NamingConventions = BranchConventions> {
    config: ReleaseConfig,
    repo: String,
    conventions: N,
}

impl PathResolver<BranchConventions> {
    pub fn new<S: Into<String>>(config: ReleaseConfig, repo: S) -> Self {
        Self::with_conventions(config, repo, BranchConventions::new())
    }
}

impl<N: NamingConventions> PathResolver<N> {
    pub fn with_conventions<S: Into<String>>(config: ReleaseConfig, repo: S, conventions: N) -> Self {
        Self { config, repo: repo.into(), conventions }
    }

    pub fn config(&self) -> &ReleaseConfig {
        &self.config
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    pub fn conventions(&self) -> &N {
        &self.conventions
    }

    /// `<root_path>/<repo>`
    pub fn repo_root(&self) -> PathBuf {
        self.config.repo.root_path.join(&self.repo)
    }

    /// `<repo_root>/<candidate_subpath>`
    pub fn candidate_root_path(&self) -> PathBuf {
        self.repo_root().join(&self.config.sub_paths.candidate_subpath)
    }

    pub fn release_tools_config_path(&self) -> PathBuf {
        self.repo_root().join(&self.config.sub_paths.release_tools_subpath)
    }

    pub fn confluence_tools_config_path(&self) -> PathBuf {
        self.repo_root().join(&self.config.sub_paths.confluence_tools_subpath)
    }

    pub fn devel_environment_dir(&self) -> PathBuf {
        self.repo_root().join(&self.config.sub_paths.devel_environment_subpath)
    }

    pub fn doc_dir(&self) -> PathBuf {
        self.repo_root().join(&self.config.sub_paths.doc_subpath)
    }

    pub fn doc_metadata_dir(&self) -> PathBuf {
        self.repo_root().join(&self.config.sub_paths.doc_metadata_subpath)
    }

    pub fn user_validations_dir(&self) -> PathBuf {
        self.repo_root().join(&self.config.sub_paths.user_validations_subpath)
    }

    pub fn user_validations_path(&self, location: ValidationLocation) -> PathBuf {
        let paths = &self.config.sub_paths;
        let segment = match location {
            ValidationLocation::AllVersions => &paths.user_validations_all_version_subpath,
            ValidationLocation::NextHotfix => &paths.user_validations_next_hotfix_subpath,
            ValidationLocation::NextRelease => &paths.user_validations_next_release_subpath,
            ValidationLocation::ValidationFiles => &paths.user_validations_validation_files_subpath,
            ValidationLocation::SqlUpdates => &paths.user_validations_sql_updates_subpath,
            ValidationLocation::Latest => &paths.user_validations_latest_subpath,
        };
        self.user_validations_dir().join(segment)
    }

    /// Version of the candidate at the front of the queue.
    pub fn candidate_tag<S: WorkflowState + ?Sized>(&self, state: &S) -> Result<Version, AppError> {
        let branch = state.next_in_queue()?;
        self.conventions.tag_from_branch(&branch)
    }

    /// `<candidate_root>/<front of queue>`
    pub fn current_candidate_dir<S: WorkflowState + ?Sized>(
        &self,
        state: &S,
    ) -> Result<PathBuf, AppError> {
        let branch = state.next_in_queue()?;
        Ok(self.candidate_root_path().join(branch))
    }

    /// Download directory of the latest accepted version.
    ///
    /// Each sub-directory of the candidate root is parsed as a branch identifier
    /// and kept when its version equals the latest version. When several match,
    /// the lexicographically greatest name wins.
    pub fn latest_accepted_candidate_dir<S, F>(&self, state: &S, store: &F) -> Result<PathBuf, AppError>
    where
        S: WorkflowState + ?Sized,
        F: ArtifactStore + ?Sized,
    {
        let latest = state.latest_version()?;
        self.accepted_dir_for(&latest, store)
    }

    /// Manual for the pending candidate: `<current_candidate_dir>/<repo>-user-manual-<version>.pdf`.
    pub fn user_manual_download_path<S: WorkflowState + ?Sized>(
        &self,
        state: &S,
    ) -> Result<PathBuf, AppError> {
        let branch = state.next_in_queue()?;
        let version = self.conventions.tag_from_branch(&branch)?;
        let file_name = ManualConvention::Candidate.file_name(&self.repo, &version);
        Ok(self.candidate_root_path().join(branch).join(file_name))
    }

    /// Manual of the latest accepted release: `<accepted_dir>/<repo>-user-manual-v<version>.pdf`.
    pub fn user_manual_path_previous<S, F>(&self, state: &S, store: &F) -> Result<PathBuf, AppError>
    where
        S: WorkflowState + ?Sized,
        F: ArtifactStore + ?Sized,
    {
        let latest = state.latest_version()?;
        let dir = self.accepted_dir_for(&latest, store)?;
        Ok(dir.join(ManualConvention::Accepted.file_name(&self.repo, &latest)))
    }

    /// `<accepted_dir>/release-history.txt`
    pub fn release_history_path<S, F>(&self, state: &S, store: &F) -> Result<PathBuf, AppError>
    where
        S: WorkflowState + ?Sized,
        F: ArtifactStore + ?Sized,
    {
        Ok(self.latest_accepted_candidate_dir(state, store)?.join(RELEASE_HISTORY_FILE))
    }

    fn accepted_dir_for<F: ArtifactStore + ?Sized>(
        &self,
        version: &Version,
        store: &F,
    ) -> Result<PathBuf, AppError> {
        let root = self.candidate_root_path();
        let not_found =
            || AppError::DirectoryNotFound { version: version.to_string(), root: root.clone() };

        if !store.exists(&root) {
            return Err(not_found());
        }

        let mut matches: Vec<String> = store
            .list_subdirs(&root)?
            .into_iter()
            .filter(|name| {
                self.conventions.parse_branch(name).is_some_and(|id| id.version() == version)
            })
            .collect();
        matches.sort();

        if matches.len() > 1 {
            warn!(
                "Several download directories match version {} under {}: {}; using the last one",
                version,
                root.display(),
                matches.join(", ")
            );
        }

        match matches.pop() {
            Some(name) => Ok(root.join(name)),
            None => Err(not_found()),
        }
    }
}
