//! Release candidate lifecycle.
//!
//! ```text
//! NoCandidate --create_cand/create_hotfix--> Queued
//! Queued --download--> Downloaded
//! Downloaded --accept--> Accepted
//! Accepted --download_release_history--> HistoryRecorded
//! Accepted/HistoryRecorded --generate_user_manual | copy_previous_user_manual--> ManualReady
//! ```
//!
//! Transitions are invoked explicitly by the caller. A failed precondition
//! leaves the lifecycle where it was. Under dry-run every mutating call is
//! skipped and logged, while path resolution and precondition checks still run.

use std::path::PathBuf;

use log::info;

use crate::adapters::BranchConventions;
use crate::app::{PathResolver, RELEASE_HISTORY_FILE};
use crate::domain::{AppError, ManualConvention, Version};
use crate::ports::{
    ArtifactStore, ExportRequest, ManualExporter, NamingConventions, ReleaseProvider,
    WorkflowState,
};

/// Snapshot of one repository's lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusReport {
    pub queue: Vec<String>,
    pub latest_version: Version,
    pub candidate: Option<CandidateStatus>,
    pub accepted: Option<AcceptedStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateStatus {
    pub branch: String,
    pub dir: PathBuf,
    pub downloaded: bool,
    pub manual_ready: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptedStatus {
    pub dir: PathBuf,
    pub history_recorded: bool,
    pub manual_present: bool,
}

pub struct ReleaseWorkflow<P, F, E, N = BranchConventions>
where
    P: ReleaseProvider,
    F: ArtifactStore,
    E: ManualExporter,
    N: NamingConventions,
{
    paths: PathResolver<N>,
    provider: P,
    store: F,
    exporter: E,
    dry_run: bool,
}

impl<P, F, E, N> ReleaseWorkflow<P, F, E, N>
where
    P: ReleaseProvider,
    F: ArtifactStore,
    E: ManualExporter,
    N: NamingConventions,
{
    pub fn new(paths: PathResolver<N>, provider: P, store: F, exporter: E, dry_run: bool) -> Self {
        Self { paths, provider, store, exporter, dry_run }
    }

    pub fn paths(&self) -> &PathResolver<N> {
        &self.paths
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn store(&self) -> &F {
        &self.store
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Cut a release candidate. Returns the created branch, or `None` under dry-run.
    pub fn create_cand(&self, major_increment: bool) -> Result<Option<String>, AppError> {
        if self.dry_run {
            let bump = if major_increment { "major" } else { "minor" };
            info!("[dry-run] Would create a {} release candidate for {}", bump, self.paths.repo());
            return Ok(None);
        }
        let branch = self.provider.create_release_candidate(major_increment)?;
        info!("Created release candidate {}", branch);
        Ok(Some(branch))
    }

    /// Cut a hotfix against the latest accepted version.
    pub fn create_hotfix(&self) -> Result<Option<String>, AppError> {
        if self.dry_run {
            let latest = WorkflowState::latest_version(&self.provider)?;
            info!("[dry-run] Would create a hotfix of {} for {}", latest.tag(), self.paths.repo());
            return Ok(None);
        }
        let branch = self.provider.create_hotfix()?;
        info!("Created hotfix {}", branch);
        Ok(Some(branch))
    }

    /// Download the front of the queue below the candidate root.
    pub fn download(&self) -> Result<Option<PathBuf>, AppError> {
        let target = self.paths.current_candidate_dir(&self.provider)?;
        if self.dry_run {
            info!("[dry-run] Would download candidate into {}", target.display());
            return Ok(None);
        }
        let dir = self.provider.download_next_in_queue(&self.paths.candidate_root_path(), false)?;
        info!("Downloaded candidate into {}", dir.display());
        Ok(Some(dir))
    }

    /// Promote the front of the queue.
    ///
    /// Run [`download_release_history`](Self::download_release_history) only
    /// after this succeeds; the history reflects the remote release log.
    pub fn accept(&self) -> Result<Option<Version>, AppError> {
        let version = self.paths.candidate_tag(&self.provider)?;
        if self.dry_run {
            info!("[dry-run] Would accept release candidate {}", version.tag());
            return Ok(None);
        }
        let accepted = self.provider.accept_release_candidate(false)?;
        info!("Accepted release {}", accepted.tag());
        Ok(Some(accepted))
    }

    /// Write the release history into the accepted directory.
    pub fn download_release_history(&self) -> Result<PathBuf, AppError> {
        let path = self.paths.release_history_path(&self.provider, &self.store)?;
        if self.dry_run {
            info!("[dry-run] Would write release history to {}", path.display());
            return Ok(path);
        }
        self.provider.download_release_history(&path)?;
        info!("Wrote release history to {}", path.display());
        Ok(path)
    }

    /// Export the user manual for the pending candidate. Returns the target path.
    pub fn generate_user_manual(&self) -> Result<PathBuf, AppError> {
        let request = ExportRequest {
            config_path: self.paths.confluence_tools_config_path(),
            space_key: self.paths.config().repo.confluence_space_key.clone(),
            target: self.paths.user_manual_download_path(&self.provider)?,
        };
        if self.dry_run {
            info!("[dry-run] Would run: {}", self.exporter.command_line(&request));
            return Ok(request.target);
        }
        self.exporter.export(&request)?;
        info!("Generated user manual {}", request.target.display());
        Ok(request.target)
    }

    /// Reuse the previous release's manual for the pending candidate.
    pub fn copy_previous_user_manual(&self) -> Result<PathBuf, AppError> {
        let source = self.paths.user_manual_path_previous(&self.provider, &self.store)?;
        if !self.store.exists(&source) {
            return Err(AppError::SourceNotFound(source));
        }
        let target = self.paths.user_manual_download_path(&self.provider)?;
        if self.dry_run {
            info!("[dry-run] Would copy {} to {}", source.display(), target.display());
            return Ok(target);
        }
        self.store.copy_file(&source, &target)?;
        info!("Copied {} to {}", source.display(), target.display());
        Ok(target)
    }

    pub fn status(&self) -> Result<StatusReport, AppError> {
        let queue = WorkflowState::queue(&self.provider)?;
        let latest_version = WorkflowState::latest_version(&self.provider)?;

        let candidate = match queue.first() {
            Some(branch) => {
                let dir = self.paths.candidate_root_path().join(branch);
                let version = self.paths.conventions().tag_from_branch(branch)?;
                let manual =
                    dir.join(ManualConvention::Candidate.file_name(self.paths.repo(), &version));
                Some(CandidateStatus {
                    branch: branch.clone(),
                    downloaded: self.store.exists(&dir),
                    manual_ready: self.store.exists(&manual),
                    dir,
                })
            }
            None => None,
        };

        let accepted = match self.paths.latest_accepted_candidate_dir(&self.provider, &self.store) {
            Ok(dir) => {
                let history = dir.join(RELEASE_HISTORY_FILE);
                let manual =
                    dir.join(ManualConvention::Accepted.file_name(self.paths.repo(), &latest_version));
                Some(AcceptedStatus {
                    history_recorded: self.store.exists(&history),
                    manual_present: self.store.exists(&manual),
                    dir,
                })
            }
            Err(AppError::DirectoryNotFound { .. }) => None,
            Err(err) => return Err(err),
        };

        Ok(StatusReport { queue, latest_version, candidate, accepted })
    }
}
