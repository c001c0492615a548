//! API facade: wires the concrete adapters into a [`ReleaseWorkflow`].

use std::path::Path;

use log::debug;

use crate::adapters::{ConfluenceToolsExporter, GitHubProvider, LocalArtifactStore};
use crate::app::config::{load_access_token, load_release_config, resolve_config_dir};
use crate::app::{PathResolver, ReleaseWorkflow};
use crate::domain::AppError;

/// Workflow backed by GitHub, the local filesystem and `confluence-tools`.
pub type Workflow = ReleaseWorkflow<GitHubProvider, LocalArtifactStore, ConfluenceToolsExporter>;

/// Load the configuration of `repo` and build its workflow.
///
/// Configuration problems surface here, before any lifecycle operation runs.
pub fn open_workflow(
    repo: &str,
    dry_run: bool,
    config_dir: Option<&Path>,
) -> Result<Workflow, AppError> {
    let config_dir = resolve_config_dir(config_dir)?;
    debug!("Using configuration directory {}", config_dir.display());

    let config = load_release_config(&config_dir, repo)?;
    let paths = PathResolver::new(config, repo);
    let token = load_access_token(&paths.release_tools_config_path())?;
    let provider = GitHubProvider::new(&paths.config().repo, repo, token)?;

    Ok(ReleaseWorkflow::new(
        paths,
        provider,
        LocalArtifactStore::new(),
        ConfluenceToolsExporter::new(),
        dry_run,
    ))
}
