mod confluence_tools;
mod conventions;
mod github_provider;
mod local_artifact_store;

pub use confluence_tools::ConfluenceToolsExporter;
pub use conventions::BranchConventions;
pub use github_provider::GitHubProvider;
pub use local_artifact_store::LocalArtifactStore;
