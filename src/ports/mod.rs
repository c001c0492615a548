mod artifact_store;
mod manual_exporter;
mod naming_conventions;
mod release_provider;
mod workflow_state;

pub use artifact_store::ArtifactStore;
pub use manual_exporter::{ExportRequest, ManualExporter};
pub use naming_conventions::NamingConventions;
pub use release_provider::ReleaseProvider;
pub use workflow_state::WorkflowState;
