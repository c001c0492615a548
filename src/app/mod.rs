pub mod api;
pub mod cli;
pub mod config;
mod paths;
mod workflow;

pub use paths::{PathResolver, RELEASE_HISTORY_FILE, ValidationLocation};
pub use workflow::{AcceptedStatus, CandidateStatus, ReleaseWorkflow, StatusReport};
