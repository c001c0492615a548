//! rcflow: release candidate lifecycle for GitHub-hosted repositories.
//!
//! A candidate moves from branch creation through download and acceptance to a
//! ready user manual. Locations of every artifact are derived by
//! [`PathResolver`] from the repository configuration and the provider's queue.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{Workflow, open_workflow};
pub use app::{PathResolver, ReleaseWorkflow, StatusReport};
pub use domain::{AppError, ReleaseConfig, Version};
