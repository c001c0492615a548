//! Read-only view of the release workflow state.
//!
//! Path resolution only needs the queue and the latest version. Taking this
//! narrow accessor instead of the provider keeps the resolver free of any
//! mutating capability.

use crate::domain::{AppError, Version};
use crate::ports::ReleaseProvider;

pub trait WorkflowState {
    /// Branch identifiers awaiting release, front first.
    fn queue(&self) -> Result<Vec<String>, AppError>;

    /// Version of the most recently accepted release.
    fn latest_version(&self) -> Result<Version, AppError>;

    /// Front of the queue.
    fn next_in_queue(&self) -> Result<String, AppError> {
        self.queue()?.into_iter().next().ok_or(AppError::EmptyQueue)
    }
}

/// Blanket impl: every provider exposes its queue and version as workflow state.
impl<T> WorkflowState for T
where
    T: ReleaseProvider + ?Sized,
{
    fn queue(&self) -> Result<Vec<String>, AppError> {
        ReleaseProvider::queue(self)
    }

    fn latest_version(&self) -> Result<Version, AppError> {
        ReleaseProvider::latest_version(self)
    }
}
