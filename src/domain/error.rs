use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Library-wide error type for rcflow operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration file or key missing or invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// No branch is pending in the release queue.
    #[error("No release candidate is pending in the queue. Create a candidate first.")]
    EmptyQueue,

    /// The download catalog of the latest accepted version is absent.
    #[error("Could not find the download directory for latest version {version} under {}", .root.display())]
    DirectoryNotFound { version: String, root: PathBuf },

    /// The previous user manual is absent.
    #[error("Previous user manual could not be found: {}", .0.display())]
    SourceNotFound(PathBuf),

    /// Version string does not follow `major.minor[.patch]`.
    #[error("Invalid version '{0}': expected major.minor[.patch]")]
    InvalidVersion(String),

    /// Branch identifier does not follow `<release|hotfix>-<version>`.
    #[error("Invalid branch '{0}': expected release-<version> or hotfix-<version>")]
    InvalidBranch(String),

    /// GitHub API request failed.
    #[error("GitHub API error: {message}")]
    GitHubApi { message: String, status: Option<u16> },

    /// External tool invocation failed.
    #[error("{tool} failed: {error}")]
    ExternalToolError { tool: String, error: String },

    /// A release already exists for the candidate tag.
    #[error("Release '{tag}' already exists. Use force to accept anyway.")]
    ReleaseExists { tag: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping to exit codes.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::Configuration(_)
            | AppError::InvalidVersion(_)
            | AppError::InvalidBranch(_) => io::ErrorKind::InvalidInput,
            AppError::EmptyQueue
            | AppError::DirectoryNotFound { .. }
            | AppError::SourceNotFound(_) => io::ErrorKind::NotFound,
            AppError::ReleaseExists { .. } => io::ErrorKind::AlreadyExists,
            AppError::GitHubApi { .. } | AppError::ExternalToolError { .. } => {
                io::ErrorKind::Other
            }
        }
    }
}
