pub mod branch;
pub mod error;
pub mod manual;
pub mod release_config;
pub mod version;

pub use branch::{BranchId, BranchKind};
pub use error::AppError;
pub use manual::ManualConvention;
pub use release_config::{ReleaseConfig, RepoConfig, SubPaths};
pub use version::Version;
