use crate::domain::{AppError, BranchId, BranchKind, Version};

/// Port mapping branch identifiers to version tags and back.
pub trait NamingConventions {
    /// Parse a branch or directory name. `None` when it does not follow the convention.
    fn parse_branch(&self, name: &str) -> Option<BranchId>;

    /// Branch identifier for a version.
    fn branch_from_tag(&self, kind: BranchKind, version: &Version) -> String;

    /// Version tag encoded in a branch identifier.
    fn tag_from_branch(&self, branch: &str) -> Result<Version, AppError> {
        self.parse_branch(branch)
            .map(|id| *id.version())
            .ok_or_else(|| AppError::InvalidBranch(branch.to_string()))
    }
}
