use crate::domain::{BranchId, BranchKind, Version};
use crate::ports::NamingConventions;

/// `<release|hotfix>-<version>` branch naming.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchConventions;

impl BranchConventions {
    pub fn new() -> Self {
        Self
    }
}

impl NamingConventions for BranchConventions {
    fn parse_branch(&self, name: &str) -> Option<BranchId> {
        name.parse().ok()
    }

    fn branch_from_tag(&self, kind: BranchKind, version: &Version) -> String {
        BranchId::new(kind, *version).to_string()
    }
}
