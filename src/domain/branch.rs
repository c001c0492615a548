//! Release and hotfix branch identifiers (`release-3.3`, `hotfix-3.2.1`).

use std::fmt;
use std::str::FromStr;

use crate::domain::{AppError, Version};

/// Kind of candidate branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    Release,
    Hotfix,
}

impl BranchKind {
    pub fn prefix(&self) -> &'static str {
        match self {
            BranchKind::Release => "release",
            BranchKind::Hotfix => "hotfix",
        }
    }
}

/// A parsed candidate branch identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchId {
    kind: BranchKind,
    version: Version,
}

impl BranchId {
    pub fn new(kind: BranchKind, version: Version) -> Self {
        Self { kind, version }
    }

    pub fn kind(&self) -> BranchKind {
        self.kind
    }

    pub fn version(&self) -> &Version {
        &self.version
    }
}

impl FromStr for BranchId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (prefix, version) =
            s.split_once('-').ok_or_else(|| AppError::InvalidBranch(s.to_string()))?;
        let kind = match prefix {
            "release" => BranchKind::Release,
            "hotfix" => BranchKind::Hotfix,
            _ => return Err(AppError::InvalidBranch(s.to_string())),
        };
        let version = version.parse().map_err(|_| AppError::InvalidBranch(s.to_string()))?;
        Ok(Self { kind, version })
    }
}

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.kind.prefix(), self.version)
    }
}
