//! Release version value type.
//!
//! Versions follow the `major.minor[.patch]` shape used by release and hotfix
//! branches. Two renderings exist and both are part of the artifact naming
//! contract: the bare form (`3.2`, via `Display`) and the tag form (`v3.2`).

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;

/// A release version such as `3.2` or `3.2.1`.
///
/// A missing patch component compares equal to patch `0`.
#[derive(Debug, Clone, Copy)]
pub struct Version {
    major: u64,
    minor: u64,
    patch: Option<u64>,
}

impl Version {
    pub fn new(major: u64, minor: u64) -> Self {
        Self { major, minor, patch: None }
    }

    pub fn with_patch(major: u64, minor: u64, patch: u64) -> Self {
        Self { major, minor, patch: Some(patch) }
    }

    pub fn major(&self) -> u64 {
        self.major
    }

    pub fn minor(&self) -> u64 {
        self.minor
    }

    pub fn patch(&self) -> Option<u64> {
        self.patch
    }

    /// Parse a tag such as `v3.2`. A bare version is accepted as well.
    pub fn from_tag(tag: &str) -> Result<Self, AppError> {
        tag.strip_prefix('v').unwrap_or(tag).parse()
    }

    /// Tag form, e.g. `v3.2`.
    pub fn tag(&self) -> String {
        format!("v{}", self)
    }

    /// Next major release: `3.2` becomes `4.0`.
    pub fn next_major(&self) -> Self {
        Self::new(self.major.saturating_add(1), 0)
    }

    /// Next minor release: `3.2` becomes `3.3`.
    pub fn next_minor(&self) -> Self {
        Self::new(self.major, self.minor.saturating_add(1))
    }

    /// Next hotfix: `3.2` becomes `3.2.1`, `3.2.1` becomes `3.2.2`.
    pub fn next_patch(&self) -> Self {
        Self::with_patch(self.major, self.minor, self.patch.unwrap_or(0).saturating_add(1))
    }

    fn key(&self) -> (u64, u64, u64) {
        (self.major, self.minor, self.patch.unwrap_or(0))
    }
}

impl FromStr for Version {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AppError::InvalidVersion(s.to_string());
        let parts: Vec<&str> = s.split('.').collect();
        if !(2..=3).contains(&parts.len()) {
            return Err(invalid());
        }

        let number = |part: &str| -> Result<u64, AppError> {
            if part.is_empty() || !part.chars().all(|c| c.is_ascii_digit()) {
                return Err(invalid());
            }
            part.parse().map_err(|_| invalid())
        };

        let major = number(parts[0])?;
        let minor = number(parts[1])?;
        let patch = parts.get(2).map(|p| number(*p)).transpose()?;

        Ok(Self { major, minor, patch })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.patch {
            Some(patch) => write!(f, "{}.{}.{}", self.major, self.minor, patch),
            None => write!(f, "{}.{}", self.major, self.minor),
        }
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}
