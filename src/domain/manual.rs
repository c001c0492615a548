//! User manual file naming.
//!
//! The candidate manual and the accepted manual are named by two different
//! conventions: `acme-user-manual-3.3.pdf` for the version being prepared and
//! `acme-user-manual-v3.2.pdf` for the version already accepted. Both forms are
//! consumed by downstream tooling and must stay distinct.

use crate::domain::Version;

/// File naming convention for a user manual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManualConvention {
    /// Manual for the pending candidate: bare version.
    Candidate,
    /// Manual of the latest accepted release: tag form with `v` prefix.
    Accepted,
}

impl ManualConvention {
    pub fn file_name(&self, repo: &str, version: &Version) -> String {
        match self {
            ManualConvention::Candidate => format!("{repo}-user-manual-{version}.pdf"),
            ManualConvention::Accepted => format!("{repo}-user-manual-{}.pdf", version.tag()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidate_manual_uses_bare_version() {
        let name = ManualConvention::Candidate.file_name("acme", &Version::new(3, 3));
        assert_eq!(name, "acme-user-manual-3.3.pdf");
    }

    #[test]
    fn accepted_manual_uses_tag_form() {
        let name = ManualConvention::Accepted.file_name("acme", &Version::new(3, 2));
        assert_eq!(name, "acme-user-manual-v3.2.pdf");
    }
}
