//! Release configuration domain models.
//!
//! Two YAML documents make up the configuration of one repository: the
//! sub-path map shared by every repository (`paths.yml`) and the repository
//! settings (`<repo>.yml`). Every key without a default is required; a missing
//! or empty key is a configuration error raised before any operation runs.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::domain::AppError;

/// Repository-level settings loaded from `<repo>.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RepoConfig {
    /// Base directory of every artifact tree.
    pub root_path: PathBuf,
    /// Repository owner (GitHub user or organization).
    pub owner: String,
    /// Confluence space exported as the user manual.
    pub confluence_space_key: String,
    /// GitHub API endpoint.
    #[serde(default = "default_api_url")]
    pub api_url: Url,
    /// Branch release candidates are cut from.
    #[serde(default = "default_develop_branch")]
    pub develop_branch: String,
    /// Branch accepted releases are merged into.
    #[serde(default = "default_master_branch")]
    pub master_branch: String,
    /// HTTP timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

impl RepoConfig {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.root_path.as_os_str().is_empty() {
            return Err(AppError::config_error("root_path must not be empty"));
        }
        for (key, value) in [
            ("owner", &self.owner),
            ("confluence_space_key", &self.confluence_space_key),
            ("develop_branch", &self.develop_branch),
            ("master_branch", &self.master_branch),
        ] {
            if value.trim().is_empty() {
                return Err(AppError::config_error(format!("{key} must not be empty")));
            }
        }
        if self.timeout_secs == 0 {
            return Err(AppError::config_error("timeout_secs must be greater than 0"));
        }
        Ok(())
    }
}

fn default_api_url() -> Url {
    Url::parse("https://api.github.com").expect("Default API URL must be valid")
}

fn default_develop_branch() -> String {
    "develop".to_string()
}

fn default_master_branch() -> String {
    "master".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Named sub-path segments below the repository root, loaded from `paths.yml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubPaths {
    pub release_tools_subpath: String,
    pub confluence_tools_subpath: String,
    pub candidate_subpath: String,
    pub devel_environment_subpath: String,
    pub doc_subpath: String,
    pub doc_metadata_subpath: String,
    pub user_validations_subpath: String,
    pub user_validations_all_version_subpath: String,
    pub user_validations_next_hotfix_subpath: String,
    pub user_validations_next_release_subpath: String,
    pub user_validations_validation_files_subpath: String,
    pub user_validations_sql_updates_subpath: String,
    pub user_validations_latest_subpath: String,
}

impl SubPaths {
    /// Keys every `paths.yml` must define.
    pub const REQUIRED_KEYS: [&'static str; 13] = [
        "release_tools_subpath",
        "confluence_tools_subpath",
        "candidate_subpath",
        "devel_environment_subpath",
        "doc_subpath",
        "doc_metadata_subpath",
        "user_validations_subpath",
        "user_validations_all_version_subpath",
        "user_validations_next_hotfix_subpath",
        "user_validations_next_release_subpath",
        "user_validations_validation_files_subpath",
        "user_validations_sql_updates_subpath",
        "user_validations_latest_subpath",
    ];

    fn entries(&self) -> [(&'static str, &str); 13] {
        [
            ("release_tools_subpath", self.release_tools_subpath.as_str()),
            ("confluence_tools_subpath", self.confluence_tools_subpath.as_str()),
            ("candidate_subpath", self.candidate_subpath.as_str()),
            ("devel_environment_subpath", self.devel_environment_subpath.as_str()),
            ("doc_subpath", self.doc_subpath.as_str()),
            ("doc_metadata_subpath", self.doc_metadata_subpath.as_str()),
            ("user_validations_subpath", self.user_validations_subpath.as_str()),
            ("user_validations_all_version_subpath", self.user_validations_all_version_subpath.as_str()),
            ("user_validations_next_hotfix_subpath", self.user_validations_next_hotfix_subpath.as_str()),
            ("user_validations_next_release_subpath", self.user_validations_next_release_subpath.as_str()),
            (
                "user_validations_validation_files_subpath",
                self.user_validations_validation_files_subpath.as_str(),
            ),
            ("user_validations_sql_updates_subpath", self.user_validations_sql_updates_subpath.as_str()),
            ("user_validations_latest_subpath", self.user_validations_latest_subpath.as_str()),
        ]
    }

    pub fn validate(&self) -> Result<(), AppError> {
        for (key, value) in self.entries() {
            if value.trim().is_empty() {
                return Err(AppError::config_error(format!("sub-path '{key}' must not be empty")));
            }
        }
        Ok(())
    }
}

/// Complete configuration for one repository.
#[derive(Debug, Clone)]
pub struct ReleaseConfig {
    pub repo: RepoConfig,
    pub sub_paths: SubPaths,
}

impl ReleaseConfig {
    pub fn new(repo: RepoConfig, sub_paths: SubPaths) -> Result<Self, AppError> {
        repo.validate()?;
        sub_paths.validate()?;
        Ok(Self { repo, sub_paths })
    }

    /// Parse and validate both configuration documents.
    pub fn from_yaml(repo_yaml: &str, paths_yaml: &str) -> Result<Self, AppError> {
        let repo: RepoConfig = serde_yaml::from_str(repo_yaml)
            .map_err(|e| AppError::config_error(format!("repository config: {e}")))?;
        let sub_paths: SubPaths = serde_yaml::from_str(paths_yaml)
            .map_err(|e| AppError::config_error(format!("paths config: {e}")))?;
        Self::new(repo, sub_paths)
    }
}
