//! Shared testing utilities for rcflow CLI tests.

use assert_cmd::Command;
use mockito::{Mock, Server, ServerGuard};
use serde_json::json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const PATHS_YAML: &str = r#"release_tools_subpath: config/release-tools.config
confluence_tools_subpath: config/confluence-tools.config
candidate_subpath: candidates
devel_environment_subpath: devel
doc_subpath: doc
doc_metadata_subpath: doc/metadata
user_validations_subpath: validations
user_validations_all_version_subpath: all
user_validations_next_hotfix_subpath: next-hotfix
user_validations_next_release_subpath: next-release
user_validations_validation_files_subpath: files
user_validations_sql_updates_subpath: sql
user_validations_latest_subpath: latest
"#;

/// Isolated configuration directory, artifact tree and GitHub stand-in.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    server: ServerGuard,
}

#[allow(dead_code)]
impl TestContext {
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let server = Server::new();
        let ctx = Self { root, server };

        fs::create_dir_all(ctx.config_dir()).expect("Failed to create config directory");
        ctx.write_paths_config(PATHS_YAML);
        let repo_yaml = format!(
            "root_path: {}\nowner: acme-org\nconfluence_space_key: ACME\napi_url: {}\ntimeout_secs: 5\n",
            ctx.releases_root().display(),
            ctx.server.url()
        );
        fs::write(ctx.config_dir().join("acme.yml"), repo_yaml)
            .expect("Failed to write repository config");
        fs::create_dir_all(ctx.candidate_root()).expect("Failed to create candidate root");
        ctx
    }

    pub fn config_dir(&self) -> PathBuf {
        self.root.path().join("config")
    }

    pub fn releases_root(&self) -> PathBuf {
        self.root.path().join("releases")
    }

    pub fn candidate_root(&self) -> PathBuf {
        self.releases_root().join("acme").join("candidates")
    }

    pub fn write_paths_config(&self, content: &str) {
        fs::write(self.config_dir().join("paths.yml"), content)
            .expect("Failed to write paths config");
    }

    /// Create a download directory under the candidate root.
    pub fn candidate_dir(&self, name: &str) -> PathBuf {
        let dir = self.candidate_root().join(name);
        fs::create_dir_all(&dir).expect("Failed to create candidate directory");
        dir
    }

    pub fn write_file(&self, path: &Path, content: &str) {
        fs::write(path, content).expect("Failed to write test file");
    }

    /// Build a command for the `acme` repository against this context.
    pub fn cli(&self) -> Command {
        self.cli_for("acme")
    }

    pub fn cli_for(&self, repo: &str) -> Command {
        let mut cmd = Command::cargo_bin("rcflow").expect("Failed to locate rcflow binary");
        cmd.env_remove("GITHUB_TOKEN")
            .env_remove("RCFLOW_CONFIG_DIR")
            .arg("--repo")
            .arg(repo)
            .arg("--config-dir")
            .arg(self.config_dir());
        cmd
    }

    /// Serve a latest release tag and a branch listing.
    pub fn mock_state(&mut self, latest_tag: &str, branches: &[&str]) -> (Mock, Mock) {
        let latest = self
            .server
            .mock("GET", "/repos/acme-org/acme/releases/latest")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "tag_name": latest_tag }).to_string())
            .create();
        let listing: Vec<_> = branches.iter().map(|name| json!({ "name": name })).collect();
        let branches = self
            .server
            .mock("GET", "/repos/acme-org/acme/branches")
            .match_query(mockito::Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(serde_json::Value::Array(listing).to_string())
            .create();
        (latest, branches)
    }

    pub fn server(&mut self) -> &mut ServerGuard {
        &mut self.server
    }
}
