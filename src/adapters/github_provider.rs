//! Release provider backed by the GitHub REST API.
//!
//! Branch naming follows `BranchConventions`. Releases are tagged `v<version>`.
//! Candidates are cut from the develop branch, hotfixes from the master branch,
//! and accepted candidates are merged into master and back into develop.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::DateTime;
use log::{debug, info, warn};
use reqwest::Method;
use reqwest::blocking::{Client, RequestBuilder, Response};
use reqwest::header::{ACCEPT, AUTHORIZATION, LINK};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use url::Url;

use crate::adapters::BranchConventions;
use crate::domain::{AppError, BranchKind, RepoConfig, Version};
use crate::ports::{NamingConventions, ReleaseProvider, WorkflowState};

const USER_AGENT: &str = "rcflow";
const GITHUB_JSON: &str = "application/vnd.github+json";
const API_VERSION_HEADER: &str = "X-GitHub-Api-Version";
const API_VERSION: &str = "2022-11-28";
const DEFAULT_STATUS_MESSAGE: &str = "GitHub API request failed";
const PER_PAGE: u32 = 100;

#[derive(Clone)]
pub struct GitHubProvider {
    api_url: Url,
    owner: String,
    repo: String,
    token: Option<String>,
    develop_branch: String,
    master_branch: String,
    conventions: BranchConventions,
    client: Client,
}

impl std::fmt::Debug for GitHubProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubProvider")
            .field("api_url", &self.api_url)
            .field("owner", &self.owner)
            .field("repo", &self.repo)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl GitHubProvider {
    /// Create a provider for `<owner>/<repo>` using the repository configuration.
    pub fn new(config: &RepoConfig, repo: &str, token: Option<String>) -> Result<Self, AppError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AppError::GitHubApi {
                message: format!("Failed to create HTTP client: {}", e),
                status: None,
            })?;

        Ok(Self {
            api_url: config.api_url.clone(),
            owner: config.owner.clone(),
            repo: repo.to_string(),
            token,
            develop_branch: config.develop_branch.clone(),
            master_branch: config.master_branch.clone(),
            conventions: BranchConventions::new(),
            client,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/repos/{}/{}/{}",
            self.api_url.as_str().trim_end_matches('/'),
            self.owner,
            self.repo,
            path
        )
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.request_url(method, &self.endpoint(path))
    }

    fn request_url(&self, method: Method, url: &str) -> RequestBuilder {
        let mut request = self
            .client
            .request(method, url)
            .header(ACCEPT, GITHUB_JSON)
            .header(API_VERSION_HEADER, API_VERSION);

        if let Some(token) = &self.token {
            request = request.header(AUTHORIZATION, format!("Bearer {}", token));
        }

        request
    }

    fn execute(&self, request: RequestBuilder, what: &str) -> Result<Response, AppError> {
        debug!("GitHub request: {}", what);
        request.send().map_err(|e| AppError::GitHubApi {
            message: format!("{}: HTTP request failed: {}", what, e),
            status: None,
        })
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, what: &str) -> Result<T, AppError> {
        let response = ensure_success(self.execute(self.request(Method::GET, path), what)?, what)?;
        response.json().map_err(|e| AppError::GitHubApi {
            message: format!("{}: failed to parse response: {}", what, e),
            status: None,
        })
    }

    /// GET every page of a list endpoint, following `Link: rel="next"`.
    fn get_all_pages<T: DeserializeOwned>(
        &self,
        path: &str,
        what: &str,
    ) -> Result<Vec<T>, AppError> {
        let mut items = Vec::new();
        let mut next = Some(format!("{}?per_page={}", self.endpoint(path), PER_PAGE));

        while let Some(url) = next.take() {
            let response =
                ensure_success(self.execute(self.request_url(Method::GET, &url), what)?, what)?;
            next = response
                .headers()
                .get(LINK)
                .and_then(|value| value.to_str().ok())
                .and_then(next_page_link);
            let page: Vec<T> = response.json().map_err(|e| AppError::GitHubApi {
                message: format!("{}: failed to parse response: {}", what, e),
                status: None,
            })?;
            items.extend(page);
        }

        Ok(items)
    }

    fn post_json<B: Serialize>(&self, path: &str, body: &B, what: &str) -> Result<(), AppError> {
        let request = self.request(Method::POST, path).json(body);
        ensure_success(self.execute(request, what)?, what)?;
        Ok(())
    }

    fn branch_head(&self, branch: &str) -> Result<String, AppError> {
        let git_ref: GitRef =
            self.get_json(&format!("git/ref/heads/{}", branch), &format!("resolve {}", branch))?;
        Ok(git_ref.object.sha)
    }

    fn create_branch(&self, name: &str, from: &str) -> Result<(), AppError> {
        let sha = self.branch_head(from)?;
        let body = CreateRef { git_ref: format!("refs/heads/{}", name), sha };
        self.post_json("git/refs", &body, &format!("create branch {}", name))?;
        info!("Created branch {} from {}", name, from);
        Ok(())
    }

    fn merge(&self, base: &str, head: &str) -> Result<(), AppError> {
        let body = MergeRequest {
            base: base.to_string(),
            head: head.to_string(),
            commit_message: format!("Merge {} into {}", head, base),
        };
        self.post_json("merges", &body, &format!("merge {} into {}", head, base))?;
        info!("Merged {} into {}", head, base);
        Ok(())
    }

    fn release_exists(&self, tag: &str) -> Result<bool, AppError> {
        let what = format!("look up release {}", tag);
        let response =
            self.execute(self.request(Method::GET, &format!("releases/tags/{}", tag)), &what)?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }
        ensure_success(response, &what)?;
        Ok(true)
    }

    fn next_branch(&self) -> Result<String, AppError> {
        WorkflowState::next_in_queue(self)
    }
}

impl ReleaseProvider for GitHubProvider {
    fn queue(&self) -> Result<Vec<String>, AppError> {
        let branches: Vec<BranchEntry> = self.get_all_pages("branches", "list branches")?;
        let latest = ReleaseProvider::latest_version(self)?;

        let mut pending: Vec<(Version, String)> = branches
            .into_iter()
            .filter_map(|branch| {
                let id = self.conventions.parse_branch(&branch.name)?;
                (*id.version() > latest).then(|| (*id.version(), branch.name))
            })
            .collect();
        pending.sort();

        Ok(pending.into_iter().map(|(_, name)| name).collect())
    }

    fn latest_version(&self) -> Result<Version, AppError> {
        let what = "fetch latest release";
        let response = self.execute(self.request(Method::GET, "releases/latest"), what)?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            debug!("No release published yet for {}/{}", self.owner, self.repo);
            return Ok(Version::new(0, 0));
        }

        let release: ReleaseEntry = ensure_success(response, what)?.json().map_err(|e| {
            AppError::GitHubApi {
                message: format!("{}: failed to parse response: {}", what, e),
                status: None,
            }
        })?;
        Version::from_tag(&release.tag_name)
    }

    fn create_release_candidate(&self, major_increment: bool) -> Result<String, AppError> {
        let latest = ReleaseProvider::latest_version(self)?;
        let next = if major_increment { latest.next_major() } else { latest.next_minor() };
        let branch = self.conventions.branch_from_tag(BranchKind::Release, &next);
        self.create_branch(&branch, &self.develop_branch)?;
        Ok(branch)
    }

    fn create_hotfix(&self) -> Result<String, AppError> {
        let latest = ReleaseProvider::latest_version(self)?;
        let branch = self.conventions.branch_from_tag(BranchKind::Hotfix, &latest.next_patch());
        self.create_branch(&branch, &self.master_branch)?;
        Ok(branch)
    }

    fn download_next_in_queue(&self, path: &Path, force: bool) -> Result<PathBuf, AppError> {
        let branch = self.next_branch()?;
        let dir = path.join(&branch);
        if dir.exists() && !force {
            info!("{} is already downloaded to {}", branch, dir.display());
            return Ok(dir);
        }

        let what = format!("download {}", branch);
        let response =
            self.execute(self.request(Method::GET, &format!("zipball/{}", branch)), &what)?;
        let bytes = ensure_success(response, &what)?.bytes().map_err(|e| AppError::GitHubApi {
            message: format!("{}: failed to read archive: {}", what, e),
            status: None,
        })?;

        fs::create_dir_all(&dir)?;
        let archive_name = format!("{}.zip", branch);
        fs::write(dir.join(&archive_name), &bytes)?;

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let digest: String =
            hasher.finalize().iter().map(|byte| format!("{:02x}", byte)).collect();
        fs::write(
            dir.join(format!("{}.sha256", archive_name)),
            format!("{}  {}\n", digest, archive_name),
        )?;

        info!("Downloaded {} to {}", branch, dir.display());
        Ok(dir)
    }

    fn accept_release_candidate(&self, force: bool) -> Result<Version, AppError> {
        let branch = self.next_branch()?;
        let version = self.conventions.tag_from_branch(&branch)?;
        let tag = version.tag();

        let exists = self.release_exists(&tag)?;
        if exists && !force {
            return Err(AppError::ReleaseExists { tag });
        }

        self.merge(&self.master_branch, &branch)?;
        if exists {
            warn!("Release {} already exists; keeping it", tag);
        } else {
            let body = CreateRelease {
                tag_name: tag.clone(),
                target_commitish: self.master_branch.clone(),
                name: tag.clone(),
            };
            self.post_json("releases", &body, &format!("create release {}", tag))?;
            info!("Created release {}", tag);
        }
        self.merge(&self.develop_branch, &self.master_branch)?;

        Ok(version)
    }

    fn download_release_history(&self, path: &Path) -> Result<(), AppError> {
        let releases: Vec<ReleaseEntry> = self.get_all_pages("releases", "list releases")?;
        let history = format_release_history(&releases);
        fs::write(path, history)?;
        info!("Wrote release history to {}", path.display());
        Ok(())
    }
}

fn ensure_success(response: Response, what: &str) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body_text = response.text().unwrap_or_default();
    let message = extract_error_message(&body_text).unwrap_or_else(|| {
        if !body_text.trim().is_empty() {
            body_text.clone()
        } else {
            DEFAULT_STATUS_MESSAGE.to_string()
        }
    });

    Err(AppError::GitHubApi {
        message: format!("{}: {} ({})", what, message, status),
        status: Some(status.as_u16()),
    })
}

/// Target of the `rel="next"` entry of a `Link` header.
fn next_page_link(header: &str) -> Option<String> {
    header.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim().strip_prefix('<')?.strip_suffix('>')?;
        parts.any(|param| param.trim() == r#"rel="next""#).then(|| target.to_string())
    })
}

fn extract_error_message(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    let parsed = serde_json::from_str::<serde_json::Value>(body).ok()?;
    parsed.get("message").and_then(|message| message.as_str()).map(ToOwned::to_owned)
}

/// Render releases, newest first as returned by the API, skipping drafts.
fn format_release_history(releases: &[ReleaseEntry]) -> String {
    let mut history = String::new();
    for release in releases.iter().filter(|r| !r.draft) {
        let date = release
            .published_at
            .as_deref()
            .and_then(|raw| DateTime::parse_from_rfc3339(raw).ok())
            .map(|dt| dt.format("%Y-%m-%d").to_string());

        match date {
            Some(date) => history.push_str(&format!("{} ({})\n", release.tag_name, date)),
            None => history.push_str(&format!("{}\n", release.tag_name)),
        }

        let body = release.body.as_deref().unwrap_or_default().trim();
        if !body.is_empty() {
            history.push_str(body);
            history.push('\n');
        }
        history.push('\n');
    }
    history
}

#[derive(Debug, Deserialize)]
struct BranchEntry {
    name: String,
}

#[derive(Debug, Deserialize)]
struct GitRef {
    object: GitObject,
}

#[derive(Debug, Deserialize)]
struct GitObject {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct ReleaseEntry {
    tag_name: String,
    #[serde(default)]
    body: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    draft: bool,
}

#[derive(Debug, Serialize)]
struct CreateRef {
    #[serde(rename = "ref")]
    git_ref: String,
    sha: String,
}

#[derive(Debug, Serialize)]
struct MergeRequest {
    base: String,
    head: String,
    commit_message: String,
}

#[derive(Debug, Serialize)]
struct CreateRelease {
    tag_name: String,
    target_commitish: String,
    name: String,
}
