use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::domain::{AppError, ReleaseConfig};

/// Environment variable overriding the configuration directory.
pub const CONFIG_DIR_ENV: &str = "RCFLOW_CONFIG_DIR";

/// Sub-path map shared by every repository.
pub const PATHS_FILE: &str = "paths.yml";

/// Resolve the configuration directory: explicit path, then `$RCFLOW_CONFIG_DIR`,
/// then `$HOME/.config/rcflow`.
pub fn resolve_config_dir(explicit: Option<&Path>) -> Result<PathBuf, AppError> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = env::var_os(CONFIG_DIR_ENV).filter(|v| !v.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    let home = env::var_os("HOME").filter(|v| !v.is_empty()).ok_or_else(|| {
        AppError::config_error(format!(
            "cannot locate the configuration directory: set --config-dir or {CONFIG_DIR_ENV}"
        ))
    })?;
    Ok(PathBuf::from(home).join(".config").join("rcflow"))
}

/// Per-repository settings file inside the configuration directory.
pub fn repo_config_file(config_dir: &Path, repo: &str) -> PathBuf {
    config_dir.join(format!("{repo}.yml"))
}

/// Read and validate the configuration of one repository.
pub fn load_release_config(config_dir: &Path, repo: &str) -> Result<ReleaseConfig, AppError> {
    if repo.trim().is_empty() {
        return Err(AppError::config_error("repository name must not be empty"));
    }
    let repo_yaml = read_config_file(&repo_config_file(config_dir, repo))?;
    let paths_yaml = read_config_file(&config_dir.join(PATHS_FILE))?;
    ReleaseConfig::from_yaml(&repo_yaml, &paths_yaml)
}

fn read_config_file(path: &Path) -> Result<String, AppError> {
    debug!("Reading configuration from {}", path.display());
    fs::read_to_string(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => {
            AppError::config_error(format!("missing configuration file {}", path.display()))
        }
        _ => AppError::config_error(format!("cannot read {}: {err}", path.display())),
    })
}
