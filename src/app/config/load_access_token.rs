use std::env;
use std::fs;
use std::path::Path;

use log::debug;
use serde::Deserialize;

use crate::domain::AppError;

/// Environment fallback for the GitHub access token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

#[derive(Debug, Default, Deserialize)]
struct ReleaseToolsConfig {
    #[serde(default)]
    access_token: Option<String>,
}

/// Read the provider access token.
///
/// The `access_token` key of the release-tools config file wins; `$GITHUB_TOKEN`
/// is the fallback. A missing file is not an error, an unreadable one is.
pub fn load_access_token(release_tools_config: &Path) -> Result<Option<String>, AppError> {
    if release_tools_config.is_file() {
        let content = fs::read_to_string(release_tools_config)?;
        let parsed: Option<ReleaseToolsConfig> = serde_yaml::from_str(&content).map_err(|e| {
            AppError::config_error(format!("{}: {e}", release_tools_config.display()))
        })?;
        if let Some(token) = parsed.and_then(|c| c.access_token).filter(|t| !t.trim().is_empty()) {
            debug!("Using access token from {}", release_tools_config.display());
            return Ok(Some(token));
        }
    }
    Ok(env::var(TOKEN_ENV).ok().filter(|t| !t.trim().is_empty()))
}
