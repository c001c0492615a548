//! Filesystem-backed configuration loading.
//!
//! Parsing and validation live in `domain::release_config`; this module only
//! locates and reads the documents.

mod load_access_token;
mod load_release_config;

pub use load_access_token::load_access_token;
pub use load_release_config::{
    CONFIG_DIR_ENV, PATHS_FILE, load_release_config, repo_config_file, resolve_config_dir,
};
