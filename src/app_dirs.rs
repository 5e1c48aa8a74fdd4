//! Resolve configuration and cache directories for `cmdpal`.
//!
//! The helpers in this module respect environment overrides while falling back
//! to platform-appropriate locations provided by the `directories` crate.

use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use directories::ProjectDirs;

const QUALIFIER: &str = "io";
const ORGANIZATION: &str = "albo";
const APPLICATION: &str = "cmdpal";

const CONFIG_DIR_ENV: &str = "CMDPAL_CONFIG_DIR";
const CACHE_DIR_ENV: &str = "CMDPAL_CACHE_DIR";

fn project_dirs() -> Result<ProjectDirs> {
	ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
		.ok_or_else(|| anyhow!("unable to determine project directories for cmdpal"))
}

/// An empty override counts as unset.
fn dir_from_env(name: &str) -> Option<PathBuf> {
	let value = env::var_os(name)?;
	if value.is_empty() {
		None
	} else {
		Some(PathBuf::from(value))
	}
}

/// Return the directory holding `config.toml`.
pub fn get_config_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CONFIG_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.config_local_dir().to_path_buf())
}

/// Return the cache directory, where the log file is written.
pub fn get_cache_dir() -> Result<PathBuf> {
	if let Some(dir) = dir_from_env(CACHE_DIR_ENV) {
		return Ok(dir);
	}

	Ok(project_dirs()?.cache_dir().to_path_buf())
}
