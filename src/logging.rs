//! Tracing setup. The terminal UI owns stdout, so log lines go to a file in
//! the cache directory.

use std::fs::{self, File};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::app_dirs;

/// Environment variable holding the log filter, e.g. `cmdpal=debug`.
pub const LOG_FILTER_ENV: &str = "CMDPAL_LOG";

const DEFAULT_FILTER: &str = "warn";
const LOG_FILE_NAME: &str = "cmdpal.log";

/// Install the global subscriber, writing to `<cache dir>/cmdpal.log`.
///
/// `filter` wins over `CMDPAL_LOG`. Returns the log file path. A subscriber
/// installed earlier is left in place.
pub fn initialize(filter: Option<&str>) -> Result<PathBuf> {
	let dir = app_dirs::get_cache_dir()?;
	initialize_in(&dir, filter)
}

/// Like [`initialize`], writing into `dir`.
pub fn initialize_in(dir: &Path, filter: Option<&str>) -> Result<PathBuf> {
	fs::create_dir_all(dir)
		.with_context(|| format!("failed to create log directory {}", dir.display()))?;
	let path = dir.join(LOG_FILE_NAME);
	let file = File::create(&path)
		.with_context(|| format!("failed to create log file {}", path.display()))?;

	let _ = tracing_subscriber::fmt()
		.with_env_filter(env_filter(filter))
		.with_writer(Mutex::new(file))
		.with_ansi(false)
		.try_init();

	Ok(path)
}

fn env_filter(filter: Option<&str>) -> EnvFilter {
	match filter {
		Some(directives) => EnvFilter::new(directives),
		None => EnvFilter::try_from_env(LOG_FILTER_ENV)
			.unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn creates_log_file_in_directory() {
		let dir = tempfile::tempdir().expect("tempdir");
		let nested = dir.path().join("logs");
		let path = initialize_in(&nested, Some("cmdpal=debug")).expect("initialized");
		assert_eq!(path, nested.join(LOG_FILE_NAME));
		assert!(path.exists());

		// A second call must not fail even though a subscriber is installed.
		initialize_in(&nested, None).expect("second initialize");
	}
}
