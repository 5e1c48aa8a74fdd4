use std::env;
use std::path::PathBuf;

use anyhow::{Result, anyhow};
use config::{Config, ConfigError, File};

use crate::cli::CliArgs;
use cmdpal::app_dirs;

/// Build a [`Config`] instance by combining default locations with CLI overrides.
pub(super) fn build_config(cli: &CliArgs) -> Result<Config> {
	let mut builder = Config::builder();

	if !cli.no_config {
		for path in default_config_files() {
			builder = builder.add_source(File::from(path).required(false));
		}
	}

	for path in &cli.config {
		builder = builder.add_source(File::from(path.clone()).required(true));
	}

	builder = builder.add_source(
		config::Environment::with_prefix("cmdpal")
			.separator("__")
			.try_parsing(true),
	);

	builder.build().map_err(|err| match err {
		ConfigError::Frozen => anyhow!("configuration builder is frozen"),
		other => other.into(),
	})
}

/// Discover the default configuration file locations that should be consulted.
pub(super) fn default_config_files() -> Vec<PathBuf> {
	let mut files = Vec::new();

	if let Ok(dir) = app_dirs::get_config_dir() {
		files.push(dir.join("config.toml"));
	}

	if let Ok(current_dir) = env::current_dir() {
		files.push(current_dir.join(".cmdpal.toml"));
		files.push(current_dir.join("cmdpal.toml"));
	}

	files
}

#[cfg(test)]
mod tests {
	use std::fs;

	use clap::Parser;
	use tempfile::tempdir;

	use super::*;

	#[test]
	fn default_files_include_current_directory_variants() {
		let files = default_config_files();
		assert!(files.iter().any(|path| path.ends_with(".cmdpal.toml")));
		assert!(files.iter().any(|path| path.ends_with("cmdpal.toml")));
	}

	#[test]
	fn explicit_config_files_are_merged() {
		let dir = tempdir().expect("tempdir");
		let path = dir.path().join("palette.toml");
		fs::write(&path, "[palette]\ntoggle_key = \"k\"\n").expect("write config");

		let mut cli = CliArgs::parse_from(["cmdpal", "--no-config"]);
		cli.config = vec![path];
		let config = build_config(&cli).expect("config builds");

		assert_eq!(
			config.get_string("palette.toggle_key").expect("toggle key"),
			"k"
		);
	}

	#[test]
	fn missing_explicit_config_file_is_an_error() {
		let dir = tempdir().expect("tempdir");
		let mut cli = CliArgs::parse_from(["cmdpal", "--no-config"]);
		cli.config = vec![dir.path().join("absent.toml")];
		assert!(build_config(&cli).is_err());
	}
}
