//! Configuration loading and resolution for the `cmdpal` binary.
//!
//! Config files, `CMDPAL__*` environment variables and CLI flags are layered
//! in that order, then resolved into a [`ResolvedConfig`].

mod raw;
mod resolved;
mod sources;

use anyhow::{Context, Result};
use tracing::debug;

use crate::cli::CliArgs;
use raw::RawConfig;

pub use resolved::{CommandEntry, ResolvedConfig};

/// Resolve the effective settings for one run of the binary.
pub fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
	let mut raw: RawConfig = sources::build_config(cli)?
		.try_deserialize()
		.context("failed to deserialize configuration")?;
	raw.apply_cli_overrides(cli);

	let resolved = raw.resolve()?;
	debug!(
		toggle_key = %resolved.palette.toggle_key,
		open_phase = %resolved.palette.open_phase,
		commands = resolved.commands.len(),
		demo = resolved.demo_commands,
		"settings resolved"
	);
	Ok(resolved)
}
