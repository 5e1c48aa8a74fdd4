use std::collections::HashSet;

use anyhow::{Context, Result, ensure};
use cmdpal::config::{DEFAULT_TOGGLE_KEY, PaletteConfig};
use serde::Deserialize;

use crate::cli::CliArgs;

use super::resolved::{CommandEntry, ResolvedConfig};


/// Open phase used by the terminal host unless configured otherwise.
const DEFAULT_OPEN_PHASE: &str = "down";

/// Commands offered when the configuration does not name any.
const DEMO_COMMANDS: &[(&str, &str)] = &[
	("open", "open file"),
	("save", "save all"),
	("reload", "reload window"),
	("split", "split editor"),
	("theme", "toggle theme"),
	("quit", "quit"),
];

/// Mirror of the configuration file representation before CLI overrides and
/// validation are applied.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(super) struct RawConfig {
	palette: PaletteSection,
	commands: Option<Vec<CommandSection>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct PaletteSection {
	toggle_key: Option<String>,
	open_phase: Option<String>,
}

/// One `[[commands]]` table.
#[derive(Debug, Clone, Deserialize)]
struct CommandSection {
	id: String,
	title: Option<String>,
}

impl RawConfig {
	/// Apply CLI overrides on top of the raw configuration values.
	pub(super) fn apply_cli_overrides(&mut self, cli: &CliArgs) {
		if let Some(key) = cli.toggle_key.clone() {
			self.palette.toggle_key = Some(key);
		}
		if let Some(phase) = cli.open_phase {
			self.palette.open_phase = Some(phase.as_str().to_string());
		}
	}

	/// Validate the merged values and fill in defaults.
	pub(super) fn resolve(self) -> Result<ResolvedConfig> {
		let toggle_key = self
			.palette
			.toggle_key
			.unwrap_or_else(|| DEFAULT_TOGGLE_KEY.to_string());
		let open_phase = self
			.palette
			.open_phase
			.unwrap_or_else(|| DEFAULT_OPEN_PHASE.to_string());
		let palette = PaletteConfig::parse(toggle_key.trim(), open_phase.trim())
			.context("invalid [palette] settings")?;

		let (commands, demo_commands) = match self.commands {
			Some(commands) if !commands.is_empty() => (sanitize_commands(commands)?, false),
			_ => (demo_commands(), true),
		};

		Ok(ResolvedConfig {
			palette,
			commands,
			demo_commands,
		})
	}
}

fn sanitize_commands(commands: Vec<CommandSection>) -> Result<Vec<CommandEntry>> {
	let mut seen = HashSet::with_capacity(commands.len());
	let mut entries = Vec::with_capacity(commands.len());
	for command in commands {
		let id = command.id.trim().to_string();
		ensure!(!id.is_empty(), "command ids must not be empty");
		ensure!(seen.insert(id.clone()), "command id '{id}' is configured twice");
		let title = command
			.title
			.map(|title| title.trim().to_string())
			.filter(|title| !title.is_empty())
			.unwrap_or_else(|| id.clone());
		entries.push(CommandEntry { id, title });
	}
	Ok(entries)
}

fn demo_commands() -> Vec<CommandEntry> {
	DEMO_COMMANDS
		.iter()
		.map(|(id, title)| CommandEntry {
			id: (*id).to_string(),
			title: (*title).to_string(),
		})
		.collect()
}
