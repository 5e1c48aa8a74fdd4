use std::sync::Arc;

use anyhow::{Context, Result};
use cmdpal::{Command, ExecReport, Palette, ParsedInput, ui};
use tracing::info;

use crate::settings::{CommandEntry, ResolvedConfig};

/// Coordinates building and running the interactive palette.
pub(crate) struct PaletteWorkflow {
	palette: Palette,
}

impl PaletteWorkflow {
	pub(crate) fn from_config(config: ResolvedConfig) -> Result<Self> {
		let commands = config.commands.into_iter().map(build_command).collect();
		let palette = Palette::with_defaults(config.palette)
			.context("invalid palette configuration")?
			.with_commands(commands);
		Ok(Self { palette })
	}

	pub(crate) fn run(self) -> Result<Vec<ExecReport>> {
		ui::run(self.palette)
	}
}

/// Configured commands have no behaviour of their own; running one records
/// the invocation and the session output lists it.
fn build_command(entry: CommandEntry) -> Arc<Command> {
	let command = Command::new(entry.id, |command: &Command, input: Option<&ParsedInput>| {
		let args = input.map(|parsed| parsed.args.join(" ")).unwrap_or_default();
		info!(id = %command.id, %args, "command invoked");
	})
	.with_title(entry.title);
	Arc::new(command)
}

#[cfg(test)]
mod tests {
	use cmdpal::{KeyPhase, PaletteConfig, PaletteState};

	use super::*;

	#[test]
	fn workflow_seeds_configured_commands() {
		let config = ResolvedConfig {
			palette: PaletteConfig {
				toggle_key: 'p',
				open_phase: KeyPhase::Down,
			},
			commands: vec![
				CommandEntry {
					id: "build".into(),
					title: "cargo build".into(),
				},
				CommandEntry {
					id: "test".into(),
					title: "test".into(),
				},
			],
			demo_commands: false,
		};

		let workflow = PaletteWorkflow::from_config(config).expect("builds");
		let palette = &workflow.palette;
		assert_eq!(palette.state(), PaletteState::Closed);
		let ids: Vec<_> = palette.commands().iter().map(|c| c.id.as_str()).collect();
		assert_eq!(ids, vec!["build", "test"]);
		assert_eq!(palette.commands()[0].title, "cargo build");
	}
}
