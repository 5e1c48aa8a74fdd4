use cmdpal::PaletteConfig;

/// A command as named in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
	pub id: String,
	pub title: String,
}

/// Application-ready configuration derived from user input, config files and
/// defaults.
#[derive(Debug)]
pub struct ResolvedConfig {
	pub palette: PaletteConfig,
	pub commands: Vec<CommandEntry>,
	/// The built-in command set is in use because none were configured.
	pub demo_commands: bool,
}

impl ResolvedConfig {
	/// Print a human readable summary of the effective configuration.
	pub fn print_summary(&self) {
		println!("Effective configuration:");
		println!("  Toggle key: {}", self.palette.toggle_key);
		println!("  Open phase: {}", self.palette.open_phase);
		if self.demo_commands {
			println!("  Commands ({}, built-in):", self.commands.len());
		} else {
			println!("  Commands ({}):", self.commands.len());
		}
		for command in &self.commands {
			if command.title == command.id {
				println!("    {}", command.id);
			} else {
				println!("    {} - {}", command.id, command.title);
			}
		}
	}
}
