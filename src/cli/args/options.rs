use clap::ValueEnum;

/// Key phase that opens the palette, as accepted on the command line.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OpenPhaseArg {
	Down,
	Up,
}

impl OpenPhaseArg {
	/// Return the string representation consumed by configuration loading.
	pub(crate) fn as_str(self) -> &'static str {
		match self {
			OpenPhaseArg::Down => "down",
			OpenPhaseArg::Up => "up",
		}
	}
}

/// Output formats supported by the CLI utility.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
	Plain,
	Json,
}
