use std::path::PathBuf;

use clap::{ArgAction, ColorChoice, Parser};

use super::options::{OpenPhaseArg, OutputFormat};
use super::styles::{cli_styles, long_version};

/// Command-line arguments accepted by the `cmdpal` binary.
#[derive(Parser, Debug)]
#[command(
	name = "cmdpal",
	version,
	long_version = long_version(),
	about = "Keyboard-driven command palette for the terminal",
	color = ColorChoice::Auto,
	styles = cli_styles()
)]
pub(crate) struct CliArgs {
	#[arg(
		short,
		long = "config",
		value_name = "FILE",
		env = "CMDPAL_CONFIG",
		action = ArgAction::Append,
		help = "Additional configuration file to merge (default: none)"
	)]
	pub(crate) config: Vec<PathBuf>,
	#[arg(
		short = 'n',
		long = "no-config",
		help = "Skip loading default configuration files (default: disabled)"
	)]
	pub(crate) no_config: bool,
	#[arg(
		short = 'k',
		long = "toggle-key",
		value_name = "KEY",
		help = "Key that opens the palette (default: p)"
	)]
	pub(crate) toggle_key: Option<String>,
	#[arg(
		long = "open-phase",
		value_enum,
		help = "Open on key press or key release (default: down)"
	)]
	pub(crate) open_phase: Option<OpenPhaseArg>,
	#[arg(
		short = 'p',
		long = "print-config",
		help = "Print the resolved configuration before running (default: disabled)"
	)]
	pub(crate) print_config: bool,
	#[arg(
		long = "log-filter",
		value_name = "FILTER",
		help = "Tracing filter directive for the log file (default: CMDPAL_LOG or warn)"
	)]
	pub(crate) log_filter: Option<String>,
	#[arg(short = 'o', long = "output", value_enum, default_value_t = OutputFormat::Plain, help = "Choose how to print executed commands")]
	pub(crate) output: OutputFormat,
}
