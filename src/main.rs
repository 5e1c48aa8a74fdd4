mod cli;
mod settings;
mod workflow;

use anyhow::Result;
use cli::{OutputFormat, parse_cli, print_json, print_plain};
use settings::ResolvedConfig;
use tracing::debug;
use workflow::PaletteWorkflow;

fn main() -> Result<()> {
	let cli = parse_cli();

	let log_path = cmdpal::logging::initialize(cli.log_filter.as_deref())?;
	debug!(path = %log_path.display(), "logging initialised");

	let resolved = settings::load(&cli)?;

	if cli.print_config {
		resolved.print_summary();
	}

	run_palette(cli.output, resolved)
}

/// Run the palette session and print what was executed in the chosen format.
fn run_palette(format: OutputFormat, settings: ResolvedConfig) -> Result<()> {
	let workflow = PaletteWorkflow::from_config(settings)?;
	let reports = workflow.run()?;

	match format {
		OutputFormat::Plain => print_plain(&reports),
		OutputFormat::Json => print_json(&reports)?,
	}

	Ok(())
}
