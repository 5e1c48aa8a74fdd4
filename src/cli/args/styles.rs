use std::fmt::Write;

use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use cmdpal::{app_dirs, logging};

/// Version banner listing where settings are read from and logs are written.
pub(super) fn long_version() -> &'static str {
	let mut details = format!("cmdpal {}", env!("CARGO_PKG_VERSION"));
	for (label, dir) in [
		("config directory", app_dirs::get_config_dir()),
		("log directory", app_dirs::get_cache_dir()),
	] {
		let shown = dir.map_or_else(
			|err| format!("unavailable ({err})"),
			|path| path.display().to_string(),
		);
		let _ = write!(details, "\n{label}: {shown}");
	}
	let _ = write!(details, "\nlog filter variable: {}", logging::LOG_FILTER_ENV);

	Box::leak(details.into_boxed_str())
}

/// Help colours: magenta headings, cyan flags, dimmed placeholders.
pub(super) fn cli_styles() -> Styles {
	let accent = AnsiColor::Magenta.on_default();
	Styles::styled()
		.header(accent.effects(Effects::BOLD | Effects::UNDERLINE))
		.usage(accent.effects(Effects::BOLD))
		.literal(AnsiColor::BrightCyan.on_default().effects(Effects::BOLD))
		.placeholder(AnsiColor::BrightBlack.on_default())
		.valid(AnsiColor::Green.on_default())
		.invalid(AnsiColor::Red.on_default().effects(Effects::BOLD))
		.error(AnsiColor::Red.on_default().effects(Effects::BOLD))
}
