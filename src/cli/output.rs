use anyhow::Result;
use cmdpal::{ExecOutcome, ExecReport};
use serde_json::json;

/// Print one line per execution performed during the session.
pub(crate) fn print_plain(reports: &[ExecReport]) {
	if reports.is_empty() {
		println!("No commands executed");
		return;
	}

	for report in reports {
		let args = report
			.input
			.as_ref()
			.map(|input| input.args.join(" "))
			.unwrap_or_default();
		match report.outcome {
			ExecOutcome::Executed if args.is_empty() => println!("{}", report.id),
			ExecOutcome::Executed => println!("{} {args}", report.id),
			ExecOutcome::NotFound => println!("{} (not found)", report.id),
		}
	}
}

/// Format the executions as a JSON string.
pub(crate) fn format_reports_json(reports: &[ExecReport]) -> Result<String> {
	let payload = json!({
		"executed": reports.len(),
		"executions": reports,
	});

	Ok(serde_json::to_string_pretty(&payload)?)
}

/// Print the JSON representation of the executions.
pub(crate) fn print_json(reports: &[ExecReport]) -> Result<()> {
	println!("{}", format_reports_json(reports)?);
	Ok(())
}
