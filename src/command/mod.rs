//! Commands supplied by the host and the parsed payload they execute with.
//!
//! The palette never creates or destroys commands; it only holds shared
//! references to whatever list the host pushed in last.

mod parse;

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use crate::error::PaletteError;

pub use parse::{InputParser, ParsedInput, WordParser};

/// Execution effect attached to a [`Command`].
pub trait CommandAction: Send + Sync {
	/// Run the command. `input` is the parsed search text, if it parsed.
	fn execute(&self, command: &Command, input: Option<&ParsedInput>);
}

impl<F> CommandAction for F
where
	F: Fn(&Command, Option<&ParsedInput>) + Send + Sync,
{
	fn execute(&self, command: &Command, input: Option<&ParsedInput>) {
		self(command, input)
	}
}

/// An identifiable, executable unit supplied by the host application.
#[derive(Clone)]
pub struct Command {
	pub id: String,
	pub title: String,
	action: Arc<dyn CommandAction>,
}

impl Command {
	/// Create a command whose title is its id.
	pub fn new(id: impl Into<String>, action: impl CommandAction + 'static) -> Self {
		let id = id.into();
		Self {
			title: id.clone(),
			id,
			action: Arc::new(action),
		}
	}

	/// Create a command that does nothing when executed.
	pub fn noop(id: impl Into<String>) -> Self {
		Self::new(id, |_: &Command, _: Option<&ParsedInput>| {})
	}

	#[must_use]
	pub fn with_title(mut self, title: impl Into<String>) -> Self {
		self.title = title.into();
		self
	}

	/// Text the ranking function matches against.
	pub fn search_text(&self) -> &str {
		&self.title
	}

	pub fn execute(&self, input: Option<&ParsedInput>) {
		self.action.execute(self, input);
	}
}

impl fmt::Debug for Command {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Command")
			.field("id", &self.id)
			.field("title", &self.title)
			.finish_non_exhaustive()
	}
}

/// Look up a command by id within a command list.
pub fn find_command<'a>(commands: &'a [Arc<Command>], id: &str) -> Option<&'a Arc<Command>> {
	commands.iter().find(|command| command.id == id)
}

/// Reject command lists in which an id appears twice.
pub fn ensure_unique_ids(commands: &[Arc<Command>]) -> Result<(), PaletteError> {
	let mut seen = HashSet::with_capacity(commands.len());
	for command in commands {
		if !seen.insert(command.id.as_str()) {
			return Err(PaletteError::DuplicateCommandId {
				id: command.id.clone(),
			});
		}
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use super::*;

	#[test]
	fn execute_passes_command_and_input_to_action() {
		let seen = Arc::new(Mutex::new(Vec::new()));
		let sink = Arc::clone(&seen);
		let command = Command::new("open", move |command: &Command, input: Option<&ParsedInput>| {
			let args = input.map(|parsed| parsed.args.join(",")).unwrap_or_default();
			sink.lock().unwrap().push(format!("{}:{args}", command.id));
		});

		command.execute(Some(&ParsedInput::new("open", ["a", "b"])));
		command.execute(None);

		assert_eq!(*seen.lock().unwrap(), vec!["open:a,b", "open:"]);
	}

	#[test]
	fn title_defaults_to_id() {
		let command = Command::noop("reload");
		assert_eq!(command.search_text(), "reload");
		let command = command.with_title("Reload window");
		assert_eq!(command.search_text(), "Reload window");
	}

	#[test]
	fn duplicate_ids_are_rejected() {
		let commands = vec![
			Arc::new(Command::noop("a")),
			Arc::new(Command::noop("b")),
			Arc::new(Command::noop("a")),
		];
		assert_eq!(
			ensure_unique_ids(&commands),
			Err(PaletteError::DuplicateCommandId { id: "a".into() })
		);
		assert!(ensure_unique_ids(&commands[..2]).is_ok());
	}

	#[test]
	fn find_command_matches_by_id() {
		let commands = vec![Arc::new(Command::noop("a")), Arc::new(Command::noop("b"))];
		assert_eq!(find_command(&commands, "b").map(|c| c.id.as_str()), Some("b"));
		assert!(find_command(&commands, "c").is_none());
	}
}
