use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::command::{Command, ParsedInput};
use crate::error::PaletteError;

/// Direction of a selection step through the result list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	Up,
	Down,
}

impl FromStr for Direction {
	type Err = PaletteError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"up" => Ok(Self::Up),
			"down" => Ok(Self::Down),
			_ => Err(PaletteError::InvalidDirection(value.to_string())),
		}
	}
}

impl fmt::Display for Direction {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Up => f.write_str("up"),
			Self::Down => f.write_str("down"),
		}
	}
}

/// Signals accepted by the palette state machine.
#[derive(Debug, Clone)]
pub enum PaletteEvent {
	Open,
	Close,
	/// Execute `id`, or the current selection when `id` is `None` or empty.
	Exec { id: Option<String> },
	/// Emitted by the runner once an execution has been carried out.
	ExecDone {
		id: String,
		input: Option<ParsedInput>,
	},
	Select { id: String },
	Step(Direction),
	/// Wholesale replacement of the command list.
	NewCommands(Vec<Arc<Command>>),
	Input(String),
}

impl PaletteEvent {
	/// Short name used in logs.
	pub fn kind(&self) -> &'static str {
		match self {
			Self::Open => "OPEN",
			Self::Close => "CLOSE",
			Self::Exec { .. } => "EXEC",
			Self::ExecDone { .. } => "EXEC_DONE",
			Self::Select { .. } => "SELECT",
			Self::Step(_) => "STEP",
			Self::NewCommands(_) => "NEW_COMMANDS",
			Self::Input(_) => "INPUT",
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_known_directions() {
		assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
		assert_eq!(" DOWN ".parse::<Direction>(), Ok(Direction::Down));
	}

	#[test]
	fn unknown_direction_fails_fast() {
		assert_eq!(
			"left".parse::<Direction>(),
			Err(PaletteError::InvalidDirection("left".into()))
		);
	}
}
