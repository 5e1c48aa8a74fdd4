use thiserror::Error;

/// Errors raised while configuring a palette or feeding it malformed host data.
///
/// The state machine itself never fails: rejected events are simply ignored.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaletteError {
	/// A step direction other than `up` or `down` was supplied.
	#[error("invalid step direction '{0}' (expected 'up' or 'down')")]
	InvalidDirection(String),

	/// The configured toggle key is not a single printable character.
	#[error("toggle key must be a single printable character, got '{0}'")]
	InvalidToggleKey(String),

	/// The open phase is neither `up` nor `down`.
	#[error("invalid open phase '{0}' (expected 'up' or 'down')")]
	InvalidOpenPhase(String),

	/// Two commands in one replacement list share an identifier.
	#[error("command id '{id}' appears more than once")]
	DuplicateCommandId { id: String },
}
