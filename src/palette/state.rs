use std::fmt;

/// Top-level palette state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteState {
	#[default]
	Closed,
	Open(OpenState),
}

/// Nested states of [`PaletteState::Open`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OpenState {
	/// Selection follows the first result; entered whenever the palette opens.
	#[default]
	AutoSelected,
	/// The user moved the selection explicitly.
	Selected,
	/// Transient branch that re-checks the selection after results change.
	SelectionValidation,
	Executing,
}

impl PaletteState {
	pub fn is_open(self) -> bool {
		matches!(self, Self::Open(_))
	}

	pub fn open_state(self) -> Option<OpenState> {
		match self {
			Self::Open(inner) => Some(inner),
			Self::Closed => None,
		}
	}
}

impl fmt::Display for PaletteState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Closed => f.write_str("closed"),
			Self::Open(inner) => write!(f, "open.{inner}"),
		}
	}
}

impl fmt::Display for OpenState {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			Self::AutoSelected => "autoSelected",
			Self::Selected => "selected",
			Self::SelectionValidation => "selectionValidation",
			Self::Executing => "executing",
		};
		f.write_str(name)
	}
}
