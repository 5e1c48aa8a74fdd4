use crate::palette::{ExecReport, Palette};

/// Owns a [`Palette`] for the lifetime of the terminal session.
pub struct PaletteHost {
	pub(crate) palette: Palette,
	pub(crate) executions: Vec<ExecReport>,
	pub(crate) should_quit: bool,
}

impl PaletteHost {
	pub fn new(palette: Palette) -> Self {
		Self {
			palette,
			executions: Vec::new(),
			should_quit: false,
		}
	}

	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Every execution carried out so far, oldest first.
	pub fn executions(&self) -> &[ExecReport] {
		&self.executions
	}

	pub fn into_executions(self) -> Vec<ExecReport> {
		self.executions
	}

	pub fn should_quit(&self) -> bool {
		self.should_quit
	}

	/// Index of the selected command within the results, if any.
	pub(crate) fn selected_index(&self) -> Option<usize> {
		let selected = self.palette.selected_id();
		self.palette
			.results()
			.position(|command| command.id == selected)
	}
}
