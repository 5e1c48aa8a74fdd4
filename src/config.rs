use crate::error::PaletteError;
use crate::keys::KeyPhase;

/// Default key that opens the palette.
pub const DEFAULT_TOGGLE_KEY: char = 'p';

/// Construction-time palette settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteConfig {
	/// Key that opens the palette while it is closed.
	pub toggle_key: char,
	/// Key phase the open listener reacts to. Browsers open on key release;
	/// terminals without release reporting need [`KeyPhase::Down`].
	pub open_phase: KeyPhase,
}

impl Default for PaletteConfig {
	fn default() -> Self {
		Self {
			toggle_key: DEFAULT_TOGGLE_KEY,
			open_phase: KeyPhase::Up,
		}
	}
}

impl PaletteConfig {
	/// Build a validated config from textual settings.
	pub fn parse(toggle_key: &str, open_phase: &str) -> Result<Self, PaletteError> {
		let mut chars = toggle_key.chars();
		let key = match (chars.next(), chars.next()) {
			(Some(key), None) => key,
			_ => return Err(PaletteError::InvalidToggleKey(toggle_key.to_string())),
		};
		let config = Self {
			toggle_key: key,
			open_phase: open_phase.parse()?,
		};
		config.validate()?;
		Ok(config)
	}

	pub fn validate(&self) -> Result<(), PaletteError> {
		if self.toggle_key.is_whitespace() || self.toggle_key.is_control() {
			return Err(PaletteError::InvalidToggleKey(self.toggle_key.to_string()));
		}
		Ok(())
	}
}
