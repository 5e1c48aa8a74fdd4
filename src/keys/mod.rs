//! Keystroke plumbing between the host's key stream and the palette.
//!
//! The host pushes every keystroke into a [`KeyBus`]. Listeners subscribed to
//! the bus translate the keystrokes they care about into [`PaletteEvent`]s;
//! each subscription lives exactly as long as the [`Subscription`] guard the
//! palette holds for its current state.
//!
//! [`PaletteEvent`]: crate::palette::PaletteEvent

mod bus;
mod listeners;

use std::fmt;
use std::str::FromStr;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PaletteError;

pub use bus::{KeyBus, KeyListener, Subscription, SubscriptionId};
pub use listeners::{InteractionListener, OpenListener};

/// Whether a keystroke is a key press or a key release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPhase {
	Down,
	Up,
}

impl From<KeyEventKind> for KeyPhase {
	fn from(kind: KeyEventKind) -> Self {
		match kind {
			KeyEventKind::Release => Self::Up,
			KeyEventKind::Press | KeyEventKind::Repeat => Self::Down,
		}
	}
}

impl FromStr for KeyPhase {
	type Err = PaletteError;

	fn from_str(value: &str) -> Result<Self, Self::Err> {
		match value.trim().to_ascii_lowercase().as_str() {
			"down" | "press" => Ok(Self::Down),
			"up" | "release" => Ok(Self::Up),
			_ => Err(PaletteError::InvalidOpenPhase(value.to_string())),
		}
	}
}

impl fmt::Display for KeyPhase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Down => f.write_str("down"),
			Self::Up => f.write_str("up"),
		}
	}
}

/// What kind of element the keystroke was aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyOrigin {
	/// A text-entry element; the open listener leaves these alone.
	TextInput,
	#[default]
	Other,
}

/// A keystroke travelling through the [`KeyBus`].
#[derive(Debug, Clone)]
pub struct Keystroke {
	pub event: KeyEvent,
	pub phase: KeyPhase,
	pub origin: KeyOrigin,
	default_prevented: bool,
}

impl Keystroke {
	pub fn new(event: KeyEvent) -> Self {
		Self {
			phase: event.kind.into(),
			event,
			origin: KeyOrigin::Other,
			default_prevented: false,
		}
	}

	/// A key press without modifiers.
	pub fn down(code: KeyCode) -> Self {
		Self::new(KeyEvent::new(code, KeyModifiers::NONE))
	}

	/// A key release without modifiers.
	pub fn up(code: KeyCode) -> Self {
		Self::new(KeyEvent::new_with_kind(
			code,
			KeyModifiers::NONE,
			KeyEventKind::Release,
		))
	}

	#[must_use]
	pub fn with_origin(mut self, origin: KeyOrigin) -> Self {
		self.origin = origin;
		self
	}

	pub fn code(&self) -> KeyCode {
		self.event.code
	}

	/// Tell the host not to apply its own handling to this keystroke.
	pub fn prevent_default(&mut self) {
		self.default_prevented = true;
	}

	pub fn default_prevented(&self) -> bool {
		self.default_prevented
	}
}
