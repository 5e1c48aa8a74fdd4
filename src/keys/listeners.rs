use ratatui::crossterm::event::KeyCode;

use super::{KeyListener, KeyOrigin, KeyPhase, Keystroke};
use crate::palette::{Direction, PaletteEvent};

/// Active while the palette is closed: opens it on the toggle key.
#[derive(Debug, Clone, Copy)]
pub struct OpenListener {
	toggle_key: char,
	phase: KeyPhase,
}

impl OpenListener {
	pub fn new(toggle_key: char, phase: KeyPhase) -> Self {
		Self { toggle_key, phase }
	}
}

impl KeyListener for OpenListener {
	fn phase(&self) -> KeyPhase {
		self.phase
	}

	fn on_key(&self, stroke: &mut Keystroke) -> Option<PaletteEvent> {
		if stroke.origin == KeyOrigin::TextInput {
			return None;
		}
		if stroke.code() != KeyCode::Char(self.toggle_key) {
			return None;
		}
		stroke.prevent_default();
		Some(PaletteEvent::Open)
	}
}

/// Active while the palette is open: close, execute and step keys.
#[derive(Debug, Clone, Copy, Default)]
pub struct InteractionListener;

impl KeyListener for InteractionListener {
	fn phase(&self) -> KeyPhase {
		KeyPhase::Down
	}

	fn on_key(&self, stroke: &mut Keystroke) -> Option<PaletteEvent> {
		match stroke.code() {
			KeyCode::Esc => Some(PaletteEvent::Close),
			KeyCode::Enter => Some(PaletteEvent::Exec { id: None }),
			KeyCode::Down => {
				stroke.prevent_default();
				Some(PaletteEvent::Step(Direction::Down))
			}
			KeyCode::Up => {
				stroke.prevent_default();
				Some(PaletteEvent::Step(Direction::Up))
			}
			_ => None,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn toggle_key_opens_and_prevents_default() {
		let listener = OpenListener::new('p', KeyPhase::Up);
		let mut stroke = Keystroke::up(KeyCode::Char('p'));
		assert!(matches!(listener.on_key(&mut stroke), Some(PaletteEvent::Open)));
		assert!(stroke.default_prevented());
	}

	#[test]
	fn text_input_targets_are_ignored() {
		let listener = OpenListener::new('p', KeyPhase::Up);
		let mut stroke = Keystroke::up(KeyCode::Char('p')).with_origin(KeyOrigin::TextInput);
		assert!(listener.on_key(&mut stroke).is_none());
		assert!(!stroke.default_prevented());
	}

	#[test]
	fn other_keys_do_not_open() {
		let listener = OpenListener::new('p', KeyPhase::Up);
		let mut stroke = Keystroke::up(KeyCode::Char('o'));
		assert!(listener.on_key(&mut stroke).is_none());
	}

	#[test]
	fn interaction_keys_map_to_events() {
		let listener = InteractionListener;

		let mut esc = Keystroke::down(KeyCode::Esc);
		assert!(matches!(listener.on_key(&mut esc), Some(PaletteEvent::Close)));
		assert!(!esc.default_prevented());

		let mut enter = Keystroke::down(KeyCode::Enter);
		assert!(matches!(
			listener.on_key(&mut enter),
			Some(PaletteEvent::Exec { id: None })
		));

		let mut down = Keystroke::down(KeyCode::Down);
		assert!(matches!(
			listener.on_key(&mut down),
			Some(PaletteEvent::Step(Direction::Down))
		));
		assert!(down.default_prevented());

		let mut up = Keystroke::down(KeyCode::Up);
		assert!(matches!(
			listener.on_key(&mut up),
			Some(PaletteEvent::Step(Direction::Up))
		));
		assert!(up.default_prevented());

		let mut other = Keystroke::down(KeyCode::Char('x'));
		assert!(listener.on_key(&mut other).is_none());
	}
}
