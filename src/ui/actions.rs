use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::PaletteHost;
use crate::keys::{KeyPhase, Keystroke};

impl PaletteHost {
	/// Feed one terminal key event to the palette, then apply the host's
	/// default handling unless a listener prevented it.
	pub fn handle_key(&mut self, key: KeyEvent) {
		if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
			self.should_quit = true;
			return;
		}

		let mut stroke = Keystroke::new(key);
		let reports = self.palette.handle_key(&mut stroke);
		self.executions.extend(reports);

		if stroke.default_prevented() || stroke.phase != KeyPhase::Down {
			return;
		}

		if self.palette.is_open() {
			self.edit_input(key);
		} else if key.code == KeyCode::Char('q') {
			self.should_quit = true;
		}
	}

	fn edit_input(&mut self, key: KeyEvent) {
		// Chords are shortcuts, not text.
		if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
			return;
		}
		let mut text = self.palette.input().to_string();
		match key.code {
			KeyCode::Char(ch) => text.push(ch),
			KeyCode::Backspace => {
				if text.pop().is_none() {
					return;
				}
			}
			_ => return,
		}
		self.palette.set_input(text);
	}
}
