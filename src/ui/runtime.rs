use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event};

use super::PaletteHost;
use crate::palette::{ExecReport, Palette};

/// Run `palette` in the terminal until the user quits; returns every
/// execution performed along the way.
pub fn run(palette: Palette) -> Result<Vec<ExecReport>> {
	let mut host = PaletteHost::new(palette);
	host.run()?;
	Ok(host.into_executions())
}

impl PaletteHost {
	/// Pump the terminal event loop until the user quits.
	pub fn run(&mut self) -> Result<()> {
		let mut terminal = ratatui::init();
		terminal.clear()?;

		let (event_tx, event_rx) = mpsc::channel();
		let event_loop_running = Arc::new(AtomicBool::new(true));
		let event_loop_flag = Arc::clone(&event_loop_running);

		let event_thread = thread::spawn(move || -> Result<()> {
			while event_loop_flag.load(Ordering::Relaxed) {
				if event::poll(Duration::from_millis(50))? {
					let event = event::read()?;
					if event_tx.send(event).is_err() {
						break;
					}
				}
			}
			Ok(())
		});

		let mut pending_events = VecDeque::new();

		let result: Result<()> = 'event_loop: loop {
			loop {
				match event_rx.try_recv() {
					Ok(Event::Resize(_, _)) => {}
					Ok(event) => pending_events.push_back(event),
					Err(mpsc::TryRecvError::Empty) => break,
					Err(mpsc::TryRecvError::Disconnected) => {
						break 'event_loop Err(anyhow!("input event channel disconnected"));
					}
				}
			}

			while let Some(event) = pending_events.pop_front() {
				if let Event::Key(key) = event {
					self.handle_key(key);
				}
				if self.should_quit {
					break;
				}
			}

			if self.should_quit {
				break Ok(());
			}

			if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
				break Err(err.into());
			}

			thread::sleep(Duration::from_millis(16));
		};

		ratatui::restore();

		event_loop_running.store(false, Ordering::Relaxed);
		match event_thread.join() {
			Ok(join_result) => join_result?,
			Err(err) => std::panic::resume_unwind(err),
		}

		result
	}
}
