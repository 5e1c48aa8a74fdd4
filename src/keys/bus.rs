use std::cell::RefCell;
use std::rc::{Rc, Weak};

use super::{KeyPhase, Keystroke};
use crate::palette::PaletteEvent;

/// Translates keystrokes into palette events.
pub trait KeyListener {
	/// The key phase this listener subscribes to.
	fn phase(&self) -> KeyPhase;

	/// Inspect a keystroke, optionally preventing its default handling.
	fn on_key(&self, stroke: &mut Keystroke) -> Option<PaletteEvent>;
}

/// Identifies one registration on a [`KeyBus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

#[derive(Default)]
struct Registry {
	next_id: u64,
	listeners: Vec<(SubscriptionId, Rc<dyn KeyListener>)>,
}

/// The host's keystroke stream.
///
/// Cloning the bus yields another handle to the same listener registry.
#[derive(Clone, Default)]
pub struct KeyBus {
	registry: Rc<RefCell<Registry>>,
}

impl KeyBus {
	pub fn new() -> Self {
		Self::default()
	}

	/// Register `listener` until the returned guard is dropped.
	#[must_use = "dropping the subscription unsubscribes the listener immediately"]
	pub fn subscribe(&self, listener: impl KeyListener + 'static) -> Subscription {
		let listener: Rc<dyn KeyListener> = Rc::new(listener);
		let mut registry = self.registry.borrow_mut();
		let id = SubscriptionId(registry.next_id);
		registry.next_id += 1;
		registry.listeners.push((id, listener));
		Subscription {
			id,
			registry: Rc::downgrade(&self.registry),
		}
	}

	/// Deliver `stroke` to every listener registered for its phase.
	///
	/// Each event is tagged with the subscription whose listener produced it,
	/// so hosts sharing one bus between palettes can route it.
	pub fn emit(&self, stroke: &mut Keystroke) -> Vec<(SubscriptionId, PaletteEvent)> {
		self.deliver(stroke, |_| true)
	}

	/// Deliver `stroke` to the listener behind `id` only.
	pub fn emit_to(&self, id: SubscriptionId, stroke: &mut Keystroke) -> Option<PaletteEvent> {
		self.deliver(stroke, |candidate| candidate == id)
			.pop()
			.map(|(_, event)| event)
	}

	fn deliver(
		&self,
		stroke: &mut Keystroke,
		accepts: impl Fn(SubscriptionId) -> bool,
	) -> Vec<(SubscriptionId, PaletteEvent)> {
		// Listeners run outside the registry borrow.
		let listeners: Vec<(SubscriptionId, Rc<dyn KeyListener>)> = self
			.registry
			.borrow()
			.listeners
			.iter()
			.filter(|(id, listener)| accepts(*id) && listener.phase() == stroke.phase)
			.map(|(id, listener)| (*id, Rc::clone(listener)))
			.collect();

		listeners
			.iter()
			.filter_map(|(id, listener)| listener.on_key(stroke).map(|event| (*id, event)))
			.collect()
	}

	/// Whether `id` is still registered.
	pub fn contains(&self, id: SubscriptionId) -> bool {
		self.registry
			.borrow()
			.listeners
			.iter()
			.any(|(candidate, _)| *candidate == id)
	}

	/// Number of live subscriptions.
	pub fn len(&self) -> usize {
		self.registry.borrow().listeners.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

/// Keeps a listener registered on a [`KeyBus`]; unsubscribes on drop.
pub struct Subscription {
	id: SubscriptionId,
	registry: Weak<RefCell<Registry>>,
}

impl Subscription {
	pub fn id(&self) -> SubscriptionId {
		self.id
	}
}

impl Drop for Subscription {
	fn drop(&mut self) {
		if let Some(registry) = self.registry.upgrade() {
			registry
				.borrow_mut()
				.listeners
				.retain(|(id, _)| *id != self.id);
		}
	}
}
