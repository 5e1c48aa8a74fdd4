use std::collections::VecDeque;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info, trace, warn};

use super::context::Context;
use super::event::{Direction, PaletteEvent};
use super::state::PaletteState;
use super::strategy::Strategies;
use super::transition::{Effect, Snapshot, Transition, transition};
use crate::command::{Command, ParsedInput, ensure_unique_ids, find_command};
use crate::config::PaletteConfig;
use crate::error::PaletteError;
use crate::keys::{
	InteractionListener, KeyBus, Keystroke, OpenListener, Subscription, SubscriptionId,
};

/// Whether an execution found its command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ExecOutcome {
	Executed,
	/// No command with the resolved id was in the list; nothing ran.
	NotFound,
}

/// Record of one pass through `executing`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExecReport {
	pub id: String,
	pub input: Option<ParsedInput>,
	pub outcome: ExecOutcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScopeKind {
	Open,
	Interaction,
}

impl ScopeKind {
	fn for_state(state: PaletteState) -> Self {
		match state {
			PaletteState::Closed => Self::Open,
			PaletteState::Open(_) => Self::Interaction,
		}
	}
}

struct ListenerScope {
	kind: ScopeKind,
	subscription: Subscription,
}

/// The palette: drives the pure transition function and performs its effects.
///
/// Events are processed strictly one at a time. Key listeners are held as
/// scoped subscriptions: the open listener only while closed, the interaction
/// listener only while open.
pub struct Palette {
	snapshot: Snapshot,
	strategies: Strategies,
	config: PaletteConfig,
	bus: KeyBus,
	scope: Option<ListenerScope>,
	queue: VecDeque<PaletteEvent>,
}

impl Palette {
	pub fn new(
		config: PaletteConfig,
		strategies: Strategies,
		bus: KeyBus,
	) -> Result<Self, PaletteError> {
		config.validate()?;
		let mut palette = Self {
			snapshot: Snapshot::new(config.toggle_key),
			strategies,
			config,
			bus,
			scope: None,
			queue: VecDeque::new(),
		};
		palette.reconcile_listeners();
		Ok(palette)
	}

	/// Seed the command list the palette starts with.
	///
	/// A closed palette ignores NEW_COMMANDS, so hosts that know their
	/// commands up front hand them over here.
	#[must_use]
	pub fn with_commands(mut self, commands: Vec<Arc<Command>>) -> Self {
		self.snapshot.context.commands = commands;
		self
	}

	/// Palette with the fuzzy ranker, word parser and a private key bus.
	pub fn with_defaults(config: PaletteConfig) -> Result<Self, PaletteError> {
		Self::new(config, Strategies::default(), KeyBus::new())
	}

	pub fn bus(&self) -> &KeyBus {
		&self.bus
	}

	pub fn config(&self) -> &PaletteConfig {
		&self.config
	}

	pub fn state(&self) -> PaletteState {
		self.snapshot.state
	}

	pub fn is_open(&self) -> bool {
		self.snapshot.state.is_open()
	}

	pub fn context(&self) -> &Context {
		&self.snapshot.context
	}

	pub fn snapshot(&self) -> &Snapshot {
		&self.snapshot
	}

	pub fn input(&self) -> &str {
		self.snapshot.context.input()
	}

	pub fn commands(&self) -> &[Arc<Command>] {
		self.snapshot.context.commands()
	}

	pub fn result_ids(&self) -> &[String] {
		self.snapshot.context.result_ids()
	}

	pub fn selected_id(&self) -> &str {
		self.snapshot.context.selected_id()
	}

	/// Commands in result order, skipping ids no longer in the command list.
	pub fn results(&self) -> impl Iterator<Item = &Arc<Command>> {
		let commands = self.commands();
		self.result_ids()
			.iter()
			.filter_map(move |id| find_command(commands, id))
	}

	/// Subscription currently held for this palette's listener.
	pub fn subscription_id(&self) -> Option<SubscriptionId> {
		self.scope.as_ref().map(|scope| scope.subscription.id())
	}

	/// Live subscriptions this palette holds on its key bus. Other palettes
	/// sharing the bus are not counted.
	pub fn subscription_count(&self) -> usize {
		self.subscription_id()
			.filter(|id| self.bus.contains(*id))
			.map_or(0, |_| 1)
	}

	/// Route a host keystroke through this palette's active listener.
	///
	/// Listeners other palettes registered on the same bus do not see the
	/// keystroke; hosts that broadcast with [`KeyBus::emit`] route the tagged
	/// events by [`Palette::subscription_id`] instead.
	pub fn handle_key(&mut self, stroke: &mut Keystroke) -> Vec<ExecReport> {
		let Some(id) = self.subscription_id() else {
			return Vec::new();
		};
		match self.bus.emit_to(id, stroke) {
			Some(event) => self.dispatch(event),
			None => Vec::new(),
		}
	}

	/// Process `event` and everything it triggers to completion.
	pub fn dispatch(&mut self, event: PaletteEvent) -> Vec<ExecReport> {
		self.queue.push_back(event);
		let mut reports = Vec::new();

		while let Some(event) = self.queue.pop_front() {
			let kind = event.kind();
			let from = self.snapshot.state;
			let Transition {
				snapshot,
				visited,
				effects,
				handled,
			} = transition(&self.snapshot, event, &self.strategies);

			if !handled {
				trace!(event = kind, state = %from, "event ignored");
				continue;
			}

			self.snapshot = snapshot;
			debug!(
				event = kind,
				from = %from,
				to = %self.snapshot.state,
				path = ?visited,
				results = self.snapshot.context.result_ids.len(),
				selected = %self.snapshot.context.selected_id,
				"palette transition"
			);
			self.reconcile_listeners();

			for effect in effects {
				match effect {
					Effect::Execute { id } => reports.push(self.execute(id)),
				}
			}
		}

		reports
	}

	pub fn open(&mut self) {
		self.dispatch(PaletteEvent::Open);
	}

	pub fn close(&mut self) {
		self.dispatch(PaletteEvent::Close);
	}

	pub fn set_input(&mut self, input: impl Into<String>) {
		self.dispatch(PaletteEvent::Input(input.into()));
	}

	pub fn set_commands(&mut self, commands: Vec<Arc<Command>>) {
		self.dispatch(PaletteEvent::NewCommands(commands));
	}

	/// Like [`Palette::set_commands`], but rejects lists with duplicate ids.
	pub fn set_commands_checked(
		&mut self,
		commands: Vec<Arc<Command>>,
	) -> Result<(), PaletteError> {
		ensure_unique_ids(&commands)?;
		self.set_commands(commands);
		Ok(())
	}

	pub fn select(&mut self, id: impl Into<String>) {
		self.dispatch(PaletteEvent::Select { id: id.into() });
	}

	pub fn step(&mut self, direction: Direction) {
		self.dispatch(PaletteEvent::Step(direction));
	}

	/// Execute `id`, or the current selection when `id` is `None` or empty.
	pub fn exec(&mut self, id: Option<String>) -> Option<ExecReport> {
		self.dispatch(PaletteEvent::Exec { id }).into_iter().next()
	}

	fn execute(&mut self, id: Option<String>) -> ExecReport {
		// An empty id means "none", like an empty selection.
		let id = id
			.filter(|id| !id.is_empty())
			.unwrap_or_else(|| self.snapshot.context.selected_id.clone());
		let input = self.strategies.parser().parse(&self.snapshot.context.input);

		let outcome = match find_command(&self.snapshot.context.commands, &id) {
			Some(command) => {
				info!(id = %id, "executing command");
				command.execute(input.as_ref());
				ExecOutcome::Executed
			}
			None => {
				warn!(id = %id, "no command with this id; execution skipped");
				ExecOutcome::NotFound
			}
		};

		self.queue.push_back(PaletteEvent::ExecDone {
			id: id.clone(),
			input: input.clone(),
		});

		ExecReport { id, input, outcome }
	}

	/// Hold exactly the listener the current top-level state calls for.
	fn reconcile_listeners(&mut self) {
		let wanted = ScopeKind::for_state(self.snapshot.state);
		if self.scope.as_ref().is_some_and(|scope| scope.kind == wanted) {
			return;
		}

		// Release before acquiring so the two listeners never overlap.
		self.scope = None;
		let subscription = match wanted {
			ScopeKind::Open => self.bus.subscribe(OpenListener::new(
				self.config.toggle_key,
				self.config.open_phase,
			)),
			ScopeKind::Interaction => self.bus.subscribe(InteractionListener),
		};
		trace!(scope = ?wanted, "listener subscribed");
		self.scope = Some(ListenerScope {
			kind: wanted,
			subscription,
		});
	}
}
