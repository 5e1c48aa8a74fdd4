use super::context::Context;
use super::event::PaletteEvent;
use super::state::{OpenState, PaletteState};
use super::strategy::Strategies;

/// The palette's state together with its context.
#[derive(Debug, Clone)]
pub struct Snapshot {
	pub state: PaletteState,
	pub context: Context,
}

impl Snapshot {
	pub fn new(toggle_key: char) -> Self {
		Self {
			state: PaletteState::Closed,
			context: Context::new(toggle_key),
		}
	}
}

/// Side effects requested by a transition; the runner carries them out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
	/// `executing` was entered. `id` overrides the current selection.
	Execute { id: Option<String> },
}

/// Result of feeding one event to [`transition`].
#[derive(Debug, Clone)]
pub struct Transition {
	pub snapshot: Snapshot,
	/// Every state entered, in order, including transient ones.
	pub visited: Vec<PaletteState>,
	pub effects: Vec<Effect>,
	/// `false` when no transition matched or its guard failed.
	pub handled: bool,
}

/// Pure, total transition function.
///
/// Never mutates `current`. Unmatched events and failed guards come back with
/// `handled == false` and an unchanged snapshot.
pub fn transition(current: &Snapshot, event: PaletteEvent, strategies: &Strategies) -> Transition {
	use OpenState::*;
	use PaletteState::{Closed, Open};

	let mut context = current.context.clone();
	let mut exec_target = None;

	let target = match (current.state, event) {
		(Closed, PaletteEvent::Open) => Some(Open(AutoSelected)),
		(Closed, _) => None,

		(Open(_), PaletteEvent::Close) => Some(Closed),
		(Open(_), PaletteEvent::Exec { id }) => {
			if context.is_executable(strategies.parser()) {
				exec_target = Some(id);
				Some(Open(Executing))
			} else {
				None
			}
		}
		(Open(_), PaletteEvent::Select { id }) => {
			context.select(id);
			Some(Open(Selected))
		}

		(Open(Executing), PaletteEvent::ExecDone { .. }) => {
			context.clear_input_and_results();
			Some(Closed)
		}

		(Open(AutoSelected | Selected), PaletteEvent::Step(direction)) => {
			context.step(direction);
			Some(Open(Selected))
		}
		(Open(AutoSelected), PaletteEvent::NewCommands(commands)) => {
			context.set_commands(commands, strategies.ranker());
			Some(Open(AutoSelected))
		}
		(Open(AutoSelected), PaletteEvent::Input(input)) => {
			context.set_input(input, strategies.ranker());
			Some(Open(AutoSelected))
		}
		(Open(Selected), PaletteEvent::NewCommands(commands)) => {
			context.set_commands(commands, strategies.ranker());
			Some(Open(SelectionValidation))
		}
		(Open(Selected), PaletteEvent::Input(input)) => {
			context.set_input(input, strategies.ranker());
			Some(Open(SelectionValidation))
		}

		(Open(_), _) => None,
	};

	let Some(target) = target else {
		return Transition {
			snapshot: current.clone(),
			visited: Vec::new(),
			effects: Vec::new(),
			handled: false,
		};
	};

	let mut visited = Vec::new();
	let mut effects = Vec::new();
	let state = enter(target, &mut context, &mut visited);
	if state == Open(Executing) {
		effects.push(Effect::Execute {
			id: exec_target.flatten(),
		});
	}

	Transition {
		snapshot: Snapshot { state, context },
		visited,
		effects,
		handled: true,
	}
}

/// Run entry actions and resolve eventless branches until a stable state.
fn enter(
	target: PaletteState,
	context: &mut Context,
	visited: &mut Vec<PaletteState>,
) -> PaletteState {
	let mut state = target;
	loop {
		visited.push(state);
		match state {
			PaletteState::Open(OpenState::AutoSelected) => {
				context.select_first();
				return state;
			}
			PaletteState::Open(OpenState::SelectionValidation) => {
				state = if context.selection_is_valid() {
					PaletteState::Open(OpenState::Selected)
				} else {
					PaletteState::Open(OpenState::AutoSelected)
				};
			}
			_ => return state,
		}
	}
}
