use std::sync::Arc;

use super::event::Direction;
use crate::command::{Command, InputParser};
use crate::search::Ranker;

/// Mutable data carried alongside the palette state.
#[derive(Debug, Clone)]
pub struct Context {
	pub(crate) input: String,
	pub(crate) commands: Vec<Arc<Command>>,
	pub(crate) result_ids: Vec<String>,
	pub(crate) selected_id: String,
	pub(crate) toggle_key: char,
}

impl Context {
	pub fn new(toggle_key: char) -> Self {
		Self {
			input: String::new(),
			commands: Vec::new(),
			result_ids: Vec::new(),
			selected_id: String::new(),
			toggle_key,
		}
	}

	/// Raw, unparsed search text.
	pub fn input(&self) -> &str {
		&self.input
	}

	pub fn commands(&self) -> &[Arc<Command>] {
		&self.commands
	}

	/// Ids of the commands matching the input, in rank order.
	pub fn result_ids(&self) -> &[String] {
		&self.result_ids
	}

	/// Highlighted command id, or `""` when nothing is selected.
	pub fn selected_id(&self) -> &str {
		&self.selected_id
	}

	pub fn toggle_key(&self) -> char {
		self.toggle_key
	}

	pub(crate) fn set_input(&mut self, input: String, ranker: &dyn Ranker) {
		self.input = input;
		self.recompute_results(ranker);
	}

	pub(crate) fn set_commands(&mut self, commands: Vec<Arc<Command>>, ranker: &dyn Ranker) {
		self.commands = commands;
		self.recompute_results(ranker);
	}

	/// Empty input clears the results; otherwise the ranker decides, and a
	/// `None` from it keeps the previous ordering.
	fn recompute_results(&mut self, ranker: &dyn Ranker) {
		if self.input.is_empty() {
			self.result_ids.clear();
			return;
		}
		if let Some(ranked) = ranker.rank(&self.commands, &self.input) {
			self.result_ids = ranked.into_iter().map(|entry| entry.id).collect();
		}
	}

	pub(crate) fn select(&mut self, id: String) {
		self.selected_id = id;
	}

	pub(crate) fn select_first(&mut self) {
		self.selected_id = self.result_ids.first().cloned().unwrap_or_default();
	}

	pub(crate) fn step(&mut self, direction: Direction) {
		self.selected_id = step_selection(&self.result_ids, &self.selected_id, direction);
	}

	pub(crate) fn selection_is_valid(&self) -> bool {
		self.result_ids.contains(&self.selected_id)
	}

	/// Evaluated fresh on every EXEC, never cached.
	pub(crate) fn is_executable(&self, parser: &dyn InputParser) -> bool {
		!self.input.is_empty() && !self.result_ids.is_empty() && parser.parse(&self.input).is_some()
	}

	pub(crate) fn clear_input_and_results(&mut self) {
		self.input.clear();
		self.result_ids.clear();
	}
}

/// Circular navigation through `result_ids`.
///
/// An empty list yields `""`. An absent selection steps down onto the first
/// entry and up onto the last one.
pub fn step_selection(result_ids: &[String], selected_id: &str, direction: Direction) -> String {
	let Some(last) = result_ids.len().checked_sub(1) else {
		return String::new();
	};
	let current = result_ids.iter().position(|id| id == selected_id);
	let next = match (direction, current) {
		(Direction::Down, Some(index)) if index == last => 0,
		(Direction::Down, Some(index)) => index + 1,
		(Direction::Down, None) => 0,
		(Direction::Up, Some(0)) | (Direction::Up, None) => last,
		(Direction::Up, Some(index)) => index - 1,
	};
	result_ids[next].clone()
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::command::ParsedInput;
	use crate::search::RankedMatch;

	fn ids(values: &[&str]) -> Vec<String> {
		values.iter().map(|value| value.to_string()).collect()
	}

	fn rank_all(commands: &[Arc<Command>], _input: &str) -> Option<Vec<RankedMatch>> {
		Some(
			commands
				.iter()
				.map(|command| RankedMatch::new(command.id.clone(), 1))
				.collect(),
		)
	}

	fn decline(_commands: &[Arc<Command>], _input: &str) -> Option<Vec<RankedMatch>> {
		None
	}

	#[test]
	fn step_down_wraps_to_first() {
		let results = ids(&["a", "b", "c"]);
		assert_eq!(step_selection(&results, "a", Direction::Down), "b");
		assert_eq!(step_selection(&results, "c", Direction::Down), "a");
	}

	#[test]
	fn step_up_wraps_to_last() {
		let results = ids(&["a", "b", "c"]);
		assert_eq!(step_selection(&results, "b", Direction::Up), "a");
		assert_eq!(step_selection(&results, "a", Direction::Up), "c");
	}

	#[test]
	fn step_on_empty_results_clears_selection() {
		assert_eq!(step_selection(&[], "a", Direction::Down), "");
		assert_eq!(step_selection(&[], "", Direction::Up), "");
	}

	#[test]
	fn step_from_absent_selection() {
		let results = ids(&["a", "b", "c"]);
		assert_eq!(step_selection(&results, "", Direction::Down), "a");
		assert_eq!(step_selection(&results, "zz", Direction::Up), "c");
	}

	#[test]
	fn empty_input_clears_results_without_ranking() {
		let mut context = Context::new('p');
		context.set_commands(vec![Arc::new(Command::noop("a"))], &rank_all);
		context.set_input("a".into(), &rank_all);
		assert_eq!(context.result_ids(), ids(&["a"]).as_slice());

		let panicking = |_: &[Arc<Command>], _: &str| -> Option<Vec<RankedMatch>> {
			panic!("ranker must not run for empty input")
		};
		context.set_input(String::new(), &panicking);
		assert!(context.result_ids().is_empty());
	}

	#[test]
	fn declined_ranking_retains_previous_results() {
		let mut context = Context::new('p');
		context.set_commands(
			vec![Arc::new(Command::noop("a")), Arc::new(Command::noop("b"))],
			&rank_all,
		);
		context.set_input("x".into(), &rank_all);
		context.set_input("xy".into(), &decline);
		assert_eq!(context.input(), "xy");
		assert_eq!(context.result_ids(), ids(&["a", "b"]).as_slice());
	}

	#[test]
	fn executable_requires_input_results_and_parse() {
		let parse_any = |raw: &str| Some(ParsedInput::new(raw, Vec::<String>::new()));
		let parse_none = |_: &str| -> Option<ParsedInput> { None };

		let mut context = Context::new('p');
		assert!(!context.is_executable(&parse_any));

		context.set_commands(vec![Arc::new(Command::noop("a"))], &rank_all);
		context.set_input("a".into(), &rank_all);
		assert!(context.is_executable(&parse_any));
		assert!(!context.is_executable(&parse_none));

		context.result_ids.clear();
		assert!(!context.is_executable(&parse_any));
	}
}
