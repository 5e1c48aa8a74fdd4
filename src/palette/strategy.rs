use crate::command::{InputParser, WordParser};
use crate::search::{FuzzyRanker, Ranker};

/// Injected collaborators consulted by the transition function.
pub struct Strategies {
	ranker: Box<dyn Ranker>,
	parser: Box<dyn InputParser>,
}

impl Strategies {
	pub fn new(ranker: impl Ranker + 'static, parser: impl InputParser + 'static) -> Self {
		Self {
			ranker: Box::new(ranker),
			parser: Box::new(parser),
		}
	}

	#[must_use]
	pub fn with_ranker(mut self, ranker: impl Ranker + 'static) -> Self {
		self.ranker = Box::new(ranker);
		self
	}

	#[must_use]
	pub fn with_parser(mut self, parser: impl InputParser + 'static) -> Self {
		self.parser = Box::new(parser);
		self
	}

	pub fn ranker(&self) -> &dyn Ranker {
		self.ranker.as_ref()
	}

	pub fn parser(&self) -> &dyn InputParser {
		self.parser.as_ref()
	}
}

impl Default for Strategies {
	fn default() -> Self {
		Self::new(FuzzyRanker, WordParser)
	}
}
