//! Ranking capability used to turn `(commands, input)` into ordered results.

mod config;
mod fuzzy;
mod tuning;

use std::sync::Arc;

use crate::command::Command;

pub use config::config_for_query;
pub use fuzzy::FuzzyRanker;
pub use tuning::{MAX_RANKED_RESULTS, PREFILTER_ENABLE_THRESHOLD};

/// A command id paired with the score that placed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedMatch {
	pub id: String,
	pub score: u16,
}

impl RankedMatch {
	pub fn new(id: impl Into<String>, score: u16) -> Self {
		Self {
			id: id.into(),
			score,
		}
	}
}

/// Orders the commands matching `input`.
///
/// Implementations must behave as pure functions of their arguments. Returning
/// `None` means "no opinion": the palette keeps its previous results.
pub trait Ranker {
	fn rank(&self, commands: &[Arc<Command>], input: &str) -> Option<Vec<RankedMatch>>;
}

impl<F> Ranker for F
where
	F: Fn(&[Arc<Command>], &str) -> Option<Vec<RankedMatch>>,
{
	fn rank(&self, commands: &[Arc<Command>], input: &str) -> Option<Vec<RankedMatch>> {
		self(commands, input)
	}
}
