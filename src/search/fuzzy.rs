use std::cmp::Reverse;
use std::sync::Arc;

use frizbee::match_list;

use super::config::config_for_query;
use super::{MAX_RANKED_RESULTS, RankedMatch, Ranker};
use crate::command::Command;

/// Default ranking strategy: fuzzy matches the action word of the query against
/// each command's title.
///
/// Arguments after the first word are ignored so that typing `open notes.md`
/// keeps ranking on `open`.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyRanker;

impl FuzzyRanker {
	fn needle(input: &str) -> Option<&str> {
		input.split_whitespace().next()
	}
}

impl Ranker for FuzzyRanker {
	fn rank(&self, commands: &[Arc<Command>], input: &str) -> Option<Vec<RankedMatch>> {
		let needle = Self::needle(input)?;
		let config = config_for_query(needle, commands.len());
		let haystacks: Vec<&str> = commands.iter().map(|command| command.search_text()).collect();

		let mut scored: Vec<(usize, u16)> = match_list(needle, &haystacks, &config)
			.into_iter()
			.filter(|entry| entry.score > 0)
			.map(|entry| (entry.index as usize, entry.score))
			.collect();
		scored.sort_by_key(|&(index, score)| (Reverse(score), index));
		scored.truncate(MAX_RANKED_RESULTS);

		Some(
			scored
				.into_iter()
				.map(|(index, score)| RankedMatch::new(commands[index].id.clone(), score))
				.collect(),
		)
	}
}
