use serde::Serialize;

/// Structured "action + arguments" payload extracted from the raw search text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedInput {
	pub action: String,
	pub args: Vec<String>,
}

impl ParsedInput {
	pub fn new<I, S>(action: impl Into<String>, args: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			action: action.into(),
			args: args.into_iter().map(Into::into).collect(),
		}
	}
}

/// Turns raw search text into a [`ParsedInput`].
///
/// Returning `None` means the text is not currently a complete command
/// invocation, which keeps the palette from executing.
pub trait InputParser {
	fn parse(&self, raw: &str) -> Option<ParsedInput>;
}

impl<F> InputParser for F
where
	F: Fn(&str) -> Option<ParsedInput>,
{
	fn parse(&self, raw: &str) -> Option<ParsedInput> {
		self(raw)
	}
}

/// Splits the input on whitespace: the first word is the action, the rest are
/// arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordParser;

impl InputParser for WordParser {
	fn parse(&self, raw: &str) -> Option<ParsedInput> {
		let mut words = raw.split_whitespace();
		let action = words.next()?;
		Some(ParsedInput::new(action, words))
	}
}
