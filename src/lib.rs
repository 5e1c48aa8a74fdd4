//! Core crate exports for embedding the `cmdpal` command palette.
//!
//! The palette state machine lives in [`palette`]; ranking and input parsing
//! are injected through the [`Ranker`] and [`InputParser`] capabilities, and
//! keystrokes reach the palette through a [`KeyBus`].

pub mod app_dirs;
pub mod command;
pub mod config;
pub mod error;
pub mod keys;
pub mod logging;
pub mod palette;
pub mod search;
pub mod ui;

pub use command::{Command, CommandAction, InputParser, ParsedInput, WordParser};
pub use config::PaletteConfig;
pub use error::PaletteError;
pub use keys::{KeyBus, KeyOrigin, KeyPhase, Keystroke, SubscriptionId};
pub use palette::{
	Direction, ExecOutcome, ExecReport, OpenState, Palette, PaletteEvent, PaletteState, Strategies,
};
pub use search::{FuzzyRanker, RankedMatch, Ranker};
