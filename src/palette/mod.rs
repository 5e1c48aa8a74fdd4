//! The palette state machine.
//!
//! [`transition`] is a pure function from `(snapshot, event)` to the next
//! snapshot plus requested effects. [`Palette`] is the shell around it: it owns
//! the snapshot, runs execution effects and keeps key listeners subscribed for
//! exactly as long as their state is active.
//!
//! ```text
//! closed ──OPEN──▶ open ─┬─ autoSelected ──STEP──▶ selected
//!    ▲                   │        ▲                   │ INPUT / NEW_COMMANDS
//!    │                   │        └── invalid ── selectionValidation
//!    └──CLOSE / EXEC_DONE┴─ executing ◀──EXEC (guarded)
//! ```

mod context;
mod event;
mod runner;
mod state;
mod strategy;
mod transition;


pub use context::{Context, step_selection};
pub use event::{Direction, PaletteEvent};
pub use runner::{ExecOutcome, ExecReport, Palette};
pub use state::{OpenState, PaletteState};
pub use strategy::Strategies;
pub use transition::{Effect, Snapshot, Transition, transition};
