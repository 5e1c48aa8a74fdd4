//! Minimal terminal host for the palette.
//!
//! Keystrokes from the terminal are routed through the palette's key bus;
//! keys whose default handling was not prevented edit the search text. The
//! rendering here is deliberately thin: it only shows what the state machine
//! decided.

mod actions;
mod render;
mod runtime;
mod state;

pub use runtime::run;
pub use state::PaletteHost;
