//! bookcase application module.
//!
//! Wires terminal setup, the background catalog loader, and the event loop
//! around a single [`crate::state::AppState`].

/// Runtime event loop and background workers.
mod runtime;
/// Terminal setup and restoration utilities.
mod terminal;

pub use runtime::{RunOptions, run};
