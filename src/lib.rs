//! Library entry for bookcase exposing the catalog engine and TUI runtime.

pub mod app;
pub mod args;
pub mod catalog;
pub mod events;
pub mod logic;
pub mod state;
pub mod theme;
pub mod ui;
pub mod util;

#[cfg(test)]
pub mod test_utils;
