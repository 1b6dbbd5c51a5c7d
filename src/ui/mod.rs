//! Terminal rendering for bookcase.
//!
//! `ui` draws one frame from [`AppState`]: search line on top, the result
//! list (or a notice) in the middle, key hints at the bottom, and any modal
//! above it all.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
};

use crate::state::AppState;
use crate::theme::theme;

mod helpers;
mod modals;
mod results;
pub mod rows;
mod search;

pub use helpers::contains;
pub use rows::{LOAD_FAILED_TEXT, NOT_FOUND_TEXT, row_height, rows};

/// Render a full frame.
pub fn ui(f: &mut Frame, app: &mut AppState) {
    let th = theme(app.theme_mode);
    let area = f.area();
    f.render_widget(Block::default().style(Style::default().bg(th.base)), area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    search::render_search(f, app, chunks[0]);
    results::render_results(f, app, chunks[1]);
    search::render_footer(f, app, chunks[2]);
    modals::render_modals(f, app);
}
