//! Key handling for the focused pane (search input or result list).

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tokio::sync::mpsc;

use crate::catalog::LoadRequest;
use crate::logic::submit_search;
use crate::state::{AppState, Focus, Modal};

/// Whether `ke` carries a character that belongs in the input line.
fn typed_char(ke: &KeyEvent) -> Option<char> {
    match ke.code {
        KeyCode::Char(ch)
            if !ke
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(ch)
        }
        _ => None,
    }
}

/// What: Handle a key while the search input has focus.
///
/// Details:
/// - Enter submits the input (an empty input lists every book).
/// - Down moves focus to the results when there are any.
pub fn handle_search_key(
    ke: KeyEvent,
    app: &mut AppState,
    load_tx: &mpsc::UnboundedSender<LoadRequest>,
) {
    if let Some(ch) = typed_char(&ke) {
        app.input.push(ch);
        return;
    }
    match ke.code {
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Enter => submit_search(app, load_tx),
        KeyCode::Down if !app.rows.is_empty() => app.focus = Focus::Results,
        _ => {}
    }
}

/// What: Handle a key while the result list has focus.
///
/// Details:
/// - Up/Down and j/k move between cards; PageUp/PageDown jump five.
/// - Enter opens the cover of the highlighted book.
/// - Any other printable character returns to the input and is typed there.
pub fn handle_results_key(ke: KeyEvent, app: &mut AppState) {
    match ke.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-5),
        KeyCode::PageDown => app.move_selection(5),
        KeyCode::Enter => open_cover(app),
        KeyCode::Backspace => app.focus = Focus::Search,
        _ => {
            if let Some(ch) = typed_char(&ke) {
                app.focus = Focus::Search;
                app.input.push(ch);
            }
        }
    }
}

/// Open the cover modal for the highlighted book, if one is highlighted.
pub fn open_cover(app: &mut AppState) {
    if let Some(record) = app.selected_record().cloned() {
        tracing::debug!(title = %record.title, "opening cover");
        app.modal = Modal::Cover { record };
    }
}
