//! Event handling layer for the bookcase TUI.
//!
//! `handle_event` applies modal and global shortcuts first, then delegates
//! to the focused pane or to the mouse handler.

use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::sync::mpsc;

use crate::catalog::LoadRequest;
use crate::logic::{clear_search, cycle_sort_mode, request_reload};
use crate::state::{AppState, Focus, Modal};

mod mouse;
mod panes;

pub use mouse::handle_mouse_event;

/// What: Dispatch a single terminal event and mutate the [`AppState`].
///
/// Inputs:
/// - `ev`: Terminal event (key, mouse, resize)
/// - `app`: Mutable application state
/// - `load_tx`: Channel used when an action needs a catalog load
///
/// Output:
/// - `true` to signal the application should exit; otherwise `false`.
///
/// Details:
/// - Only key presses are handled; repeats and releases are ignored.
/// - An open modal consumes every key; Esc or Enter closes it.
pub fn handle_event(
    ev: CEvent,
    app: &mut AppState,
    load_tx: &mpsc::UnboundedSender<LoadRequest>,
) -> bool {
    match ev {
        CEvent::Key(ke) => {
            if ke.kind != KeyEventKind::Press {
                return false;
            }
            handle_key(ke, app, load_tx)
        }
        CEvent::Mouse(m) => handle_mouse_event(m, app),
        _ => false,
    }
}

fn handle_key(ke: KeyEvent, app: &mut AppState, load_tx: &mpsc::UnboundedSender<LoadRequest>) -> bool {
    let ctrl = ke.modifiers.contains(KeyModifiers::CONTROL);

    if app.modal.is_open() {
        if ctrl && matches!(ke.code, KeyCode::Char('c')) {
            return true;
        }
        if matches!(ke.code, KeyCode::Esc | KeyCode::Enter) {
            app.modal = Modal::None;
        }
        return false;
    }

    if ctrl {
        match ke.code {
            KeyCode::Char('c' | 'q') => return true,
            KeyCode::Char('t') => {
                app.theme_mode = app.prefs.toggle(app.theme_mode);
                return false;
            }
            KeyCode::Char('r') => {
                request_reload(app, load_tx);
                return false;
            }
            _ => {}
        }
    }

    match ke.code {
        KeyCode::F(1) => {
            app.modal = Modal::Help;
            return false;
        }
        KeyCode::BackTab => {
            cycle_sort_mode(app, load_tx);
            return false;
        }
        KeyCode::Tab => {
            app.focus = match app.focus {
                Focus::Search if !app.rows.is_empty() => Focus::Results,
                _ => Focus::Search,
            };
            return false;
        }
        KeyCode::Esc => {
            clear_search(app);
            app.focus = Focus::Search;
            return false;
        }
        _ => {}
    }

    match app.focus {
        Focus::Search => panes::handle_search_key(ke, app, load_tx),
        Focus::Results => panes::handle_results_key(ke, app),
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::CatalogEngine;
    use crate::state::{QueryOutcome, SortMode};
    use crate::test_utils::{new_app, sample_records};

    fn key(code: KeyCode) -> CEvent {
        CEvent::Key(KeyEvent::new(code, KeyModifiers::empty()))
    }

    fn ctrl(c: char) -> CEvent {
        CEvent::Key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
    }

    fn type_text(app: &mut AppState, tx: &mpsc::UnboundedSender<LoadRequest>, text: &str) {
        for ch in text.chars() {
            assert!(!handle_event(key(KeyCode::Char(ch)), app, tx));
        }
    }

    #[test]
    /// What: Typing then Enter runs the query and clears the input
    ///
    /// - Input: Loaded sample set; type "fic"; Enter
    /// - Output: Two matches shown, input empty
    fn typing_and_enter_searches() {
        let mut app = new_app();
        app.engine = CatalogEngine::from_records(sample_records());
        let (tx, _rx) = mpsc::unbounded_channel();
        type_text(&mut app, &tx, "ficx");
        handle_event(key(KeyCode::Backspace), &mut app, &tx);
        assert_eq!(app.input, "fic");
        handle_event(key(KeyCode::Enter), &mut app, &tx);
        assert!(app.input.is_empty());
        assert_eq!(app.outcome.as_ref().map(QueryOutcome::len), Some(2));
    }

    #[test]
    /// What: Ctrl+C and Ctrl+Q request exit; plain 'q' is typed
    fn quit_shortcuts() {
        let mut app = new_app();
        let (tx, _rx) = mpsc::unbounded_channel();
        assert!(handle_event(ctrl('c'), &mut app, &tx));
        assert!(handle_event(ctrl('q'), &mut app, &tx));
        assert!(!handle_event(key(KeyCode::Char('q')), &mut app, &tx));
        assert_eq!(app.input, "q");
    }

    #[test]
    /// What: Shift+Tab cycles the sort mode
    fn backtab_cycles_sort() {
        let mut app = new_app();
        let (tx, _rx) = mpsc::unbounded_channel();
        handle_event(key(KeyCode::BackTab), &mut app, &tx);
        assert_eq!(app.sort_mode, SortMode::Author);
        handle_event(key(KeyCode::BackTab), &mut app, &tx);
        assert_eq!(app.sort_mode, SortMode::Category);
        handle_event(key(KeyCode::BackTab), &mut app, &tx);
        assert_eq!(app.sort_mode, SortMode::Relevance);
    }

    #[test]
    /// What: Ctrl+T flips the theme and persists it
    fn ctrl_t_toggles_theme() {
        let mut app = new_app();
        let (tx, _rx) = mpsc::unbounded_channel();
        let before = app.theme_mode;
        handle_event(ctrl('t'), &mut app, &tx);
        assert_eq!(app.theme_mode, before.toggled());
        assert_eq!(app.prefs.load(), app.theme_mode);
        handle_event(ctrl('t'), &mut app, &tx);
        assert_eq!(app.theme_mode, before);
        assert_eq!(app.prefs.load(), before);
    }

    #[test]
    /// What: Ctrl+R sends a load request for the configured source
    fn ctrl_r_requests_reload() {
        let mut app = new_app();
        let (tx, mut rx) = mpsc::unbounded_channel();
        handle_event(ctrl('r'), &mut app, &tx);
        let req = rx.try_recv().expect("load requested");
        assert_eq!(req.source, app.catalog_source);
        assert!(app.engine.is_loading());
    }

    #[test]
    /// What: Modals swallow keys and close on Esc
    ///
    /// - Input: Help open; type 'x'; Esc
    /// - Output: Input unchanged, modal closed
    fn modal_consumes_keys() {
        let mut app = new_app();
        let (tx, _rx) = mpsc::unbounded_channel();
        handle_event(key(KeyCode::F(1)), &mut app, &tx);
        assert_eq!(app.modal, Modal::Help);
        handle_event(key(KeyCode::Char('x')), &mut app, &tx);
        assert!(app.input.is_empty());
        handle_event(key(KeyCode::Esc), &mut app, &tx);
        assert_eq!(app.modal, Modal::None);
    }

    #[test]
    /// What: Esc clears input and results
    fn esc_clears_search() {
        let mut app = new_app();
        app.engine = CatalogEngine::from_records(sample_records());
        let (tx, _rx) = mpsc::unbounded_channel();
        handle_event(key(KeyCode::Enter), &mut app, &tx);
        assert!(app.outcome.is_some());
        type_text(&mut app, &tx, "abc");
        handle_event(key(KeyCode::Esc), &mut app, &tx);
        assert!(app.input.is_empty());
        assert!(app.outcome.is_none());
    }

    #[test]
    /// What: Releases are ignored
    fn release_is_ignored() {
        let mut app = new_app();
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut ke = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::empty());
        ke.kind = KeyEventKind::Release;
        handle_event(CEvent::Key(ke), &mut app, &tx);
        assert!(app.input.is_empty());
    }
}
