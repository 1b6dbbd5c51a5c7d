//! Mouse event handling for the bookcase TUI.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::state::{AppState, Focus, Modal};
use crate::ui::{contains, row_height};

use super::panes::open_cover;

/// What: Handle a single mouse event and update the [`AppState`].
///
/// Inputs:
/// - `m`: Mouse event including position and kind
/// - `app`: Mutable application state (rects recorded by the last render)
///
/// Output:
/// - Always `false`; the mouse never requests exit.
///
/// Details:
/// - Modal-first: a left click outside the cover panel closes it; other
///   events are consumed while any modal is open.
/// - A left click on a card selects it and opens its cover.
/// - The wheel moves the selection in the result list.
pub fn handle_mouse_event(m: MouseEvent, app: &mut AppState) -> bool {
    let (mx, my) = (m.column, m.row);
    let is_left_down = matches!(m.kind, MouseEventKind::Down(MouseButton::Left));

    if app.modal.is_open() {
        if is_left_down
            && matches!(app.modal, Modal::Cover { .. })
            && app.cover_rect.is_some_and(|r| !contains(r, mx, my))
        {
            app.modal = Modal::None;
        }
        return false;
    }

    let Some(rect) = app.results_rect else {
        return false;
    };
    if !contains(rect, mx, my) {
        return false;
    }

    match m.kind {
        MouseEventKind::ScrollUp => app.move_selection(-1),
        MouseEventKind::ScrollDown => app.move_selection(1),
        _ if is_left_down => {
            if let Some(idx) = row_at(app, my.saturating_sub(rect.1))
                && app.select_row(idx)
            {
                app.focus = Focus::Results;
                open_cover(app);
            }
        }
        _ => {}
    }
    false
}

/// Map a line offset inside the result list to the row drawn there.
fn row_at(app: &AppState, line: u16) -> Option<usize> {
    let mut remaining = line;
    for (idx, row) in app.rows.iter().enumerate().skip(app.list_state.offset()) {
        let h = row_height(row);
        if remaining < h {
            return Some(idx);
        }
        remaining -= h;
    }
    None
}
