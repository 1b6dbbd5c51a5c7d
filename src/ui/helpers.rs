use ratatui::prelude::Rect;

/// What: Compute a rectangle of at most `max_w` x `max_h` centered in `area`.
///
/// Details:
/// - Keeps a 4-cell margin on each side when the area allows it.
pub fn centered_rect(area: Rect, max_w: u16, max_h: u16) -> Rect {
    let w = area.width.saturating_sub(8).min(max_w).max(area.width.min(20));
    let h = area.height.saturating_sub(4).min(max_h).max(area.height.min(5));
    Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    }
}

/// Whether `(x, y)` lies inside a stored `(x, y, w, h)` rectangle.
pub const fn contains(rect: (u16, u16, u16, u16), x: u16, y: u16) -> bool {
    let (rx, ry, rw, rh) = rect;
    x >= rx && x < rx.saturating_add(rw) && y >= ry && y < ry.saturating_add(rh)
}
