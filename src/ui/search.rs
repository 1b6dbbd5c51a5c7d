use ratatui::{
    Frame,
    prelude::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::state::{AppState, Focus};
use crate::theme::theme;

/// Render the search input line and place the cursor when it has focus.
pub fn render_search(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme(app.theme_mode);
    let focused = matches!(app.focus, Focus::Search);
    let input_line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default().fg(if focused { th.sapphire } else { th.overlay }),
        ),
        Span::styled(
            app.input.clone(),
            Style::default().fg(if focused { th.text } else { th.subtext }),
        ),
    ]);
    let input = Paragraph::new(input_line)
        .style(Style::default().bg(th.base))
        .block(
            Block::default()
                .title(Span::styled(
                    if focused { " Search (focused) " } else { " Search " },
                    Style::default().fg(if focused { th.mauve } else { th.overlay }),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(if focused { th.mauve } else { th.surface })),
        );
    f.render_widget(input, area);

    if focused && !app.modal.is_open() {
        let typed = u16::try_from(app.input.width()).unwrap_or(u16::MAX);
        let x = area
            .x
            .saturating_add(3)
            .saturating_add(typed)
            .min(area.x + area.width.saturating_sub(2));
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}

/// Render the one-line key hint footer.
pub fn render_footer(f: &mut Frame, app: &AppState, area: Rect) {
    let th = theme(app.theme_mode);
    let hints = [
        ("Enter", "search/open"),
        ("Tab", "focus"),
        ("Shift+Tab", "sort"),
        ("Esc", "clear"),
        ("Ctrl+T", "theme"),
        ("Ctrl+R", "reload"),
        ("F1", "help"),
        ("Ctrl+C", "quit"),
    ];
    let mut spans: Vec<Span> = Vec::with_capacity(hints.len() * 2);
    for (key, what) in hints {
        spans.push(Span::styled(format!(" {key} "), Style::default().fg(th.sapphire)));
        spans.push(Span::styled(format!("{what} "), Style::default().fg(th.overlay)));
    }
    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(th.base)),
        area,
    );
}
