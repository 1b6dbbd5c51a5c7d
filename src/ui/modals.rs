use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::state::{AppState, BookRecord, Modal};
use crate::theme::{Theme, theme};

use super::helpers::centered_rect;

/// What: Draw the active modal, if any, above everything else.
///
/// Details:
/// - The cover modal records its area in `app.cover_rect` so a click outside it can close it.
pub fn render_modals(f: &mut Frame, app: &mut AppState) {
    let area = f.area();
    let th = theme(app.theme_mode);
    app.cover_rect = None;
    match &app.modal {
        Modal::None => {}
        Modal::Cover { record } => {
            let rect = centered_rect(area, 72, 18);
            render_box(f, rect, &th, &format!("Cover: {}", record.title), cover_lines(record, &th));
            app.cover_rect = Some((rect.x, rect.y, rect.width, rect.height));
        }
        Modal::Help => {
            render_box(f, centered_rect(area, 60, 16), &th, "Help", help_lines(&th));
        }
    }
}

/// Enlarged view of one book: cover reference first, then the full card text.
fn cover_lines(record: &BookRecord, th: &Theme) -> Vec<Line<'static>> {
    let label = |s: &str| Span::styled(s.to_string(), Style::default().fg(th.overlay));
    vec![
        Line::from(vec![
            label("Cover: "),
            Span::styled(
                record.cover.clone(),
                Style::default()
                    .fg(th.sapphire)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                record.title.clone(),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" ({})", record.year), Style::default().fg(th.subtext)),
        ]),
        Line::from(vec![
            label("Author: "),
            Span::styled(
                record.author.clone(),
                Style::default().fg(th.text).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            label("Category: "),
            Span::styled(record.category.clone(), Style::default().fg(th.green)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            record.description.clone(),
            Style::default().fg(th.subtext),
        )),
        Line::from(""),
        Line::from(vec![
            label("Learn more about the author: "),
            Span::styled(record.link.clone(), Style::default().fg(th.sapphire)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Esc/Enter or click outside to close",
            Style::default().fg(th.overlay),
        )),
    ]
}

/// Key binding overview.
fn help_lines(th: &Theme) -> Vec<Line<'static>> {
    [
        ("Enter", "Search (empty term lists every book) / open cover"),
        ("Tab", "Switch focus between search and results"),
        ("Up/Down", "Move through results"),
        ("Shift+Tab", "Cycle ordering: relevance, author, category"),
        ("Esc", "Clear search and results"),
        ("Ctrl+T", "Toggle light/dark theme"),
        ("Ctrl+R", "Reload the catalog"),
        ("Click", "Open a book's cover"),
        ("Ctrl+C", "Quit"),
    ]
    .into_iter()
    .map(|(key, what)| {
        Line::from(vec![
            Span::styled(
                format!("{key:<10}"),
                Style::default().fg(th.sapphire).add_modifier(Modifier::BOLD),
            ),
            Span::styled(what.to_string(), Style::default().fg(th.text)),
        ])
    })
    .collect()
}

/// Clear `rect` and draw a double-bordered box with `title` and `lines`.
fn render_box(f: &mut Frame, rect: Rect, th: &Theme, title: &str, lines: Vec<Line<'static>>) {
    f.render_widget(Clear, rect);
    let boxw = Paragraph::new(lines)
        .style(Style::default().fg(th.text).bg(th.mantle))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
                ))
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(th.mauve))
                .style(Style::default().bg(th.mantle)),
        );
    f.render_widget(boxw, rect);
}
