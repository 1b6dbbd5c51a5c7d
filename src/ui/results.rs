use ratatui::{
    Frame,
    prelude::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph, Wrap},
};

use crate::logic::LoadState;
use crate::state::{AppState, BookRecord, DisplayRow, Focus, Notice};
use crate::theme::{Theme, theme};
use crate::util::truncate_to_width;

use super::rows::{LOAD_FAILED_TEXT, NOT_FOUND_TEXT};

/// What: Render the result list, or the notice/hint that replaces it.
///
/// Inputs:
/// - `f`: Frame to render into
/// - `app`: Application state; `results_rect` is updated for mouse hit-testing
/// - `area`: Area assigned to the results pane
pub fn render_results(f: &mut Frame, app: &mut AppState, area: Rect) {
    let th = theme(app.theme_mode);
    let focused = matches!(app.focus, Focus::Results);
    let count = app.outcome.as_ref().map_or(0, crate::state::QueryOutcome::len);
    let block = Block::default()
        .title(Span::styled(
            format!(" Results ({count}) · Sort: {} ", app.sort_mode.label()),
            Style::default().fg(if focused { th.mauve } else { th.overlay }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { th.mauve } else { th.surface }));

    let inner = block.inner(area);
    app.results_rect = Some((inner.x, inner.y, inner.width, inner.height));

    if app.rows.is_empty() {
        let (text, color) = placeholder(app, &th);
        let p = Paragraph::new(Line::from(Span::styled(text, Style::default().fg(color))))
            .style(Style::default().bg(th.base))
            .wrap(Wrap { trim: true })
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let width = usize::from(inner.width.saturating_sub(2));
    let items: Vec<ListItem> = app
        .rows
        .iter()
        .map(|row| match row {
            DisplayRow::GroupHeader(label) => ListItem::new(Line::from(Span::styled(
                format!("── {label} ──"),
                Style::default().fg(th.mauve).add_modifier(Modifier::BOLD),
            ))),
            DisplayRow::Card(record) => ListItem::new(card_lines(record, &th, width)),
        })
        .collect();

    let list = List::new(items)
        .style(Style::default().fg(th.text).bg(th.base))
        .block(block)
        .highlight_style(Style::default().fg(th.crust).bg(th.lavender))
        .highlight_symbol("> ");
    f.render_stateful_widget(list, area, &mut app.list_state);
}

/// Three-line card: badge + title + year, author, description.
fn card_lines(record: &BookRecord, th: &Theme, width: usize) -> Vec<Line<'static>> {
    let badge = format!("[{}] ", record.category);
    let title = truncate_to_width(
        &format!("{} ({})", record.title, record.year),
        width.saturating_sub(badge.chars().count()),
    );
    vec![
        Line::from(vec![
            Span::styled(badge, Style::default().fg(th.green)),
            Span::styled(title, Style::default().fg(th.text).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![
            Span::styled("  Author: ", Style::default().fg(th.overlay)),
            Span::styled(record.author.clone(), Style::default().fg(th.text)),
        ]),
        Line::from(Span::styled(
            format!("  {}", truncate_to_width(&record.description, width.saturating_sub(2))),
            Style::default().fg(th.subtext),
        )),
    ]
}

/// Text and color shown when there are no rows to list.
fn placeholder(app: &AppState, th: &Theme) -> (String, ratatui::style::Color) {
    match app.notice {
        Some(Notice::NotFound) => (NOT_FOUND_TEXT.to_string(), th.yellow),
        Some(Notice::LoadFailed) => (LOAD_FAILED_TEXT.to_string(), th.red),
        None => match app.engine.state() {
            LoadState::Loading => ("Loading catalog…".to_string(), th.overlay),
            LoadState::Idle => ("Catalog not loaded. Press Ctrl+R to load.".to_string(), th.overlay),
            LoadState::Ready | LoadState::Failed(_) => (
                format!(
                    "{} books in the catalog. Type a title, author, category or year and press Enter.",
                    app.engine.records().len()
                ),
                th.overlay,
            ),
        },
    }
}
