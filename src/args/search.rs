//! Command-line search: load the catalog once, run one query, print it.

use std::io::Write;

use crossterm::style::Stylize;

use crate::catalog::load;
use crate::logic::query;
use crate::state::{DisplayRow, QueryOutcome, QueryRequest, SortMode};
use crate::ui::{LOAD_FAILED_TEXT, NOT_FOUND_TEXT, rows};

/// Exit code when at least one book matched.
pub const EXIT_FOUND: i32 = 0;
/// Exit code when no book matched.
pub const EXIT_NOT_FOUND: i32 = 1;
/// Exit code when the catalog could not be loaded.
pub const EXIT_LOAD_FAILED: i32 = 2;

/// What: Run a one-shot search without starting the TUI.
///
/// Inputs:
/// - `term`: Search term (empty lists every book)
/// - `source`: Catalog path or URL
/// - `mode`: Ordering to apply
/// - `color`: Whether to emit ANSI styling
///
/// Output:
/// - Process exit code: [`EXIT_FOUND`], [`EXIT_NOT_FOUND`] or [`EXIT_LOAD_FAILED`].
pub async fn handle_search(term: &str, source: &str, mode: SortMode, color: bool) -> i32 {
    tracing::info!(term = %term, source = %source, mode = mode.as_config_key(), "search mode requested from CLI");
    let records = match load(source).await {
        Ok(records) => records,
        Err(e) => {
            tracing::error!(source = %source, error = %e, "catalog load failed");
            eprintln!("{LOAD_FAILED_TEXT}");
            return EXIT_LOAD_FAILED;
        }
    };

    let outcome = query(&records, &QueryRequest::new(term, mode));
    let code = if outcome.is_empty() {
        EXIT_NOT_FOUND
    } else {
        EXIT_FOUND
    };
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_outcome(&mut out, &outcome, color) {
        tracing::warn!(error = %e, "failed to write search results");
    }
    code
}

/// What: Print an outcome as plain text lines.
///
/// Details:
/// - Group headers print as `== label ==`; each card prints title, year, author and
///   category on one line, followed by the indented description when present.
/// - `NotFound` prints the not-found notice.
pub fn write_outcome<W: Write>(out: &mut W, outcome: &QueryOutcome, color: bool) -> std::io::Result<()> {
    if matches!(outcome, QueryOutcome::NotFound) {
        return writeln!(out, "{NOT_FOUND_TEXT}");
    }
    for row in rows(outcome) {
        match row {
            DisplayRow::GroupHeader(label) => {
                let text = format!("== {label} ==");
                if color {
                    writeln!(out, "{}", text.bold().magenta())?;
                } else {
                    writeln!(out, "{text}")?;
                }
            }
            DisplayRow::Card(record) => {
                let title = format!("{} ({})", record.title, record.year);
                if color {
                    writeln!(
                        out,
                        "{} by {} {}",
                        title.bold(),
                        record.author.as_str().cyan(),
                        format!("[{}]", record.category).green()
                    )?;
                } else {
                    writeln!(out, "{title} by {} [{}]", record.author, record.category)?;
                }
                if !record.description.is_empty() {
                    writeln!(out, "    {}", record.description)?;
                }
            }
        }
    }
    Ok(())
}
