//! Flattening of a query outcome into display rows.
//!
//! This is the boundary between the query engine and any presenter: the TUI
//! list and the command-line printer both consume the same rows.

use crate::state::{DisplayRow, QueryOutcome};

/// Text shown when a query matched nothing.
pub const NOT_FOUND_TEXT: &str = "No books found for your search. Try other words.";
/// Text shown when the catalog could not be loaded.
pub const LOAD_FAILED_TEXT: &str = "Could not load the books. Try again later.";

/// What: Turn an outcome into the ordered rows a presenter draws.
///
/// Output:
/// - Flat outcomes: one card per record.
/// - Grouped outcomes: a header per group followed by its cards.
/// - `NotFound`: no rows; the presenter shows [`NOT_FOUND_TEXT`] instead.
pub fn rows(outcome: &QueryOutcome) -> Vec<DisplayRow> {
    match outcome {
        QueryOutcome::NotFound => Vec::new(),
        QueryOutcome::Flat(records) => records.iter().cloned().map(DisplayRow::Card).collect(),
        QueryOutcome::Grouped(groups) => groups
            .iter()
            .flat_map(|g| {
                std::iter::once(DisplayRow::GroupHeader(g.label.clone()))
                    .chain(g.records.iter().cloned().map(DisplayRow::Card))
            })
            .collect(),
    }
}

/// Lines a row occupies in the TUI list.
pub const fn row_height(row: &DisplayRow) -> u16 {
    match row {
        DisplayRow::GroupHeader(_) => 1,
        DisplayRow::Card(_) => 3,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::query;
    use crate::state::{QueryRequest, SortMode};
    use crate::test_utils::sample_records;

    #[test]
    /// What: Grouped outcome renders headers before their cards
    fn grouped_rows() {
        let out = query(&sample_records(), &QueryRequest::new("", SortMode::Category));
        let rendered: Vec<String> = rows(&out)
            .into_iter()
            .map(|r| match r {
                DisplayRow::GroupHeader(l) => format!("# {l}"),
                DisplayRow::Card(b) => b.title,
            })
            .collect();
        assert_eq!(rendered, vec!["# Fiction", "B", "A", "# Science", "C"]);
    }

    #[test]
    /// What: Not-found produces no rows; flat produces only cards
    fn flat_and_not_found() {
        assert!(rows(&QueryOutcome::NotFound).is_empty());
        let out = query(&sample_records(), &QueryRequest::new("", SortMode::Relevance));
        let r = rows(&out);
        assert_eq!(r.len(), 3);
        assert!(r.iter().all(|row| matches!(row, DisplayRow::Card(_))));
    }
}
