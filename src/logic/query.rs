use crate::logic::{filter, group_by_category, sort_by_author};
use crate::state::{BookRecord, QueryOutcome, QueryRequest, SortMode};

/// What: Run one query against the working set.
///
/// Inputs:
/// - `records`: Working set
/// - `request`: Search term and ordering mode
///
/// Output:
/// - `NotFound` when the filter matches nothing; otherwise the matches flat
///   (relevance or author order) or grouped by category.
///
/// Details:
/// - Pure function of its inputs; the working set is never modified.
pub fn query(records: &[BookRecord], request: &QueryRequest) -> QueryOutcome {
    let matches = filter(records, &request.term);
    if matches.is_empty() {
        return QueryOutcome::NotFound;
    }
    match request.mode {
        SortMode::Category => QueryOutcome::Grouped(group_by_category(matches)),
        SortMode::Author => QueryOutcome::Flat(sort_by_author(matches)),
        SortMode::Relevance => QueryOutcome::Flat(matches),
    }
}
