use crate::state::BookRecord;

/// What: Keep the records whose searchable fields contain `term`.
///
/// Inputs:
/// - `records`: Working set in its original order
/// - `term`: Search term; may be empty
///
/// Output:
/// - Matching records in their original relative order.
///
/// Details:
/// - Case-insensitive: both sides are lowercased before the substring test.
/// - Searchable fields are title, author, category, and the year as decimal text.
/// - The empty term is a substring of everything, so it keeps every record.
pub fn filter(records: &[BookRecord], term: &str) -> Vec<BookRecord> {
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|r| matches_term(r, &needle))
        .cloned()
        .collect()
}

/// Whether `record` matches an already-lowercased `needle`.
pub fn matches_term(record: &BookRecord, needle: &str) -> bool {
    record.title.to_lowercase().contains(needle)
        || record.author.to_lowercase().contains(needle)
        || record.category.to_lowercase().contains(needle)
        || record.year.to_string().contains(needle)
}
