//! Test utilities for common test setup.
//!
//! This module provides shared test helpers used across multiple test modules.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::state::{AppState, BookRecord, SortMode};
use crate::theme::PreferenceStore;

static NEXT_PREFS: AtomicUsize = AtomicUsize::new(0);

/// What: Provide a baseline `AppState` for handler tests.
///
/// Inputs: None
///
/// Output: Fresh `AppState` with an empty working set and relevance ordering
///
/// Details:
/// - Each call gets its own preference file under the system temp dir so
///   theme toggles in parallel tests do not interfere.
pub fn new_app() -> AppState {
    let n = NEXT_PREFS.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!(
        "bookcase-test-{}-{n}/prefs.conf",
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    AppState::new(
        crate::catalog::DEFAULT_SOURCE,
        PreferenceStore::new(path),
        SortMode::Relevance,
    )
}

/// Build a record with empty cover, description and link.
pub fn book(title: &str, author: &str, category: &str, year: i32) -> BookRecord {
    BookRecord {
        title: title.into(),
        author: author.into(),
        category: category.into(),
        year,
        cover: String::new(),
        description: String::new(),
        link: String::new(),
    }
}

/// What: Three-book working set used across query and handler tests.
///
/// Output:
/// - `[A/Zeta/Fiction/2001, B/Amy/Fiction/2010, C/Bob/Science/1999]`
pub fn sample_records() -> Vec<BookRecord> {
    vec![
        book("A", "Zeta", "Fiction", 2001),
        book("B", "Amy", "Fiction", 2010),
        book("C", "Bob", "Science", 1999),
    ]
}
