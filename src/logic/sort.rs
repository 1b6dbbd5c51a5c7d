use crate::logic::collate::CollationKey;
use crate::state::BookRecord;

/// What: Order records by author using locale-aware comparison.
///
/// Inputs:
/// - `records`: Records in any order
///
/// Output:
/// - The same records ordered by author; equal authors keep their input order.
///
/// Details:
/// - Keys are computed once per record, then a stable sort is applied.
pub fn sort_by_author(records: Vec<BookRecord>) -> Vec<BookRecord> {
    let mut keyed: Vec<(CollationKey, BookRecord)> = records
        .into_iter()
        .map(|r| (CollationKey::new(&r.author), r))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, r)| r).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{book, sample_records};

    fn authors(recs: &[BookRecord]) -> Vec<&str> {
        recs.iter().map(|r| r.author.as_str()).collect()
    }

    #[test]
    /// What: Authors ascend alphabetically
    fn sorts_ascending() {
        let out = sort_by_author(sample_records());
        assert_eq!(authors(&out), vec!["Amy", "Bob", "Zeta"]);
    }

    #[test]
    /// What: Equal authors keep their original relative order
    ///
    /// - Input: Three books by the same author interleaved with another author
    /// - Output: Same-author titles in input order
    fn ties_are_stable() {
        let input = vec![
            book("first", "Lispector", "Romance", 1943),
            book("other", "Amado", "Romance", 1958),
            book("second", "Lispector", "Contos", 1960),
            book("third", "Lispector", "Romance", 1977),
        ];
        let out = sort_by_author(input);
        let titles: Vec<&str> = out.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["other", "first", "second", "third"]);
    }

    #[test]
    /// What: Sorting twice gives the same list
    fn idempotent() {
        let once = sort_by_author(vec![
            book("x", "Érico", "Romance", 1949),
            book("y", "eric", "Romance", 1950),
            book("z", "Eric", "Romance", 1951),
            book("w", "Amado", "Romance", 1958),
        ]);
        let twice = sort_by_author(once.clone());
        assert_eq!(once, twice);
        assert_eq!(authors(&once), vec!["Amado", "eric", "Eric", "Érico"]);
    }
}
