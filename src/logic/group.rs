use std::collections::HashMap;

use crate::logic::collate::CollationKey;
use crate::logic::sort::sort_by_author;
use crate::state::{BookRecord, CategoryGroup};

/// What: Partition records by category and order groups and their members.
///
/// Inputs:
/// - `records`: Records to partition (typically the filtered matches)
///
/// Output:
/// - One group per distinct category, labels in locale-aware ascending order,
///   each group's records ordered by author.
///
/// Details:
/// - Keys are the exact category strings. `"Fiction"` and `"fiction"` form two
///   groups even though the search filter treats them alike.
/// - Every input record lands in exactly one group.
pub fn group_by_category(records: Vec<BookRecord>) -> Vec<CategoryGroup> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<CategoryGroup> = Vec::new();
    for record in records {
        let idx = match slots.get(&record.category) {
            Some(&i) => i,
            None => {
                let i = groups.len();
                slots.insert(record.category.clone(), i);
                groups.push(CategoryGroup {
                    label: record.category.clone(),
                    records: Vec::new(),
                });
                i
            }
        };
        groups[idx].records.push(record);
    }

    let mut keyed: Vec<(CollationKey, CategoryGroup)> = groups
        .into_iter()
        .map(|g| (CollationKey::new(&g.label), g))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed
        .into_iter()
        .map(|(_, mut g)| {
            g.records = sort_by_author(std::mem::take(&mut g.records));
            g
        })
        .collect()
}
