//! Free-text filtering and the unassigned partition

use crate::core::models::StudentRecord;

/// Records whose name or email contains `search_term`, ignoring case.
///
/// Source order is preserved. Records with neither a name nor an email never
/// match, not even the empty term.
pub fn filter_records<'a>(records: &'a [StudentRecord], search_term: &str) -> Vec<&'a StudentRecord> {
    let needle = search_term.to_lowercase();
    records
        .iter()
        .filter(|record| record.matches_search(&needle))
        .collect()
}

/// The records of `filtered` that have no batch
pub fn unassigned_subset<'a>(filtered: &[&'a StudentRecord]) -> Vec<&'a StudentRecord> {
    filtered
        .iter()
        .copied()
        .filter(|record| !record.is_assigned())
        .collect()
}
