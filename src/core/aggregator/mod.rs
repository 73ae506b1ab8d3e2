//! View aggregator
//!
//! Pure functions from `(records, search term)` to the values the student
//! table, the KPI cards and the batch chart render. Everything here is
//! synchronous and allocation-light so it can run on every keystroke.

mod filter;
mod histogram;
mod summary;


pub use filter::{filter_records, unassigned_subset};
pub use histogram::{BatchBucket, BatchHistogram};
pub use summary::AssignmentSummary;

use crate::core::models::StudentRecord;

/// Everything derived from one snapshot and one search term
#[derive(Debug, Clone)]
pub struct ViewAggregate<'a> {
    /// Records whose name or email contains the search term
    pub filtered: Vec<&'a StudentRecord>,
    /// The unassigned part of `filtered`
    pub unassigned: Vec<&'a StudentRecord>,
    /// Counts over the full, unfiltered snapshot
    pub summary: AssignmentSummary,
    /// Batch distribution over the full, unfiltered snapshot
    pub histogram: BatchHistogram,
}

impl<'a> ViewAggregate<'a> {
    pub fn compute(records: &'a [StudentRecord], search_term: &str) -> Self {
        let filtered = filter_records(records, search_term);
        let unassigned = unassigned_subset(&filtered);

        Self {
            filtered,
            unassigned,
            summary: AssignmentSummary::from_records(records),
            histogram: BatchHistogram::from_records(records),
        }
    }
}
