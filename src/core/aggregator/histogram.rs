//! Batch distribution for the bar chart

use crate::core::models::StudentRecord;
use serde::Serialize;
use std::collections::HashMap;

/// One bar of the chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchBucket {
    pub batch: String,
    pub students: usize,
}

/// Per-batch record counts, in order of first appearance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BatchHistogram {
    buckets: Vec<BatchBucket>,
}

impl BatchHistogram {
    pub fn from_records(records: &[StudentRecord]) -> Self {
        let mut buckets: Vec<BatchBucket> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for record in records {
            let label = record.batch_label();
            match index.get(label) {
                Some(&slot) => buckets[slot].students += 1,
                None => {
                    index.insert(label, buckets.len());
                    buckets.push(BatchBucket {
                        batch: label.to_string(),
                        students: 1,
                    });
                }
            }
        }

        Self { buckets }
    }

    pub fn buckets(&self) -> &[BatchBucket] {
        &self.buckets
    }

    pub fn into_buckets(self) -> Vec<BatchBucket> {
        self.buckets
    }

    /// Count for one batch label, `0` if it never appeared
    pub fn count(&self, batch: &str) -> usize {
        self.buckets
            .iter()
            .find(|bucket| bucket.batch == batch)
            .map_or(0, |bucket| bucket.students)
    }

    /// Sum over all buckets; equals the snapshot size
    pub fn total(&self) -> usize {
        self.buckets.iter().map(|bucket| bucket.students).sum()
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}
