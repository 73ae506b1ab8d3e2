//! KPI counts

use crate::core::models::StudentRecord;
use serde::Serialize;

/// Assignment counts over a full snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AssignmentSummary {
    pub total: usize,
    pub assigned: usize,
    pub unassigned: usize,
    /// Percentage in `[0, 100]`; `0` for an empty snapshot
    pub assignment_rate: f64,
}

impl AssignmentSummary {
    pub fn from_records(records: &[StudentRecord]) -> Self {
        let total = records.len();
        let assigned = records.iter().filter(|r| r.is_assigned()).count();

        let assignment_rate = if total > 0 {
            (assigned as f64 / total as f64 * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        };

        Self {
            total,
            assigned,
            unassigned: total - assigned,
            assignment_rate,
        }
    }

    /// Rate with one decimal, as shown on the KPI card (`"66.7%"`)
    pub fn rate_label(&self) -> String {
        format!("{:.1}%", self.assignment_rate)
    }
}
