//! Aggregation integration tests
//!
//! Scenarios and properties of the derived values, checked through the
//! public API only.

#[cfg(test)]
mod tests {
    use crate::common::assertions::{HistogramAssertions, SummaryAssertions};
    use crate::common::fixtures::StudentFactory;
    use cohort_dashboard::core::aggregator::{BatchHistogram, ViewAggregate};
    use cohort_dashboard::core::models::StudentRecord;

    /// Test the two-row scenario
    #[test]
    fn test_john_and_jane() {
        let records = StudentFactory::john_and_jane();
        let view = ViewAggregate::compute(&records, "");

        assert_eq!(view.summary.total, 2);
        assert_eq!(view.summary.assigned, 1);
        assert_eq!(view.summary.unassigned, 1);
        crate::assert_approx_eq!(view.summary.assignment_rate, 50.0);
        assert_eq!(view.histogram.count("A"), 1);
        assert_eq!(view.histogram.count("Unassigned"), 1);
        view.summary.assert_consistent();
    }

    /// Test that an empty snapshot yields zeros
    #[test]
    fn test_empty_snapshot() {
        let view = ViewAggregate::compute(&[], "anything");

        assert_eq!(view.summary.total, 0);
        assert_eq!(view.summary.assignment_rate, 0.0);
        assert!(view.histogram.is_empty());
        assert!(view.filtered.is_empty());
        assert!(view.unassigned.is_empty());
    }

    /// Test the consistency properties over a range of cohorts
    #[test]
    fn test_summary_properties() {
        let shapes: [(&[(&str, usize)], usize); 5] = [
            (&[], 0),
            (&[], 4),
            (&[("A", 3)], 0),
            (&[("A", 2), ("B", 5)], 3),
            (&[("Batch 1", 1), ("Batch 2", 1), ("Batch 3", 1)], 7),
        ];

        for (batches, unassigned) in shapes {
            let records = StudentFactory::cohort(batches, unassigned);
            let view = ViewAggregate::compute(&records, "");

            view.summary.assert_consistent();
            view.histogram.assert_covers(records.len());
            assert_eq!(view.summary.unassigned, unassigned);
            assert_eq!(
                view.unassigned.len(),
                unassigned,
                "empty search keeps every named record"
            );
        }
    }

    /// Test that empty, null and absent batches all count as unassigned
    #[test]
    fn test_unassigned_classification() {
        let records: Vec<StudentRecord> = serde_json::from_value(serde_json::json!([
            {"id": 1, "name": "a", "batch": ""},
            {"id": 2, "name": "b", "batch": null},
            {"id": 3, "name": "c"},
            {"id": 4, "name": "d", "batch": " "}
        ]))
        .unwrap();

        let view = ViewAggregate::compute(&records, "");
        assert_eq!(view.summary.unassigned, 3);
        assert_eq!(view.unassigned.len(), 3);
        assert_eq!(view.histogram.count("Unassigned"), 3);
        // Any non-empty string is a batch, whitespace included
        assert_eq!(view.histogram.count(" "), 1);
    }

    /// Test that a substring of a name or email always matches
    #[test]
    fn test_search_substring_property() {
        let mut records = StudentFactory::cohort(&[("A", 3)], 3);
        records.push(StudentFactory::bare("no-contact"));

        for record in records.iter().filter(|r| r.name.is_some()) {
            let name = record.name.as_deref().unwrap();
            let needle = name[name.len() / 2..].to_uppercase();
            let view = ViewAggregate::compute(&records, &needle);
            assert!(view.filtered.iter().any(|r| r.id == record.id));
        }

        let view = ViewAggregate::compute(&records, "definitely-not-present");
        assert!(view.filtered.is_empty());
    }

    /// Test that records with neither name nor email never match
    #[test]
    fn test_records_without_contact_fields() {
        let records = vec![StudentFactory::bare("1"), StudentFactory::bare("2")];
        let view = ViewAggregate::compute(&records, "");

        assert!(view.filtered.is_empty());
        assert_eq!(view.summary.total, 2);
        assert_eq!(view.summary.unassigned, 2);
    }

    /// Test that the histogram keeps first-appearance order
    #[test]
    fn test_histogram_order() {
        let records = vec![
            StudentFactory::assigned("C"),
            StudentFactory::unassigned(),
            StudentFactory::assigned("A"),
            StudentFactory::assigned("C"),
        ];

        let histogram = BatchHistogram::from_records(&records);
        let order: Vec<&str> = histogram.buckets().iter().map(|b| b.batch.as_str()).collect();
        assert_eq!(order, vec!["C", "Unassigned", "A"]);
        assert_eq!(histogram.count("C"), 2);
    }

    /// Test that the rate label rounds to one decimal
    #[test]
    fn test_rate_label() {
        let records = StudentFactory::cohort(&[("A", 2)], 1);
        let view = ViewAggregate::compute(&records, "");
        assert_eq!(view.summary.rate_label(), "66.7%");
    }
}
