//! Test fixtures and data factories
//!
//! All factories create real records, not mocks.

use cohort_dashboard::core::models::StudentRecord;
use serde_json::{Value, json};
use uuid::Uuid;

/// Factory for creating student records
pub struct StudentFactory;

impl StudentFactory {
    /// A fully populated record without a batch
    pub fn create() -> StudentRecord {
        let suffix = &Uuid::new_v4().to_string()[..8];
        StudentRecord {
            id: Uuid::new_v4().to_string(),
            name: Some(format!("Student {}", suffix)),
            email: Some(format!("student-{}@example.com", suffix)),
            phone_number: Some("555-0100".to_string()),
            city: Some("Pune".to_string()),
            batch: None,
            gender: Some("Female".to_string()),
            age: Some("22".to_string()),
            course_type: Some("Full Stack".to_string()),
            course_language: Some("English".to_string()),
            registration_date: Some("2024-03-01T10:00:00+00:00".to_string()),
        }
    }

    pub fn assigned(batch: &str) -> StudentRecord {
        let mut record = Self::create();
        record.batch = Some(batch.to_string());
        record
    }

    pub fn unassigned() -> StudentRecord {
        Self::create()
    }

    pub fn named(name: &str, batch: Option<&str>) -> StudentRecord {
        let mut record = Self::create();
        record.name = Some(name.to_string());
        record.batch = batch.map(str::to_string);
        record
    }

    /// Only an id; every other column missing
    pub fn bare(id: &str) -> StudentRecord {
        StudentRecord::new(id)
    }

    /// `count` records per batch followed by `unassigned` records without one
    pub fn cohort(batches: &[(&str, usize)], unassigned: usize) -> Vec<StudentRecord> {
        let mut records: Vec<StudentRecord> = batches
            .iter()
            .flat_map(|(batch, count)| (0..*count).map(move |_| Self::assigned(batch)))
            .collect();
        records.extend((0..unassigned).map(|_| Self::unassigned()));
        records
    }

    /// The two-row scenario used throughout the docs
    pub fn john_and_jane() -> Vec<StudentRecord> {
        vec![
            Self::named("John Doe", Some("A")),
            Self::named("Jane Smith", None),
        ]
    }
}

/// Rows as the backend returns them, including the loose typing it allows
pub fn raw_rows() -> Value {
    json!([
        {
            "id": 1,
            "name": "John Doe",
            "email": "john@example.com",
            "phone_number": "555-0100",
            "city": "Pune",
            "batch": "A",
            "gender": "Male",
            "age": 21,
            "course_type": "Data Science",
            "course_language": "English",
            "registration_date": "2024-03-01T18:30:00+00:00",
            "created_at": "2024-03-01T18:30:00+00:00"
        },
        {
            "id": "2",
            "name": "Jane Smith",
            "email": null,
            "batch": null
        },
        {
            "id": 3,
            "name": "Sam Lee",
            "batch": ""
        }
    ])
}
