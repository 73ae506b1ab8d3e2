//! Student record as returned by the backend table
//!
//! Rows are owned by the backend and only ever read here. Every column other
//! than `id` may be missing or `null`; a present but empty string is treated
//! the same as a missing one.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Placeholder shown for missing display fields
pub const NOT_AVAILABLE: &str = "N/A";

/// Bucket and column label for records without a batch
pub const UNASSIGNED_LABEL: &str = "Unassigned";

/// One row of the student table
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    /// Stable identifier; numeric ids are kept in their decimal form
    #[serde(default, deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    /// Cohort label; absent or empty means unassigned
    #[serde(default)]
    pub batch: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default, deserialize_with = "deserialize_text")]
    pub age: Option<String>,
    #[serde(default)]
    pub course_type: Option<String>,
    #[serde(default)]
    pub course_language: Option<String>,
    #[serde(default)]
    pub registration_date: Option<String>,
}

impl StudentRecord {
    /// Create a record with only an id set
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_batch(mut self, batch: impl Into<String>) -> Self {
        self.batch = Some(batch.into());
        self
    }

    /// A record is assigned iff its batch is present and non-empty
    pub fn is_assigned(&self) -> bool {
        non_empty(self.batch.as_deref()).is_some()
    }

    /// The batch this record is counted under
    pub fn batch_label(&self) -> &str {
        non_empty(self.batch.as_deref()).unwrap_or(UNASSIGNED_LABEL)
    }

    /// Case-insensitive substring match on name or email.
    ///
    /// `needle` must already be lowercased. Missing fields never match.
    pub fn matches_search(&self, needle: &str) -> bool {
        let contains = |field: &Option<String>| {
            field
                .as_deref()
                .is_some_and(|value| value.to_lowercase().contains(needle))
        };
        contains(&self.name) || contains(&self.email)
    }
}

/// Display value for an optional field, `"N/A"` when missing or empty
pub fn or_placeholder(value: Option<&str>) -> &str {
    non_empty(value).unwrap_or(NOT_AVAILABLE)
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(de::Error::custom(format!(
            "student id must be a string or number, got {}",
            other
        ))),
    }
}

fn deserialize_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(None),
        Value::String(s) => Ok(Some(s)),
        Value::Number(n) => Ok(Some(n.to_string())),
        Value::Bool(b) => Ok(Some(b.to_string())),
        other => Err(de::Error::custom(format!(
            "expected a scalar value, got {}",
            other
        ))),
    }
}
