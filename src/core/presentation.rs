//! Render-ready payloads for the dashboard widgets
//!
//! Each page is produced from a [`QueryState`] and never shows partial data:
//! a pending fetch renders as `Loading`, a failed one as an empty ready page
//! with `fetch_failed` set.

use crate::core::aggregator::{AssignmentSummary, BatchBucket, ViewAggregate};
use crate::core::loader::QueryState;
use crate::core::models::{StudentRecord, or_placeholder};
use crate::utils::error::DashboardError;
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Placeholder text while the student list is loading
pub const LOADING_MESSAGE: &str = "Loading students...";

/// Student table tab
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tab {
    /// Every record matching the search
    #[default]
    All,
    /// Matching records without a batch
    Unassigned,
}

impl FromStr for Tab {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "all" => Ok(Tab::All),
            "unassigned" => Ok(Tab::Unassigned),
            other => Err(DashboardError::bad_request(format!(
                "Unknown tab '{}', expected 'all' or 'unassigned'",
                other
            ))),
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tab::All => f.write_str("all"),
            Tab::Unassigned => f.write_str("unassigned"),
        }
    }
}

/// One line of the student table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub batch: String,
}

impl From<&StudentRecord> for StudentRow {
    fn from(record: &StudentRecord) -> Self {
        Self {
            id: record.id.clone(),
            name: or_placeholder(record.name.as_deref()).to_string(),
            email: or_placeholder(record.email.as_deref()).to_string(),
            phone: or_placeholder(record.phone_number.as_deref()).to_string(),
            city: or_placeholder(record.city.as_deref()).to_string(),
            batch: record.batch_label().to_string(),
        }
    }
}

/// Row counts shown on the two tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TabCounts {
    pub all: usize,
    pub unassigned: usize,
}

/// The student list screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StudentsPage {
    Loading {
        message: &'static str,
    },
    Ready {
        tab: Tab,
        search: String,
        rows: Vec<StudentRow>,
        counts: TabCounts,
        fetch_failed: bool,
    },
}

impl StudentsPage {
    pub fn render(state: &QueryState, search: &str, tab: Tab) -> Self {
        if state.is_pending() {
            return StudentsPage::Loading {
                message: LOADING_MESSAGE,
            };
        }

        let aggregate = ViewAggregate::compute(state.records(), search);
        let visible = match tab {
            Tab::All => &aggregate.filtered,
            Tab::Unassigned => &aggregate.unassigned,
        };

        StudentsPage::Ready {
            tab,
            search: search.to_string(),
            rows: visible.iter().map(|record| StudentRow::from(*record)).collect(),
            counts: TabCounts {
                all: aggregate.filtered.len(),
                unassigned: aggregate.unassigned.len(),
            },
            fetch_failed: state.is_failed(),
        }
    }
}

/// The four KPI cards
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct KpiCards {
    pub total_students: usize,
    pub assigned_students: usize,
    pub unassigned_students: usize,
    pub assignment_rate: f64,
    /// Rate as printed on the card, e.g. `"50.0%"`
    pub assignment_rate_label: String,
}

impl From<AssignmentSummary> for KpiCards {
    fn from(summary: AssignmentSummary) -> Self {
        Self {
            total_students: summary.total,
            assigned_students: summary.assigned,
            unassigned_students: summary.unassigned,
            assignment_rate: summary.assignment_rate,
            assignment_rate_label: summary.rate_label(),
        }
    }
}

/// The dashboard overview screen
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DashboardPage {
    Loading {
        message: &'static str,
    },
    Ready {
        cards: KpiCards,
        chart: Vec<BatchBucket>,
        fetch_failed: bool,
    },
}

impl DashboardPage {
    pub fn render(state: &QueryState) -> Self {
        if state.is_pending() {
            return DashboardPage::Loading {
                message: LOADING_MESSAGE,
            };
        }

        let aggregate = ViewAggregate::compute(state.records(), "");
        DashboardPage::Ready {
            cards: aggregate.summary.into(),
            chart: aggregate.histogram.into_buckets(),
            fetch_failed: state.is_failed(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonalInfo {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub gender: String,
    pub age: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseInfo {
    pub batch: String,
    pub course_type: String,
    pub language: String,
    pub registration_date: String,
}

/// Full attribute set of one record, as shown in the detail dialog
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentDetail {
    pub id: String,
    pub personal: PersonalInfo,
    pub course: CourseInfo,
}

impl From<&StudentRecord> for StudentDetail {
    fn from(record: &StudentRecord) -> Self {
        let text = |value: &Option<String>| or_placeholder(value.as_deref()).to_string();

        Self {
            id: record.id.clone(),
            personal: PersonalInfo {
                name: text(&record.name),
                email: text(&record.email),
                phone: text(&record.phone_number),
                gender: text(&record.gender),
                age: text(&record.age),
            },
            course: CourseInfo {
                batch: record.batch_label().to_string(),
                course_type: text(&record.course_type),
                language: text(&record.course_language),
                registration_date: record
                    .registration_date
                    .as_deref()
                    .filter(|raw| !raw.is_empty())
                    .map(format_registration_date)
                    .unwrap_or_else(|| or_placeholder(None).to_string()),
            },
        }
    }
}

/// Detail lookup result for a mounted view
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DetailPage {
    Loading { message: &'static str },
    Ready { student: StudentDetail },
}

impl DetailPage {
    /// `None` when the view has settled and holds no record with that id
    pub fn render(state: &QueryState, student_id: &str) -> Option<Self> {
        if state.is_pending() {
            return Some(DetailPage::Loading {
                message: LOADING_MESSAGE,
            });
        }

        state
            .records()
            .iter()
            .find(|record| record.id == student_id)
            .map(|record| DetailPage::Ready {
                student: record.into(),
            })
    }
}

/// Calendar date of a registration timestamp; unparseable values pass through
pub fn format_registration_date(raw: &str) -> String {
    const DATE: &str = "%Y-%m-%d";

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return timestamp.date_naive().format(DATE).to_string();
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return timestamp.date().format(DATE).to_string();
    }
    if let Ok(timestamp) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return timestamp.date().format(DATE).to_string();
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE) {
        return date.format(DATE).to_string();
    }
    raw.to_string()
}

/// Plain-text rendering of the dashboard for the terminal
pub fn summary_text(page: &DashboardPage) -> String {
    match page {
        DashboardPage::Loading { message } => format!("{}\n", message),
        DashboardPage::Ready {
            cards,
            chart,
            fetch_failed,
        } => {
            let mut out = String::new();
            if *fetch_failed {
                out.push_str("warning: student records could not be fetched\n");
            }
            out.push_str(&format!("Total Students:      {}\n", cards.total_students));
            out.push_str(&format!("Assigned Students:   {}\n", cards.assigned_students));
            out.push_str(&format!("Unassigned Students: {}\n", cards.unassigned_students));
            out.push_str(&format!("Assignment Rate:     {}\n", cards.assignment_rate_label));

            if !chart.is_empty() {
                out.push_str("\nStudent Distribution by Batch\n");
                let width = chart.iter().map(|b| b.batch.chars().count()).max().unwrap_or(0);
                for bucket in chart {
                    out.push_str(&format!(
                        "  {:<width$}  {}\n",
                        bucket.batch,
                        bucket.students,
                        width = width
                    ));
                }
            }
            out
        }
    }
}
