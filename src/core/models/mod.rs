//! Data model of the student-records table

pub mod student;

pub use student::{NOT_AVAILABLE, StudentRecord, UNASSIGNED_LABEL, or_placeholder};
