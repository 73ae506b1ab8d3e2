//! Integration tests for cohort-dashboard
//!
//! These tests drive the public API and talk to a mock backend over real
//! HTTP where the loader is involved.

pub mod aggregator_tests;
pub mod config_validation_tests;
pub mod error_handling_tests;
