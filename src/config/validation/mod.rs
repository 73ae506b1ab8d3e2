//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `validators`: implementations for every configuration section
//! - `tests`: Test suite for all validators

mod trait_def;
mod validators;


pub use trait_def::Validate;
pub use validators::validate_source_url;
