//! Common test utilities for cohort-dashboard
//!
//! # Usage
//!
//! ```rust,ignore
//! use crate::common::{backend, fixtures::StudentFactory};
//!
//! #[tokio::test]
//! async fn my_test() {
//!     let server = backend::MockBackend::start().await;
//!     server.serve_rows(&[StudentFactory::assigned("A")]).await;
//!     // ...
//! }
//! ```

pub mod backend;
pub mod fixtures;

// Re-export commonly used items
pub use backend::{MockBackend, PendingSource, StaticSource};
pub use fixtures::StudentFactory;

/// Assert that a result is Ok and return the value
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("Expected Ok, got Err: {:?}", e),
        }
    };
}

/// Assert that a result is Err
#[macro_export]
macro_rules! assert_err {
    ($expr:expr) => {
        match $expr {
            Ok(v) => panic!("Expected Err, got Ok: {:?}", v),
            Err(e) => e,
        }
    };
}
