//! Data loader
//!
//! One read-all request per mounted view. The request is owned by a
//! [`StudentQuery`], which moves from `Pending` to either `Loaded` or `Failed`
//! exactly once. A failure is reported through the notification channel and
//! leaves the view with an empty list; nothing is retried.

mod query;
mod rest;
mod source;


pub use query::{FETCH_FAILED_MESSAGE, QueryState, StudentQuery};
pub(crate) use query::run_fetch;
pub use rest::RestStudentSource;
pub use source::StudentSource;

#[cfg(test)]
pub use source::MockStudentSource;
