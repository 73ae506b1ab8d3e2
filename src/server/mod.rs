//! HTTP server implementation
//!
//! This module provides the HTTP server, the view registry and routing.

pub mod routes;

pub mod builder;
mod handlers;
pub mod server;
pub mod state;
mod utils;
pub mod views;


pub use builder::{ServerBuilder, run_server};
pub use server::HttpServer;
pub use state::AppState;
pub use views::{ViewRegistry, ViewSession};
