//! Core dashboard functionality
//!
//! The record model, the view aggregator, the per-view loader and the
//! notification channel. Nothing in here knows about HTTP.

pub mod aggregator;
pub mod export;
pub mod loader;
pub mod models;
pub mod notifications;
pub mod presentation;
