//! HTTP request handlers for the progress badge API.
//!
//! - `badge`: the badge endpoint (every path not matched elsewhere)
//! - `health`: liveness and Prometheus metrics
//! - `common`: error responses

pub mod badge;
pub mod common;
pub mod health;

pub use badge::badge_handler;
pub use common::error_response;
pub use health::{health_handler, metrics_handler};
