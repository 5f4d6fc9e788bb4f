//! Progress Badge API Service Library
//!
//! HTTP server rendering SVG progress badges from a numeric path segment.

pub mod config;
pub mod handlers;
pub mod metrics;
pub mod request;
pub mod state;

use std::sync::Arc;

use axum::{extract::Extension, routing::get, Router};
use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
    LatencyUnit,
};
use tracing::Level;

use state::AppState;

/// Build the application router.
///
/// Every path without a dedicated route is treated as a badge request.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health_handler))
        .route("/metrics", get(handlers::metrics_handler))
        .fallback(handlers::badge_handler)
        .layer(Extension(state))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
}
