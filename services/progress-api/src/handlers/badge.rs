//! Badge endpoint: `GET|HEAD /<anything>/<value>`.

use axum::{
    body::Body,
    extract::Extension,
    http::{header, Method, StatusCode, Uri},
    response::Response,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error};

use badge_common::BadgeError;
use renderer::{RenderedBadge, SVG_CONTENT_TYPE};

use super::common::error_response;
use crate::metrics;
use crate::request::interpret;
use crate::state::AppState;

/// Render a badge for the final path segment.
pub async fn badge_handler(
    Extension(state): Extension<Arc<AppState>>,
    method: Method,
    uri: Uri,
) -> Response {
    let start = Instant::now();

    let result = interpret(&method, &uri).and_then(|request| state.renderer.render(&request));

    match result {
        Ok(badge) => {
            metrics::record_success(start.elapsed());
            debug!(
                percentage = badge.plan.percentage,
                bar_width = badge.plan.bar_width,
                fill = %badge.plan.fill_color,
                label = %badge.plan.label,
                "Rendered badge"
            );
            badge_response(badge, &state.cache_control)
        }
        Err(err) => {
            metrics::record_failure(&err);
            match &err {
                BadgeError::TemplateError(msg) => error!(error = %msg, "Badge render failed"),
                other => debug!(path = %uri.path(), error = %other, "Rejected badge request"),
            }
            error_response(&err)
        }
    }
}

/// SVG response. Axum strips the body for HEAD after every layer has seen
/// it, so HEAD and GET carry identical headers.
fn badge_response(badge: RenderedBadge, cache_control: &str) -> Response {
    Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, SVG_CONTENT_TYPE)
        .header(header::CACHE_CONTROL, cache_control)
        .body(Body::from(badge.svg))
        .unwrap_or_else(|_| error_response(&BadgeError::TemplateError("invalid response".into())))
}
