//! Response helpers shared by the handlers.

use axum::{
    body::Body,
    http::{header, StatusCode},
    response::Response,
};

use badge_common::BadgeError;

use crate::request::ALLOWED_METHODS;

/// Plain-text error response with the status the error maps to.
pub fn error_response(err: &BadgeError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let mut builder = Response::builder()
        .status(status)
        .header(header::CONTENT_TYPE, "text/plain; charset=utf-8");

    if status == StatusCode::METHOD_NOT_ALLOWED {
        builder = builder.header(header::ALLOW, ALLOWED_METHODS);
    }

    let message = if err.is_client_error() {
        err.to_string()
    } else {
        "Failed to render badge".to_string()
    };

    builder
        .body(Body::from(message))
        .unwrap_or_else(|_| Response::new(Body::empty()))
}
