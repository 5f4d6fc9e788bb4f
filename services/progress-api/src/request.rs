//! Request interpretation: HTTP method, path and query to [`RenderRequest`].
//!
//! Validation runs in a fixed order and the first failure wins:
//! method, value segment, colors, label, then min/max.

use axum::extract::Query;
use axum::http::{Method, Uri};
use serde::Deserialize;

use badge_common::{BadgeError, ColorOverrides, HexColor, RenderRequest, ValueRange};

/// Value of the `Allow` header on 405 responses.
pub const ALLOWED_METHODS: &str = "GET, HEAD";

/// Raw query parameters accepted by the badge endpoint.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeParams {
    pub success_color: Option<String>,
    pub warning_color: Option<String>,
    pub danger_color: Option<String>,
    pub bar_color: Option<String>,
    pub label: Option<String>,
    pub min: Option<String>,
    pub max: Option<String>,
}

/// Validate an inbound request into a [`RenderRequest`].
pub fn interpret(method: &Method, uri: &Uri) -> Result<RenderRequest, BadgeError> {
    check_method(method)?;

    let raw = value_segment(uri.path());
    let segment =
        urlencoding::decode(raw).map_err(|_| BadgeError::InvalidValue(raw.to_string()))?;
    let value =
        parse_finite(&segment).ok_or_else(|| BadgeError::InvalidValue(segment.to_string()))?;

    let Query(params) = Query::<BadgeParams>::try_from_uri(uri)
        .map_err(|e| BadgeError::InvalidQuery(e.body_text()))?;

    let colors = ColorOverrides {
        success: HexColor::from_param("successColor", params.success_color.as_deref())?,
        warning: HexColor::from_param("warningColor", params.warning_color.as_deref())?,
        danger: HexColor::from_param("dangerColor", params.danger_color.as_deref())?,
        bar: HexColor::from_param("barColor", params.bar_color.as_deref())?,
    };

    let mut request = RenderRequest::new(value)?.with_colors(colors);

    if let Some(label) = non_empty(params.label.as_deref()) {
        request = request.with_label(label)?;
    }

    if let Some(range) = parse_range(params.min.as_deref(), params.max.as_deref())? {
        request = request.with_range(range);
    }

    Ok(request)
}

/// Only GET and HEAD render badges.
pub fn check_method(method: &Method) -> Result<(), BadgeError> {
    if method == Method::GET || method == Method::HEAD {
        Ok(())
    } else {
        Err(BadgeError::MethodNotAllowed(method.to_string()))
    }
}

/// Final path component, ignoring trailing slashes.
pub fn value_segment(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    trimmed.rsplit('/').next().unwrap_or(trimmed)
}

/// Parse a decimal number, rejecting NaN and infinities.
pub fn parse_finite(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

fn parse_range(min: Option<&str>, max: Option<&str>) -> Result<Option<ValueRange>, BadgeError> {
    match (non_empty(min), non_empty(max)) {
        (None, None) => Ok(None),
        (Some(_), None) => Err(BadgeError::RangeIncomplete("max")),
        (None, Some(_)) => Err(BadgeError::RangeIncomplete("min")),
        (Some(min), Some(max)) => {
            let lo = parse_finite(min).ok_or_else(|| {
                BadgeError::InvalidRange(format!("min '{}' is not a finite number", min))
            })?;
            let hi = parse_finite(max).ok_or_else(|| {
                BadgeError::InvalidRange(format!("max '{}' is not a finite number", max))
            })?;
            ValueRange::new(lo, hi).map(Some)
        }
    }
}
