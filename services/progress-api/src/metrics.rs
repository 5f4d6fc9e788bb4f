//! Request metrics for the badge endpoint.

use metrics::{counter, histogram};
use std::time::Duration;

use badge_common::BadgeError;

pub const REQUESTS_TOTAL: &str = "badge_requests_total";
pub const RENDER_DURATION: &str = "badge_render_duration_seconds";

/// Record a successfully rendered badge.
pub fn record_success(elapsed: Duration) {
    counter!(REQUESTS_TOTAL, "outcome" => "ok").increment(1);
    histogram!(RENDER_DURATION).record(elapsed.as_secs_f64());
}

/// Record a rejected or failed request.
pub fn record_failure(err: &BadgeError) {
    counter!(REQUESTS_TOTAL, "outcome" => err.kind()).increment(1);
}
