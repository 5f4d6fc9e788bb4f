//! Application state for the progress badge API.

use anyhow::{Context, Result};
use metrics_exporter_prometheus::PrometheusHandle;
use renderer::BadgeRenderer;

use crate::config::ServiceConfig;

/// Shared, read-only application state.
pub struct AppState {
    /// Compiled badge template and palette.
    pub renderer: BadgeRenderer,

    /// Precomputed `Cache-Control` header value.
    pub cache_control: String,

    /// Prometheus exporter, when a recorder is installed.
    pub prometheus: Option<PrometheusHandle>,
}

impl AppState {
    /// Build state from configuration. Template failures are fatal here.
    pub fn new(config: &ServiceConfig) -> Result<Self> {
        let renderer = config
            .build_renderer()
            .context("Failed to compile badge template")?;

        Ok(Self {
            renderer,
            cache_control: config.cache_control(),
            prometheus: None,
        })
    }

    pub fn with_prometheus(mut self, handle: PrometheusHandle) -> Self {
        self.prometheus = Some(handle);
        self
    }
}
