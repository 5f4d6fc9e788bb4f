//! Service configuration loading and types.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use badge_common::BadgeError;
use renderer::{BadgeRenderer, Palette};

/// Service configuration, optionally loaded from a YAML file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Default tier and track colors.
    #[serde(default)]
    pub palette: Palette,

    /// `max-age` for the `Cache-Control` header on badges.
    #[serde(default = "default_cache_max_age")]
    pub cache_max_age_secs: u32,

    /// SVG template replacing the embedded one.
    #[serde(default)]
    pub template_path: Option<PathBuf>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            palette: Palette::default(),
            cache_max_age_secs: default_cache_max_age(),
            template_path: None,
        }
    }
}

impl ServiceConfig {
    /// Load from `path`, or return defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {:?}", path))?;
        let config = Self::from_yaml(&content)
            .with_context(|| format!("Failed to parse config: {:?}", path))?;

        tracing::info!(
            path = ?path,
            cache_max_age_secs = config.cache_max_age_secs,
            custom_template = config.template_path.is_some(),
            "Loaded service config"
        );
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Value for the `Cache-Control` header.
    pub fn cache_control(&self) -> String {
        format!("public, max-age={}", self.cache_max_age_secs)
    }

    /// Compile the configured template into a renderer.
    pub fn build_renderer(&self) -> Result<BadgeRenderer, BadgeError> {
        match &self.template_path {
            Some(path) => BadgeRenderer::from_template_file(path, self.palette.clone()),
            None => BadgeRenderer::new(self.palette.clone()),
        }
    }
}

fn default_cache_max_age() -> u32 {
    300
}
