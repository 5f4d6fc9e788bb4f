//! The badge renderer: a compiled template plus a palette.

use std::path::Path;

use badge_common::{BadgeError, RenderRequest};
use tracing::debug;

use crate::plan::RenderPlan;
use crate::style::Palette;
use crate::template::{Template, DEFAULT_TEMPLATE};

/// MIME type of rendered badges.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";

/// A rendered badge and the plan it was drawn from.
#[derive(Debug, Clone)]
pub struct RenderedBadge {
    pub plan: RenderPlan,
    pub svg: String,
}

/// Renders badges from validated requests.
///
/// Built once at startup and shared read-only between requests.
#[derive(Debug, Clone)]
pub struct BadgeRenderer {
    template: Template,
    palette: Palette,
}

impl BadgeRenderer {
    /// Renderer using the embedded template.
    pub fn new(palette: Palette) -> Result<Self, BadgeError> {
        Self::with_template(DEFAULT_TEMPLATE, palette)
    }

    /// Renderer using a template read from disk.
    pub fn from_template_file(path: impl AsRef<Path>, palette: Palette) -> Result<Self, BadgeError> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|e| {
            BadgeError::TemplateError(format!("failed to read {}: {}", path.display(), e))
        })?;
        Self::with_template(&source, palette)
    }

    /// Compile `source` and check that it produces well-formed SVG.
    pub fn with_template(source: &str, palette: Palette) -> Result<Self, BadgeError> {
        let template = Template::compile(source)?;
        let renderer = Self { template, palette };
        renderer.validate()?;
        Ok(renderer)
    }

    /// Resolve percentage, width, color and label for a request.
    pub fn plan(&self, request: &RenderRequest) -> RenderPlan {
        RenderPlan::new(request, &self.palette)
    }

    /// Plan and draw one badge.
    pub fn render(&self, request: &RenderRequest) -> Result<RenderedBadge, BadgeError> {
        let plan = self.plan(request);
        let svg = self.template.render(&plan)?;
        Ok(RenderedBadge { plan, svg })
    }

    /// Render a sample badge and parse it as SVG.
    fn validate(&self) -> Result<(), BadgeError> {
        let sample = RenderRequest::new(50.0)?.with_label("<sample & label>")?;
        let svg = self.template.render(&self.plan(&sample))?;

        let opt = usvg::Options::default();
        let tree = usvg::Tree::from_str(&svg, &opt)
            .map_err(|e| BadgeError::TemplateError(format!("template is not valid SVG: {}", e)))?;

        debug!(
            width = tree.size().width(),
            height = tree.size().height(),
            "Badge template validated"
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_template_renders() {
        let renderer = BadgeRenderer::new(Palette::default()).unwrap();
        let badge = renderer
            .render(&RenderRequest::new(76.0).unwrap())
            .unwrap();

        assert!(badge.svg.starts_with("<svg"));
        assert!(badge.svg.contains("76%"));
        assert!(badge.svg.contains(r##"width="68" height="20" fill="#5cb85c""##));
        assert!(badge.svg.contains(r##"fill="#555555""##));
    }

    #[test]
    fn test_invalid_svg_template_is_rejected() {
        let err = BadgeRenderer::with_template("<svg><rect>{{label}}", Palette::default()).unwrap_err();
        assert!(matches!(err, BadgeError::TemplateError(_)));
    }
}
