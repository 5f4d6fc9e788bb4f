//! Value normalization and visual precedence.
//!
//! Turns a validated [`RenderRequest`] into a [`RenderPlan`]: the clamped
//! percentage, bar width, fill color and label text. Color and label are
//! chosen by walking an ordered rule list; the first rule that yields a
//! value wins, and the tier color or percentage label applies when none do.

use badge_common::{HexColor, RenderRequest, Scale};

use crate::numbers::{bar_width, clamp_percentage, format_number, format_percentage};
use crate::style::{Palette, Tier};

/// Caller-controlled sources for the bar fill color, highest precedence
/// first. Without a match the palette color for the tier is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRule {
    /// `barColor` wins regardless of tier.
    BarOverride,
    /// The caller's color for the percentage's tier.
    TierOverride,
}

pub const COLOR_RULES: &[ColorRule] = &[ColorRule::BarOverride, ColorRule::TierOverride];

/// Sources for the label text, highest precedence first. Without a match
/// the clamped percentage with a `%` suffix is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelRule {
    /// The caller's `label`, verbatim.
    Explicit,
    /// In range mode, the raw unclamped input value.
    RawValue,
}

pub const LABEL_RULES: &[LabelRule] = &[LabelRule::Explicit, LabelRule::RawValue];

impl ColorRule {
    fn resolve(self, request: &RenderRequest, tier: Tier) -> Option<&HexColor> {
        match self {
            ColorRule::BarOverride => request.colors.bar.as_ref(),
            ColorRule::TierOverride => tier.override_in(&request.colors),
        }
    }
}

impl LabelRule {
    fn resolve(self, request: &RenderRequest) -> Option<String> {
        match self {
            LabelRule::Explicit => request.label.clone(),
            LabelRule::RawValue => match request.scale {
                Scale::Range(_) => Some(format_number(request.value)),
                Scale::Percentage => None,
            },
        }
    }
}

/// Everything the template needs to draw one badge.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPlan {
    /// Clamped to `[0, 100]`.
    pub percentage: f64,
    pub bar_width: u32,
    pub fill_color: HexColor,
    pub background_color: HexColor,
    pub label: String,
}

impl RenderPlan {
    pub fn new(request: &RenderRequest, palette: &Palette) -> Self {
        let percentage = normalize(request);
        let tier = Tier::for_percentage(percentage);

        let fill_color = COLOR_RULES
            .iter()
            .find_map(|rule| rule.resolve(request, tier))
            .unwrap_or_else(|| palette.for_tier(tier))
            .clone();

        let label = LABEL_RULES
            .iter()
            .find_map(|rule| rule.resolve(request))
            .unwrap_or_else(|| format_percentage(percentage));

        Self {
            percentage,
            bar_width: bar_width(percentage),
            fill_color,
            background_color: palette.background.clone(),
            label,
        }
    }
}

/// Clamped percentage for a request in either mode.
pub fn normalize(request: &RenderRequest) -> f64 {
    let raw = match request.scale {
        Scale::Percentage => request.value,
        Scale::Range(range) => range.to_percent(request.value),
    };
    clamp_percentage(raw)
}

/// Fill color for a percentage given caller overrides.
pub fn pick_color(request: &RenderRequest, palette: &Palette) -> HexColor {
    RenderPlan::new(request, palette).fill_color
}
