//! Color palette and threshold tiers for badge rendering.

use badge_common::{ColorOverrides, HexColor};
use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the warning tier.
pub const WARNING_THRESHOLD: f64 = 33.0;

/// Lower bound (inclusive) of the success tier.
pub const SUCCESS_THRESHOLD: f64 = 70.0;

/// One of the three percentage bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tier {
    /// `[0, 33)`
    Danger,
    /// `[33, 70)`
    Warning,
    /// `[70, 100]`
    Success,
}

impl Tier {
    /// Classify a clamped percentage.
    pub fn for_percentage(percentage: f64) -> Self {
        if percentage < WARNING_THRESHOLD {
            Tier::Danger
        } else if percentage < SUCCESS_THRESHOLD {
            Tier::Warning
        } else {
            Tier::Success
        }
    }

    /// The caller's override for this tier, if any.
    pub fn override_in(self, colors: &ColorOverrides) -> Option<&HexColor> {
        match self {
            Tier::Danger => colors.danger.as_ref(),
            Tier::Warning => colors.warning.as_ref(),
            Tier::Success => colors.success.as_ref(),
        }
    }
}

/// Built-in colors used when the caller supplies no override.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Palette {
    #[serde(default = "default_danger")]
    pub danger: HexColor,
    #[serde(default = "default_warning")]
    pub warning: HexColor,
    #[serde(default = "default_success")]
    pub success: HexColor,
    /// Neutral color of the bar track.
    #[serde(default = "default_background")]
    pub background: HexColor,
}

impl Palette {
    pub fn for_tier(&self, tier: Tier) -> &HexColor {
        match tier {
            Tier::Danger => &self.danger,
            Tier::Warning => &self.warning,
            Tier::Success => &self.success,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            danger: default_danger(),
            warning: default_warning(),
            success: default_success(),
            background: default_background(),
        }
    }
}

fn builtin(digits: &str) -> HexColor {
    HexColor::parse(digits).unwrap_or_else(|| unreachable!("built-in color {digits} is valid"))
}

fn default_danger() -> HexColor {
    builtin("d9534f")
}

fn default_warning() -> HexColor {
    builtin("f0ad4e")
}

fn default_success() -> HexColor {
    builtin("5cb85c")
}

fn default_background() -> HexColor {
    builtin("555555")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(Tier::for_percentage(0.0), Tier::Danger);
        assert_eq!(Tier::for_percentage(32.999), Tier::Danger);
        assert_eq!(Tier::for_percentage(33.0), Tier::Warning);
        assert_eq!(Tier::for_percentage(69.999), Tier::Warning);
        assert_eq!(Tier::for_percentage(70.0), Tier::Success);
        assert_eq!(Tier::for_percentage(100.0), Tier::Success);
    }

    #[test]
    fn test_default_palette() {
        let palette = Palette::default();
        assert_eq!(palette.for_tier(Tier::Danger).as_str(), "#d9534f");
        assert_eq!(palette.for_tier(Tier::Warning).as_str(), "#f0ad4e");
        assert_eq!(palette.for_tier(Tier::Success).as_str(), "#5cb85c");
        assert_eq!(palette.background.as_str(), "#555555");
    }
}
