//! Validated badge render requests.

use crate::color::HexColor;
use crate::error::BadgeError;

/// Maximum label length, counted in Unicode scalar values.
pub const MAX_LABEL_CHARS: usize = 64;

/// A `[min, max]` input range with `max > min`, both finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueRange {
    min: f64,
    max: f64,
}

impl ValueRange {
    pub fn new(min: f64, max: f64) -> Result<Self, BadgeError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(BadgeError::InvalidRange(
                "min and max must be finite numbers".to_string(),
            ));
        }
        if max <= min {
            return Err(BadgeError::InvalidRange(format!(
                "max ({}) must be greater than min ({})",
                max, min
            )));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Map `value` linearly onto `[0, 100]`, unclamped. Never NaN.
    pub fn to_percent(&self, value: f64) -> f64 {
        let span = self.max - self.min;
        if span.is_finite() {
            // `span > 0`, so an overflowing numerator gives ±inf, not NaN.
            return (value - self.min) / span * 100.0;
        }

        // The span overflowed; halving every term keeps it finite.
        (value / 2.0 - self.min / 2.0) / (self.max / 2.0 - self.min / 2.0) * 100.0
    }
}

/// How the raw value becomes a percentage.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Scale {
    /// The value already is a percentage.
    #[default]
    Percentage,
    /// The value is rescaled from the given range.
    Range(ValueRange),
}

/// Caller-supplied color overrides. `None` means unset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ColorOverrides {
    pub success: Option<HexColor>,
    pub warning: Option<HexColor>,
    pub danger: Option<HexColor>,
    pub bar: Option<HexColor>,
}

/// A fully validated request for one badge.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderRequest {
    /// The numeric value from the path, always finite.
    pub value: f64,
    pub scale: Scale,
    pub colors: ColorOverrides,
    pub label: Option<String>,
}

impl RenderRequest {
    /// A percentage-mode request with no overrides.
    pub fn new(value: f64) -> Result<Self, BadgeError> {
        if !value.is_finite() {
            return Err(BadgeError::InvalidValue(value.to_string()));
        }
        Ok(Self {
            value,
            scale: Scale::Percentage,
            colors: ColorOverrides::default(),
            label: None,
        })
    }

    pub fn with_range(mut self, range: ValueRange) -> Self {
        self.scale = Scale::Range(range);
        self
    }

    pub fn with_colors(mut self, colors: ColorOverrides) -> Self {
        self.colors = colors;
        self
    }

    /// Attach an explicit label, enforcing the length limit.
    pub fn with_label(mut self, label: impl Into<String>) -> Result<Self, BadgeError> {
        let label = label.into();
        let length = label.chars().count();
        if length > MAX_LABEL_CHARS {
            return Err(BadgeError::LabelTooLong {
                length,
                max: MAX_LABEL_CHARS,
            });
        }
        self.label = Some(label);
        Ok(self)
    }
}
