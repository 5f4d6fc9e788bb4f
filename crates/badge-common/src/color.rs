//! Validated hex colors.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BadgeError;

/// A 6-digit RGB color, stored lower-case with a leading `#`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    /// Parse exactly six hex digits (no leading `#`, any case).
    pub fn parse(digits: &str) -> Option<Self> {
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        Some(Self(format!("#{}", digits.to_ascii_lowercase())))
    }

    /// Parse an optional query parameter. Empty values count as unset.
    pub fn from_param(param: &str, raw: Option<&str>) -> Result<Option<Self>, BadgeError> {
        match raw {
            None | Some("") => Ok(None),
            Some(value) => Self::parse(value).map(Some).ok_or_else(|| {
                BadgeError::InvalidColor {
                    param: param.to_string(),
                    value: value.to_string(),
                }
            }),
        }
    }

    /// The color as `#rrggbb`.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value).ok_or_else(|| format!("'{}' is not a 6-character hex value", value))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        // Round-trips through `parse`, which takes bare digits.
        color.0.trim_start_matches('#').to_string()
    }
}
