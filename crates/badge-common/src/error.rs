//! Error types for the badge services.

use thiserror::Error;

/// Result type alias using BadgeError.
pub type BadgeResult<T> = Result<T, BadgeError>;

/// Primary error type for badge operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BadgeError {
    // === Request Errors ===
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),

    #[error("Invalid value '{0}': value must be a finite number")]
    InvalidValue(String),

    #[error("Invalid {param} '{value}': {param} must be a 6-character hex value")]
    InvalidColor { param: String, value: String },

    #[error("label must be at most {max} characters, got {length}")]
    LabelTooLong { length: usize, max: usize },

    #[error("min and max must be provided together: missing {0}")]
    RangeIncomplete(&'static str),

    #[error("Invalid range: {0}")]
    InvalidRange(String),

    #[error("Invalid query string: {0}")]
    InvalidQuery(String),

    // === Rendering Errors ===
    #[error("Template error: {0}")]
    TemplateError(String),
}

impl BadgeError {
    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            BadgeError::MethodNotAllowed(_) => 405,

            BadgeError::InvalidValue(_)
            | BadgeError::InvalidColor { .. }
            | BadgeError::LabelTooLong { .. }
            | BadgeError::RangeIncomplete(_)
            | BadgeError::InvalidRange(_)
            | BadgeError::InvalidQuery(_) => 400,

            BadgeError::TemplateError(_) => 500,
        }
    }

    /// Stable snake_case name, used as a metrics label.
    pub fn kind(&self) -> &'static str {
        match self {
            BadgeError::MethodNotAllowed(_) => "method_not_allowed",
            BadgeError::InvalidValue(_) => "invalid_value",
            BadgeError::InvalidColor { .. } => "invalid_color",
            BadgeError::LabelTooLong { .. } => "label_too_long",
            BadgeError::RangeIncomplete(_) => "range_incomplete",
            BadgeError::InvalidRange(_) => "invalid_range",
            BadgeError::InvalidQuery(_) => "invalid_query",
            BadgeError::TemplateError(_) => "template_error",
        }
    }

    /// True for errors caused by the caller rather than the service.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.http_status_code())
    }
}

impl From<std::fmt::Error> for BadgeError {
    fn from(err: std::fmt::Error) -> Self {
        BadgeError::TemplateError(format!("formatting failed: {}", err))
    }
}
