//! Common types shared across the badge renderer and HTTP service.

pub mod color;
pub mod error;
pub mod request;

pub use color::HexColor;
pub use error::{BadgeError, BadgeResult};
pub use request::{ColorOverrides, RenderRequest, Scale, ValueRange, MAX_LABEL_CHARS};
