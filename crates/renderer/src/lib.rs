//! SVG badge rendering.
//!
//! Implements the value-to-visual pipeline:
//! - Percentage normalization and bar geometry (`numbers`, `plan`)
//! - Threshold tiers and palette (`style`)
//! - Placeholder template compilation (`template`)
//! - The shared renderer object (`badge`)

pub mod badge;
pub mod numbers;
pub mod plan;
pub mod style;
pub mod template;

pub use badge::{BadgeRenderer, RenderedBadge, SVG_CONTENT_TYPE};
pub use plan::RenderPlan;
pub use style::{Palette, Tier};
