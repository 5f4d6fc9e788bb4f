//! A minimal placeholder template for badge SVG documents.
//!
//! Templates are plain text with `{{slot}}` placeholders. [`Template::compile`]
//! splits the source into literal and slot segments once, so rendering is a
//! single pass of appends with no parsing.

use std::fmt::Write;

use badge_common::BadgeError;

use crate::numbers::TOTAL_BAR_WIDTH;
use crate::plan::RenderPlan;

/// The badge template shipped with the crate.
pub const DEFAULT_TEMPLATE: &str = include_str!("../assets/badge.svg");

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A named value the template can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    TotalWidth,
    TextX,
    BackgroundColor,
    BarWidth,
    FillColor,
    Label,
}

impl Slot {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "total_width" => Some(Slot::TotalWidth),
            "text_x" => Some(Slot::TextX),
            "background_color" => Some(Slot::BackgroundColor),
            "bar_width" => Some(Slot::BarWidth),
            "fill_color" => Some(Slot::FillColor),
            "label" => Some(Slot::Label),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Segment {
    Literal(String),
    Slot(Slot),
}

/// A compiled, immutable template.
#[derive(Debug, Clone)]
pub struct Template {
    segments: Vec<Segment>,
    literal_len: usize,
}

impl Template {
    /// Split `source` into segments, rejecting unknown or unterminated slots.
    pub fn compile(source: &str) -> Result<Self, BadgeError> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(Segment::Literal(rest[..start].to_string()));
            }
            let after_open = &rest[start + OPEN.len()..];
            let end = after_open.find(CLOSE).ok_or_else(|| {
                BadgeError::TemplateError(format!(
                    "unterminated placeholder at byte {}",
                    offset + start
                ))
            })?;

            let name = after_open[..end].trim();
            let slot = Slot::from_name(name).ok_or_else(|| {
                BadgeError::TemplateError(format!("unknown placeholder '{}'", name))
            })?;
            segments.push(Segment::Slot(slot));

            let consumed = start + OPEN.len() + end + CLOSE.len();
            offset += consumed;
            rest = &rest[consumed..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        if !segments.iter().any(|s| matches!(s, Segment::Slot(Slot::Label))) {
            return Err(BadgeError::TemplateError(
                "template never references {{label}}".to_string(),
            ));
        }

        let literal_len = segments
            .iter()
            .map(|s| match s {
                Segment::Literal(text) => text.len(),
                Segment::Slot(_) => 0,
            })
            .sum();

        Ok(Self {
            segments,
            literal_len,
        })
    }

    /// Fill the template for one badge.
    pub fn render(&self, plan: &RenderPlan) -> Result<String, BadgeError> {
        let mut out = String::with_capacity(self.literal_len + plan.label.len() * 2 + 64);

        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(Slot::TotalWidth) => write!(out, "{}", TOTAL_BAR_WIDTH)?,
                Segment::Slot(Slot::TextX) => write!(out, "{}", TOTAL_BAR_WIDTH as f64 / 2.0)?,
                Segment::Slot(Slot::BackgroundColor) => out.push_str(plan.background_color.as_str()),
                Segment::Slot(Slot::BarWidth) => write!(out, "{}", plan.bar_width)?,
                Segment::Slot(Slot::FillColor) => out.push_str(plan.fill_color.as_str()),
                Segment::Slot(Slot::Label) => escape_xml_into(&plan.label, &mut out),
            }
        }

        Ok(out)
    }
}

/// Append `text` to `out` with XML special characters escaped.
pub fn escape_xml_into(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use badge_common::HexColor;

    fn plan(label: &str) -> RenderPlan {
        RenderPlan {
            percentage: 50.0,
            bar_width: 45,
            fill_color: HexColor::parse("f0ad4e").unwrap(),
            background_color: HexColor::parse("555555").unwrap(),
            label: label.to_string(),
        }
    }

    #[test]
    fn test_compile_and_render() {
        let template =
            Template::compile("<r w=\"{{ bar_width }}\" f=\"{{fill_color}}\">{{label}}</r>").unwrap();
        let out = template.render(&plan("50%")).unwrap();
        assert_eq!(out, "<r w=\"45\" f=\"#f0ad4e\">50%</r>");
    }

    #[test]
    fn test_unknown_placeholder() {
        let err = Template::compile("{{label}}{{colour}}").unwrap_err();
        assert!(matches!(err, BadgeError::TemplateError(msg) if msg.contains("colour")));
    }

    #[test]
    fn test_unterminated_placeholder() {
        let err = Template::compile("<t>{{label</t>").unwrap_err();
        assert!(matches!(err, BadgeError::TemplateError(msg) if msg.contains("byte 3")));
    }

    #[test]
    fn test_label_slot_required() {
        assert!(Template::compile("<svg/>").is_err());
    }

    #[test]
    fn test_label_is_escaped() {
        let template = Template::compile("<text>{{label}}</text>").unwrap();
        let out = template.render(&plan("<b>&'\"")).unwrap();
        assert_eq!(out, "<text>&lt;b&gt;&amp;&apos;&quot;</text>");
    }

    #[test]
    fn test_text_x_is_half_width() {
        let template = Template::compile("{{text_x}}/{{total_width}}{{label}}").unwrap();
        assert_eq!(template.render(&plan("")).unwrap(), "45/90");
    }
}
