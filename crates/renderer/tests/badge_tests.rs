//! End-to-end tests for the badge renderer.

use std::io::Write;

use badge_common::{BadgeError, ColorOverrides, HexColor, RenderRequest, ValueRange};
use renderer::{BadgeRenderer, Palette};

fn renderer() -> BadgeRenderer {
    BadgeRenderer::new(Palette::default()).unwrap()
}

#[test]
fn test_render_clamps_high_and_low() {
    let high = renderer()
        .render(&RenderRequest::new(150.0).unwrap())
        .unwrap();
    assert!(high.svg.contains(">100%<"));
    assert!(high.svg.contains(r##"width="90" height="20" fill="#5cb85c""##));

    let low = renderer()
        .render(&RenderRequest::new(-10.0).unwrap())
        .unwrap();
    assert!(low.svg.contains(">0%<"));
    assert!(low.svg.contains(r##"width="0" height="20" fill="#d9534f""##));
}

#[test]
fn test_render_range_mode() {
    let request = RenderRequest::new(100.0)
        .unwrap()
        .with_range(ValueRange::new(0.0, 200.0).unwrap());
    let badge = renderer().render(&request).unwrap();

    assert_eq!(badge.plan.percentage, 50.0);
    assert!(badge.svg.contains(">100<"));
    assert!(!badge.svg.contains("50%"));
}

#[test]
fn test_render_bar_color_override() {
    let colors = ColorOverrides {
        bar: HexColor::parse("0000FF"),
        ..Default::default()
    };
    let request = RenderRequest::new(10.0).unwrap().with_colors(colors);
    let badge = renderer().render(&request).unwrap();

    assert!(badge.svg.contains(r##"fill="#0000ff""##));
    assert!(!badge.svg.contains("#d9534f"));
}

#[test]
fn test_render_escapes_label() {
    let request = RenderRequest::new(10.0)
        .unwrap()
        .with_label("a<b & c")
        .unwrap();
    let badge = renderer().render(&request).unwrap();
    assert!(badge.svg.contains(">a&lt;b &amp; c<"));
}

#[test]
fn test_render_is_deterministic() {
    let request = RenderRequest::new(42.42).unwrap();
    let r = renderer();
    assert_eq!(r.render(&request).unwrap().svg, r.render(&request).unwrap().svg);
}

#[test]
fn test_template_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{{{{total_width}}}}" height="20"><rect width="{{{{bar_width}}}}" height="20" fill="{{{{fill_color}}}}"/><text>{{{{label}}}}</text></svg>"#
    )
    .unwrap();

    let renderer = BadgeRenderer::from_template_file(file.path(), Palette::default()).unwrap();
    let badge = renderer
        .render(&RenderRequest::new(50.0).unwrap())
        .unwrap();
    assert!(badge.svg.contains(r##"<rect width="45" height="20" fill="#f0ad4e"/>"##));
    assert!(badge.svg.contains("<text>50%</text>"));
}

#[test]
fn test_missing_template_file() {
    let err = BadgeRenderer::from_template_file("/nonexistent/badge.svg", Palette::default())
        .unwrap_err();
    assert!(matches!(err, BadgeError::TemplateError(msg) if msg.contains("failed to read")));
}

#[test]
fn test_custom_palette_applies() {
    let palette = Palette {
        success: HexColor::parse("00ff00").unwrap(),
        ..Palette::default()
    };
    let renderer = BadgeRenderer::new(palette).unwrap();
    let badge = renderer
        .render(&RenderRequest::new(90.0).unwrap())
        .unwrap();
    assert_eq!(badge.plan.fill_color.as_str(), "#00ff00");
}
