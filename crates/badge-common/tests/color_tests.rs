//! Tests for HexColor serialization.

use badge_common::HexColor;
use std::collections::HashMap;

#[test]
fn test_deserialize_from_yaml() {
    let yaml = r#"
danger: "AA0000"
success: 00aa00
"#;
    let colors: HashMap<String, HexColor> = serde_yaml::from_str(yaml).unwrap();
    assert_eq!(colors["danger"].as_str(), "#aa0000");
    assert_eq!(colors["success"].as_str(), "#00aa00");
}

#[test]
fn test_deserialize_rejects_invalid() {
    let result: Result<HashMap<String, HexColor>, _> = serde_yaml::from_str("danger: red\n");
    assert!(result.is_err());
}

#[test]
fn test_serialize_emits_bare_digits() {
    let color = HexColor::parse("d9534f").unwrap();
    let yaml = serde_yaml::to_string(&color).unwrap();
    assert_eq!(yaml.trim(), "d9534f");
}
