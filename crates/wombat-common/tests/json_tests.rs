//! Integration tests for the JSON helpers.

use serde::{Deserialize, Serialize};
use wombat_common::{JsonError, Rect, from_json, to_json};

#[test]
fn test_round_trip_preserves_fields_and_behavior() {
    let original = Rect::new(10.0, 20.0);
    let text = to_json(&original).unwrap();
    let restored: Rect = from_json(&text).unwrap();

    assert_eq!(restored, original);
    // The decoded value carries the type's behavior, not just its fields.
    assert!((restored.area() - 200.0).abs() < f32::EPSILON);
}

#[test]
fn test_encoding_follows_field_order() {
    let rect = Rect::new(10.0, 20.0);
    assert_eq!(to_json(&rect).unwrap(), r#"{"width":10.0,"height":20.0}"#);
}

#[test]
fn test_plain_structures_encode() {
    assert_eq!(to_json(&vec![1, 2, 3]).unwrap(), "[1,2,3]");
    assert_eq!(to_json(&"text").unwrap(), r#""text""#);
    assert_eq!(to_json(&true).unwrap(), "true");
}

#[test]
fn test_decoding_ignores_field_order() {
    let restored: Rect = from_json(r#"{"height":20.0,"width":10.0}"#).unwrap();
    assert_eq!(restored, Rect::new(10.0, 20.0));
}

#[test]
fn test_malformed_input_is_a_parse_error() {
    let err = from_json::<Rect>("{ width: oops").unwrap_err();
    assert!(matches!(err, JsonError::Parse(_)));
    assert!(err.to_string().starts_with("malformed JSON"));
}

#[test]
fn test_shape_mismatch_is_a_parse_error() {
    let err = from_json::<Rect>(r#"{"width":10.0}"#).unwrap_err();
    assert!(matches!(err, JsonError::Parse(_)));
}

#[test]
fn test_untyped_values_round_trip() {
    let value: serde_json::Value = from_json(r#"{"height":10,"width":20}"#).unwrap();
    assert_eq!(value["height"], 10);
    assert_eq!(value["width"], 20);
}

#[test]
fn test_user_defined_types_round_trip() {
    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Palette {
        name: String,
        colors: Vec<String>,
    }

    let palette = Palette {
        name: "warm".to_string(),
        colors: vec!["coral".to_string(), "amber".to_string()],
    };
    let restored: Palette = from_json(&to_json(&palette).unwrap()).unwrap();
    assert_eq!(restored, palette);
}
