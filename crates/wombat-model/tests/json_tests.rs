//! Integration tests for the JSON helpers and the `Rect` round trip.

use wombat_model::{JsonError, Rect, from_json, to_json};

#[test]
fn test_serialize_rect() {
    let rect = Rect::new(20.0, 10.0);
    let text = to_json(&rect).unwrap();
    assert_eq!(text, "{\"width\":20.0,\"height\":10.0}");
}

#[test]
fn test_round_trip_restores_type_behavior() {
    let text = to_json(&Rect::new(20.0, 10.0)).unwrap();
    let rect: Rect = from_json(&text).unwrap();
    assert!((rect.width - 20.0).abs() < f64::EPSILON);
    assert!((rect.height - 10.0).abs() < f64::EPSILON);
    // The parsed value is a full Rect, methods included.
    assert!((rect.area() - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_deserialize_accepts_any_key_order() {
    let rect: Rect = from_json("{\"height\":10,\"width\":20}").unwrap();
    assert!((rect.area() - 200.0).abs() < f64::EPSILON);
}

#[test]
fn test_malformed_json_is_a_parse_error() {
    let result: Result<Rect, JsonError> = from_json("{\"width\": 20,");
    assert!(matches!(result, Err(JsonError::Parse(_))));
}

#[test]
fn test_mismatched_shape_is_a_parse_error() {
    let result: Result<Rect, JsonError> = from_json("[1, 2, 3]");
    assert!(matches!(result, Err(JsonError::Parse(_))));
}

#[test]
fn test_parse_error_mentions_invalid_json() {
    let err = from_json::<Rect>("not json").unwrap_err();
    assert!(err.to_string().starts_with("invalid JSON:"));
}
