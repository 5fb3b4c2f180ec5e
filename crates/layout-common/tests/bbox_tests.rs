//! Tests for BoundingBox extent handling.

use layout_common::bbox::BoundingBox;
use test_utils::assert_approx_eq;

// ============================================================================
// Constructor tests
// ============================================================================

#[test]
fn test_bbox_new() {
    let bbox = BoundingBox::new(-127.26563, 23.56399, -66.09375, 50.51343);
    assert_eq!(bbox.min_x, -127.26563);
    assert_eq!(bbox.min_y, 23.56399);
    assert_eq!(bbox.max_x, -66.09375);
    assert_eq!(bbox.max_y, 50.51343);
}

#[test]
fn test_bbox_copy() {
    let bbox1 = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    let bbox2 = bbox1;
    assert_eq!(bbox1, bbox2);
}

#[test]
fn test_bbox_from_array() {
    let bbox = BoundingBox::from([-173.0, 17.0, -65.0, 72.0]);
    assert_eq!(bbox.to_array(), [-173.0, 17.0, -65.0, 72.0]);
}

// ============================================================================
// Ordering tests
// ============================================================================

#[test]
fn test_ordered_swaps_x_corners() {
    let bbox = BoundingBox::new(-63.69, 12.81, -129.17, 49.38).ordered();
    assert_approx_eq!(bbox.min_x, -129.17, 1e-9);
    assert_approx_eq!(bbox.max_x, -63.69, 1e-9);
    assert_approx_eq!(bbox.min_y, 12.81, 1e-9);
    assert_approx_eq!(bbox.max_y, 49.38, 1e-9);
}

#[test]
fn test_ordered_keeps_ordered_box() {
    let usa = BoundingBox::new(-127.26563, 23.56399, -66.09375, 50.51343);
    assert_eq!(usa.ordered(), usa);
}

// ============================================================================
// Containment tests
// ============================================================================

#[test]
fn test_contains_usa_center() {
    let usa = BoundingBox::new(-127.26563, 23.56399, -66.09375, 50.51343);
    assert!(usa.contains_point(-98.583, 39.833));
    assert!(!usa.contains_point(2.35, 48.85));
}

#[test]
fn test_contains_ignores_corner_order() {
    let bbox = BoundingBox::new(-63.69, 12.81, -129.17, 49.38);
    assert!(bbox.contains_point(-98.583, 39.833));
}

#[test]
fn test_contains_point_on_edge() {
    let bbox = BoundingBox::new(0.0, 0.0, 10.0, 10.0);
    assert!(bbox.contains_point(0.0, 10.0));
    assert!(!bbox.contains_point(10.0001, 5.0));
}

// ============================================================================
// Serialization tests
// ============================================================================

#[test]
fn test_roundtrip_preserves_unordered_corners() {
    let bbox = BoundingBox::new(-63.69, 12.81, -129.17, 49.38);
    let json = serde_json::to_value(bbox).unwrap();
    assert_eq!(json, serde_json::json!([-63.69, 12.81, -129.17, 49.38]));
}

#[test]
fn test_deserialize_rejects_short_array() {
    let result: Result<BoundingBox, _> = serde_json::from_str("[1.0, 2.0, 3.0]");
    assert!(result.is_err());
}
