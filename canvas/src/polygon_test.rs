#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;

fn sample() -> Polygon {
    Polygon {
        id: "p1".into(),
        w: 100.0,
        h: 80.0,
        points: vec![[10.0, 10.0], [90.0, 20.0], [50.0, 70.0]],
        fill: "#900025".into(),
    }
}

// =============================================================
// Placement
// =============================================================

#[test]
fn place_at_sets_position() {
    let placed = sample().place_at(Point::new(30.0, 40.0));
    assert_eq!(placed.position(), Point::new(30.0, 40.0));
    assert_eq!(placed.id(), "p1");
}

#[test]
fn place_centered_offsets_by_half_extent() {
    let placed = sample().place_centered(Point::new(150.0, 150.0));
    assert_eq!(placed.x, 100.0);
    assert_eq!(placed.y, 110.0);
}

#[test]
fn unplace_returns_original_polygon() {
    let placed = sample().place_at(Point::new(1.0, 2.0));
    assert_eq!(placed.unplace(), sample());
}

#[test]
fn half_extent_is_box_centre() {
    assert_eq!(sample().half_extent(), Point::new(50.0, 40.0));
}

#[test]
fn contains_uses_bounding_box() {
    let placed = sample().place_at(Point::new(0.0, 0.0));
    assert!(placed.contains(Point::new(99.0, 79.0)));
    assert!(!placed.contains(Point::new(101.0, 10.0)));
    assert!(!placed.contains(Point::new(10.0, -1.0)));
}

// =============================================================
// JSON shape
// =============================================================

#[test]
fn polygon_serializes_without_position() {
    let v = serde_json::to_value(sample()).unwrap();
    assert_eq!(
        v,
        json!({
            "id": "p1",
            "w": 100.0,
            "h": 80.0,
            "points": [[10.0, 10.0], [90.0, 20.0], [50.0, 70.0]],
            "fill": "#900025",
        })
    );
}

#[test]
fn placed_polygon_serializes_flat_with_position() {
    let v = serde_json::to_value(sample().place_at(Point::new(30.0, 40.0))).unwrap();
    assert_eq!(v["id"], "p1");
    assert_eq!(v["x"], 30.0);
    assert_eq!(v["y"], 40.0);
    assert!(v.get("polygon").is_none());
}

#[test]
fn polygon_deserialize_drops_stray_position() {
    let p: Polygon = serde_json::from_value(json!({
        "id": "p1", "w": 100, "h": 80, "points": [[1, 2]], "fill": "#fff", "x": 5, "y": 6
    }))
    .unwrap();
    assert_eq!(p.id, "p1");
    assert_eq!(p.points, vec![[1.0, 2.0]]);
}

#[test]
fn placed_polygon_missing_position_defaults_to_origin() {
    let p: PlacedPolygon = serde_json::from_value(json!({
        "id": "p1", "w": 100, "h": 80, "points": [], "fill": "#fff"
    }))
    .unwrap();
    assert_eq!(p.position(), Point::new(0.0, 0.0));
}

#[test]
fn polygon_missing_points_is_rejected() {
    let r: Result<Polygon, _> = serde_json::from_value(json!({ "id": "p1", "w": 1, "h": 1, "fill": "#fff" }));
    assert!(r.is_err());
}
