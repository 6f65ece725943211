#![allow(clippy::float_cmp)]

use serde_json::json;

use super::*;
use crate::camera::Point;

fn poly(id: &str) -> Polygon {
    Polygon {
        id: id.into(),
        w: 100.0,
        h: 100.0,
        points: vec![[10.5, 20.25], [80.0, 30.0], [45.0, 90.0]],
        fill: "#900025".into(),
    }
}

fn sample() -> Snapshot {
    Snapshot {
        buffer: vec![poly("b1"), poly("b2")],
        workspace: vec![poly("w1").place_at(Point::new(-12.5, 300.0))],
    }
}

// =============================================================
// Strict codec
// =============================================================

#[test]
fn save_then_load_reproduces_collections() {
    let raw = sample().to_json().unwrap();
    assert_eq!(Snapshot::from_json(&raw).unwrap(), sample());
    assert_eq!(Snapshot::parse_lenient(&raw), sample());
}

#[test]
fn saved_json_has_expected_shape() {
    let v: serde_json::Value = serde_json::from_str(&sample().to_json().unwrap()).unwrap();
    assert!(v["buffer"].is_array());
    assert!(v["workspace"].is_array());
    assert!(v["buffer"][0].get("x").is_none());
    assert_eq!(v["workspace"][0]["x"], -12.5);
    assert_eq!(v["workspace"][0]["y"], 300.0);
    assert_eq!(v["workspace"][0]["points"][0], json!([10.5, 20.25]));
}

#[test]
fn strict_parse_rejects_garbage() {
    assert!(Snapshot::from_json("not json").is_err());
    assert!(Snapshot::from_json("{}").is_err());
}

// =============================================================
// Lenient load
// =============================================================

#[test]
fn lenient_garbage_is_empty() {
    assert_eq!(Snapshot::parse_lenient("{oops"), Snapshot::default());
    assert_eq!(Snapshot::parse_lenient(""), Snapshot::default());
}

#[test]
fn lenient_non_object_is_empty() {
    assert_eq!(Snapshot::parse_lenient("[1, 2, 3]"), Snapshot::default());
    assert_eq!(Snapshot::parse_lenient("null"), Snapshot::default());
}

#[test]
fn lenient_keeps_valid_field_when_other_is_not_array() {
    let raw = json!({
        "buffer": "nope",
        "workspace": [{ "id": "w", "w": 1, "h": 1, "points": [], "fill": "#000", "x": 4, "y": 5 }],
    })
    .to_string();
    let snap = Snapshot::parse_lenient(&raw);
    assert!(snap.buffer.is_empty());
    assert_eq!(snap.workspace.len(), 1);
    assert_eq!(snap.workspace[0].position(), Point::new(4.0, 5.0));
}

#[test]
fn lenient_missing_field_is_empty() {
    let raw = json!({ "buffer": [{ "id": "b", "w": 1, "h": 1, "points": [], "fill": "#000" }] }).to_string();
    let snap = Snapshot::parse_lenient(&raw);
    assert_eq!(snap.buffer.len(), 1);
    assert!(snap.workspace.is_empty());
}

#[test]
fn lenient_malformed_entry_drops_that_field() {
    let raw = json!({
        "buffer": [{ "id": "ok", "w": 1, "h": 1, "points": [], "fill": "#000" }, { "id": 7 }],
        "workspace": [],
    })
    .to_string();
    let snap = Snapshot::parse_lenient(&raw);
    assert!(snap.buffer.is_empty());
}

#[test]
fn lenient_strips_position_from_buffer_entries() {
    let raw = json!({
        "buffer": [{ "id": "b", "w": 1, "h": 1, "points": [[0, 0]], "fill": "#000", "x": 9, "y": 9 }],
        "workspace": [],
    })
    .to_string();
    let snap = Snapshot::parse_lenient(&raw);
    let out = serde_json::to_value(&snap.buffer[0]).unwrap();
    assert!(out.get("x").is_none());
}

#[test]
fn capture_and_into_board_round_trip() {
    let board = sample().into_board();
    assert_eq!(Snapshot::capture(&board), sample());
}
