#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn poly(id: &str, w: f64, h: f64) -> Polygon {
    Polygon { id: id.into(), w, h, points: vec![[0.0, 0.0], [w, h]], fill: "#900025".into() }
}

// =============================================================
// polygon_frame
// =============================================================

#[test]
fn frame_at_identity_camera() {
    let placed = poly("a", 100.0, 50.0).place_at(Point::new(30.0, 40.0));
    let rect = polygon_frame(&placed, &Camera::default());
    assert_eq!(rect, ScreenRect { left: 30.0, top: 40.0, width: 100.0, height: 50.0 });
}

#[test]
fn frame_follows_offset_and_scale() {
    let placed = poly("a", 100.0, 50.0).place_at(Point::new(10.0, -10.0));
    let cam = Camera { offset: Point::new(5.0, 7.0), scale: 2.0 };
    let rect = polygon_frame(&placed, &cam);
    assert_eq!(rect, ScreenRect { left: 25.0, top: -13.0, width: 200.0, height: 100.0 });
}

// =============================================================
// grid
// =============================================================

#[test]
fn grid_identity_camera() {
    let g = grid(&Camera::default(), 50.0, 120.0, 60.0);
    let xs: Vec<f64> = g.vertical.iter().map(|l| l.screen).collect();
    assert_eq!(xs, vec![0.0, 50.0, 100.0]);
    let labels: Vec<Option<i64>> = g.vertical.iter().map(|l| l.label).collect();
    assert_eq!(labels, vec![None, Some(50), Some(100)]);
    let ys: Vec<f64> = g.horizontal.iter().map(|l| l.screen).collect();
    assert_eq!(ys, vec![0.0, 50.0]);
}

#[test]
fn grid_spacing_scales_with_camera() {
    let cam = Camera { offset: Point::new(0.0, 0.0), scale: 2.0 };
    let g = grid(&cam, 50.0, 250.0, 10.0);
    let xs: Vec<f64> = g.vertical.iter().map(|l| l.screen).collect();
    assert_eq!(xs, vec![0.0, 100.0, 200.0]);
    // Labels stay in world units.
    assert_eq!(g.vertical[1].label, Some(50));
    assert_eq!(g.vertical[2].label, Some(100));
}

#[test]
fn grid_positive_offset_starts_at_remainder() {
    let cam = Camera { offset: Point::new(130.0, 0.0), scale: 1.0 };
    let g = grid(&cam, 50.0, 200.0, 1.0);
    let xs: Vec<f64> = g.vertical.iter().map(|l| l.screen).collect();
    assert_eq!(xs, vec![30.0, 80.0, 130.0, 180.0]);
    assert_eq!(g.vertical[0].label, Some(-100));
    assert_eq!(g.vertical[2].label, Some(0));
}

#[test]
fn grid_negative_offset_first_line_is_off_screen_and_unlabelled() {
    let cam = Camera { offset: Point::new(-70.0, 0.0), scale: 1.0 };
    let g = grid(&cam, 50.0, 100.0, 1.0);
    let xs: Vec<f64> = g.vertical.iter().map(|l| l.screen).collect();
    assert_eq!(xs, vec![-20.0, 30.0, 80.0]);
    assert_eq!(g.vertical[0].label, None);
    assert_eq!(g.vertical[1].label, Some(100));
}

#[test]
fn grid_labels_are_world_coordinates() {
    let cam = Camera { offset: Point::new(17.0, 23.0), scale: 1.3 };
    let g = grid(&cam, 50.0, 400.0, 300.0);
    for line in g.vertical.iter().chain(&g.horizontal) {
        if let Some(label) = line.label {
            assert!(line.screen > 0.0);
            assert_eq!(label % 50, 0, "{line:?}");
        }
    }
}

#[test]
fn grid_label_rounds_half_up() {
    assert_eq!(round_half_up(2.5), 3);
    assert_eq!(round_half_up(-2.5), -2);
    assert_eq!(round_half_up(-2.6), -3);
}

#[test]
fn grid_empty_viewport_has_no_positive_lines() {
    let g = grid(&Camera::default(), 50.0, 0.0, 0.0);
    assert!(g.vertical.is_empty());
    assert!(g.horizontal.is_empty());
}

#[test]
fn grid_rejects_degenerate_step() {
    assert_eq!(grid(&Camera::default(), 0.0, 100.0, 100.0), Grid::default());
}

// =============================================================
// SVG attributes and tray layout
// =============================================================

#[test]
fn points_attr_formats_pairs() {
    assert_eq!(points_attr(&[[1.0, 2.5], [3.0, 4.0]]), "1,2.5 3,4");
    assert_eq!(points_attr(&[]), "");
}

#[test]
fn view_box_covers_local_box() {
    assert_eq!(view_box(&poly("a", 100.0, 80.0)), "0 0 100 80");
}

#[test]
fn tray_height_has_minimum() {
    assert!((tray_height(&[]) - 220.0).abs() < EPSILON);
    assert!((tray_height(&[poly("a", 100.0, 100.0)]) - 220.0).abs() < EPSILON);
}

#[test]
fn tray_height_grows_with_tall_polygons() {
    assert!((tray_height(&[poly("a", 10.0, 300.0), poly("b", 10.0, 50.0)]) - 320.0).abs() < EPSILON);
}

#[test]
fn viewport_center_world_at_identity() {
    let c = viewport_center_world(&Camera::default(), 800.0, 400.0);
    assert_eq!(c, Point::new(400.0, 200.0));
}
