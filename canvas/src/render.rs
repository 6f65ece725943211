//! Rendering layout: where things go on screen for a given camera.
//!
//! Nothing here touches the DOM. The host turns the returned rectangles,
//! grid lines and attribute strings into elements; given the same board,
//! camera and viewport size it always gets the same answer.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use crate::camera::{Camera, Point};
use crate::consts::{TRAY_MIN_HEIGHT_PX, TRAY_PADDING_PX};
use crate::polygon::{PlacedPolygon, Polygon};

/// Axis-aligned rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

/// One background grid line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridLine {
    /// Screen coordinate of the line (x for vertical lines, y for horizontal).
    pub screen: f64,
    /// World coordinate shown next to the line; `None` for lines at or left
    /// of (above) the viewport edge.
    pub label: Option<i64>,
}

/// All grid lines visible in the viewport.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    pub vertical: Vec<GridLine>,
    pub horizontal: Vec<GridLine>,
}

/// Screen frame of a workspace polygon: positioned at the projected world
/// position and scaled uniformly by the camera scale.
#[must_use]
pub fn polygon_frame(placed: &PlacedPolygon, camera: &Camera) -> ScreenRect {
    let origin = camera.world_to_screen(placed.position());
    ScreenRect {
        left: origin.x,
        top: origin.y,
        width: placed.polygon.w * camera.scale,
        height: placed.polygon.h * camera.scale,
    }
}

/// Grid lines spaced `step` world units apart for a `width` × `height`
/// viewport.
#[must_use]
pub fn grid(camera: &Camera, step: f64, width: f64, height: f64) -> Grid {
    let screen_step = step * camera.scale;
    if !(screen_step.is_finite() && screen_step > 0.0) {
        return Grid::default();
    }
    Grid {
        vertical: axis_lines(camera.offset.x, camera.scale, screen_step, width),
        horizontal: axis_lines(camera.offset.y, camera.scale, screen_step, height),
    }
}

fn axis_lines(offset: f64, scale: f64, screen_step: f64, extent: f64) -> Vec<GridLine> {
    let mut lines = Vec::new();
    // `%` keeps the sign of the offset, so the first line may sit just off-screen.
    let mut pos = offset % screen_step;
    while pos < extent {
        let label = (pos > 0.0).then(|| round_half_up((pos - offset) / scale));
        lines.push(GridLine { screen: pos, label });
        pos += screen_step;
    }
    lines
}

#[allow(clippy::cast_possible_truncation)]
fn round_half_up(v: f64) -> i64 {
    (v + 0.5).floor() as i64
}

/// SVG `points` attribute for a vertex list: `"x,y x,y ..."`.
#[must_use]
pub fn points_attr(points: &[[f64; 2]]) -> String {
    points.iter().map(|[x, y]| format!("{x},{y}")).collect::<Vec<_>>().join(" ")
}

/// SVG `viewBox` attribute covering a polygon's local bounding box.
#[must_use]
pub fn view_box(polygon: &Polygon) -> String {
    format!("0 0 {} {}", polygon.w, polygon.h)
}

/// Height of the buffer tray: tall enough for its tallest polygon, never
/// below the minimum tray height.
#[must_use]
pub fn tray_height(buffer: &[Polygon]) -> f64 {
    buffer.iter().map(|p| p.h).fold(TRAY_MIN_HEIGHT_PX, f64::max) + TRAY_PADDING_PX
}

/// Centre of the viewport in world coordinates.
#[must_use]
pub fn viewport_center_world(camera: &Camera, width: f64, height: f64) -> Point {
    camera.screen_to_world(Point::new(width * 0.5, height * 0.5))
}
