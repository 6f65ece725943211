//! Polygon model: shapes as they live in the buffer tray and in the workspace.
//!
//! A [`Polygon`] never carries a position. Placing one on the workspace wraps
//! it in a [`PlacedPolygon`]; taking it back unwraps it again. Keeping the two
//! apart at the type level means a buffer entry with a stale position, or a
//! workspace entry without one, cannot be represented.
//!
//! Both types serialize to the same flat JSON shape
//! (`{ id, w, h, points, fill, x?, y? }`) used by the saved snapshot.

#[cfg(test)]
#[path = "polygon_test.rs"]
mod polygon_test;

use serde::{Deserialize, Serialize};

use crate::camera::Point;

/// Unique, opaque identifier for a polygon.
pub type PolygonId = String;

/// A polygon outline in local (unscaled, unpositioned) coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    pub id: PolygonId,
    /// Bounding box width in world units.
    pub w: f64,
    /// Bounding box height in world units.
    pub h: f64,
    /// Vertices as `[x, y]` pairs inside the `w` × `h` box.
    pub points: Vec<[f64; 2]>,
    /// CSS fill colour.
    pub fill: String,
}

impl Polygon {
    /// Put this polygon at `position` (top-left of its bounding box, world units).
    #[must_use]
    pub fn place_at(self, position: Point) -> PlacedPolygon {
        PlacedPolygon { polygon: self, x: position.x, y: position.y }
    }

    /// Put this polygon so its bounding box is centred on `center`.
    #[must_use]
    pub fn place_centered(self, center: Point) -> PlacedPolygon {
        let top_left = Point::new(center.x - self.w / 2.0, center.y - self.h / 2.0);
        self.place_at(top_left)
    }

    /// Half of the bounding box, i.e. the local centre.
    #[must_use]
    pub fn half_extent(&self) -> Point {
        Point::new(self.w / 2.0, self.h / 2.0)
    }
}

/// A polygon on the workspace, positioned in world coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedPolygon {
    #[serde(flatten)]
    pub polygon: Polygon,
    /// Left edge of the bounding box in world coordinates.
    #[serde(default)]
    pub x: f64,
    /// Top edge of the bounding box in world coordinates.
    #[serde(default)]
    pub y: f64,
}

impl PlacedPolygon {
    #[must_use]
    pub fn id(&self) -> &str {
        &self.polygon.id
    }

    /// World position of the bounding box's top-left corner.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Whether `world` falls inside the bounding box (edges included).
    #[must_use]
    pub fn contains(&self, world: Point) -> bool {
        world.x >= self.x && world.x <= self.x + self.polygon.w && world.y >= self.y && world.y <= self.y + self.polygon.h
    }

    /// Drop the position and hand back the bare polygon.
    #[must_use]
    pub fn unplace(self) -> Polygon {
        self.polygon
    }
}
