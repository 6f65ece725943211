#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use std::ops::{Add, Sub};

use crate::config::ZoomConfig;

/// A point in either screen or world space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn scaled(self, factor: f64) -> Self {
        Self { x: self.x * factor, y: self.y * factor }
    }
}

impl Add for Point {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Point {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

/// Which way a single wheel notch zooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Map a vertical wheel delta to a direction. Scrolling up zooms in;
    /// everything else, including a zero delta, zooms out.
    #[must_use]
    pub fn from_wheel_dy(dy: f64) -> Self {
        if dy < 0.0 { Self::In } else { Self::Out }
    }
}

/// View transform of the workspace.
///
/// `offset` is in CSS pixels relative to the workspace element.
/// `scale` is the world-to-screen factor (1.0 = no zoom).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub offset: Point,
    pub scale: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Self { offset: Point::default(), scale: 1.0 }
    }
}

impl Camera {
    /// Convert a screen-space point (CSS pixels) to world coordinates.
    #[must_use]
    pub fn screen_to_world(&self, screen: Point) -> Point {
        Point {
            x: (screen.x - self.offset.x) / self.scale,
            y: (screen.y - self.offset.y) / self.scale,
        }
    }

    /// Convert a world-space point to screen coordinates (CSS pixels).
    #[must_use]
    pub fn world_to_screen(&self, world: Point) -> Point {
        Point {
            x: world.x * self.scale + self.offset.x,
            y: world.y * self.scale + self.offset.y,
        }
    }

    /// Zoom one notch toward `cursor`, keeping the world point under the
    /// cursor fixed unless the scale hits a bound.
    ///
    /// Returns `true` if the scale changed.
    pub fn zoom_at(&mut self, cursor: Point, direction: ZoomDirection, limits: &ZoomConfig) -> bool {
        let prev_scale = self.scale;
        let factor = match direction {
            ZoomDirection::In => limits.zoom_in_factor,
            ZoomDirection::Out => limits.zoom_out_factor,
        };
        let next_scale = (prev_scale * factor).clamp(limits.min_scale, limits.max_scale);
        self.offset = cursor - (cursor - self.offset).scaled(next_scale / prev_scale);
        self.scale = next_scale;
        (next_scale - prev_scale).abs() > f64::EPSILON
    }
}
