//! Input model: mouse buttons, wheel deltas, and the gesture state machine.
//!
//! `InputState` is the gesture being tracked between a pointer-down (or a
//! native drag start) and the matching release. Panning carries the anchor it
//! needs to recompute the camera offset from absolute pointer positions, so
//! dropped move events never accumulate error.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::board::Tray;
use crate::camera::Point;
use crate::polygon::PolygonId;

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

impl Button {
    /// Map a DOM `MouseEvent.button` code.
    #[must_use]
    pub fn from_dom(code: i16) -> Self {
        match code {
            1 => Self::Middle,
            2 => Self::Secondary,
            _ => Self::Primary,
        }
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy, Default)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InputState {
    /// No gesture in progress.
    #[default]
    Idle,
    /// The user is dragging the empty workspace to pan.
    Panning {
        /// Screen position of the pointer-down that started the pan.
        anchor_screen: Point,
        /// Camera offset at the moment the pan started.
        anchor_offset: Point,
    },
    /// A native drag-and-drop of a polygon is in flight.
    DraggingPolygon {
        /// Id carried in the drag payload.
        id: PolygonId,
        /// Tray the polygon was picked up from.
        source: Tray,
    },
}

impl InputState {
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self, Self::Panning { .. })
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::DraggingPolygon { .. })
    }
}
