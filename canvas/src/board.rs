//! The two polygon collections and the transfers between them.
//!
//! [`Board`] is the only owner of the buffer and the workspace lists. Every
//! transfer is a single method call that removes a polygon from one list and
//! appends it to the other, so a polygon is never in both and never in neither.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::collections::HashSet;
use std::fmt;

use crate::camera::{Camera, Point};
use crate::polygon::{PlacedPolygon, Polygon};

/// Which collection a polygon lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tray {
    /// The tray of unplaced polygons.
    Buffer,
    /// The pannable/zoomable canvas.
    Workspace,
}

impl fmt::Display for Tray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buffer => f.write_str("buffer"),
            Self::Workspace => f.write_str("workspace"),
        }
    }
}

/// Error returned by [`Board::place`] and [`Board::unplace`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransferError {
    /// The id is not in the tray the transfer claims to move it out of.
    #[error("polygon {id} not found in {tray}")]
    NotFound { id: String, tray: Tray },
}

/// Buffer and workspace collections.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Board {
    buffer: Vec<Polygon>,
    workspace: Vec<PlacedPolygon>,
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from already separated collections.
    ///
    /// Only the first entry for each id is kept, buffer before workspace;
    /// later repeats are dropped with a warning.
    #[must_use]
    pub fn from_parts(buffer: Vec<Polygon>, workspace: Vec<PlacedPolygon>) -> Self {
        let mut seen = HashSet::new();
        let buffer = buffer.into_iter().filter(|p| first_sighting(&mut seen, &p.id, Tray::Buffer)).collect();
        let workspace =
            workspace.into_iter().filter(|p| first_sighting(&mut seen, p.id(), Tray::Workspace)).collect();
        Self { buffer, workspace }
    }

    /// Buffer polygons in render order.
    #[must_use]
    pub fn buffer(&self) -> &[Polygon] {
        &self.buffer
    }

    /// Workspace polygons in render order (bottom first).
    #[must_use]
    pub fn workspace(&self) -> &[PlacedPolygon] {
        &self.workspace
    }

    #[must_use]
    pub fn buffer_polygon(&self, id: &str) -> Option<&Polygon> {
        self.buffer.iter().find(|p| p.id == id)
    }

    #[must_use]
    pub fn workspace_polygon(&self, id: &str) -> Option<&PlacedPolygon> {
        self.workspace.iter().find(|p| p.id() == id)
    }

    /// Replace the whole buffer. The workspace is untouched.
    pub fn replace_buffer(&mut self, polygons: Vec<Polygon>) {
        self.buffer = polygons;
    }

    /// Empty both collections.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.workspace.clear();
    }

    /// Move a buffer polygon onto the workspace, centred on the world point
    /// under `screen_drop`. Returns the new world position.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::NotFound`] if `id` is not in the buffer; the
    /// board is unchanged in that case.
    pub fn place(&mut self, id: &str, screen_drop: Point, camera: &Camera) -> Result<Point, TransferError> {
        let index = self
            .buffer
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| TransferError::NotFound { id: id.to_owned(), tray: Tray::Buffer })?;
        let world = camera.screen_to_world(screen_drop);
        let placed = self.buffer.remove(index).place_centered(world);
        let position = placed.position();
        self.workspace.push(placed);
        Ok(position)
    }

    /// Move a workspace polygon back to the buffer, dropping its position.
    ///
    /// # Errors
    ///
    /// Returns [`TransferError::NotFound`] if `id` is not on the workspace;
    /// the board is unchanged in that case.
    pub fn unplace(&mut self, id: &str) -> Result<(), TransferError> {
        let index = self
            .workspace
            .iter()
            .position(|p| p.id() == id)
            .ok_or_else(|| TransferError::NotFound { id: id.to_owned(), tray: Tray::Workspace })?;
        let polygon = self.workspace.remove(index).unplace();
        self.buffer.push(polygon);
        Ok(())
    }

    /// Total number of polygons across both trays.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len() + self.workspace.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty() && self.workspace.is_empty()
    }
}

fn first_sighting(seen: &mut HashSet<String>, id: &str, tray: Tray) -> bool {
    if seen.insert(id.to_owned()) {
        true
    } else {
        log::warn!("dropping duplicate polygon {id} from {tray}");
        false
    }
}
