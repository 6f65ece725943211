//! Saved-state codec: the `{ buffer, workspace }` JSON document kept in
//! localStorage.
//!
//! Saving is strict: [`Snapshot::to_json`] always writes both arrays.
//! Loading is lenient: [`Snapshot::parse_lenient`] keeps whatever part of a
//! damaged document is still usable and drops the rest, so a corrupt save
//! never blocks the editor from starting.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::board::Board;
use crate::polygon::{PlacedPolygon, Polygon};

/// Error returned by [`Snapshot::from_json`] and [`Snapshot::to_json`].
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("snapshot json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Both collections at the moment of saving.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub buffer: Vec<Polygon>,
    pub workspace: Vec<PlacedPolygon>,
}

impl Snapshot {
    /// Capture the current board.
    #[must_use]
    pub fn capture(board: &Board) -> Self {
        Self { buffer: board.buffer().to_vec(), workspace: board.workspace().to_vec() }
    }

    /// Turn the snapshot into a board, moving the polygons. An id listed
    /// more than once keeps only its first entry.
    #[must_use]
    pub fn into_board(self) -> Board {
        Board::from_parts(self.buffer, self.workspace)
    }

    /// Serialize to the persisted JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] if serialization fails (non-string map
    /// keys cannot occur here, so this is effectively infallible).
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse a snapshot, rejecting anything that does not match exactly.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Json`] on malformed input or missing fields.
    pub fn from_json(raw: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Parse a snapshot, salvaging each collection independently.
    ///
    /// Unparseable JSON yields an empty snapshot. A field that is missing, is
    /// not an array, or holds a malformed entry is left empty while the other
    /// field is still used.
    #[must_use]
    pub fn parse_lenient(raw: &str) -> Self {
        let root: Value = match serde_json::from_str(raw) {
            Ok(v) => v,
            Err(e) => {
                log::warn!("discarding unreadable snapshot: {e}");
                return Self::default();
            }
        };
        Self {
            buffer: array_field(&root, "buffer"),
            workspace: array_field(&root, "workspace"),
        }
    }
}

fn array_field<T: DeserializeOwned>(root: &Value, field: &str) -> Vec<T> {
    let Some(items) = root.get(field).filter(|v| v.is_array()) else {
        log::warn!("snapshot field `{field}` missing or not an array");
        return Vec::new();
    };
    match Vec::<T>::deserialize(items) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("discarding snapshot field `{field}`: {e}");
            Vec::new()
        }
    }
}
