#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::board::Board;
use crate::camera::Point;
use crate::polygon::PolygonId;

/// Find the topmost workspace polygon whose bounding box contains `world_pt`.
///
/// Polygons later in render order are drawn above earlier ones, so the search
/// runs back to front.
#[must_use]
pub fn hit_test(world_pt: Point, board: &Board) -> Option<PolygonId> {
    board
        .workspace()
        .iter()
        .rev()
        .find(|p| p.contains(world_pt))
        .map(|p| p.id().to_owned())
}
