//! Shared numeric constants for the canvas crate.
//!
//! These are the defaults behind [`crate::config::EditorConfig`]; code that
//! needs a tunable value reads it from the config, not from here.

// ── Camera ──────────────────────────────────────────────────────

/// Smallest allowed workspace scale.
pub const MIN_SCALE: f64 = 0.2;

/// Largest allowed workspace scale.
pub const MAX_SCALE: f64 = 5.0;

/// Scale multiplier for one zoom-in wheel notch.
pub const ZOOM_IN_FACTOR: f64 = 1.1;

/// Scale multiplier for one zoom-out wheel notch.
pub const ZOOM_OUT_FACTOR: f64 = 0.9;

// ── Layout ──────────────────────────────────────────────────────

/// Background grid spacing in world units.
pub const GRID_STEP: f64 = 50.0;

/// Minimum buffer tray height in pixels.
pub const TRAY_MIN_HEIGHT_PX: f64 = 200.0;

/// Extra space below the tallest buffer polygon, in pixels.
pub const TRAY_PADDING_PX: f64 = 20.0;

// ── Generation ──────────────────────────────────────────────────

/// Bounding box width of a generated polygon.
pub const POLYGON_WIDTH: f64 = 100.0;

/// Bounding box height of a generated polygon.
pub const POLYGON_HEIGHT: f64 = 100.0;

/// Nominal vertex radius around the bounding box centre.
pub const POLYGON_RADIUS: f64 = 40.0;

/// Fill colour of generated polygons.
pub const POLYGON_FILL: &str = "#900025";

// ── Persistence ─────────────────────────────────────────────────

/// localStorage key holding the saved snapshot.
pub const STORAGE_KEY: &str = "polygon-app-state";

/// `DataTransfer` format carrying a dragged polygon's id.
pub const DRAG_MIME: &str = "application/polygon-id";
