//! The editor engine: owns the board, the camera and the gesture state, and
//! turns host input events into state changes plus a list of [`Action`]s.
//!
//! The engine has no browser dependencies. The host translates DOM events into
//! calls on [`Engine`] and reacts to the returned actions (re-render, cursor
//! changes). Transfers between the trays go through the engine so both
//! collections change in one step.

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

use rand::Rng;

use crate::board::{Board, Tray};
use crate::camera::{Camera, Point, ZoomDirection};
use crate::config::EditorConfig;
use crate::generate::generate_polygons;
use crate::hit::hit_test;
use crate::input::{Button, InputState, WheelDelta};
use crate::polygon::PolygonId;
use crate::render::{self, Grid};
use crate::snapshot::{Snapshot, SnapshotError};

/// Actions returned from input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// A polygon moved between trays.
    Transferred { id: PolygonId, to: Tray },
    /// CSS cursor for the workspace element.
    SetCursor(&'static str),
    /// Board or camera changed; redraw.
    RenderNeeded,
}

/// Editor state and input handling.
#[derive(Debug, Clone)]
pub struct Engine {
    pub board: Board,
    pub camera: Camera,
    pub input: InputState,
    pub config: EditorConfig,
    pub viewport_width: f64,
    pub viewport_height: f64,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

impl Engine {
    /// Create an empty editor. `config` is expected to be validated.
    #[must_use]
    pub fn new(config: EditorConfig) -> Self {
        Self {
            board: Board::new(),
            camera: Camera::default(),
            input: InputState::Idle,
            config,
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }

    // --- Viewport ---

    /// Update the workspace element's CSS size.
    pub fn set_viewport(&mut self, width_css: f64, height_css: f64) {
        self.viewport_width = width_css.max(0.0);
        self.viewport_height = height_css.max(0.0);
    }

    // --- Pointer input ---

    /// Primary press over empty workspace starts a pan. Presses over a
    /// polygon are left to the native drag-and-drop gesture.
    pub fn on_pointer_down(&mut self, screen_pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary || self.input.is_dragging() {
            return Vec::new();
        }
        let world = self.camera.screen_to_world(screen_pt);
        if hit_test(world, &self.board).is_some() {
            return Vec::new();
        }
        self.input = InputState::Panning { anchor_screen: screen_pt, anchor_offset: self.camera.offset };
        vec![Action::SetCursor("grabbing")]
    }

    /// While panning, move the camera so the anchor follows the pointer.
    pub fn on_pointer_move(&mut self, screen_pt: Point) -> Vec<Action> {
        let InputState::Panning { anchor_screen, anchor_offset } = self.input else {
            return Vec::new();
        };
        self.camera.offset = anchor_offset + (screen_pt - anchor_screen);
        vec![Action::RenderNeeded]
    }

    /// Release ends a pan. A polygon drag is finished by its drop or
    /// drag-end instead.
    pub fn on_pointer_up(&mut self) -> Vec<Action> {
        self.pan_end()
    }

    /// Zoom one notch toward the cursor.
    pub fn on_wheel(&mut self, screen_pt: Point, delta: WheelDelta) -> Vec<Action> {
        let direction = ZoomDirection::from_wheel_dy(delta.dy);
        if self.camera.zoom_at(screen_pt, direction, &self.config.zoom) {
            vec![Action::RenderNeeded]
        } else {
            Vec::new()
        }
    }

    /// Clear any pan in progress. Idempotent.
    pub fn pan_end(&mut self) -> Vec<Action> {
        if self.input.is_panning() {
            self.input = InputState::Idle;
            vec![Action::SetCursor("default")]
        } else {
            Vec::new()
        }
    }

    // --- Drag and drop ---

    /// A native drag of polygon `id` began in `source`. Cancels any pan.
    pub fn on_drag_start(&mut self, id: &str, source: Tray) -> Vec<Action> {
        let mut actions = self.pan_end();
        self.input = InputState::DraggingPolygon { id: id.to_owned(), source };
        actions.push(Action::SetCursor("grabbing"));
        actions
    }

    /// The native drag finished, dropped or not. Idempotent.
    pub fn on_drag_end(&mut self) -> Vec<Action> {
        if self.input == InputState::Idle {
            return Vec::new();
        }
        self.input = InputState::Idle;
        vec![Action::SetCursor("default")]
    }

    /// Drop onto the workspace at `screen_pt`: move `id` out of the buffer.
    ///
    /// An id that is not in the buffer is ignored.
    pub fn drop_on_workspace(&mut self, id: &str, screen_pt: Point) -> Vec<Action> {
        let mut actions = self.on_drag_end();
        match self.board.place(id, screen_pt, &self.camera) {
            Ok(position) => {
                log::debug!("placed {id} at ({}, {})", position.x, position.y);
                actions.push(Action::Transferred { id: id.to_owned(), to: Tray::Workspace });
                actions.push(Action::RenderNeeded);
            }
            Err(e) => log::debug!("ignoring workspace drop: {e}"),
        }
        actions
    }

    /// Drop onto the buffer: move `id` off the workspace.
    ///
    /// An id that is not on the workspace is ignored.
    pub fn drop_on_buffer(&mut self, id: &str) -> Vec<Action> {
        let mut actions = self.on_drag_end();
        match self.board.unplace(id) {
            Ok(()) => {
                log::debug!("returned {id} to buffer");
                actions.push(Action::Transferred { id: id.to_owned(), to: Tray::Buffer });
                actions.push(Action::RenderNeeded);
            }
            Err(e) => log::debug!("ignoring buffer drop: {e}"),
        }
        actions
    }

    // --- Collection actions ---

    /// Replace the buffer with a freshly generated batch.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Action> {
        let polygons = generate_polygons(rng, &self.config.generator);
        log::info!("generated {} polygons", polygons.len());
        self.board.replace_buffer(polygons);
        vec![Action::RenderNeeded]
    }

    /// Empty both trays and forget any gesture in progress.
    pub fn reset(&mut self) -> Vec<Action> {
        log::info!("reset: dropping {} polygons", self.board.len());
        self.board.clear();
        self.input = InputState::Idle;
        vec![Action::SetCursor("default"), Action::RenderNeeded]
    }

    // --- Persistence ---

    /// Current state as a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(&self.board)
    }

    /// Serialized snapshot ready for storage.
    ///
    /// # Errors
    ///
    /// Propagates [`SnapshotError`] from the encoder.
    pub fn save(&self) -> Result<String, SnapshotError> {
        self.snapshot().to_json()
    }

    /// Restore from a stored snapshot string, salvaging what is readable.
    pub fn load(&mut self, raw: &str) -> Vec<Action> {
        let snapshot = Snapshot::parse_lenient(raw);
        log::info!(
            "loaded snapshot: {} buffer, {} workspace",
            snapshot.buffer.len(),
            snapshot.workspace.len()
        );
        self.board = snapshot.into_board();
        self.input = InputState::Idle;
        vec![Action::RenderNeeded]
    }

    // --- Queries ---

    /// Background grid for the current viewport.
    #[must_use]
    pub fn grid(&self) -> Grid {
        render::grid(&self.camera, self.config.grid.step, self.viewport_width, self.viewport_height)
    }
}
