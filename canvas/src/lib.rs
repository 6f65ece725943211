//! Editor core for the polygon board.
//!
//! This crate holds everything about the editor that does not need a browser:
//! the pan/zoom camera, the gesture state machine, the buffer and workspace
//! collections with the transfers between them, hit-testing, render layout,
//! random polygon generation, the saved-state codec and configuration. The
//! `polyboard` front-end wires DOM events to [`engine::Engine`] and draws
//! what [`render`] lays out.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine: input handlers, drops, generate/reset/load |
//! | [`board`] | Buffer and workspace collections and transfers |
//! | [`polygon`] | Unplaced and placed polygon types |
//! | [`camera`] | Pan/zoom camera and coordinate conversions |
//! | [`input`] | Input event types and the gesture state machine |
//! | [`hit`] | Hit-testing against workspace polygons |
//! | [`render`] | Screen layout: polygon frames, grid, SVG attributes |
//! | [`generate`] | Random polygon generation |
//! | [`snapshot`] | Saved-state JSON codec |
//! | [`config`] | Editor configuration and validation |
//! | [`consts`] | Shared defaults (zoom limits, grid step, storage key, etc.) |

pub mod board;
pub mod camera;
pub mod config;
pub mod consts;
pub mod engine;
pub mod generate;
pub mod hit;
pub mod input;
pub mod polygon;
pub mod render;
pub mod snapshot;
