//! Shared client-side state.
//!
//! The editor itself (`canvas::engine::Engine`) is provided as an
//! `RwSignal<Engine>`; the modules here hold the small bits of view state
//! that are not part of the editor model.

pub mod ui;
