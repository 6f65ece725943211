//! # polyboard
//!
//! Leptos + WASM front-end for the polygon board: a buffer tray of generated
//! polygons and a pannable, zoomable workspace they can be dragged onto.
//!
//! All editor state lives in a single `canvas::engine::Engine` held in a
//! Leptos signal. Components translate DOM events into engine calls and draw
//! the layout computed by `canvas::render`. Browser-only glue is gated behind
//! the `csr` feature so the crate also builds (and tests) natively.

pub mod app;
pub mod components;
pub mod state;
pub mod util;

/// WASM entry point: install the panic hook and logger, then mount the app.
#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::warn_1(&format!("logger already initialised: {e}").into());
    }
    leptos::mount::mount_to_body(app::App);
}
