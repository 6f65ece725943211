//! Root component and shared state setup.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use leptos::prelude::*;

use canvas::engine::Engine;

use crate::components::buffer_tray::BufferTray;
use crate::components::controls::Controls;
use crate::components::status_bar::StatusBar;
use crate::components::workspace_view::WorkspaceView;
use crate::state::ui::UiState;
use crate::util::{config, storage};

/// Build the engine for this page: configured from the page and restored
/// from the last saved snapshot, if any.
pub fn initial_engine() -> Engine {
    let mut engine = Engine::new(config::load_config());
    if let Some(raw) = storage::load_raw(&engine.config.storage_key) {
        engine.load(&raw);
    }
    engine
}

/// Root application component.
///
/// Provides the engine and UI state signals via context so every component
/// drives the same board.
#[component]
pub fn App() -> impl IntoView {
    let engine = RwSignal::new(initial_engine());
    let ui = RwSignal::new(UiState::default());
    provide_context(engine);
    provide_context(ui);

    view! {
        <main class="app">
            <Controls />
            <BufferTray />
            <WorkspaceView />
            <StatusBar />
        </main>
    }
}
