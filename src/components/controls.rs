//! Create / Save / Reset buttons.

#[cfg(test)]
#[path = "controls_test.rs"]
mod controls_test;

use leptos::prelude::*;

use canvas::engine::Engine;

use crate::state::ui::UiState;
use crate::util::dispatch::dispatch;
use crate::util::{rng, storage};

/// Toolbar above the trays.
///
/// Create replaces the buffer with a fresh batch, Save writes the current
/// snapshot to localStorage, and Reset clears both trays and the stored copy.
#[component]
pub fn Controls() -> impl IntoView {
    let engine = expect_context::<RwSignal<Engine>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let on_create = move |_| {
        let mut rng = rng::fresh_rng();
        dispatch(engine, ui, |e| e.generate(&mut rng));
    };
    let on_save = move |_| save_board(engine);
    let on_reset = move |_| reset_board(engine, ui);

    view! {
        <div class="controls">
            <button class="controls__button" on:click=on_create>
                "Create"
            </button>
            <button class="controls__button" on:click=on_save>
                "Save"
            </button>
            <button class="controls__button controls__button--danger" on:click=on_reset>
                "Reset"
            </button>
        </div>
    }
}

/// Write the current snapshot under the configured storage key.
pub fn save_board(engine: RwSignal<Engine>) {
    let (key, saved) = engine.with_untracked(|e| (e.config.storage_key.clone(), e.save()));
    match saved {
        Ok(json) => {
            storage::save_raw(&key, &json);
            log::info!("saved snapshot under {key}");
        }
        Err(e) => log::warn!("snapshot not saved: {e}"),
    }
}

/// Forget the stored snapshot and empty both trays.
pub fn reset_board(engine: RwSignal<Engine>, ui: RwSignal<UiState>) {
    let key = engine.with_untracked(|e| e.config.storage_key.clone());
    storage::remove(&key);
    dispatch(engine, ui, Engine::reset);
}
