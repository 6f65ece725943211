//! Runs an engine handler and applies the actions it returns.
//!
//! Handlers mutate the engine without notifying subscribers; the returned
//! actions decide whether the view is re-rendered. Pointer moves over an idle
//! workspace therefore cost nothing.

#[cfg(test)]
#[path = "dispatch_test.rs"]
mod dispatch_test;

use leptos::prelude::*;

use canvas::board::Tray;
use canvas::engine::{Action, Engine};

use crate::state::ui::UiState;

/// What the view layer has to do after a batch of actions.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Effects {
    pub render: bool,
    pub cursor: Option<&'static str>,
}

/// Fold a batch of engine actions into view effects.
pub fn effects_of(actions: &[Action]) -> Effects {
    let mut effects = Effects::default();
    for action in actions {
        match action {
            Action::RenderNeeded => effects.render = true,
            Action::Transferred { id, to } => {
                log::debug!("{id} moved to {to}");
                effects.render = true;
            }
            Action::SetCursor(cursor) => effects.cursor = Some(*cursor),
        }
    }
    effects
}

/// Run `handler` against the engine and apply the resulting effects.
pub fn dispatch(engine: RwSignal<Engine>, ui: RwSignal<UiState>, handler: impl FnOnce(&mut Engine) -> Vec<Action>) {
    let Some(actions) = engine.try_update_untracked(handler) else {
        log::warn!("engine signal disposed; dropping event");
        return;
    };
    let effects = effects_of(&actions);
    if effects.render {
        engine.notify();
    }
    if let Some(cursor) = effects.cursor {
        if ui.with_untracked(|u| u.cursor != cursor) {
            ui.update(|u| u.cursor = cursor);
        }
    }
}

/// Highlight `target` as the tray under the current drag, or clear it.
pub fn set_drop_target(ui: RwSignal<UiState>, target: Option<Tray>) {
    if ui.with_untracked(|u| u.drop_target != target) {
        ui.update(|u| u.drop_target = target);
    }
}
