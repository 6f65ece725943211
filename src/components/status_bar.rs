//! Bottom status line: zoom level, tray sizes, and the world point at the
//! centre of the workspace.

use leptos::prelude::*;

use canvas::engine::Engine;
use canvas::render::viewport_center_world;

/// Status line below the workspace.
#[component]
pub fn StatusBar() -> impl IntoView {
    let engine = expect_context::<RwSignal<Engine>>();

    let zoom_label = move || format!("{:.0}%", engine.with(|e| e.camera.scale) * 100.0);
    let buffer_count = move || engine.with(|e| e.board.buffer().len());
    let workspace_count = move || engine.with(|e| e.board.workspace().len());
    let center_label = move || {
        let center = engine.with(|e| viewport_center_world(&e.camera, e.viewport_width, e.viewport_height));
        format!("{:.0}, {:.0}", center.x, center.y)
    };

    view! {
        <div class="status-bar">
            <span class="status-bar__buffer">{move || format!("{} in buffer", buffer_count())}</span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__workspace">{move || format!("{} on workspace", workspace_count())}</span>
            <span class="status-bar__spacer"></span>
            <span class="status-bar__center">{center_label}</span>
            <span class="status-bar__divider">"|"</span>
            <span class="status-bar__zoom">{zoom_label}</span>
        </div>
    }
}
