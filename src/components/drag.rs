//! Native drag-and-drop handlers shared by both trays.

use leptos::prelude::*;

use canvas::board::Tray;
use canvas::camera::Point;
use canvas::engine::Engine;

use crate::state::ui::UiState;

/// `dragstart` for polygon `id` leaving `source`. `grab` is the point inside
/// the dragged element the cursor should hold, usually its centre.
pub fn on_polygon_drag_start(
    engine: RwSignal<Engine>,
    ui: RwSignal<UiState>,
    id: String,
    source: Tray,
    grab: Point,
) -> impl Fn(leptos::ev::DragEvent) + 'static {
    #[cfg(feature = "csr")]
    {
        move |ev: leptos::ev::DragEvent| {
            let element = crate::util::dom::current_element(&ev);
            crate::util::dom::set_drag_payload(&ev, &id, element.as_ref().map(|el| (el, grab.x, grab.y)));
            crate::util::dispatch::dispatch(engine, ui, |e| e.on_drag_start(&id, source));
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (engine, ui, id, source, grab);
        move |_ev: leptos::ev::DragEvent| {}
    }
}

/// `dragend`: the gesture is over whether or not a tray accepted it.
pub fn on_polygon_drag_end(engine: RwSignal<Engine>, ui: RwSignal<UiState>) -> impl Fn(leptos::ev::DragEvent) + 'static {
    move |_ev: leptos::ev::DragEvent| {
        crate::util::dispatch::dispatch(engine, ui, Engine::on_drag_end);
        crate::util::dispatch::set_drop_target(ui, None);
    }
}

/// `dragover` on a tray: accept the drop and highlight the tray.
pub fn on_tray_drag_over(ui: RwSignal<UiState>, tray: Tray) -> impl Fn(leptos::ev::DragEvent) + 'static {
    move |ev: leptos::ev::DragEvent| {
        #[cfg(feature = "csr")]
        crate::util::dom::accept_drag(&ev);
        #[cfg(not(feature = "csr"))]
        let _ = ev;
        crate::util::dispatch::set_drop_target(ui, Some(tray));
    }
}

/// `dragleave` on a tray: drop the highlight.
pub fn on_tray_drag_leave(ui: RwSignal<UiState>) -> impl Fn(leptos::ev::DragEvent) + 'static {
    move |_ev: leptos::ev::DragEvent| crate::util::dispatch::set_drop_target(ui, None)
}
