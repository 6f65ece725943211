//! Tray of generated polygons waiting to be placed.

use leptos::prelude::*;

use canvas::board::Tray;
use canvas::engine::Engine;
use canvas::render::tray_height;

use crate::components::drag::{on_polygon_drag_end, on_polygon_drag_start, on_tray_drag_leave, on_tray_drag_over};
use crate::components::polygon_shape::PolygonShape;
use crate::state::ui::UiState;

/// Horizontal strip of draggable polygons at their natural size.
///
/// Dropping a workspace polygon here returns it to the buffer.
#[component]
pub fn BufferTray() -> impl IntoView {
    let engine = expect_context::<RwSignal<Engine>>();
    let ui = expect_context::<RwSignal<UiState>>();

    let tray_class = move || ui.with(|u| u.tray_class("buffer-tray", Tray::Buffer));
    let min_height = move || format!("{}px", engine.with(|e| tray_height(e.board.buffer())));

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        crate::util::dispatch::set_drop_target(ui, None);
        #[cfg(feature = "csr")]
        {
            let Some(id) = crate::util::dom::drag_payload(&ev) else {
                log::debug!("buffer drop without polygon id");
                return;
            };
            crate::util::dispatch::dispatch(engine, ui, |e| e.drop_on_buffer(&id));
        }
    };

    let polygons = move || {
        engine.with(|e| {
            e.board
                .buffer()
                .iter()
                .map(|polygon| {
                    let grab = polygon.half_extent();
                    let on_drag_start = on_polygon_drag_start(engine, ui, polygon.id.clone(), Tray::Buffer, grab);
                    let (width, height) = (polygon.w, polygon.h);
                    view! {
                        <div
                            class="buffer-tray__item"
                            draggable="true"
                            on:dragstart=on_drag_start
                            on:dragend=on_polygon_drag_end(engine, ui)
                        >
                            <PolygonShape polygon=polygon.clone() width=width height=height />
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section
            class=tray_class
            style:min-height=min_height
            on:dragover=on_tray_drag_over(ui, Tray::Buffer)
            on:dragleave=on_tray_drag_leave(ui)
            on:drop=on_drop
        >
            {polygons}
        </section>
    }
}

