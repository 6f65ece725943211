//! Pannable, zoomable workspace: background grid plus placed polygons.
//!
//! Pointer input is translated into engine calls with coordinates relative to
//! the workspace element. Move and release are tracked on the window so a
//! pan keeps going when the pointer leaves the element.

use leptos::prelude::*;

use canvas::board::Tray;
use canvas::engine::Engine;
use canvas::render::{Grid, polygon_frame};

use crate::components::drag::{on_polygon_drag_end, on_polygon_drag_start, on_tray_drag_leave, on_tray_drag_over};
use crate::components::polygon_shape::PolygonShape;
use crate::state::ui::UiState;
#[cfg(feature = "csr")]
use crate::util::dispatch::dispatch;

/// The workspace element.
#[component]
pub fn WorkspaceView() -> impl IntoView {
    let engine = expect_context::<RwSignal<Engine>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let workspace_ref = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "csr")]
    {
        Effect::new(move || {
            if workspace_ref.get().is_some() {
                sync_viewport(engine, workspace_ref);
            }
        });

        let move_handle = window_event_listener(leptos::ev::mousemove, move |ev| {
            let Some(element) = workspace_ref.get_untracked() else {
                return;
            };
            let point = crate::util::dom::mouse_point(&ev, &element);
            dispatch(engine, ui, |e| e.on_pointer_move(point));
        });
        let up_handle = window_event_listener(leptos::ev::mouseup, move |_| {
            dispatch(engine, ui, Engine::on_pointer_up);
        });
        let resize_handle = window_event_listener(leptos::ev::resize, move |_| {
            sync_viewport(engine, workspace_ref);
        });
        on_cleanup(move || {
            move_handle.remove();
            up_handle.remove();
            resize_handle.remove();
        });
    }

    let on_mouse_down = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "csr")]
        {
            let Some(element) = workspace_ref.get_untracked() else {
                return;
            };
            let point = crate::util::dom::mouse_point(&ev, &element);
            let button = canvas::input::Button::from_dom(ev.button());
            dispatch(engine, ui, |e| e.on_pointer_down(point, button));
            // Only a started pan suppresses the default; presses on polygons
            // must still reach the native drag.
            if engine.with_untracked(|e| e.input.is_panning()) {
                ev.prevent_default();
            }
        }
        #[cfg(not(feature = "csr"))]
        let _ = ev;
    };

    let on_wheel = move |ev: leptos::ev::WheelEvent| {
        ev.prevent_default();
        #[cfg(feature = "csr")]
        {
            let Some(element) = workspace_ref.get_untracked() else {
                return;
            };
            let point = crate::util::dom::mouse_point(&ev, &element);
            let delta = canvas::input::WheelDelta { dx: ev.delta_x(), dy: ev.delta_y() };
            dispatch(engine, ui, |e| e.on_wheel(point, delta));
        }
    };

    let on_drop = move |ev: leptos::ev::DragEvent| {
        ev.prevent_default();
        crate::util::dispatch::set_drop_target(ui, None);
        #[cfg(feature = "csr")]
        {
            let Some(id) = crate::util::dom::drag_payload(&ev) else {
                log::debug!("workspace drop without polygon id");
                return;
            };
            let Some(element) = workspace_ref.get_untracked() else {
                return;
            };
            let point = crate::util::dom::mouse_point(&ev, &element);
            dispatch(engine, ui, |e| e.drop_on_workspace(&id, point));
        }
    };

    let class = move || ui.with(|u| u.tray_class("workspace", Tray::Workspace));
    let cursor = move || ui.with(|u| u.cursor);

    let polygons = move || {
        engine.with(|e| {
            let camera = e.camera;
            e.board
                .workspace()
                .iter()
                .map(|placed| {
                    let frame = polygon_frame(placed, &camera);
                    let grab = placed.polygon.half_extent().scaled(camera.scale);
                    let on_drag_start =
                        on_polygon_drag_start(engine, ui, placed.id().to_owned(), Tray::Workspace, grab);
                    view! {
                        <div
                            class="workspace__polygon"
                            draggable="true"
                            style:left=format!("{}px", frame.left)
                            style:top=format!("{}px", frame.top)
                            style:width=format!("{}px", frame.width)
                            style:height=format!("{}px", frame.height)
                            on:dragstart=on_drag_start
                            on:dragend=on_polygon_drag_end(engine, ui)
                        >
                            <PolygonShape polygon=placed.polygon.clone() width=frame.width height=frame.height />
                        </div>
                    }
                })
                .collect_view()
        })
    };

    view! {
        <section
            class=class
            node_ref=workspace_ref
            style:cursor=cursor
            on:mousedown=on_mouse_down
            on:wheel=on_wheel
            on:dragover=on_tray_drag_over(ui, Tray::Workspace)
            on:dragleave=on_tray_drag_leave(ui)
            on:drop=on_drop
        >
            <GridLayer />
            {polygons}
        </section>
    }
}

/// Background grid with world-coordinate labels.
#[component]
fn GridLayer() -> impl IntoView {
    let engine = expect_context::<RwSignal<Engine>>();

    let lines = move || {
        let Grid { vertical, horizontal } = engine.with(Engine::grid);
        let vertical = vertical
            .into_iter()
            .map(|line| {
                let x = line.screen.to_string();
                let label = line.label.map(|value| {
                    view! {
                        <text class="workspace__grid-label" x=(line.screen + 2.0).to_string() y="12">
                            {value}
                        </text>
                    }
                });
                view! {
                    <line class="workspace__grid-line" x1=x.clone() y1="0" x2=x y2="100%"></line>
                    {label}
                }
            })
            .collect_view();
        let horizontal = horizontal
            .into_iter()
            .map(|line| {
                let y = line.screen.to_string();
                let label = line.label.map(|value| {
                    view! {
                        <text class="workspace__grid-label" x="2" y=(line.screen - 2.0).to_string()>
                            {value}
                        </text>
                    }
                });
                view! {
                    <line class="workspace__grid-line" x1="0" y1=y.clone() x2="100%" y2=y></line>
                    {label}
                }
            })
            .collect_view();
        (vertical, horizontal)
    };

    view! {
        <svg class="workspace__grid" aria-hidden="true">
            {lines}
        </svg>
    }
}

/// Push the workspace element's CSS size into the engine.
#[cfg(feature = "csr")]
fn sync_viewport(engine: RwSignal<Engine>, workspace_ref: NodeRef<leptos::html::Section>) {
    let Some(element) = workspace_ref.get_untracked() else {
        return;
    };
    let width = f64::from(element.client_width());
    let height = f64::from(element.client_height());
    let unchanged = engine.with_untracked(|e| {
        (e.viewport_width - width).abs() < f64::EPSILON && (e.viewport_height - height).abs() < f64::EPSILON
    });
    if !unchanged {
        engine.update(|e| e.set_viewport(width, height));
    }
}
