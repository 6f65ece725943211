//! SVG rendering of a single polygon.

use leptos::prelude::*;

use canvas::polygon::Polygon;
use canvas::render::{points_attr, view_box};

/// The polygon's outline drawn into a `width` × `height` box.
///
/// The view box is the polygon's own `w` × `h`, so any box size scales the
/// shape uniformly.
#[component]
pub fn PolygonShape(polygon: Polygon, width: f64, height: f64) -> impl IntoView {
    let view_box = view_box(&polygon);
    let points = points_attr(&polygon.points);
    view! {
        <svg
            class="polygon-shape"
            viewBox=view_box
            width=width.to_string()
            height=height.to_string()
            aria-hidden="true"
        >
            <polygon points=points fill=polygon.fill></polygon>
        </svg>
    }
}
