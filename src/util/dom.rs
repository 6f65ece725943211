//! DOM helpers: element-relative pointer positions and drag payloads.
//!
//! Everything here needs `web_sys`, so the module is empty outside the `csr`
//! build.

#[cfg(feature = "csr")]
use canvas::camera::Point;
#[cfg(feature = "csr")]
use canvas::consts::DRAG_MIME;

/// Pointer position relative to `element`'s top-left corner, in CSS pixels.
#[cfg(feature = "csr")]
pub fn local_point(client_x: i32, client_y: i32, element: &web_sys::Element) -> Point {
    let rect = element.get_bounding_client_rect();
    Point::new(f64::from(client_x) - rect.left(), f64::from(client_y) - rect.top())
}

/// Pointer position of a mouse event relative to `element`.
#[cfg(feature = "csr")]
pub fn mouse_point(ev: &web_sys::MouseEvent, element: &web_sys::Element) -> Point {
    local_point(ev.client_x(), ev.client_y(), element)
}

/// Put `id` into the drag payload and mark the drag as a move.
///
/// When `grab` is given, the drag image is `element` held at that offset,
/// so the cursor sits on the polygon's centre while dragging.
#[cfg(feature = "csr")]
pub fn set_drag_payload(ev: &web_sys::DragEvent, id: &str, grab: Option<(&web_sys::Element, f64, f64)>) {
    let Some(transfer) = ev.data_transfer() else {
        log::warn!("dragstart without DataTransfer for {id}");
        return;
    };
    transfer.set_effect_allowed("move");
    if let Err(e) = transfer.set_data(DRAG_MIME, id) {
        log::warn!("failed to set drag payload for {id}: {e:?}");
    }
    if let Some((element, x, y)) = grab {
        #[allow(clippy::cast_possible_truncation)]
        transfer.set_drag_image(element, x.round() as i32, y.round() as i32);
    }
}

/// Polygon id carried by a drop, if any.
#[cfg(feature = "csr")]
pub fn drag_payload(ev: &web_sys::DragEvent) -> Option<String> {
    let transfer = ev.data_transfer()?;
    match transfer.get_data(DRAG_MIME) {
        Ok(id) if !id.is_empty() => Some(id),
        Ok(_) => None,
        Err(e) => {
            log::warn!("failed to read drag payload: {e:?}");
            None
        }
    }
}

/// Accept a dragover so the element becomes a drop target.
#[cfg(feature = "csr")]
pub fn accept_drag(ev: &web_sys::DragEvent) {
    ev.prevent_default();
    if let Some(transfer) = ev.data_transfer() {
        transfer.set_drop_effect("move");
    }
}

/// The event's current target as an element.
#[cfg(feature = "csr")]
pub fn current_element(ev: &web_sys::Event) -> Option<web_sys::Element> {
    use wasm_bindgen::JsCast;

    ev.current_target().and_then(|t| t.dyn_into::<web_sys::Element>().ok())
}
