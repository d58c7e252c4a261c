use wasm_bindgen::JsCast;
use web_sys as web;

/// Attach a click handler to `#element_id`; the default action is suppressed
/// since menu entries are anchors.
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
            ev.prevent_default();
            handler();
        }) as Box<dyn FnMut(_)>);
        let _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    } else {
        log::warn!("missing #{}", element_id);
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn set_display(document: &web::Document, element_id: &str, visible: bool) {
    if let Some(el) = document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    {
        let _ = el
            .style()
            .set_property("display", if visible { "block" } else { "none" });
    }
}

/// Whether `target` is, or sits inside, the element with `element_id`.
pub fn target_within(target: Option<web::EventTarget>, element_id: &str) -> bool {
    let mut node = target.and_then(|t| t.dyn_into::<web::Element>().ok());
    while let Some(el) = node {
        if el.id() == element_id {
            return true;
        }
        node = el.parent_element();
    }
    false
}

/// Whether `target` sits inside the element matched by `container`.
pub fn target_within_element(target: Option<web::EventTarget>, container: &web::Element) -> bool {
    target
        .and_then(|t| t.dyn_into::<web::Node>().ok())
        .map(|n| container.contains(Some(&n)))
        .unwrap_or(false)
}
