use crate::core::config::CONFIG_ATTRIBUTES;
use crate::core::layout::to_document_space;
use crate::core::{DomRect, SketchConfig, Viewport};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn scroll_y() -> f64 {
    web::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or(0.0)
}

/// Attach `handler` to `target` for the lifetime of the page.
pub fn add_listener<E: JsCast + 'static>(
    target: &web::EventTarget,
    event: &str,
    mut handler: impl FnMut(E) + 'static,
) {
    let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Defaults overridden by any `data-gallery-*` attributes on the container.
pub fn read_config(container: &web::Element) -> SketchConfig {
    let mut config = SketchConfig {
        container_id: container.id(),
        ..SketchConfig::default()
    };
    for name in CONFIG_ATTRIBUTES {
        if let Some(value) = container.get_attribute(name) {
            if let Err(e) = config.apply_attribute(name, &value) {
                log::warn!("[config] {}", e);
            }
        }
    }
    config
}

pub fn container_viewport(container: &web::HtmlElement) -> Viewport {
    Viewport::new(
        container.offset_width().max(1) as f32,
        container.offset_height().max(1) as f32,
    )
}

/// Keep the canvas backing store at CSS size × device pixel ratio (capped).
pub fn sync_canvas_backing_size(
    canvas: &web::HtmlCanvasElement,
    viewport: Viewport,
    max_pixel_ratio: f64,
) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio().min(max_pixel_ratio);
        let w_px = (viewport.width as f64 * dpr) as u32;
        let h_px = (viewport.height as f64 * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
        let style = canvas.style();
        _ = style.set_property("width", &format!("{}px", viewport.width));
        _ = style.set_property("height", &format!("{}px", viewport.height));
    }
}

pub fn gallery_images(document: &web::Document) -> Vec<web::HtmlImageElement> {
    let Ok(list) = document.query_selector_all("img") else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlImageElement>().ok())
        .collect()
}

/// Viewport-relative bounding box of `el`.
pub fn capture_rect(el: &web::Element) -> DomRect {
    let r = el.get_bounding_client_rect();
    DomRect::new(
        r.top() as f32,
        r.left() as f32,
        r.width() as f32,
        r.height() as f32,
    )
}

/// Document-space rects for `images`, read in one synchronous pass so every
/// rect agrees with the single scroll reading.
pub fn capture_document_rects(images: &[web::HtmlImageElement]) -> Vec<DomRect> {
    let scroll_offset = scroll_y() as f32;
    to_document_space(images.iter().map(|img| capture_rect(img)), scroll_offset)
}
