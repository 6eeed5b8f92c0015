//! DOM event wiring. Handlers only enqueue [`Command`]s; the frame loop
//! applies them.

mod hover;
mod pointer;

pub use hover::wire_hover_handlers;
pub use pointer::wire_pointer_handlers;

use crate::core::{Command, CommandQueue, SketchConfig};
use crate::dom;
use web_sys as web;

/// Window resize: resize the canvas backing store now, let the frame loop
/// update camera and render targets.
pub fn wire_resize(
    container: web::HtmlElement,
    canvas: web::HtmlCanvasElement,
    images: Vec<web::HtmlImageElement>,
    config: &SketchConfig,
    queue: CommandQueue,
) {
    let Some(window) = web::window() else {
        return;
    };
    let max_pixel_ratio = config.max_pixel_ratio;
    let recapture = config.recapture_on_resize;
    dom::add_listener(&window, "resize", move |_ev: web::Event| {
        let viewport = dom::container_viewport(&container);
        dom::sync_canvas_backing_size(&canvas, viewport, max_pixel_ratio);
        let rects = recapture.then(|| images.iter().map(|img| dom::capture_rect(img)).collect());
        queue.push(Command::Resize { viewport, rects });
    });
}
