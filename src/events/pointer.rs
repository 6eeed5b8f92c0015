use crate::core::{Command, CommandQueue};
use crate::dom;
use web_sys as web;

/// Pointer position relative to the container, in CSS pixels.
#[inline]
fn container_px(ev: &web::MouseEvent, container: &web::HtmlElement) -> (f32, f32) {
    let rect = container.get_bounding_client_rect();
    (
        ev.client_x() as f32 - rect.left() as f32,
        ev.client_y() as f32 - rect.top() as f32,
    )
}

pub fn wire_pointer_handlers(
    container: &web::HtmlElement,
    canvas: &web::HtmlCanvasElement,
    queue: &CommandQueue,
) {
    let Some(window) = web::window() else {
        return;
    };

    // Hover picking follows the pointer anywhere in the window.
    {
        let container = container.clone();
        let queue = queue.clone();
        dom::add_listener(&window, "pointermove", move |ev: web::PointerEvent| {
            let (x, y) = container_px(&ev, &container);
            queue.push(Command::PointerMove { x, y });
        });
    }

    // Orbit drags start on the canvas and end anywhere.
    {
        let container = container.clone();
        let queue = queue.clone();
        let canvas_capture = canvas.clone();
        dom::add_listener(canvas, "pointerdown", move |ev: web::PointerEvent| {
            let (x, y) = container_px(&ev, &container);
            queue.push(Command::PointerDown { x, y });
            _ = canvas_capture.set_pointer_capture(ev.pointer_id());
        });
    }
    {
        let queue = queue.clone();
        dom::add_listener(&window, "pointerup", move |_ev: web::PointerEvent| {
            queue.push(Command::PointerUp);
        });
    }
}
