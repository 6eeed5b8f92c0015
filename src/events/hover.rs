use crate::core::{Command, CommandQueue};
use crate::dom;
use web_sys as web;

/// Enter/leave on each image drives its plane's hover transition.
/// `images[i]` is the source element of plane `i`.
pub fn wire_hover_handlers(images: &[web::HtmlImageElement], queue: &CommandQueue) {
    for (i, img) in images.iter().enumerate() {
        let q_enter = queue.clone();
        dom::add_listener(img, "mouseenter", move |_ev: web::MouseEvent| {
            q_enter.push(Command::HoverEnter(i));
        });
        let q_leave = queue.clone();
        dom::add_listener(img, "mouseleave", move |_ev: web::MouseEvent| {
            q_leave.push(Command::HoverLeave(i));
        });
    }
}
