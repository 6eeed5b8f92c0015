//! Scroll-synchronized WebGPU image gallery.
//!
//! Every `<img>` on the page gets a textured plane in a 3D scene whose camera
//! maps one scene unit to one CSS pixel, so the planes sit exactly over their
//! images and follow the page's smooth scroll. The rendered scene goes
//! through a full-screen pass that warps the top band of the frame in
//! proportion to scroll speed, and hovering an image plays a per-plane shader
//! transition.
//!
//! The platform-neutral logic lives in [`core`] and builds on any target;
//! the browser glue below it is wasm-only.

pub mod core;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod events;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod render;
#[cfg(target_arch = "wasm32")]
mod scroll;
#[cfg(target_arch = "wasm32")]
mod startup;

#[cfg(target_arch = "wasm32")]
pub use web_entry::{start, stop};

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use crate::core::gallery::ImageSource;
    use crate::core::sketch::CancelToken;
    use crate::core::{Gallery, MaterialTemplate, Sketch};
    use crate::{dom, events, frame, render, scroll, startup};
    use instant::Instant;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::sync::atomic::{AtomicBool, Ordering};
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;
    use web_sys as web;

    thread_local! {
        static CANCEL: RefCell<Option<CancelToken>> = const { RefCell::new(None) };
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("scroll-gallery starting");

        static STARTED: AtomicBool = AtomicBool::new(false);
        if STARTED.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        spawn_local(async move {
            if let Err(e) = init().await {
                log::error!("init error: {:?}", e);
            }
        });
        Ok(())
    }

    /// Stop the frame loop after the current frame.
    #[wasm_bindgen]
    pub fn stop() {
        CANCEL.with(|c| {
            if let Some(token) = c.borrow().as_ref() {
                token.cancel();
            }
        });
    }

    async fn init() -> anyhow::Result<()> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| anyhow::anyhow!("no document"))?;

        let container_el = document
            .get_element_by_id(crate::core::constants::CONTAINER_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", crate::core::constants::CONTAINER_ID))?;
        let config = dom::read_config(&container_el);
        let container: web::HtmlElement = container_el
            .dyn_into::<web::HtmlElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

        // Layout must be stable before any rect is captured.
        let images = dom::gallery_images(&document);
        let report = startup::await_ready(&document, &images, &config).await;
        report.log();

        let viewport = dom::container_viewport(&container);
        let canvas: web::HtmlCanvasElement = document
            .create_element("canvas")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;
        container
            .append_child(&canvas)
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        dom::sync_canvas_backing_size(&canvas, viewport, config.max_pixel_ratio);

        let mut gpu = render::GpuState::new(&canvas, config.grid_segments).await?;

        // Rects are captured before any await: the page keeps scrolling
        // natively until the smooth scroller pins it.
        let rects = dom::capture_document_rects(&images);
        let mut sources = Vec::with_capacity(images.len());
        let mut plane_images = Vec::with_capacity(images.len());
        for (img, rect) in images.iter().zip(rects) {
            let texture = gpu.upload_image(img).await;
            if texture.is_ok() {
                plane_images.push(img.clone());
            }
            sources.push(ImageSource { rect, texture });
        }
        let gallery = Gallery::build(&MaterialTemplate::new(config.hover_duration), sources);

        let scroll = scroll::DomScroll::new(&document, config.scroll_ease);
        let sketch = Sketch::new(config.clone(), viewport, scroll, gallery);
        let queue = sketch.queue();
        CANCEL.with(|c| *c.borrow_mut() = Some(sketch.cancel_token()));

        events::wire_resize(
            container.clone(),
            canvas.clone(),
            plane_images.clone(),
            &config,
            queue.clone(),
        );
        events::wire_hover_handlers(&plane_images, &queue);
        events::wire_pointer_handlers(&container, &canvas, &queue);

        let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
            sketch,
            gpu,
            start: Instant::now(),
        }));
        frame::start_loop(frame_ctx);
        log::info!("[startup] frame loop running with {} planes", plane_images.len());
        Ok(())
    }
}
