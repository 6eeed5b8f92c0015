use crate::core::{ScrollSource, ScrollState, SmoothScroll};
use crate::dom;
use web_sys as web;

/// Smooth-scroll driver for the page.
///
/// The native document scroll only sets the target; the `[data-scroll]`
/// content element is translated by the smoothed offset so the DOM and the
/// planes move together. The `main` element is pinned to the viewport and the
/// body is given the content height so the native scrollbar still works.
pub struct DomScroll {
    inner: SmoothScroll,
    main: Option<web::HtmlElement>,
    scrollable: Option<web::HtmlElement>,
}

impl DomScroll {
    pub fn new(document: &web::Document, ease: f32) -> Self {
        let main = query_html(document, "main");
        let scrollable = query_html(document, "[data-scroll]");
        if scrollable.is_none() {
            log::warn!("[scroll] no [data-scroll] element; following native scroll only");
        }
        let mut inner = SmoothScroll::new(ease);
        inner.jump_to(dom::scroll_y() as f32);
        let mut s = Self {
            inner,
            main,
            scrollable,
        };
        s.pin_main();
        s.set_body_height();
        s
    }

    fn pin_main(&self) {
        let Some(main) = &self.main else {
            return;
        };
        let style = main.style();
        for (k, v) in [
            ("position", "fixed"),
            ("width", "100%"),
            ("height", "100%"),
            ("top", "0"),
            ("left", "0"),
            ("overflow", "hidden"),
        ] {
            _ = style.set_property(k, v);
        }
    }

    fn set_body_height(&self) {
        let (Some(scrollable), Some(body)) = (
            &self.scrollable,
            dom::window_document().and_then(|d| d.body()),
        ) else {
            return;
        };
        _ = body
            .style()
            .set_property("height", &format!("{}px", scrollable.scroll_height()));
    }
}

impl ScrollSource for DomScroll {
    fn step(&mut self) {
        self.inner.set_target(dom::scroll_y() as f32);
        self.inner.step();
        if let Some(el) = &self.scrollable {
            let y = -self.inner.state().offset;
            _ = el
                .style()
                .set_property("transform", &format!("translate3d(0,{}px,0)", y));
        }
    }

    fn state(&self) -> ScrollState {
        self.inner.state()
    }

    fn resize(&mut self) {
        self.set_body_height();
    }
}

fn query_html(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    use wasm_bindgen::JsCast;
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}
