use crate::core::readiness::{background_image_urls, font_query, ReadinessReport};
use crate::core::SketchConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

const TIMEOUT_SENTINEL: &str = "__gallery_readiness_timeout";

/// Wait for the configured fonts, for every image to decode and for any CSS
/// background images on those elements to load, but no longer
/// than `config.readiness_timeout_ms`. Failed loads count as settled; the
/// report says what actually finished.
pub async fn await_ready(
    document: &web::Document,
    images: &[web::HtmlImageElement],
    config: &SketchConfig,
) -> ReadinessReport {
    let fonts = document.fonts();
    let pending = js_sys::Array::new();
    for family in &config.font_families {
        pending.push(&settled(fonts.load(&font_query(family))));
    }
    for img in images.iter().filter(|img| !img.complete()) {
        pending.push(&settled(img.decode()));
    }
    let backgrounds = background_urls(images);
    for url in &backgrounds {
        if let Ok(loader) = web::HtmlImageElement::new() {
            loader.set_src(url);
            pending.push(&settled(loader.decode()));
        }
    }
    log::info!(
        "[startup] waiting for {} fonts, {} images and {} backgrounds (timeout {} ms)",
        config.font_families.len(),
        images.len(),
        backgrounds.len(),
        config.readiness_timeout_ms
    );

    let all = js_sys::Promise::all(&pending);
    let race = js_sys::Promise::race(&js_sys::Array::of2(
        &all,
        &timeout(config.readiness_timeout_ms),
    ));
    let timed_out = match JsFuture::from(race).await {
        Ok(v) => v.as_string().as_deref() == Some(TIMEOUT_SENTINEL),
        Err(e) => {
            log::warn!("[startup] readiness wait failed: {:?}", e);
            true
        }
    };

    ReadinessReport {
        fonts: config
            .font_families
            .iter()
            .map(|f| (f.clone(), fonts.check(&font_query(f)).unwrap_or(false)))
            .collect(),
        images_total: images.len(),
        images_loaded: images
            .iter()
            .filter(|img| img.complete() && img.natural_width() > 0)
            .count(),
        timed_out,
    }
}

fn background_urls(images: &[web::HtmlImageElement]) -> Vec<String> {
    let Some(window) = web::window() else {
        return Vec::new();
    };
    images
        .iter()
        .filter_map(|img| window.get_computed_style(img).ok().flatten())
        .filter_map(|style| style.get_property_value("background-image").ok())
        .flat_map(|value| background_image_urls(&value))
        .collect()
}

/// Same promise, but rejections resolve to `undefined`.
fn settled(p: js_sys::Promise) -> js_sys::Promise {
    let ignore = Closure::wrap(Box::new(|_e: JsValue| {}) as Box<dyn FnMut(JsValue)>);
    let p = p.catch(&ignore);
    ignore.forget();
    p
}

fn timeout(ms: u32) -> js_sys::Promise {
    js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_1(
                &resolve,
                ms.min(i32::MAX as u32) as i32,
                &JsValue::from_str(TIMEOUT_SENTINEL),
            );
        }
    })
}
