//! Images declared with `data-src` get their real source once they come
//! near the viewport.

use log::debug;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Reflect;
use web_sys::{Document, Element, HtmlImageElement, IntersectionObserverInit, Window};

use crate::config::LazyImageConfig;
use crate::dom::{self, Classes};
use crate::error::{Error, Result};
use crate::events;
use crate::init::Enhancements;

pub fn supported(window: &Window) -> bool {
    let constructor = JsValue::from_str("IntersectionObserver");
    Reflect::has(window, &constructor).unwrap_or(false)
}

pub fn install(
    document: &Document,
    config: &LazyImageConfig,
    page: &mut Enhancements,
) -> Result<()> {
    let window = document.default_view().ok_or(Error::NoWindow)?;
    if !supported(&window) {
        debug!("lazy images: IntersectionObserver unavailable, skipping");
        return Ok(());
    }

    let settings = config.clone();
    let options = IntersectionObserverInit::new();
    let observer = events::observe_intersections(&options, move |entry, observer| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        match load(&target, &settings) {
            Ok(true) => observer.unobserve(&target),
            Ok(false) => {}
            Err(err) => debug!("lazy image failed: {}", err),
        }
    })?;

    let images: Vec<Element> = dom::query_all(document, &config.selector)?;
    for image in &images {
        observer.observe(image);
    }

    debug!("lazy images: observing {}", images.len());
    page.observe(observer);
    Ok(())
}

/// Swaps in the deferred source and marks the image loaded. Returns
/// `false` for elements without a deferred source; those stay observed.
pub fn load(target: &Element, config: &LazyImageConfig) -> Result<bool> {
    let Some(source) = target.get_attribute(&config.source_attribute) else {
        return Ok(false);
    };
    match target.dyn_ref::<HtmlImageElement>() {
        Some(image) => image.set_src(&source),
        None => target.set_attribute("src", &source)?,
    }
    target.add_class(&config.loaded_class)?;
    Ok(true)
}
