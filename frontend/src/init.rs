//! Wires every page behaviour once the document is parsed.

use log::{info, warn};
use web_sys::Document;

use crate::config::LandingConfig;
use crate::error::{Error, Result};
use crate::events::{Listener, Observer};
use crate::{accordion, color_scheme, hover, lazy_images, parallax, reveal, smooth_scroll};

/// Everything registered on the page. Dropping it tears the behaviours
/// down again; [`Enhancements::forget`] keeps them for the page's life.
#[derive(Default)]
pub struct Enhancements {
    listeners: Vec<Listener>,
    observers: Vec<Observer>,
}

impl Enhancements {
    pub fn listen(&mut self, listener: Listener) {
        self.listeners.push(listener);
    }

    pub fn observe(&mut self, observer: Observer) {
        self.observers.push(observer);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn forget(self) {
        std::mem::forget(self);
    }
}

pub fn enhance(document: &Document) -> Result<Enhancements> {
    let window = document.default_view().ok_or(Error::NoWindow)?;
    let config = LandingConfig::from_document(document).unwrap_or_else(|err| {
        warn!("{}, falling back to defaults", err);
        LandingConfig::default()
    });

    let mut page = Enhancements::default();
    report("accordion", accordion::install(document, &config.accordion, &mut page));
    report("reveal", reveal::install(document, &config.reveal, &mut page));
    report("smooth scroll", smooth_scroll::install(document, &mut page));
    report("parallax", parallax::install(document, &config, &mut page));
    report("hover", hover::install(document, &config.hover, &mut page));
    report("lazy images", lazy_images::install(document, &config.lazy_images, &mut page));
    report("color scheme", color_scheme::install(&window, &mut page));

    info!(
        "Landing page ready: {} listeners, {} observers",
        page.listener_count(),
        page.observer_count()
    );
    Ok(page)
}

// A failing feature is logged and skipped; the others still install.
fn report(feature: &str, result: Result<()>) {
    if let Err(err) = result {
        warn!("{} disabled: {}", feature, err);
    }
}
