//! Cards fade and slide in the first time they scroll into view.

use log::debug;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, IntersectionObserverInit};

use crate::config::{RevealConfig, RevealGroup};
use crate::dom;
use crate::error::Result;
use crate::events;
use crate::init::Enhancements;

pub const HIDDEN: [(&str, &str); 2] = [("opacity", "0"), ("transform", "translateY(20px)")];
pub const SHOWN: [(&str, &str); 2] = [("opacity", "1"), ("transform", "translateY(0)")];

/// Transition for the `index`-th card of a group, staggered so the cards
/// arrive one after another.
pub fn transition(group: &RevealGroup, index: usize) -> String {
    let duration = group.duration_ms;
    let delay = u64::from(group.stagger_ms) * index as u64;
    format!("opacity {duration}ms ease {delay}ms, transform {duration}ms ease {delay}ms")
}

pub fn observer_options(config: &RevealConfig) -> IntersectionObserverInit {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);
    options
}

/// Moves a card to its visible end state; its transition animates it.
pub fn show(card: &Element) -> Result<()> {
    dom::set_styles(card, &SHOWN)
}

pub fn install(document: &Document, config: &RevealConfig, page: &mut Enhancements) -> Result<()> {
    let observer = events::observe_intersections(&observer_options(config), |entry, _| {
        if entry.is_intersecting() {
            if let Err(err) = show(&entry.target()) {
                debug!("reveal failed: {}", err);
            }
        }
    })?;

    let mut observed = 0;
    for group in &config.groups {
        let cards: Vec<Element> = dom::query_all(document, &group.selector)?;
        for (index, card) in cards.iter().enumerate() {
            dom::set_styles(card, &HIDDEN)?;
            dom::set_style(card, "transition", &transition(group, index))?;
            observer.observe(card);
        }
        observed += cards.len();
    }

    debug!("reveal: observing {} cards", observed);
    page.observe(observer);
    Ok(())
}
