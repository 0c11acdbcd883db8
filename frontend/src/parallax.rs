//! Scroll-driven effects: the hero drifts and fades while the page moves
//! past it, an optional progress bar tracks the read position, and a
//! debounced handler notes the start of each scroll burst.

use std::time::Duration;

use log::debug;
use web_sys::{Document, Element, Event, Window};

use crate::config::{LandingConfig, ParallaxConfig};
use crate::debounce::debounce;
use crate::dom;
use crate::error::{Error, Result};
use crate::events;
use crate::init::Enhancements;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroFrame {
    pub offset_px: f64,
    pub opacity: f64,
}

/// Hero placement at scroll offset `scrolled`, or `None` once the hero is
/// a full viewport behind (it is then left where it was).
pub fn hero_frame(
    scrolled: f64,
    viewport_height: f64,
    config: &ParallaxConfig,
) -> Option<HeroFrame> {
    if scrolled >= viewport_height {
        return None;
    }
    Some(HeroFrame {
        offset_px: scrolled * config.speed,
        opacity: (1.0 - (scrolled / viewport_height) * config.fade).min(1.0),
    })
}

/// Read position as a percentage of the scrollable distance.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn install(document: &Document, config: &LandingConfig, page: &mut Enhancements) -> Result<()> {
    let window = document.default_view().ok_or(Error::NoWindow)?;
    let parallax = &config.parallax;

    if let Some(hero) = document.query_selector(&parallax.hero_selector)? {
        let view = window.clone();
        let settings = parallax.clone();
        page.listen(events::subscribe(&window, "scroll", move |_: Event| {
            if let Err(err) = move_hero(&view, &hero, &settings) {
                debug!("parallax update failed: {}", err);
            }
        })?);
    }

    let progress_bar = document.query_selector(&parallax.progress_selector)?;
    let view = window.clone();
    let doc = document.clone();
    page.listen(events::subscribe(&window, "scroll", move |_: Event| {
        let progress = current_progress(&view, &doc);
        if let Some(bar) = &progress_bar {
            if let Err(err) = dom::set_style(bar, "width", &format!("{progress:.2}%")) {
                debug!("scroll progress update failed: {}", err);
            }
        }
    })?);

    let view = window.clone();
    let burst = debounce(
        move |_: Event| {
            debug!("scroll burst started at y={}", scroll_top(&view));
        },
        Duration::from_millis(config.scroll_debounce_ms),
        true,
    );
    page.listen(events::subscribe(&window, "scroll", burst.into_fn())?);

    Ok(())
}

fn move_hero(window: &Window, hero: &Element, config: &ParallaxConfig) -> Result<()> {
    let viewport_height = window.inner_height()?.as_f64().unwrap_or(0.0);
    if let Some(frame) = hero_frame(scroll_top(window), viewport_height, config) {
        dom::set_style(hero, "transform", &format!("translateY({}px)", frame.offset_px))?;
        dom::set_style(hero, "opacity", &frame.opacity.to_string())?;
    }
    Ok(())
}

fn scroll_top(window: &Window) -> f64 {
    match window.scroll_y() {
        Ok(offset) if offset > 0.0 => offset,
        _ => window
            .document()
            .and_then(|document| document.document_element())
            .map(|root| f64::from(root.scroll_top()))
            .unwrap_or(0.0),
    }
}

fn current_progress(window: &Window, document: &Document) -> f64 {
    match document.document_element() {
        Some(root) => scroll_progress(
            scroll_top(window),
            f64::from(root.scroll_height()),
            f64::from(root.client_height()),
        ),
        None => 0.0,
    }
}
