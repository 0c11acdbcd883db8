use log::debug;
use web_sys::{
    Document, Element, MouseEvent, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::dom;
use crate::error::Result;
use crate::events;
use crate::init::Enhancements;

pub const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";

/// Selector to scroll to for an in-page link, `None` for a bare `#`.
pub fn target_selector(href: &str) -> Option<&str> {
    match href.trim() {
        "" | "#" => None,
        selector if selector.starts_with('#') => Some(selector),
        _ => None,
    }
}

pub fn install(document: &Document, page: &mut Enhancements) -> Result<()> {
    let anchors: Vec<Element> = dom::query_all(document, ANCHOR_SELECTOR)?;

    for anchor in &anchors {
        let link = anchor.clone();
        let document = document.clone();
        page.listen(events::subscribe(anchor, "click", move |event: MouseEvent| {
            event.prevent_default();
            let Some(href) = link.get_attribute("href") else {
                return;
            };
            let Some(selector) = target_selector(&href) else {
                return;
            };
            // An href like "#1st" is not a valid selector.
            match document.query_selector(selector) {
                Ok(Some(target)) => scroll_to(&target),
                Ok(None) => debug!("no element for {}", selector),
                Err(_) => debug!("{} is not a valid selector", selector),
            }
        })?);
    }

    debug!("smooth scroll: wired {} anchors", anchors.len());
    Ok(())
}

fn scroll_to(target: &Element) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_links_resolve_to_id_selectors() {
        assert_eq!(target_selector("#contact"), Some("#contact"));
        assert_eq!(target_selector(" #faq "), Some("#faq"));
    }

    #[test]
    fn bare_hash_has_no_target() {
        assert_eq!(target_selector("#"), None);
        assert_eq!(target_selector(""), None);
    }

    #[test]
    fn non_fragment_links_are_ignored() {
        assert_eq!(target_selector("/pricing#plans"), None);
    }
}
