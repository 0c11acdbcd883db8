//! Exclusive accordions: opening one item closes the rest of its group,
//! clicking an open item closes it. Headers are also reachable and
//! operable from the keyboard.

use log::debug;
use web_sys::{Document, Element, HtmlElement, KeyboardEvent, MouseEvent};

use crate::config::AccordionConfig;
use crate::dom::{self, Classes};
use crate::error::Result;
use crate::events;
use crate::init::Enhancements;

/// Closes every item of `group` and opens `item` unless it was already
/// open. Returns whether `item` ends up open.
pub fn toggle_exclusive<C: Classes>(item: &C, group: &[C], active: &str) -> Result<bool> {
    let was_active = item.has_class(active);
    for other in group {
        other.remove_class(active)?;
    }
    if !was_active {
        item.add_class(active)?;
    }
    Ok(!was_active)
}

/// Keys that activate a focused header, like a native button.
pub fn activates(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

pub fn install(
    document: &Document,
    config: &AccordionConfig,
    page: &mut Enhancements,
) -> Result<()> {
    let headers: Vec<HtmlElement> = dom::query_all(document, &config.header_selector)?;

    for header in &headers {
        header.set_attribute("role", "button")?;
        header.set_attribute("tabindex", "0")?;

        let clicked = header.clone();
        let config_for_click = config.clone();
        page.listen(events::subscribe(header, "click", move |_: MouseEvent| {
            if let Err(err) = on_header_click(&clicked, &config_for_click) {
                debug!("accordion toggle failed: {}", err);
            }
        })?);

        let pressed = header.clone();
        page.listen(events::subscribe(header, "keydown", move |event: KeyboardEvent| {
            if activates(&event.key()) {
                event.prevent_default();
                pressed.click();
            }
        })?);
    }

    debug!("accordion: wired {} headers", headers.len());
    Ok(())
}

fn on_header_click(header: &HtmlElement, config: &AccordionConfig) -> Result<()> {
    let Some(item) = header.parent_element() else {
        return Ok(());
    };

    let open = match header.closest(&config.group_selector)? {
        Some(group) => {
            let items: Vec<Element> = dom::query_all_in(&group, &config.item_selector)?;
            toggle_exclusive(&item, &items, &config.active_class)?
        }
        // A stray header still toggles its own item.
        None => toggle_exclusive(&item, std::slice::from_ref(&item), &config.active_class)?,
    };

    debug!("accordion item {}", if open { "opened" } else { "closed" });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::fake::FakeElement;

    fn group(states: &[bool]) -> Vec<FakeElement> {
        states
            .iter()
            .map(|&open| {
                if open {
                    FakeElement::with(&["accordion-item", "active"])
                } else {
                    FakeElement::with(&["accordion-item"])
                }
            })
            .collect()
    }

    fn open_states(items: &[FakeElement]) -> Vec<bool> {
        items.iter().map(|item| item.has_class("active")).collect()
    }

    #[test]
    fn opening_an_item_closes_its_siblings() {
        let items = group(&[true, false, false]);

        let open = toggle_exclusive(&items[2], &items, "active").unwrap();

        assert!(open);
        assert_eq!(open_states(&items), vec![false, false, true]);
    }

    #[test]
    fn clicking_the_open_item_closes_it() {
        let items = group(&[false, true, false]);

        let open = toggle_exclusive(&items[1], &items, "active").unwrap();

        assert!(!open);
        assert_eq!(open_states(&items), vec![false, false, false]);
    }

    #[test]
    fn lone_item_toggles_itself() {
        let item = FakeElement::with(&["accordion-item"]);

        assert!(toggle_exclusive(&item, std::slice::from_ref(&item), "active").unwrap());
        assert!(item.has_class("active"));
        assert!(!toggle_exclusive(&item, std::slice::from_ref(&item), "active").unwrap());
        assert!(!item.has_class("active"));
    }

    #[test]
    fn other_classes_survive_the_toggle() {
        let items = group(&[true, false]);

        toggle_exclusive(&items[1], &items, "active").unwrap();

        assert!(items.iter().all(|item| item.has_class("accordion-item")));
    }

    #[test]
    fn enter_and_space_activate_headers() {
        assert!(activates("Enter"));
        assert!(activates(" "));
        assert!(!activates("Tab"));
        assert!(!activates("Spacebar"));
        assert!(!activates("a"));
    }
}
