use log::debug;
use web_sys::{Document, Element, MouseEvent};

use crate::config::HoverConfig;
use crate::dom;
use crate::error::Result;
use crate::events;
use crate::init::Enhancements;

pub fn scale(factor: f64) -> String {
    format!("scale({factor})")
}

pub fn install(document: &Document, config: &HoverConfig, page: &mut Enhancements) -> Result<()> {
    let cards: Vec<Element> = dom::query_all(document, &config.card_selector)?;
    for card in &cards {
        for event in ["mouseenter", "mouseleave"] {
            let target = card.clone();
            let transition = config.card_transition.clone();
            page.listen(events::subscribe(card, event, move |_: MouseEvent| {
                if let Err(err) = dom::set_style(&target, "transition", &transition) {
                    debug!("card hover failed: {}", err);
                }
            })?);
        }
    }

    let icons: Vec<Element> = dom::query_all(document, &config.icon_selector)?;
    for icon in &icons {
        let target = icon.clone();
        let transition = config.icon_transition.clone();
        let grown = scale(config.icon_scale);
        page.listen(events::subscribe(icon, "mouseenter", move |_: MouseEvent| {
            let styles = [("transition", transition.as_str()), ("transform", grown.as_str())];
            if let Err(err) = dom::set_styles(&target, &styles) {
                debug!("icon hover failed: {}", err);
            }
        })?);

        let target = icon.clone();
        page.listen(events::subscribe(icon, "mouseleave", move |_: MouseEvent| {
            if let Err(err) = dom::set_style(&target, "transform", &scale(1.0)) {
                debug!("icon hover failed: {}", err);
            }
        })?);
    }

    debug!("hover: {} cards, {} icons", cards.len(), icons.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scale_keeps_css_number_format() {
        assert_eq!(scale(1.05), "scale(1.05)");
        assert_eq!(scale(1.0), "scale(1)");
    }
}
