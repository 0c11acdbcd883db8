//! Small conveniences over `web_sys` shared by the page behaviours.

use wasm_bindgen::JsCast;
use web_sys::{CssStyleDeclaration, Document, Element, HtmlElement, NodeList, SvgElement};

use crate::error::{Error, Result};

/// Class manipulation, split out so grouping rules can be exercised
/// without a browser.
pub trait Classes {
    fn has_class(&self, class: &str) -> bool;
    fn add_class(&self, class: &str) -> Result<()>;
    fn remove_class(&self, class: &str) -> Result<()>;
}

impl Classes for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) -> Result<()> {
        Ok(self.class_list().add_1(class)?)
    }

    fn remove_class(&self, class: &str) -> Result<()> {
        Ok(self.class_list().remove_1(class)?)
    }
}

pub fn query_all<T: JsCast>(document: &Document, selector: &str) -> Result<Vec<T>> {
    Ok(collect(&document.query_selector_all(selector)?))
}

pub fn query_all_in<T: JsCast>(root: &Element, selector: &str) -> Result<Vec<T>> {
    Ok(collect(&root.query_selector_all(selector)?))
}

/// Nodes that are not a `T` are skipped.
fn collect<T: JsCast>(nodes: &NodeList) -> Vec<T> {
    (0..nodes.length())
        .filter_map(|index| nodes.get(index))
        .filter_map(|node| node.dyn_into::<T>().ok())
        .collect()
}

/// Inline style of an HTML or SVG element.
pub fn style_of(element: &Element) -> Option<CssStyleDeclaration> {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        return Some(html.style());
    }
    element.dyn_ref::<SvgElement>().map(SvgElement::style)
}

pub fn set_style(element: &Element, property: &str, value: &str) -> Result<()> {
    let style = style_of(element).ok_or_else(|| {
        Error::Js(format!("<{}> has no inline style", element.tag_name().to_lowercase()))
    })?;
    Ok(style.set_property(property, value)?)
}

pub fn set_styles(element: &Element, styles: &[(&str, &str)]) -> Result<()> {
    for (property, value) in styles {
        set_style(element, property, value)?;
    }
    Ok(())
}

#[cfg(test)]
pub(crate) mod fake {
    use super::Classes;
    use crate::error::Result;
    use std::cell::RefCell;
    use std::collections::BTreeSet;

    /// An element reduced to its class list.
    #[derive(Debug, Default)]
    pub struct FakeElement {
        classes: RefCell<BTreeSet<String>>,
    }

    impl FakeElement {
        pub fn with(classes: &[&str]) -> Self {
            Self {
                classes: RefCell::new(classes.iter().map(|c| c.to_string()).collect()),
            }
        }
    }

    impl Classes for FakeElement {
        fn has_class(&self, class: &str) -> bool {
            self.classes.borrow().contains(class)
        }

        fn add_class(&self, class: &str) -> Result<()> {
            self.classes.borrow_mut().insert(class.to_string());
            Ok(())
        }

        fn remove_class(&self, class: &str) -> Result<()> {
            self.classes.borrow_mut().remove(class);
            Ok(())
        }
    }
}
