use web_sys::{Element, Window};

use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    /// Prefers the window's inner size and falls back to the document
    /// element's client size where the former reports zero.
    pub fn with_fallback(inner: (f64, f64), client: (f64, f64)) -> Self {
        let pick = |primary: f64, fallback: f64| if primary > 0.0 { primary } else { fallback };
        Self {
            width: pick(inner.0, client.0),
            height: pick(inner.1, client.1),
        }
    }

    pub fn of(window: &Window) -> Result<Self> {
        let inner = (
            window.inner_width()?.as_f64().unwrap_or(0.0),
            window.inner_height()?.as_f64().unwrap_or(0.0),
        );
        let client = window
            .document()
            .ok_or(Error::NoDocument)?
            .document_element()
            .map(|root| (f64::from(root.client_width()), f64::from(root.client_height())))
            .unwrap_or((0.0, 0.0));
        Ok(Self::with_fallback(inner, client))
    }
}

/// Whether `rect` lies entirely inside the viewport.
pub fn is_in_viewport(rect: Rect, viewport: Viewport) -> bool {
    rect.top >= 0.0
        && rect.left >= 0.0
        && rect.bottom <= viewport.height
        && rect.right <= viewport.width
}

pub fn element_in_viewport(window: &Window, element: &Element) -> Result<bool> {
    let bounds = element.get_bounding_client_rect();
    let rect = Rect {
        top: bounds.top(),
        left: bounds.left(),
        bottom: bounds.bottom(),
        right: bounds.right(),
    };
    Ok(is_in_viewport(rect, Viewport::of(window)?))
}
