use std::fmt;

use log::{debug, info};
use web_sys::{MediaQueryList, MediaQueryListEvent, Window};

use crate::error::Result;
use crate::events;
use crate::init::Enhancements;

pub const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    pub fn from_dark_match(matches: bool) -> Self {
        if matches {
            ColorScheme::Dark
        } else {
            ColorScheme::Light
        }
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorScheme::Light => write!(f, "light"),
            ColorScheme::Dark => write!(f, "dark"),
        }
    }
}

/// Reports the preferred scheme now and whenever it changes. Theme
/// switching itself is left to the stylesheet.
pub fn install(window: &Window, page: &mut Enhancements) -> Result<()> {
    let Some(query) = dark_query(window) else {
        debug!("matchMedia unavailable, skipping color scheme detection");
        return Ok(());
    };

    if ColorScheme::from_dark_match(query.matches()) == ColorScheme::Dark {
        info!("dark mode detected");
    }

    page.listen(events::subscribe(&query, "change", |event: MediaQueryListEvent| {
        let scheme = ColorScheme::from_dark_match(event.matches());
        info!("color scheme changed to {}", scheme);
    })?);
    Ok(())
}

/// The scheme the user prefers right now, `None` without `matchMedia`.
pub fn current(window: &Window) -> Option<ColorScheme> {
    let query = dark_query(window)?;
    Some(ColorScheme::from_dark_match(query.matches()))
}

fn dark_query(window: &Window) -> Option<MediaQueryList> {
    window.match_media(DARK_QUERY).ok().flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_match_maps_to_scheme() {
        assert_eq!(ColorScheme::from_dark_match(true), ColorScheme::Dark);
        assert_eq!(ColorScheme::from_dark_match(false), ColorScheme::Light);
    }

    #[test]
    fn schemes_print_as_css_keywords() {
        assert_eq!(ColorScheme::Dark.to_string(), "dark");
        assert_eq!(ColorScheme::Light.to_string(), "light");
    }
}
