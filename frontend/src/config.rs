use log::Level;
use serde::Deserialize;
use web_sys::Document;

use crate::error::Result;

/// Attribute on `<body>` that may carry a JSON override of [`LandingConfig`].
pub const CONFIG_ATTRIBUTE: &str = "data-landing-config";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Chatty while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Every tunable of the page behaviours. Missing fields fall back to the
/// values the page was designed with.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LandingConfig {
    pub accordion: AccordionConfig,
    pub reveal: RevealConfig,
    pub parallax: ParallaxConfig,
    pub hover: HoverConfig,
    pub lazy_images: LazyImageConfig,
    /// Wait of the debounced scroll handler, in milliseconds.
    pub scroll_debounce_ms: u64,
}

impl Default for LandingConfig {
    fn default() -> Self {
        Self {
            accordion: AccordionConfig::default(),
            reveal: RevealConfig::default(),
            parallax: ParallaxConfig::default(),
            hover: HoverConfig::default(),
            lazy_images: LazyImageConfig::default(),
            scroll_debounce_ms: 20,
        }
    }
}

impl LandingConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads the override from `<body data-landing-config='...'>`.
    pub fn from_document(document: &Document) -> Result<Self> {
        match document
            .body()
            .and_then(|body| body.get_attribute(CONFIG_ATTRIBUTE))
        {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw),
            _ => Ok(Self::default()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AccordionConfig {
    pub header_selector: String,
    pub group_selector: String,
    pub item_selector: String,
    pub active_class: String,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            header_selector: ".accordion-header".to_string(),
            group_selector: ".accordion".to_string(),
            item_selector: ".accordion-item".to_string(),
            active_class: "active".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RevealConfig {
    pub threshold: f64,
    pub root_margin: String,
    pub groups: Vec<RevealGroup>,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px".to_string(),
            groups: vec![
                RevealGroup {
                    selector: ".simulator-card".to_string(),
                    duration_ms: 500,
                    stagger_ms: 100,
                },
                RevealGroup {
                    selector: ".term-card".to_string(),
                    duration_ms: 400,
                    stagger_ms: 50,
                },
            ],
        }
    }
}

/// A set of cards that fade in together, each one `stagger_ms` after the
/// previous.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RevealGroup {
    pub selector: String,
    pub duration_ms: u32,
    pub stagger_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxConfig {
    pub hero_selector: String,
    pub speed: f64,
    /// Fraction of opacity lost once the hero has scrolled a full viewport.
    pub fade: f64,
    pub progress_selector: String,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            hero_selector: ".hero".to_string(),
            speed: 0.5,
            fade: 0.3,
            progress_selector: ".scroll-progress".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct HoverConfig {
    pub card_selector: String,
    pub card_transition: String,
    pub icon_selector: String,
    pub icon_transition: String,
    pub icon_scale: f64,
}

impl Default for HoverConfig {
    fn default() -> Self {
        Self {
            card_selector: ".simulator-card".to_string(),
            card_transition: "transform 300ms cubic-bezier(0.25, 0.1, 0.25, 1), \
                              box-shadow 300ms cubic-bezier(0.25, 0.1, 0.25, 1)"
                .to_string(),
            icon_selector: ".simulator-visual svg".to_string(),
            icon_transition: "transform 300ms ease".to_string(),
            icon_scale: 1.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LazyImageConfig {
    pub selector: String,
    pub source_attribute: String,
    pub loaded_class: String,
}

impl Default for LazyImageConfig {
    fn default() -> Self {
        Self {
            selector: "img[data-src]".to_string(),
            source_attribute: "data-src".to_string(),
            loaded_class: "loaded".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_object_yields_defaults() {
        let config = LandingConfig::from_json("{}").unwrap();
        assert_eq!(config, LandingConfig::default());
    }

    #[test]
    fn partial_override_keeps_remaining_defaults() {
        let config = LandingConfig::from_json(
            r#"{ "parallax": { "speed": 0.25 }, "scroll_debounce_ms": 50 }"#,
        )
        .unwrap();

        assert_eq!(config.parallax.speed, 0.25);
        assert_eq!(config.parallax.fade, 0.3);
        assert_eq!(config.parallax.hero_selector, ".hero");
        assert_eq!(config.scroll_debounce_ms, 50);
        assert_eq!(config.reveal, RevealConfig::default());
    }

    #[test]
    fn reveal_groups_replace_the_default_list() {
        let config = LandingConfig::from_json(
            r#"{ "reveal": { "groups": [
                { "selector": ".team-card", "duration_ms": 300, "stagger_ms": 30 }
            ] } }"#,
        )
        .unwrap();

        assert_eq!(config.reveal.threshold, 0.1);
        assert_eq!(
            config.reveal.groups,
            vec![RevealGroup {
                selector: ".team-card".to_string(),
                duration_ms: 300,
                stagger_ms: 30,
            }]
        );
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = LandingConfig::from_json("{ not json").unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn defaults_match_the_page_design() {
        let config = LandingConfig::default();
        assert_eq!(config.reveal.root_margin, "0px 0px -50px 0px");
        assert_eq!(config.reveal.groups.len(), 2);
        assert_eq!(config.reveal.groups[0].duration_ms, 500);
        assert_eq!(config.reveal.groups[1].stagger_ms, 50);
        assert_eq!(config.hover.icon_scale, 1.05);
        assert_eq!(config.scroll_debounce_ms, 20);
    }
}
