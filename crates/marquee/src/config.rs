#![forbid(unsafe_code)]

//! Widget settings loaded from TOML or JSON.
//!
//! ```toml
//! # marquee.toml
//! [carousel]
//! display_items = 3
//! autoplay = "left"
//! autoplay_interval_ms = 5000
//!
//! [observer]
//! thresholds = 21
//! ```
//!
//! ```rust,ignore
//! let config = MarqueeConfig::from_toml_file("marquee.toml")?;
//! let carousel = config.build_carousel(items)?;
//! ```
//!
//! Every field is optional; missing ones take the widget defaults. The
//! loaders run [`MarqueeConfig::validate`] and refuse configurations with
//! problems.

use std::path::Path;

use serde::{Deserialize, Serialize};

use marquee_widgets::carousel::{AutoPlay, Carousel, CarouselConfig, CarouselItem};
use marquee_widgets::visibility::{ObserverConfig, TrackerTree};

use crate::{Error, Result};

/// Settings for every Marquee widget a host builds.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MarqueeConfig {
    pub carousel: CarouselConfig,
    pub observer: ObserverConfig,
}

impl MarqueeConfig {
    /// Load from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let config: Self = toml::from_str(s)?;
        config.checked()
    }

    /// Load from a TOML file on disk.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.checked()
    }

    /// Load from a JSON file on disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&content)
    }

    /// Check every parameter.
    ///
    /// Returns a list of problems. An empty list means the config is valid.
    #[must_use]
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        if self.carousel.display_items == 0 {
            errors.push("carousel.display_items must be > 0".into());
        }

        if self.carousel.autoplay != AutoPlay::Off && self.carousel.autoplay_interval_ms == 0 {
            errors.push("carousel.autoplay_interval_ms must be > 0 while autoplay is on".into());
        }

        for (field, label) in [
            ("left_control", &self.carousel.left_control),
            ("right_control", &self.carousel.right_control),
        ] {
            if label.as_deref().is_some_and(|l| l.trim().is_empty()) {
                errors.push(format!("carousel.{field} must not be blank"));
            }
        }

        if self.observer.thresholds == 0 {
            errors.push("observer.thresholds must be > 0".into());
        }

        errors
    }

    /// Build a carousel over `items` with these settings.
    ///
    /// Item-count checks happen here since the config alone cannot know them.
    pub fn build_carousel<T>(&self, items: Vec<CarouselItem<T>>) -> Result<Carousel<T>> {
        Ok(Carousel::new(items, self.carousel.clone())?)
    }

    /// An empty tracker tree using these observer settings.
    pub fn tracker_tree(&self) -> TrackerTree {
        TrackerTree::with_config(self.observer)
    }

    /// Serialize to pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    fn checked(self) -> Result<Self> {
        let errors = self.validate();
        if errors.is_empty() {
            Ok(self)
        } else {
            Err(Error::Validation(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use marquee_widgets::carousel::CarouselError;

    #[test]
    fn default_is_valid() {
        assert!(MarqueeConfig::default().validate().is_empty());
    }

    #[test]
    fn toml_partial_sections_take_defaults() {
        let config = MarqueeConfig::from_toml_str(
            r#"
            [carousel]
            display_items = 2
            autoplay = "off"
            "#,
        )
        .expect("valid toml");
        assert_eq!(config.carousel.display_items, 2);
        assert_eq!(config.carousel.autoplay, AutoPlay::Off);
        assert_eq!(config.carousel.transition_duration_ms, 300);
        assert_eq!(config.observer, ObserverConfig::default());
    }

    #[test]
    fn empty_documents_are_defaults() {
        assert_eq!(
            MarqueeConfig::from_toml_str("").expect("empty toml"),
            MarqueeConfig::default()
        );
        assert_eq!(
            MarqueeConfig::from_json_str("{}").expect("empty json"),
            MarqueeConfig::default()
        );
    }

    #[test]
    fn json_custom_labels() {
        let config = MarqueeConfig::from_json_str(
            r#"{"carousel":{"left_control":"<","right_control":">","controls":false}}"#,
        )
        .expect("valid json");
        assert_eq!(config.carousel.left_label(), "<");
        assert_eq!(config.carousel.right_label(), ">");
        assert!(!config.carousel.controls);
    }

    #[test]
    fn validate_collects_every_problem() {
        let mut config = MarqueeConfig::default();
        config.carousel.display_items = 0;
        config.carousel.autoplay_interval_ms = 0;
        config.carousel.left_control = Some("  ".into());
        config.observer.thresholds = 0;
        let errors = config.validate();
        assert_eq!(errors.len(), 4);
        assert!(errors[0].contains("display_items"));
        assert!(errors[1].contains("autoplay_interval_ms"));
        assert!(errors[2].contains("left_control"));
        assert!(errors[3].contains("observer.thresholds"));
    }

    #[test]
    fn zero_interval_is_fine_without_autoplay() {
        let config = MarqueeConfig::from_toml_str(
            "[carousel]\nautoplay = \"off\"\nautoplay_interval_ms = 0\n",
        )
        .expect("autoplay off");
        assert_eq!(config.carousel.autoplay_interval_ms, 0);
    }

    #[test]
    fn loaders_reject_invalid_configs() {
        let err = MarqueeConfig::from_json_str(r#"{"carousel":{"display_items":0}}"#)
            .expect_err("zero display items");
        match err {
            Error::Validation(errors) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn malformed_input_reports_parser_errors() {
        assert!(matches!(
            MarqueeConfig::from_toml_str("[carousel\n"),
            Err(Error::Toml(_))
        ));
        assert!(matches!(
            MarqueeConfig::from_json_str("{"),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            MarqueeConfig::from_json_str(r#"{"carousel":{"autoplay":"sideways"}}"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn build_carousel_checks_item_count() {
        let mut config = MarqueeConfig::default();
        config.carousel.display_items = 2;
        let items = vec![CarouselItem::new("a", 1), CarouselItem::new("b", 2)];
        match config.build_carousel(items) {
            Err(Error::Carousel(CarouselError::DisplayItemsNotLessThanItems {
                display_items,
                items,
            })) => {
                assert_eq!(display_items, 2);
                assert_eq!(items, 2);
            }
            other => panic!("expected item-count error, got {other:?}"),
        }
    }

    #[test]
    fn tracker_tree_uses_observer_settings() {
        let config = MarqueeConfig::from_toml_str("[observer]\nthresholds = 5\n").expect("valid");
        let mut tree = config.tracker_tree();
        let root = tree.mount_root("page");
        assert_eq!(
            tree.tracker(root).map(|t| t.is_connected()),
            Some(true)
        );
    }

    #[test]
    fn json_output_loads_back() {
        let mut config = MarqueeConfig::default();
        config.carousel.display_items = 4;
        config.carousel.autoplay = AutoPlay::Left;
        let json = config.to_json().expect("serializable");
        assert_eq!(MarqueeConfig::from_json_str(&json).expect("valid"), config);
    }
}
