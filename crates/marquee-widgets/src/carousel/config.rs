#![forbid(unsafe_code)]

//! Carousel configuration.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use web_time::Duration;

use super::{CarouselError, Direction};

/// Default glyph for the "previous" control.
pub const DEFAULT_LEFT_CONTROL: &str = "‹";
/// Default glyph for the "next" control.
pub const DEFAULT_RIGHT_CONTROL: &str = "›";

/// Automatic advancement setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AutoPlay {
    /// Never advance on a timer.
    Off,
    /// Advance towards the previous item.
    Left,
    /// Advance towards the next item (default).
    #[default]
    Right,
}

impl AutoPlay {
    /// The direction autoplay moves in, if enabled.
    #[must_use]
    pub const fn direction(self) -> Option<Direction> {
        match self {
            Self::Off => None,
            Self::Left => Some(Direction::Left),
            Self::Right => Some(Direction::Right),
        }
    }
}

/// Configuration for a [`Carousel`](super::Carousel).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CarouselConfig {
    /// Items visible at once.
    pub display_items: usize,
    /// Automatic advancement.
    pub autoplay: AutoPlay,
    /// Autoplay period in milliseconds.
    pub autoplay_interval_ms: u64,
    /// Slide animation length in milliseconds.
    pub transition_duration_ms: u64,
    /// Whether the previous/next controls are shown.
    pub controls: bool,
    /// Custom label for the "previous" control.
    pub left_control: Option<String>,
    /// Custom label for the "next" control.
    pub right_control: Option<String>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            display_items: 1,
            autoplay: AutoPlay::Right,
            autoplay_interval_ms: 3000,
            transition_duration_ms: 300,
            controls: true,
            left_control: None,
            right_control: None,
        }
    }
}

impl CarouselConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the number of items visible at once.
    #[must_use]
    pub fn display_items(mut self, n: usize) -> Self {
        self.display_items = n;
        self
    }

    /// Set the autoplay mode.
    #[must_use]
    pub fn autoplay(mut self, autoplay: AutoPlay) -> Self {
        self.autoplay = autoplay;
        self
    }

    /// Set the autoplay period in milliseconds.
    #[must_use]
    pub fn autoplay_interval_ms(mut self, ms: u64) -> Self {
        self.autoplay_interval_ms = ms;
        self
    }

    /// Set the slide animation length in milliseconds.
    #[must_use]
    pub fn transition_duration_ms(mut self, ms: u64) -> Self {
        self.transition_duration_ms = ms;
        self
    }

    /// Show or hide the navigation controls.
    #[must_use]
    pub fn controls(mut self, show: bool) -> Self {
        self.controls = show;
        self
    }

    /// Use custom labels for the navigation controls.
    #[must_use]
    pub fn control_labels(mut self, left: impl Into<String>, right: impl Into<String>) -> Self {
        self.left_control = Some(left.into());
        self.right_control = Some(right.into());
        self
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn transition_duration(&self) -> Duration {
        Duration::from_millis(self.transition_duration_ms)
    }

    pub fn left_label(&self) -> &str {
        self.left_control.as_deref().unwrap_or(DEFAULT_LEFT_CONTROL)
    }

    pub fn right_label(&self) -> &str {
        self.right_control.as_deref().unwrap_or(DEFAULT_RIGHT_CONTROL)
    }

    /// Check the settings that do not depend on the item list.
    pub fn validate(&self) -> Result<(), CarouselError> {
        if self.display_items == 0 {
            return Err(CarouselError::ZeroDisplayItems);
        }
        if self.autoplay != AutoPlay::Off && self.autoplay_interval_ms == 0 {
            return Err(CarouselError::ZeroAutoplayInterval);
        }
        Ok(())
    }
}
