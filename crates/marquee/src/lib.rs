#![forbid(unsafe_code)]

//! Marquee public facade crate.
//!
//! Re-exports the carousel and visibility widgets together with the geometry
//! and timing types they are driven by, plus a config loader and a prelude
//! for day-to-day use.
//!
//! ```
//! use marquee::prelude::*;
//!
//! let items = vec![
//!     CarouselItem::new("a", "Alpha"),
//!     CarouselItem::new("b", "Beta"),
//!     CarouselItem::new("c", "Gamma"),
//! ];
//! let mut carousel = Carousel::new(items, CarouselConfig::new().autoplay(AutoPlay::Off))?;
//! carousel.move_right();
//! carousel.tick(Duration::from_millis(300));
//! assert_eq!(carousel.view().visible()[0].content, &"Beta");
//! # Ok::<(), marquee::Error>(())
//! ```

#[cfg(feature = "config")]
pub mod config;
mod error;

pub use error::{Error, Result};

// --- Core re-exports -------------------------------------------------------

pub use marquee_core::event::ViewportEvent;
pub use marquee_core::geometry::{PixelBox, Rect, Sides, ViewportSize};
pub use marquee_core::timer::{Interval, Timeout};

#[cfg(feature = "tracing-json")]
pub use marquee_core::logging::init_json_logging;

// --- Widget re-exports -----------------------------------------------------

pub use marquee_widgets::carousel::{
    AutoPlay, Carousel, CarouselConfig, CarouselError, CarouselEvent, CarouselItem,
    CarouselLayout, CarouselPhase, CarouselView, Direction, Origin,
};
pub use marquee_widgets::visibility::{
    ElementMeasure, Metric, NodeId, ObserverConfig, TrackerMetrics, TrackerTree,
    VisibilityContext, VisibilityTracker,
};

#[cfg(feature = "config")]
pub use config::MarqueeConfig;

pub mod prelude {
    //! Common imports for hosts driving Marquee widgets.

    pub use crate::{
        AutoPlay, Carousel, CarouselConfig, CarouselEvent, CarouselItem, Direction,
        ElementMeasure, Error, Metric, NodeId, Origin, PixelBox, Rect, Result, TrackerTree,
        ViewportEvent, ViewportSize, VisibilityContext,
    };

    #[cfg(feature = "config")]
    pub use crate::MarqueeConfig;

    pub use web_time::Duration;
}
