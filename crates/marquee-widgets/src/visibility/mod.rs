#![forbid(unsafe_code)]

//! Scroll-position and intersection tracking for nested regions.
//!
//! Each tracked element records how much of it is on screen and how far the
//! viewport has scrolled through it, along with the running maxima of both.
//! Measurements flow downward as a [`VisibilityContext`]: a node sees its own
//! entry and every ancestor's, keyed by tracker id.
//!
//! # Usage
//!
//! ```
//! use marquee_core::event::ViewportEvent;
//! use marquee_core::geometry::{PixelBox, ViewportSize};
//! use marquee_widgets::visibility::{ElementMeasure, Metric, NodeId, TrackerTree};
//!
//! struct Layout;
//!
//! impl ElementMeasure for Layout {
//!     fn viewport(&self) -> ViewportSize {
//!         ViewportSize::new(1280.0, 800.0)
//!     }
//!     fn element_box(&self, _node: NodeId, id: &str) -> Option<PixelBox> {
//!         (id == "donate").then(|| PixelBox::new(0.0, 400.0, 1280.0, 400.0))
//!     }
//! }
//!
//! let mut tree = TrackerTree::new();
//! let page = tree.mount_root("page");
//! let donate = tree.mount(page, "donate").unwrap();
//! tree.dispatch(ViewportEvent::Scroll, &Layout);
//!
//! let ctx = tree.context_for(donate).unwrap();
//! assert_eq!(ctx.get(Metric::VisiblePercent, "donate"), Some(100.0));
//! assert_eq!(ctx.get(Metric::ScrollPercent, "page"), Some(0.0));
//! ```
//!
//! # Invariants
//!
//! 1. Maxima never decrease while a tracker is mounted.
//! 2. Percentages are always within `0..=100`.
//! 3. Unmounting discards a node's measurements and its descendants'.

mod context;
mod metrics;
mod observer;
mod tracker;
mod tree;

pub use context::{Metric, VisibilityContext};
pub use metrics::{ScrollProgress, TrackerMetrics, scroll_progress, visible_percent};
pub use observer::{DEFAULT_THRESHOLDS, IntersectionObserver, ObserverConfig};
pub use tracker::VisibilityTracker;
pub use tree::{ElementMeasure, NodeId, TrackerTree};
