#![forbid(unsafe_code)]

//! Core: geometry, injected-clock timers, and viewport events.
//!
//! # Role in Marquee
//! `marquee-core` holds the primitives every widget shares. It has no notion
//! of carousels or trackers; it only knows how to measure boxes, count time
//! that the host hands it, and name the viewport changes a host reports.
//!
//! # Primary responsibilities
//! - **Geometry**: cell rectangles for layout and pixel boxes for visibility.
//! - **Timers**: owned `Timeout` / `Interval` handles advanced by `tick`.
//! - **Events**: `ViewportEvent` for scroll and resize notifications.
//! - **Logging**: feature-gated `tracing` re-exports and JSON initialisation.

pub mod event;
pub mod geometry;
pub mod logging;
pub mod timer;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
