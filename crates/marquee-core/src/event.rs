#![forbid(unsafe_code)]

//! Viewport events delivered by the host.

use crate::geometry::ViewportSize;

/// A change to the viewport that invalidates scroll-derived measurements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewportEvent {
    /// The document scrolled. Element boxes must be re-measured.
    Scroll,
    /// The viewport changed size.
    Resize(ViewportSize),
}

impl ViewportEvent {
    /// Short stable name, used in logs.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Scroll => "scroll",
            Self::Resize(_) => "resize",
        }
    }
}
