#![forbid(unsafe_code)]

//! A single tracked element.

use marquee_core::geometry::{PixelBox, ViewportSize};

use super::context::VisibilityContext;
use super::metrics::{ScrollProgress, TrackerMetrics, scroll_progress};
use super::observer::{IntersectionObserver, ObserverConfig};

/// Measurements for one element plus its intersection observer.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityTracker {
    id: String,
    metrics: TrackerMetrics,
    observer: IntersectionObserver,
}

impl VisibilityTracker {
    /// A tracker with zeroed measurements and a connected observer.
    pub fn new(id: impl Into<String>, config: ObserverConfig) -> Self {
        Self {
            id: id.into(),
            metrics: TrackerMetrics::default(),
            observer: IntersectionObserver::new(config),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn metrics(&self) -> &TrackerMetrics {
        &self.metrics
    }

    pub fn is_connected(&self) -> bool {
        self.observer.is_connected()
    }

    /// Intersection callback from a native observer.
    pub fn on_intersection(&mut self, ratio: f64) {
        if self.observer.is_connected() {
            self.metrics.record_intersection(ratio);
        }
    }

    /// Recompute scroll metrics from the element's current box.
    pub fn on_scroll(&mut self, viewport_height: f64, element: PixelBox) -> ScrollProgress {
        let progress = scroll_progress(viewport_height, element.top, element.height);
        if self.observer.is_connected() {
            self.metrics.record_scroll(progress);
        }
        progress
    }

    /// Recompute everything from geometry: scroll progress always, visibility
    /// when the ratio crossed a threshold.
    ///
    /// Returns `true` if the intersection observer reported.
    pub fn measure(&mut self, viewport: ViewportSize, element: PixelBox) -> bool {
        self.on_scroll(viewport.height, element);
        match self.observer.observe(element.intersection_ratio(viewport)) {
            Some(ratio) => {
                self.metrics.record_intersection(ratio);
                true
            }
            None => false,
        }
    }

    /// Stop listening. Measurements freeze until the tracker is dropped.
    pub fn disconnect(&mut self) {
        self.observer.disconnect();
    }

    /// The context this tracker hands to its children.
    pub fn context(&self, parent: &VisibilityContext) -> VisibilityContext {
        parent.child(&self.id, self.metrics)
    }
}
