#![forbid(unsafe_code)]

//! Threshold-based intersection observer.
//!
//! Mirrors how a browser observer reports: a callback happens on the first
//! observation and afterwards only when the ratio moves into a different
//! threshold bucket. With the default 101 thresholds that is roughly every
//! percentage point.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default number of evenly spaced thresholds (0.00, 0.01, ..., 1.00).
pub const DEFAULT_THRESHOLDS: usize = 101;

/// Observer settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ObserverConfig {
    /// Number of evenly spaced thresholds in `[0, 1]`, at least 1.
    pub thresholds: usize,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            thresholds: DEFAULT_THRESHOLDS,
        }
    }
}

impl ObserverConfig {
    #[must_use]
    pub fn thresholds(mut self, count: usize) -> Self {
        self.thresholds = count;
        self
    }

    /// Threshold values, ascending. A count below 2 yields `[0.0]`.
    pub fn threshold_values(&self) -> Vec<f64> {
        if self.thresholds < 2 {
            return vec![0.0];
        }
        let steps = (self.thresholds - 1) as f64;
        (0..self.thresholds).map(|i| i as f64 / steps).collect()
    }
}

/// Reports intersection ratios when they cross a threshold.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionObserver {
    thresholds: Vec<f64>,
    last_bucket: Option<usize>,
    connected: bool,
}

impl IntersectionObserver {
    pub fn new(config: ObserverConfig) -> Self {
        Self {
            thresholds: config.threshold_values(),
            last_bucket: None,
            connected: true,
        }
    }

    /// Feed a freshly measured ratio.
    ///
    /// Returns the ratio if a callback would fire, `None` otherwise.
    pub fn observe(&mut self, ratio: f64) -> Option<f64> {
        if !self.connected {
            return None;
        }
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        let bucket = self.thresholds.partition_point(|t| *t <= ratio);
        if self.last_bucket == Some(bucket) {
            return None;
        }
        self.last_bucket = Some(bucket);
        Some(ratio)
    }

    /// Stop reporting. Further observations are ignored.
    pub fn disconnect(&mut self) {
        self.connected = false;
        self.last_bucket = None;
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    pub fn threshold_count(&self) -> usize {
        self.thresholds.len()
    }
}

impl Default for IntersectionObserver {
    fn default() -> Self {
        Self::new(ObserverConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_101_thresholds() {
        let values = ObserverConfig::default().threshold_values();
        assert_eq!(values.len(), 101);
        assert_eq!(values[0], 0.0);
        assert_eq!(values[50], 0.5);
        assert_eq!(values[100], 1.0);
        assert_eq!(IntersectionObserver::default().threshold_count(), 101);
    }

    #[test]
    fn degenerate_threshold_counts() {
        assert_eq!(ObserverConfig::default().thresholds(0).threshold_values(), vec![0.0]);
        assert_eq!(ObserverConfig::default().thresholds(1).threshold_values(), vec![0.0]);
        assert_eq!(
            ObserverConfig::default().thresholds(3).threshold_values(),
            vec![0.0, 0.5, 1.0]
        );
    }

    #[test]
    fn first_observation_always_reports() {
        let mut observer = IntersectionObserver::default();
        assert_eq!(observer.observe(0.0), Some(0.0));
    }

    #[test]
    fn reports_only_on_bucket_change() {
        let mut observer = IntersectionObserver::new(ObserverConfig::default().thresholds(3));
        assert_eq!(observer.observe(0.1), Some(0.1));
        assert_eq!(observer.observe(0.3), None);
        assert_eq!(observer.observe(0.6), Some(0.6));
        assert_eq!(observer.observe(0.9), None);
        assert_eq!(observer.observe(1.0), Some(1.0));
        assert_eq!(observer.observe(0.2), Some(0.2));
    }

    #[test]
    fn clamps_out_of_range_ratios() {
        let mut observer = IntersectionObserver::default();
        assert_eq!(observer.observe(1.5), Some(1.0));
        assert_eq!(observer.observe(f64::NAN), Some(0.0));
    }

    #[test]
    fn disconnected_observer_is_silent() {
        let mut observer = IntersectionObserver::default();
        observer.disconnect();
        assert!(!observer.is_connected());
        assert_eq!(observer.observe(0.5), None);
    }
}
