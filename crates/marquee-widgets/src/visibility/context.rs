#![forbid(unsafe_code)]

//! Aggregated tracker measurements handed from parent to child.

use std::collections::BTreeMap;

use super::metrics::TrackerMetrics;

/// One of the six per-tracker values exposed through a context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Metric {
    VisiblePercent,
    ScrollPercent,
    MaxVisiblePercent,
    MaxScrollPercent,
    PixelsScrolled,
    MaxPixelsScrolled,
}

impl Metric {
    pub const ALL: [Metric; 6] = [
        Metric::VisiblePercent,
        Metric::ScrollPercent,
        Metric::MaxVisiblePercent,
        Metric::MaxScrollPercent,
        Metric::PixelsScrolled,
        Metric::MaxPixelsScrolled,
    ];

    /// Read this metric from a tracker's measurements.
    pub fn read(self, metrics: &TrackerMetrics) -> f64 {
        match self {
            Self::VisiblePercent => f64::from(metrics.visible_percent),
            Self::ScrollPercent => f64::from(metrics.scroll_percent),
            Self::MaxVisiblePercent => f64::from(metrics.max_visible_percent),
            Self::MaxScrollPercent => f64::from(metrics.max_scroll_percent),
            Self::PixelsScrolled => metrics.pixels_scrolled,
            Self::MaxPixelsScrolled => metrics.max_pixels_scrolled,
        }
    }
}

/// Flat, id-keyed view of every tracker along a chain.
///
/// Built parent first: a node's context is its parent's context plus its own
/// entry. A descendant reusing an ancestor's id replaces that entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibilityContext {
    entries: BTreeMap<String, TrackerMetrics>,
}

impl VisibilityContext {
    /// Context with no trackers.
    pub fn root() -> Self {
        Self::default()
    }

    /// This context extended with one tracker's entry.
    #[must_use]
    pub fn child(&self, id: &str, metrics: TrackerMetrics) -> Self {
        let mut next = self.clone();
        next.entries.insert(id.to_owned(), metrics);
        next
    }

    /// Union of two contexts; `other` wins where ids collide.
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        let mut next = self.clone();
        next.entries
            .extend(other.entries.iter().map(|(k, v)| (k.clone(), *v)));
        next
    }

    pub fn metrics(&self, id: &str) -> Option<&TrackerMetrics> {
        self.entries.get(id)
    }

    pub fn get(&self, metric: Metric, id: &str) -> Option<f64> {
        self.entries.get(id).map(|m| metric.read(m))
    }

    /// Project one metric for every tracker in the context.
    pub fn map(&self, metric: Metric) -> BTreeMap<&str, f64> {
        self.entries
            .iter()
            .map(|(id, m)| (id.as_str(), metric.read(m)))
            .collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(visible: u8) -> TrackerMetrics {
        TrackerMetrics {
            visible_percent: visible,
            max_visible_percent: visible,
            ..TrackerMetrics::default()
        }
    }

    #[test]
    fn child_adds_entry_without_touching_parent() {
        let parent = VisibilityContext::root().child("page", metrics(10));
        let child = parent.child("hero", metrics(80));
        assert_eq!(parent.len(), 1);
        assert_eq!(child.len(), 2);
        assert_eq!(child.get(Metric::VisiblePercent, "page"), Some(10.0));
        assert_eq!(child.get(Metric::VisiblePercent, "hero"), Some(80.0));
    }

    #[test]
    fn descendant_wins_on_id_reuse() {
        let ctx = VisibilityContext::root()
            .child("x", metrics(10))
            .child("x", metrics(90));
        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.get(Metric::MaxVisiblePercent, "x"), Some(90.0));
    }

    #[test]
    fn siblings_are_isolated_until_merged() {
        let parent = VisibilityContext::root().child("p", metrics(0));
        let a = parent.child("a", metrics(30));
        let b = parent.child("b", metrics(70));
        assert!(!a.contains("b"));
        assert!(!b.contains("a"));

        let both = a.merge(&b);
        assert_eq!(both.ids().collect::<Vec<_>>(), vec!["a", "b", "p"]);
        assert_eq!(both.get(Metric::VisiblePercent, "a"), Some(30.0));
        assert_eq!(both.get(Metric::VisiblePercent, "b"), Some(70.0));
    }

    #[test]
    fn map_projects_every_entry() {
        let ctx = VisibilityContext::root()
            .child("a", metrics(1))
            .child("b", metrics(2));
        let map = ctx.map(Metric::VisiblePercent);
        assert_eq!(map.get("a"), Some(&1.0));
        assert_eq!(map.get("b"), Some(&2.0));
        assert!(ctx.map(Metric::PixelsScrolled).values().all(|v| *v == 0.0));
    }

    #[test]
    fn missing_id_is_none() {
        let ctx = VisibilityContext::root();
        assert!(ctx.is_empty());
        assert_eq!(ctx.get(Metric::ScrollPercent, "nope"), None);
        assert!(ctx.metrics("nope").is_none());
    }

    #[test]
    fn every_metric_reads_its_field() {
        let m = TrackerMetrics {
            visible_percent: 1,
            scroll_percent: 2,
            max_visible_percent: 3,
            max_scroll_percent: 4,
            pixels_scrolled: 5.0,
            max_pixels_scrolled: 6.0,
        };
        let values: Vec<f64> = Metric::ALL.iter().map(|metric| metric.read(&m)).collect();
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
    }
}
