#![forbid(unsafe_code)]

//! Per-tracker measurements and the scroll arithmetic behind them.

/// Where the viewport is relative to a tracked element.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollProgress {
    /// Pixels scrolled through the element, clamped to `[0, total]`.
    pub pixels: f64,
    /// Percent scrolled through the element, `0..=100`.
    pub percent: u8,
}

/// Compute scroll progress through an element.
///
/// The range runs from the element's top edge touching the viewport's bottom
/// edge (0%) to its bottom edge leaving through the viewport's top (100%),
/// so the total distance is `viewport_height + element_height`.
pub fn scroll_progress(viewport_height: f64, element_top: f64, element_height: f64) -> ScrollProgress {
    let total = viewport_height + element_height;
    if total.is_nan() || total <= 0.0 {
        return ScrollProgress::default();
    }
    let pixels = viewport_height - element_top;
    let percent = (100.0 * pixels / total).round().clamp(0.0, 100.0);
    ScrollProgress {
        pixels: pixels.clamp(0.0, total),
        // Clamped to [0, 100] above.
        percent: percent as u8,
    }
}

/// Convert an intersection ratio to an integer percent.
pub fn visible_percent(ratio: f64) -> u8 {
    if ratio.is_nan() {
        return 0;
    }
    (ratio * 100.0).round().clamp(0.0, 100.0) as u8
}

/// Live measurements for one tracked element.
///
/// Maxima only ever grow for the lifetime of the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TrackerMetrics {
    pub visible_percent: u8,
    pub scroll_percent: u8,
    pub max_visible_percent: u8,
    pub max_scroll_percent: u8,
    pub pixels_scrolled: f64,
    pub max_pixels_scrolled: f64,
}

impl TrackerMetrics {
    /// Record an intersection callback.
    pub fn record_intersection(&mut self, ratio: f64) {
        let percent = visible_percent(ratio);
        self.visible_percent = percent;
        self.max_visible_percent = self.max_visible_percent.max(percent);
    }

    /// Record a scroll or resize recomputation.
    pub fn record_scroll(&mut self, progress: ScrollProgress) {
        self.scroll_percent = progress.percent;
        self.pixels_scrolled = progress.pixels;
        self.max_scroll_percent = self.max_scroll_percent.max(progress.percent);
        self.max_pixels_scrolled = self.max_pixels_scrolled.max(progress.pixels);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_progress_entering_is_zero() {
        let p = scroll_progress(800.0, 800.0, 400.0);
        assert_eq!(p.percent, 0);
        assert_eq!(p.pixels, 0.0);
    }

    #[test]
    fn scroll_progress_scrolled_past_is_full() {
        let p = scroll_progress(800.0, -400.0, 400.0);
        assert_eq!(p.percent, 100);
        assert_eq!(p.pixels, 1200.0);
    }

    #[test]
    fn scroll_progress_midway() {
        let p = scroll_progress(800.0, 200.0, 400.0);
        assert_eq!(p.percent, 50);
        assert_eq!(p.pixels, 600.0);
    }

    #[test]
    fn scroll_progress_clamps_outside_range() {
        let below = scroll_progress(800.0, 2000.0, 400.0);
        assert_eq!(below.percent, 0);
        assert_eq!(below.pixels, 0.0);

        let above = scroll_progress(800.0, -5000.0, 400.0);
        assert_eq!(above.percent, 100);
        assert_eq!(above.pixels, 1200.0);
    }

    #[test]
    fn scroll_progress_zero_total() {
        assert_eq!(scroll_progress(0.0, 0.0, 0.0), ScrollProgress::default());
    }

    #[test]
    fn visible_percent_rounds_and_clamps() {
        assert_eq!(visible_percent(0.0), 0);
        assert_eq!(visible_percent(0.424), 42);
        assert_eq!(visible_percent(0.426), 43);
        assert_eq!(visible_percent(1.0), 100);
        assert_eq!(visible_percent(1.7), 100);
        assert_eq!(visible_percent(-0.2), 0);
        assert_eq!(visible_percent(f64::NAN), 0);
    }

    #[test]
    fn maxima_never_decrease() {
        let mut m = TrackerMetrics::default();
        m.record_intersection(0.6);
        m.record_intersection(0.2);
        assert_eq!(m.visible_percent, 20);
        assert_eq!(m.max_visible_percent, 60);

        m.record_scroll(scroll_progress(800.0, 200.0, 400.0));
        m.record_scroll(scroll_progress(800.0, 700.0, 400.0));
        assert_eq!(m.scroll_percent, 8);
        assert_eq!(m.max_scroll_percent, 50);
        assert_eq!(m.pixels_scrolled, 100.0);
        assert_eq!(m.max_pixels_scrolled, 600.0);
    }
}
