#![forbid(unsafe_code)]

//! Render output of a carousel: the windowed strip and its cell layout.

use marquee_core::geometry::{Rect, Sides};
use unicode_width::UnicodeWidthStr;
use web_time::Duration;

/// Horizontal shift of the strip, in item widths.
///
/// The strip holds `display_items + 2` entries. At rest it is shifted by one
/// item so the left overscan entry is hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StripOffset(u16);

impl StripOffset {
    /// Revealing the left overscan item.
    pub const LEFT: Self = Self(0);
    /// At rest.
    pub const IDLE: Self = Self(1);
    /// Revealing the right overscan item.
    pub const RIGHT: Self = Self(2);

    /// Offset in item widths.
    #[inline]
    pub const fn items(self) -> u16 {
        self.0
    }

    /// Offset as a fraction of the container width.
    pub fn fraction(self, display_items: usize) -> f64 {
        if display_items == 0 {
            return 0.0;
        }
        f64::from(self.0) / display_items as f64
    }
}

/// One entry of the rendered strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot<'a, T> {
    /// Index into the doubled working set.
    pub index: usize,
    /// Unique id of the working-set entry.
    pub id: &'a str,
    /// Index of the caller's item this entry shows.
    pub source: usize,
    pub content: &'a T,
}

/// Labels of the navigation controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls<'a> {
    pub left: &'a str,
    pub right: &'a str,
}

/// Snapshot of what a carousel shows right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarouselView<'a, T> {
    /// `display_items + 2` entries, left overscan first.
    pub slots: Vec<Slot<'a, T>>,
    pub offset: StripOffset,
    /// True while a slide is in flight; the snap back after it is instant.
    pub animated: bool,
    pub transition_duration: Duration,
    pub display_items: usize,
    /// `None` when controls are hidden.
    pub controls: Option<Controls<'a>>,
}

/// Cell rectangles for a [`CarouselView`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CarouselLayout {
    pub left_control: Option<Rect>,
    pub right_control: Option<Rect>,
    /// `(position in view.slots, clipped rect)` for every strip entry that
    /// is at least partly visible.
    pub slots: Vec<(usize, Rect)>,
    /// Width of one item in cells.
    pub slot_width: u16,
}

impl<T> CarouselView<'_, T> {
    /// Entries currently inside the visible window once the strip settles.
    pub fn visible(&self) -> &[Slot<'_, T>] {
        let start = usize::from(self.offset.items()).min(self.slots.len());
        let end = (start + self.display_items).min(self.slots.len());
        &self.slots[start..end]
    }

    /// Lay the strip out in `area`.
    ///
    /// Controls take a column on each side sized to their label. The rest is
    /// split evenly into `display_items` slots and the strip is shifted left
    /// by `offset` slots, clipping anything outside.
    pub fn layout(&self, area: Rect) -> CarouselLayout {
        if area.is_empty() || self.display_items == 0 {
            return CarouselLayout::default();
        }

        let mut out = CarouselLayout::default();
        let mut strip = area;
        if let Some(controls) = self.controls {
            let width = control_width(controls.left).max(control_width(controls.right));
            if width.saturating_mul(2) < area.width {
                out.left_control = Some(Rect::new(area.x, area.y, width, area.height));
                out.right_control = Some(Rect::new(
                    area.right() - width,
                    area.y,
                    width,
                    area.height,
                ));
                strip = area.inner(Sides::horizontal(width));
            }
        }

        let count = u16::try_from(self.display_items).unwrap_or(u16::MAX);
        let slot_width = strip.width / count;
        out.slot_width = slot_width;
        if slot_width == 0 {
            return out;
        }

        let shift = i32::from(self.offset.items()) * i32::from(slot_width);
        let origin = i32::from(strip.x) - shift;
        for pos in 0..self.slots.len() {
            let left = origin + pos as i32 * i32::from(slot_width);
            if let Some(rect) = strip.clip_span(left, slot_width) {
                out.slots.push((pos, rect));
            }
        }
        out
    }
}

fn control_width(label: &str) -> u16 {
    u16::try_from(label.width()).unwrap_or(u16::MAX).max(1)
}
