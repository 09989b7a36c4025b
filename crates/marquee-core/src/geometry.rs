#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Two coordinate spaces live here:
//! - [`Rect`] / [`Sides`]: integer cell coordinates used to lay out widgets.
//! - [`PixelBox`] / [`ViewportSize`]: fractional pixel coordinates reported by
//!   a host layout engine, relative to the top-left of the viewport.

/// A rectangle for layout bounds and clipping.
///
/// Uses cell coordinates (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Shrink the rectangle by the given margin.
    pub fn inner(&self, margin: Sides) -> Rect {
        Rect {
            x: self.x.saturating_add(margin.left),
            y: self.y.saturating_add(margin.top),
            width: self.width.saturating_sub(margin.horizontal_sum()),
            height: self.height.saturating_sub(margin.vertical_sum()),
        }
    }

    /// Clip a horizontal span `[left, left + width)` given in signed cell
    /// coordinates to this rectangle's columns.
    ///
    /// Returns `None` when nothing of the span is inside.
    pub fn clip_span(&self, left: i32, width: u16) -> Option<Rect> {
        let start = left.max(i32::from(self.x));
        let end = (left + i32::from(width)).min(i32::from(self.right()));
        if start >= end || self.height == 0 {
            return None;
        }
        // Both bounds lie inside [self.x, self.right()], so they fit in u16.
        Some(Rect::new(
            start as u16,
            self.y,
            (end - start) as u16,
            self.height,
        ))
    }
}

/// Sides for padding/margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Sides {
    /// Create new sides with horizontal values only.
    pub const fn horizontal(val: u16) -> Self {
        Self::new(0, val, 0, val)
    }

    /// Create new sides with specific values.
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

/// Size of the visible viewport in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

impl ViewportSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// An element's bounding box in pixels, relative to the viewport origin.
///
/// `top` is negative once the element's top edge has scrolled above the
/// viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PixelBox {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl PixelBox {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    #[inline]
    pub fn area(&self) -> f64 {
        self.width.max(0.0) * self.height.max(0.0)
    }

    /// Fraction (0.0 to 1.0) of this box that lies inside the viewport.
    ///
    /// A zero-area box reports 1.0 when it sits within the viewport edges
    /// (inclusive) and 0.0 otherwise.
    pub fn intersection_ratio(&self, viewport: ViewportSize) -> f64 {
        let left = self.left.max(0.0);
        let top = self.top.max(0.0);
        let right = self.right().min(viewport.width);
        let bottom = self.bottom().min(viewport.height);

        let area = self.area();
        if area <= 0.0 {
            let inside = left <= right && top <= bottom;
            return if inside { 1.0 } else { 0.0 };
        }
        if left >= right || top >= bottom {
            return 0.0;
        }
        (((right - left) * (bottom - top)) / area).clamp(0.0, 1.0)
    }
}
