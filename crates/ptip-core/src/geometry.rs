#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are signed screen pixels with the origin at the top-left of the
//! display. Positions may be negative (an anchor scrolled partly off-screen),
//! extents are expected to be non-negative; the resolver rejects requests that
//! violate that.

use serde::{Deserialize, Serialize};

/// A point in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Measured extent of a laid-out element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    /// Zero size (an element that has not been laid out yet).
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// True if either extent is negative.
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.width < 0 || self.height < 0
    }
}

/// An axis-aligned rectangle in screen pixels.
///
/// `right()` and `bottom()` are exclusive edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: i32,
    /// Top edge (inclusive).
    pub y: i32,
    /// Width in pixels.
    pub width: i32,
    /// Height in pixels.
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at `origin` with the given size.
    #[inline]
    pub const fn from_origin(origin: Point, size: Size) -> Self {
        Self::new(origin.x, origin.y, size.width, size.height)
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Extent of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Horizontal midpoint, truncating odd widths toward the left edge.
    #[inline]
    pub const fn center_x(&self) -> i32 {
        self.x.saturating_add(self.width / 2)
    }

    /// Vertical midpoint, truncating odd heights toward the top edge.
    #[inline]
    pub const fn center_y(&self) -> i32 {
        self.y.saturating_add(self.height / 2)
    }

    /// Check if the rectangle has zero (or negative) area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Smallest rectangle containing both `self` and `other`.
    ///
    /// Empty rectangles do not contribute.
    pub fn union(&self, other: &Rect) -> Rect {
        if self.is_empty() {
            return *other;
        }
        if other.is_empty() {
            return *self;
        }
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());

        Rect {
            x,
            y,
            width: right.saturating_sub(x),
            height: bottom.saturating_sub(y),
        }
    }
}

/// Status bar occupying the top of the display.
///
/// A translucent status bar lets content draw underneath it, so it does not
/// reduce the usable area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusBar {
    /// Height in pixels (0 when the platform does not report one).
    pub height: i32,
    /// Whether the window draws behind the status bar.
    pub translucent: bool,
}

impl StatusBar {
    /// An opaque status bar of the given height.
    pub const fn opaque(height: i32) -> Self {
        Self {
            height,
            translucent: false,
        }
    }

    /// A translucent status bar of the given height.
    pub const fn translucent(height: i32) -> Self {
        Self {
            height,
            translucent: true,
        }
    }

    /// Pixels at the top of the display that content must stay clear of.
    #[inline]
    pub const fn top_inset(&self) -> i32 {
        if self.translucent { 0 } else { self.height }
    }
}

/// The usable screen region a tooltip is placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
pub struct Viewport {
    /// Display width in pixels.
    pub width: i32,
    /// Display height in pixels.
    pub height: i32,
    /// Height of the status-bar area the window content starts below.
    pub top_inset: i32,
}

impl Viewport {
    /// Create a viewport with no top inset.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            top_inset: 0,
        }
    }

    /// Set the top inset directly.
    #[must_use]
    pub const fn with_top_inset(mut self, top_inset: i32) -> Self {
        self.top_inset = top_inset;
        self
    }

    /// Derive the top inset from a status bar.
    #[must_use]
    pub const fn with_status_bar(self, status_bar: StatusBar) -> Self {
        self.with_top_inset(status_bar.top_inset())
    }

    /// Half the display width (truncated).
    #[inline]
    pub const fn half_width(&self) -> i32 {
        self.width / 2
    }

    /// Half the display height (truncated).
    #[inline]
    pub const fn half_height(&self) -> i32 {
        self.height / 2
    }

    /// True when the viewport has no usable area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Left and right edges of a span of `width` centered horizontally.
    #[inline]
    pub const fn centered_span(&self, width: i32) -> (i32, i32) {
        let left = self.width.saturating_sub(width) / 2;
        (left, left.saturating_add(width))
    }

    /// The full display as a rectangle.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }
}
