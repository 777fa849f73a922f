#![forbid(unsafe_code)]

//! Geometric primitives in CSS pixels.
//!
//! Unlike terminal-cell grids, anchor measurement in a DOM-like host yields
//! fractional pixel values. All published coordinates are rounded to two
//! decimal places (see [`round2`]) so sub-pixel jitter in repeated
//! measurements never registers as movement.

/// Round a coordinate to two decimal places.
///
/// Two positions whose raw coordinates differ by less than 0.005px in an
/// axis round to the same value and are treated as equal.
#[inline]
#[must_use]
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// A point in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A size in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Create a new size.
    #[inline]
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero (or negative).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A rectangle in viewport coordinates, as a bounding-rect query reports it.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Distance from the viewport top edge.
    pub top: f64,
    /// Distance from the viewport left edge.
    pub left: f64,
    /// Width in pixels.
    pub width: f64,
    /// Height in pixels.
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    #[must_use]
    pub const fn new(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }

    /// Right edge.
    #[inline]
    #[must_use]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Center point of the rectangle.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Check if a point lies inside the rectangle.
    #[inline]
    #[must_use]
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right() && p.y >= self.top && p.y < self.bottom()
    }

    /// The rectangle's size.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

/// An absolute overlay position: `top`/`left` in document coordinates.
///
/// Always constructed through [`Position::rounded`], so comparing two
/// positions with `==` implements the "no redundant update" rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    pub top: f64,
    pub left: f64,
}

impl Position {
    /// Create a position, rounding both coordinates to two decimals.
    #[inline]
    #[must_use]
    pub fn rounded(top: f64, left: f64) -> Self {
        Self {
            top: round2(top),
            left: round2(left),
        }
    }
}
