// ABOUTME: Viewport geometry types used by bounding-box queries.
// ABOUTME: Provides Rect (edge coordinates) and Point (left/top).

use serde::Serialize;

/// A point in viewport coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Point {
    pub left: f64,
    pub top: f64,
}

impl Point {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// An axis-aligned box described by its edges, like `DOMRect`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Builds a rect from its origin and size.
    pub fn from_origin_size(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self::new(left, top, left + width, top + height)
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// True when `left` lies within the horizontal span, edges included.
    pub fn spans_x(&self, left: f64) -> bool {
        left >= self.left && left <= self.right
    }

    /// True when `top` lies within the vertical span, edges included.
    pub fn spans_y(&self, top: f64) -> bool {
        top >= self.top && top <= self.bottom
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Point) -> bool {
        self.spans_x(point.left) && self.spans_y(point.top)
    }
}
