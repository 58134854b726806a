//! Core geometric types for the layout model

use serde::{Deserialize, Serialize};

/// A 2D point or vector
///
/// Used for positions as well as for normalized quantities such as anchors,
/// pivots and scale factors.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// A point with both components set to `v`
    pub fn splat(v: f64) -> Self {
        Self::new(v, v)
    }

    pub fn zero() -> Self {
        Self::splat(0.0)
    }
}

/// A width/height pair in absolute units
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// An axis-aligned rectangle given by its min corner and size
///
/// In layout space the min corner is the bottom-left corner, since the
/// vertical axis grows upward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Max y-coordinate (the top edge in layout space)
    pub fn top(&self) -> f64 {
        self.y + self.height
    }

    /// Point at normalized coordinates `(u, v)` inside the rectangle
    pub fn point_at(&self, normalized: Point) -> Point {
        Point::new(
            self.x + self.width * normalized.x,
            self.y + self.height * normalized.y,
        )
    }
}

/// Dimensions of the container a layout is resolved against
///
/// Supplied by the caller on every call; the layout code never queries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width_f64(&self) -> f64 {
        f64::from(self.width)
    }

    pub fn height_f64(&self) -> f64 {
        f64::from(self.height)
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(1920, 1080)
    }
}
