//! Vertical flip between layout space and item space.
//!
//! Layout state is kept bottom-origin: y = 0 is the bottom edge of the
//! container and y grows upward. Scene items live in top-origin space: y = 0
//! is the top edge and y grows downward. Horizontal coordinates are shared.
//!
//! ```text
//! item_y   = container_height - layout_y
//! layout_y = container_height - item_y
//! ```
//!
//! The mapping is its own inverse, so a single type serves both directions.

use crate::layout::types::{Canvas, Point, Rect};

/// Reflection of the vertical axis about the container's horizontal midline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipTransform {
    /// Height of the container being flipped within
    pub height: f64,
}

impl FlipTransform {
    pub fn new(height: f64) -> Self {
        Self { height }
    }

    pub fn for_canvas(canvas: Canvas) -> Self {
        Self::new(canvas.height_f64())
    }

    /// Map a layout-space point to item space
    pub fn to_item(&self, point: Point) -> Point {
        Point::new(point.x, self.height - point.y)
    }

    /// Map an item-space point back to layout space
    pub fn to_layout(&self, point: Point) -> Point {
        Point::new(point.x, self.height - point.y)
    }

    /// Map a layout-space rect to item space.
    ///
    /// The returned rect's min corner is its top-left corner in item space.
    pub fn rect_to_item(&self, rect: &Rect) -> Rect {
        Rect::new(rect.x, self.height - rect.top(), rect.width, rect.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.001;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn test_midline_is_fixed() {
        let t = FlipTransform::new(1080.0);
        let p = t.to_item(Point::new(960.0, 540.0));
        assert_eq!(p, Point::new(960.0, 540.0));
    }

    #[test]
    fn test_bottom_becomes_top() {
        let t = FlipTransform::for_canvas(Canvas::new(1920, 1080));
        assert_eq!(t.to_item(Point::new(0.0, 0.0)), Point::new(0.0, 1080.0));
        assert_eq!(t.to_item(Point::new(0.0, 1080.0)), Point::new(0.0, 0.0));
    }

    #[test]
    fn test_round_trip() {
        let t = FlipTransform::new(720.0);
        let p = Point::new(12.5, 333.25);
        let back = t.to_layout(t.to_item(p));
        assert!(approx_eq(back.x, p.x));
        assert!(approx_eq(back.y, p.y));
    }

    #[test]
    fn test_rect_to_item() {
        let t = FlipTransform::new(1080.0);
        // 200x100 rect whose bottom edge sits at y=0 in layout space
        let item = t.rect_to_item(&Rect::new(10.0, 0.0, 200.0, 100.0));
        assert_eq!(item, Rect::new(10.0, 980.0, 200.0, 100.0));
    }
}
