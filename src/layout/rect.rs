//! The normalized anchor/pivot rectangle and its forward math.
//!
//! A [`LayoutRect`] describes an element relative to its container:
//!
//! - `anchor_min`/`anchor_max` pick the *anchor box*, a sub-rectangle of the
//!   container in normalized coordinates. Equal anchors pin the element to a
//!   point; different anchors make it stretch with the container on that axis.
//! - `pivot` is the normalized reference point inside the element itself.
//! - `anchored_pos` offsets the pivot from the anchor box's pivot-weighted
//!   point.
//! - `size_delta` is added to the anchor box size. On a fixed axis the box
//!   has zero extent, so `size_delta` is the literal size.
//!
//! All coordinates are bottom-origin: the vertical axis grows upward.
//!
//! ## Forward formula
//!
//! ```text
//! box_min     = container * anchor_min
//! box_size    = container * anchor_max - box_min
//! size        = max(MIN_SIZE, box_size + size_delta)
//! anchor_pt   = box_min + box_size * pivot
//! rect_min    = anchor_pt + anchored_pos - size * pivot
//! ```
//!
//! The target adapter inverts this exactly when it reconstructs a
//! `LayoutRect` from live item geometry.

use super::types::{Canvas, Point, Rect, Size};

/// Smallest width or height an element can resolve to
pub const MIN_SIZE: f64 = 1.0;

/// Normalized layout state of a single element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRect {
    pub anchor_min: Point,
    pub anchor_max: Point,
    pub pivot: Point,
    pub anchored_pos: Point,
    pub size_delta: Point,
}

impl Default for LayoutRect {
    /// Centered, non-stretching 100x100 element
    fn default() -> Self {
        Self {
            anchor_min: Point::splat(0.5),
            anchor_max: Point::splat(0.5),
            pivot: Point::splat(0.5),
            anchored_pos: Point::zero(),
            size_delta: Point::splat(100.0),
        }
    }
}

impl LayoutRect {
    pub fn new() -> Self {
        Self::default()
    }

    /// Centered element of the given size
    pub fn centered(size: Size) -> Self {
        Self {
            size_delta: Point::new(size.width, size.height),
            ..Self::default()
        }
    }

    pub fn with_anchors(mut self, min: Point, max: Point) -> Self {
        self.anchor_min = min;
        self.anchor_max = max;
        self
    }

    pub fn with_pivot(mut self, pivot: Point) -> Self {
        self.pivot = pivot;
        self
    }

    pub fn with_anchored_pos(mut self, pos: Point) -> Self {
        self.anchored_pos = pos;
        self
    }

    pub fn with_size_delta(mut self, delta: Point) -> Self {
        self.size_delta = delta;
        self
    }

    pub fn is_stretch_x(&self) -> bool {
        self.anchor_min.x != self.anchor_max.x
    }

    pub fn is_stretch_y(&self) -> bool {
        self.anchor_min.y != self.anchor_max.y
    }

    /// The anchor box in container units
    pub fn anchor_box(&self, canvas: Canvas) -> Rect {
        let (w, h) = (canvas.width_f64(), canvas.height_f64());
        let x0 = w * self.anchor_min.x;
        let y0 = h * self.anchor_min.y;
        let x1 = w * self.anchor_max.x;
        let y1 = h * self.anchor_max.y;
        Rect::new(x0, y0, x1 - x0, y1 - y0)
    }

    /// Pivot-weighted point of the anchor box; `anchored_pos` is measured from here
    pub fn anchor_pivot_point(&self, canvas: Canvas) -> Point {
        self.anchor_box(canvas).point_at(self.pivot)
    }

    /// Final rectangle in container space (bottom-origin)
    pub fn calculate_final_rect(&self, canvas: Canvas) -> Rect {
        let anchor_box = self.anchor_box(canvas);

        let width = MIN_SIZE.max(anchor_box.width + self.size_delta.x);
        let height = MIN_SIZE.max(anchor_box.height + self.size_delta.y);

        let anchor_pt = anchor_box.point_at(self.pivot);

        Rect::new(
            anchor_pt.x + self.anchored_pos.x - width * self.pivot.x,
            anchor_pt.y + self.anchored_pos.y - height * self.pivot.y,
            width,
            height,
        )
    }

    /// The pivot point of the final rectangle in container space
    pub fn pivot_world(&self, canvas: Canvas) -> Point {
        self.calculate_final_rect(canvas).point_at(self.pivot)
    }

    /// Effective width for a container of width `parent_width`
    pub fn width(&self, parent_width: f64) -> f64 {
        let anchor_width = parent_width * (self.anchor_max.x - self.anchor_min.x);
        MIN_SIZE.max(anchor_width + self.size_delta.x)
    }

    /// Effective height for a container of height `parent_height`
    pub fn height(&self, parent_height: f64) -> f64 {
        let anchor_height = parent_height * (self.anchor_max.y - self.anchor_min.y);
        MIN_SIZE.max(anchor_height + self.size_delta.y)
    }

    /// Effective size for `canvas`
    pub fn size(&self, canvas: Canvas) -> Size {
        Size::new(
            self.width(canvas.width_f64()),
            self.height(canvas.height_f64()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 0.001;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    fn hd() -> Canvas {
        Canvas::new(1920, 1080)
    }

    #[test]
    fn test_default_is_centered_100() {
        let rect = LayoutRect::default().calculate_final_rect(hd());
        assert_eq!(rect, Rect::new(910.0, 490.0, 100.0, 100.0));
    }

    #[test]
    fn test_centered_final_rect() {
        let rt = LayoutRect::centered(Size::new(200.0, 100.0));
        let rect = rt.calculate_final_rect(hd());
        assert_eq!(rect, Rect::new(860.0, 490.0, 200.0, 100.0));
        assert_eq!(rt.pivot_world(hd()), Point::new(960.0, 540.0));
    }

    #[test]
    fn test_top_left_anchor() {
        let rt = LayoutRect::new()
            .with_anchors(Point::new(0.0, 1.0), Point::new(0.0, 1.0))
            .with_pivot(Point::new(0.0, 1.0))
            .with_anchored_pos(Point::new(10.0, -20.0))
            .with_size_delta(Point::new(300.0, 200.0));
        let rect = rt.calculate_final_rect(hd());

        // Top edge sits 20 below the container top, left edge 10 in
        assert!(approx_eq(rect.x, 10.0), "x: got {}", rect.x);
        assert!(approx_eq(rect.top(), 1060.0), "top: got {}", rect.top());
        assert!(approx_eq(rect.width, 300.0));
        assert!(approx_eq(rect.height, 200.0));
    }

    #[test]
    fn test_full_stretch_fills_container() {
        let rt = LayoutRect::new()
            .with_anchors(Point::zero(), Point::splat(1.0))
            .with_size_delta(Point::zero());
        assert!(rt.is_stretch_x());
        assert!(rt.is_stretch_y());
        assert_eq!(rt.calculate_final_rect(hd()), Rect::new(0.0, 0.0, 1920.0, 1080.0));
    }

    #[test]
    fn test_stretch_with_negative_delta_insets() {
        let rt = LayoutRect::new()
            .with_anchors(Point::zero(), Point::splat(1.0))
            .with_size_delta(Point::new(-40.0, -20.0));
        let rect = rt.calculate_final_rect(hd());
        assert!(approx_eq(rect.x, 20.0));
        assert!(approx_eq(rect.y, 10.0));
        assert!(approx_eq(rect.width, 1880.0));
        assert!(approx_eq(rect.height, 1060.0));
    }

    #[test]
    fn test_size_floor() {
        let rt = LayoutRect::new().with_size_delta(Point::new(-500.0, 0.0));
        let rect = rt.calculate_final_rect(hd());
        assert_eq!(rect.width, MIN_SIZE);
        assert_eq!(rect.height, MIN_SIZE);

        let inverted = LayoutRect::new()
            .with_anchors(Point::splat(1.0), Point::zero())
            .with_size_delta(Point::zero());
        let rect = inverted.calculate_final_rect(hd());
        assert_eq!(rect.width, MIN_SIZE);
        assert_eq!(rect.height, MIN_SIZE);
    }

    #[test]
    fn test_width_height_match_final_rect() {
        let rt = LayoutRect::new()
            .with_anchors(Point::new(0.25, 0.0), Point::new(0.75, 0.5))
            .with_size_delta(Point::new(15.0, -5.0));
        let rect = rt.calculate_final_rect(hd());
        assert!(approx_eq(rt.width(1920.0), rect.width));
        assert!(approx_eq(rt.height(1080.0), rect.height));
        assert_eq!(rt.size(hd()), rect.size());
    }

    #[test]
    fn test_pivot_world_is_anchor_point_plus_offset() {
        let rt = LayoutRect::new()
            .with_anchors(Point::new(1.0, 0.0), Point::new(1.0, 0.0))
            .with_pivot(Point::new(0.8, 0.1))
            .with_anchored_pos(Point::new(-30.0, 45.0))
            .with_size_delta(Point::new(120.0, 60.0));
        let anchor_pt = rt.anchor_pivot_point(hd());
        let world = rt.pivot_world(hd());
        assert!(approx_eq(world.x, anchor_pt.x - 30.0));
        assert!(approx_eq(world.y, anchor_pt.y + 45.0));
    }
}
