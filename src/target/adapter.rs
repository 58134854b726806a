//! Applying layouts to items and reconstructing them from live geometry.
//!
//! ## Apply
//!
//! The final rect and pivot point are computed in layout space, the pivot is
//! flipped into item space, the pivot is quantized to the item's alignment
//! flags and the size is written through a stretch bounds box. The ten
//! normalized fields are then persisted in the item's settings store.
//!
//! ## Load
//!
//! Anchors and pivot come from the settings store when present, otherwise the
//! pivot is inferred from the alignment flags and the anchors default to the
//! container center. `anchored_pos` and `size_delta` are always recomputed
//! from the live position and size: the host may have moved or resized the
//! item since the last apply, and stored offsets would then disagree with
//! what is on screen.
//!
//! Load inverts the forward formula exactly, so `load(apply(m))` reproduces
//! `m.anchored_pos` and `m.size_delta` as long as anchors and pivot survive
//! the trip.

use log::{debug, trace};

use crate::layout::{Canvas, FlipTransform, LayoutConfig, LayoutRect, Point, Size};

use super::{Alignment, BoundsType, PositionableItem};

/// Keys under which normalized layout fields are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutKey {
    AnchorMinX,
    AnchorMinY,
    AnchorMaxX,
    AnchorMaxY,
    PivotX,
    PivotY,
    AnchoredPosX,
    AnchoredPosY,
    SizeDeltaX,
    SizeDeltaY,
}

impl LayoutKey {
    pub const ALL: [LayoutKey; 10] = [
        Self::AnchorMinX,
        Self::AnchorMinY,
        Self::AnchorMaxX,
        Self::AnchorMaxY,
        Self::PivotX,
        Self::PivotY,
        Self::AnchoredPosX,
        Self::AnchoredPosY,
        Self::SizeDeltaX,
        Self::SizeDeltaY,
    ];

    /// Presence of this key marks an item as carrying saved layout state
    pub const SENTINEL: LayoutKey = Self::AnchorMinX;

    pub fn as_str(self) -> &'static str {
        match self {
            Self::AnchorMinX => "anchorMinX",
            Self::AnchorMinY => "anchorMinY",
            Self::AnchorMaxX => "anchorMaxX",
            Self::AnchorMaxY => "anchorMaxY",
            Self::PivotX => "pivotX",
            Self::PivotY => "pivotY",
            Self::AnchoredPosX => "anchoredPosX",
            Self::AnchoredPosY => "anchoredPosY",
            Self::SizeDeltaX => "sizeDeltaX",
            Self::SizeDeltaY => "sizeDeltaY",
        }
    }

    /// The field of `rect` stored under this key
    pub fn value(self, rect: &LayoutRect) -> f64 {
        match self {
            Self::AnchorMinX => rect.anchor_min.x,
            Self::AnchorMinY => rect.anchor_min.y,
            Self::AnchorMaxX => rect.anchor_max.x,
            Self::AnchorMaxY => rect.anchor_max.y,
            Self::PivotX => rect.pivot.x,
            Self::PivotY => rect.pivot.y,
            Self::AnchoredPosX => rect.anchored_pos.x,
            Self::AnchoredPosY => rect.anchored_pos.y,
            Self::SizeDeltaX => rect.size_delta.x,
            Self::SizeDeltaY => rect.size_delta.y,
        }
    }
}

/// Current on-screen size of an item.
///
/// The bounds box wins whenever a bounds mode is active; otherwise the size
/// is the intrinsic size times scale.
pub fn effective_size<I: PositionableItem + ?Sized>(item: &I) -> Size {
    if item.bounds_type() != BoundsType::None {
        return item.bounds();
    }
    let intrinsic = item.intrinsic_size();
    let scale = item.scale();
    Size::new(intrinsic.width * scale.x, intrinsic.height * scale.y)
}

/// Write `rect` onto `item` and persist its normalized fields
pub fn apply_to_item<I: PositionableItem + ?Sized>(rect: &LayoutRect, item: &mut I, canvas: Canvas) {
    let final_rect = rect.calculate_final_rect(canvas);
    let pivot_world = final_rect.point_at(rect.pivot);
    let position = FlipTransform::for_canvas(canvas).to_item(pivot_world);
    let alignment = Alignment::from_pivot(rect.pivot);

    trace!(
        "apply: rect=({:.2}, {:.2}, {:.2}x{:.2}) pos=({:.2}, {:.2}) align={}",
        final_rect.x,
        final_rect.y,
        final_rect.width,
        final_rect.height,
        position.x,
        position.y,
        alignment
    );

    item.set_alignment(alignment);
    item.set_position(position);

    // Bounds keep the size independent of the content's aspect ratio
    item.set_bounds_type(BoundsType::Stretch);
    item.set_bounds_alignment(Alignment::CENTER);
    item.set_bounds(final_rect.size());

    save_to_item(rect, item);
}

/// Apply to an optional item; absent items are ignored
pub fn apply<I: PositionableItem + ?Sized>(rect: &LayoutRect, item: Option<&mut I>, canvas: Canvas) {
    if let Some(item) = item {
        apply_to_item(rect, item, canvas);
    }
}

/// Persist the ten normalized fields of `rect`.
///
/// Items without a settings store are left untouched.
pub fn save_to_item<I: PositionableItem + ?Sized>(rect: &LayoutRect, item: &mut I) {
    let Some(store) = item.settings_mut() else {
        debug!("save: item has no settings store, skipping");
        return;
    };
    for key in LayoutKey::ALL {
        store.set_double(key.as_str(), key.value(rect));
    }
}

/// Reconstruct a layout from an item's saved anchors/pivot and live geometry
pub fn load_from_item<I: PositionableItem + ?Sized>(item: &I, canvas: Canvas) -> LayoutRect {
    let mut rect = LayoutRect::default();

    let saved = item
        .settings()
        .filter(|store| store.has_user_value(LayoutKey::SENTINEL.as_str()));

    match saved {
        Some(store) => {
            let get = |key: LayoutKey| store.get_double(key.as_str());
            rect.anchor_min = Point::new(get(LayoutKey::AnchorMinX), get(LayoutKey::AnchorMinY));
            rect.anchor_max = Point::new(get(LayoutKey::AnchorMaxX), get(LayoutKey::AnchorMaxY));
            rect.pivot = Point::new(get(LayoutKey::PivotX), get(LayoutKey::PivotY));
        }
        None => {
            let alignment = item.alignment();
            rect.pivot = alignment.to_pivot();
            debug!(
                "load: no saved layout, inferred pivot ({}, {}) from alignment {}",
                rect.pivot.x, rect.pivot.y, alignment
            );
        }
    }

    let size = effective_size(item);
    let pivot_world = FlipTransform::for_canvas(canvas).to_layout(item.position());

    let anchor_box = rect.anchor_box(canvas);
    rect.size_delta = Point::new(size.width - anchor_box.width, size.height - anchor_box.height);

    let rect_min = Point::new(
        pivot_world.x - size.width * rect.pivot.x,
        pivot_world.y - size.height * rect.pivot.y,
    );
    let anchor_pt = anchor_box.point_at(rect.pivot);
    rect.anchored_pos = Point::new(
        rect_min.x - anchor_pt.x + size.width * rect.pivot.x,
        rect_min.y - anchor_pt.y + size.height * rect.pivot.y,
    );

    rect
}

/// Load from an optional item.
///
/// An absent item yields a centered layout of `config.default_size`.
pub fn load<I: PositionableItem + ?Sized>(
    item: Option<&I>,
    canvas: Canvas,
    config: &LayoutConfig,
) -> LayoutRect {
    match item {
        Some(item) => load_from_item(item, canvas),
        None => LayoutRect::centered(config.default_size),
    }
}

/// Resize an item to `size` in its current sizing mode.
///
/// Items with a bounds box get new bounds. Others are rescaled against their
/// intrinsic size; an item with a zero intrinsic dimension cannot be resized
/// this way and is left unchanged. Returns whether the item was resized.
pub fn resize_item<I: PositionableItem + ?Sized>(item: &mut I, size: Size) -> bool {
    if item.bounds_type() != BoundsType::None {
        item.set_bounds(size);
        return true;
    }

    let intrinsic = item.intrinsic_size();
    if intrinsic.is_empty() {
        debug!("resize: zero intrinsic size, cannot resize via scale");
        return false;
    }

    item.set_scale(Point::new(
        size.width / intrinsic.width,
        size.height / intrinsic.height,
    ));
    true
}

/// Move an item's aligned point to `position` (item space)
pub fn move_item<I: PositionableItem + ?Sized>(item: &mut I, position: Point) {
    item.set_position(position);
}
