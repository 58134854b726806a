//! Policy implementations and the load/mutate/apply cycle

use log::debug;

use crate::layout::{AnchorPreset, Canvas, LayoutConfig, LayoutRect, Point, PresetRequest, MIN_SIZE};
use crate::target::{apply_to_item, load_from_item, PositionableItem};

use super::{Modifiers, PresetPolicy};

/// Compute the layout that results from applying `preset` to `rect` under `policy`
pub fn apply_policy(
    rect: &LayoutRect,
    preset: &AnchorPreset,
    policy: PresetPolicy,
    canvas: Canvas,
    config: &LayoutConfig,
) -> LayoutRect {
    match policy {
        PresetPolicy::PreservePlacement => preserve_placement(rect, preset, canvas),
        PresetPolicy::SnapToAnchor => snap_to_anchor(rect, preset, canvas),
        PresetPolicy::FullReset => full_reset(rect, preset, canvas, config),
        PresetPolicy::MoveToPreset => move_to_preset(rect, preset, canvas),
    }
}

/// Re-anchor without visible change: the world rect is recorded first, then
/// size delta and offset are solved against the new anchor box.
fn preserve_placement(rect: &LayoutRect, preset: &AnchorPreset, canvas: Canvas) -> LayoutRect {
    let world = rect.calculate_final_rect(canvas);

    let mut out = *rect;
    out.anchor_min = preset.anchor_min;
    out.anchor_max = preset.anchor_max;
    out.pivot = preset.pivot;

    let anchor_box = out.anchor_box(canvas);
    out.size_delta = Point::new(
        world.width - anchor_box.width,
        world.height - anchor_box.height,
    );

    let anchor_pt = anchor_box.point_at(out.pivot);
    let pivot_world = world.point_at(out.pivot);
    out.anchored_pos = Point::new(pivot_world.x - anchor_pt.x, pivot_world.y - anchor_pt.y);

    out
}

/// Re-anchor and put the pivot on the new anchor point, keeping the size
fn snap_to_anchor(rect: &LayoutRect, preset: &AnchorPreset, canvas: Canvas) -> LayoutRect {
    let size = rect.size(canvas);

    let mut out = *rect;
    out.anchor_min = preset.anchor_min;
    out.anchor_max = preset.anchor_max;
    out.anchored_pos = Point::zero();

    let anchor_box = out.anchor_box(canvas);
    out.size_delta = Point::new(
        size.width - anchor_box.width,
        size.height - anchor_box.height,
    );

    out
}

fn full_reset(
    rect: &LayoutRect,
    preset: &AnchorPreset,
    canvas: Canvas,
    config: &LayoutConfig,
) -> LayoutRect {
    let size = rect.size(canvas);

    let fixed_extent = |current: f64, fallback: f64| {
        if current <= MIN_SIZE {
            fallback
        } else {
            current
        }
    };

    let mut out = *rect;
    out.anchor_min = preset.anchor_min;
    out.anchor_max = preset.anchor_max;
    out.pivot = preset.pivot;
    out.anchored_pos = Point::zero();
    out.size_delta = Point::new(
        if preset.is_stretch_x() {
            0.0
        } else {
            fixed_extent(size.width, config.fallback_size.width)
        },
        if preset.is_stretch_y() {
            0.0
        } else {
            fixed_extent(size.height, config.fallback_size.height)
        },
    );

    out
}

/// Move to where the preset would place the element, solved against the
/// element's own (unchanged) anchor box.
fn move_to_preset(rect: &LayoutRect, preset: &AnchorPreset, canvas: Canvas) -> LayoutRect {
    let size = rect.size(canvas);
    let anchor_box = rect.anchor_box(canvas);
    let anchor_pt = anchor_box.point_at(rect.pivot);

    let mut out = *rect;

    if preset.is_stretch_x() {
        // Span the whole container: size equals the canvas, rect min at 0
        out.size_delta.x = canvas.width_f64() - anchor_box.width;
        out.anchored_pos.x = canvas.width_f64() * rect.pivot.x - anchor_pt.x;
    } else {
        let target_min =
            preset.anchor_min.x * canvas.width_f64() - size.width * preset.pivot.x;
        let pivot_world = target_min + size.width * rect.pivot.x;
        out.anchored_pos.x = pivot_world - anchor_pt.x;
    }

    if preset.is_stretch_y() {
        out.size_delta.y = canvas.height_f64() - anchor_box.height;
        out.anchored_pos.y = canvas.height_f64() * rect.pivot.y - anchor_pt.y;
    } else {
        let target_min =
            preset.anchor_min.y * canvas.height_f64() - size.height * preset.pivot.y;
        let pivot_world = target_min + size.height * rect.pivot.y;
        out.anchored_pos.y = pivot_world - anchor_pt.y;
    }

    out
}

/// Load an item's layout, apply a preset to it and write it back
pub fn apply_preset<I: PositionableItem + ?Sized>(
    item: &mut I,
    request: PresetRequest,
    modifiers: Modifiers,
    canvas: Canvas,
    config: &LayoutConfig,
) -> LayoutRect {
    let policy = PresetPolicy::from_modifiers(modifiers);
    let current = load_from_item(item, canvas);
    let next = apply_policy(&current, &request.preset(), policy, canvas, config);

    debug!("preset {} ({:?}) applied", request, policy);

    apply_to_item(&next, item, canvas);
    next
}

/// Apply a preset to every item independently; returns how many were visited
pub fn apply_preset_all<'a, I, It>(
    items: It,
    request: PresetRequest,
    modifiers: Modifiers,
    canvas: Canvas,
    config: &LayoutConfig,
) -> usize
where
    I: PositionableItem + ?Sized + 'a,
    It: IntoIterator<Item = &'a mut I>,
{
    let mut count = 0;
    for item in items {
        apply_preset(item, request, modifiers, canvas, config);
        count += 1;
    }
    count
}
