//! Pure geometry along the scroll axis: selector placement, scale region and scale curve.
//!
//! All values are pixels measured from the start of the list (x = 0 for horizontal lists,
//! y = 0 for vertical ones).

/// Linear interpolation between `start` and `stop`.
pub fn lerp(start: f32, stop: f32, fraction: f32) -> f32 {
    (1.0 - fraction) * start + fraction * stop
}

pub(crate) fn abs(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}

/// Whether the selector sits on an item center (`true`) or on the gap after it (`false`).
///
/// An odd scale range is dominated by a single item. Showing partial items shifts every center
/// by half an item, which swaps the two cases.
pub fn region_is_odd(scale_range: usize, show_partial_item: bool) -> bool {
    let odd = scale_range % 2 == 1;
    odd != show_partial_item
}

/// Pixel position of the selector.
///
/// ```text
/// odd region:  --<>--<|>--<>       selector on the center of item `selector_index`
/// even region: --<>--<>-|-<>--<>-- selector on the gap after item `selector_index`
/// ```
pub fn selector_position(
    selector_index: usize,
    item_size: f32,
    spacing: f32,
    is_odd_region: bool,
) -> f32 {
    let start = selector_index as f32 * (item_size + spacing);
    if is_odd_region {
        start + item_size / 2.0
    } else {
        start + item_size + spacing / 2.0
    }
}

/// Half-width of the window around the selector in which items scale.
///
/// One step is half a gap, an item and half a gap; the window grows by half a step per unit of
/// scale range.
pub fn scale_region_size(item_size: f32, spacing: f32, scale_range: usize) -> f32 {
    (item_size + spacing) * (scale_range as f32 + 1.0) / 2.0
}

/// Scale of an item `distance` pixels away from the selector, in `[inactive_scale, 1]`.
pub fn scale_for_distance(distance: f32, scale_region_size: f32, inactive_scale: f32) -> f32 {
    let floor = if inactive_scale.is_nan() {
        0.0
    } else {
        inactive_scale.clamp(0.0, 1.0)
    };
    let distance = abs(distance);
    let scale = if distance < scale_region_size {
        let fraction = (scale_region_size - distance) / scale_region_size;
        lerp(floor, 1.0, fraction)
    } else {
        floor
    };
    scale.clamp(floor, 1.0)
}

/// Length of a list that shows exactly `visible_item_count` items.
pub fn list_dimension(item_size: f32, spacing: f32, visible_item_count: usize) -> f32 {
    let n = visible_item_count as f32;
    item_size * n + spacing * (n - 1.0).max(0.0)
}

/// Size of each item when `visible_item_count` items fill `available_space`.
pub fn item_size_for_space(available_space: f32, spacing: f32, visible_item_count: usize) -> f32 {
    let n = visible_item_count.max(1) as f32;
    (available_space - spacing * (n - 1.0)) / n
}
