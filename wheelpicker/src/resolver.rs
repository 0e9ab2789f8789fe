use crate::VisibleItem;
use crate::geometry::abs;

/// Returns the virtual index of the visible item whose center is nearest to `selector_position`.
///
/// Ties go to the first item in `items`, so hosts should pass the snapshot in ascending offset
/// order. An empty snapshot returns `fallback` unchanged.
pub fn closest_to_selector(
    items: &[VisibleItem],
    selector_position: f32,
    item_size: f32,
    fallback: i64,
) -> i64 {
    let mut best = fallback;
    let mut best_distance = f32::INFINITY;
    for item in items {
        let distance = abs(item.center(item_size) - selector_position);
        if distance < best_distance {
            best_distance = distance;
            best = item.index;
        }
    }
    best
}
