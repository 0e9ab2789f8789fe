use crate::color::color_for_scale;
use crate::geometry::{region_is_odd, scale_for_distance, scale_region_size, selector_position};
use crate::resolver::closest_to_selector;
use crate::{Color, PickerConfig, VisibleItem};

/// The selection a rendered item slot last observed.
///
/// Each slot owns one of these and feeds it back into the next [`compute_progress`] call for the
/// same slot. It only matters until the first layout snapshot arrives; afterwards the snapshot
/// alone decides the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RunningSelection {
    pub last_selected_virtual_index: i64,
    /// Whether this slot has seen a non-empty snapshot.
    pub initialized: bool,
}

impl RunningSelection {
    pub const BOOTSTRAP: RunningSelection = RunningSelection {
        last_selected_virtual_index: -1,
        initialized: false,
    };
}

impl Default for RunningSelection {
    fn default() -> Self {
        Self::BOOTSTRAP
    }
}

/// Per-item animation state for one layout pass.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimationProgress {
    /// In `[inactive_scale, 1]`.
    pub scale: f32,
    pub color: Color,
    /// Center of this item in pixels from the list start.
    pub item_center_offset_px: i32,
    /// `item_center_offset_px` relative to the list length.
    pub item_fraction_of_available_space: f32,
    /// Virtual index of the item currently closest to the selector.
    pub selected_virtual_index: i64,
    /// Data index of the item currently closest to the selector.
    pub selected_logical_index: usize,
    /// Signed distance `selector - item center`.
    pub distance_to_selector_px: f32,
}

impl AnimationProgress {
    /// Scroll-by amount that brings this item's center onto the selector.
    pub fn scroll_delta_px(&self) -> f32 {
        -self.distance_to_selector_px
    }

    /// Whether this item is the one closest to the selector.
    pub fn is_selected(&self, virtual_index: i64) -> bool {
        self.selected_virtual_index == virtual_index
    }
}

/// Computes the progress of the item at `virtual_index` for one snapshot.
///
/// Returns the progress together with the selection to persist for this slot. Before the slot's
/// item shows up in a snapshot, its position is estimated from the seeded first visible index
/// so the very first frame already renders with the right scale.
pub fn compute_progress(
    config: &PickerConfig,
    virtual_index: i64,
    visible_items: &[VisibleItem],
    prior: RunningSelection,
) -> (AnimationProgress, RunningSelection) {
    let item_size = config.item_size;
    let half_item = item_size / 2.0;

    let offset = match visible_items.iter().find(|it| it.index == virtual_index) {
        Some(item) => item.offset as f32,
        None => estimated_offset(config, virtual_index),
    };
    let item_center = offset + half_item;

    let is_odd = region_is_odd(config.scale_range, config.show_partial_item);
    let selector = selector_position(config.selector_index, item_size, config.spacing, is_odd);
    let region = scale_region_size(item_size, config.spacing, config.scale_range);

    let distance = selector - item_center;
    let scale = scale_for_distance(distance, region, config.inactive_scale);

    let selected = closest_to_selector(
        visible_items,
        selector,
        item_size,
        prior.last_selected_virtual_index,
    );
    let next = RunningSelection {
        last_selected_virtual_index: selected,
        initialized: prior.initialized || !visible_items.is_empty(),
    };

    let selected_logical_index = if !next.initialized || selected <= 0 {
        config.selector_index
    } else {
        config.index.to_logical(selected)
    };

    let color = color_for_scale(
        config.inactive_color,
        config.active_color,
        scale,
        config.inactive_scale,
    );

    wtrace!(
        virtual_index,
        item_center,
        selector,
        scale,
        selected,
        "compute_progress"
    );

    let progress = AnimationProgress {
        scale,
        color,
        item_center_offset_px: item_center as i32,
        item_fraction_of_available_space: item_center / config.available_space,
        selected_virtual_index: selected,
        selected_logical_index,
        distance_to_selector_px: distance,
    };
    (progress, next)
}

/// Start offset of an item that has not been laid out yet.
///
/// Items are assumed to sit in the slots following the seeded first visible index, wrapped to
/// the visible count.
fn estimated_offset(config: &PickerConfig, virtual_index: i64) -> f32 {
    let n = config.visible_item_count as i64;
    let slot = virtual_index.wrapping_sub(config.index.origin()).rem_euclid(n);
    let mut offset = slot as f32 * (config.item_size + config.spacing);
    if config.show_partial_item {
        offset -= config.item_size / 2.0;
    }
    offset
}
