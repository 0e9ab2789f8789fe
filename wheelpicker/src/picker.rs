use crate::geometry::{region_is_odd, scale_region_size, selector_position};
use crate::progress::compute_progress;
use crate::{
    AnimationProgress, ConfigError, PickerConfig, PickerOptions, RunningSelection, SnapPosition,
    VisibleItem,
};

/// Where the host scroll surface starts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InitialScroll {
    /// Virtual index of the first visible item.
    pub first_visible_index: i64,
    /// Scroll offset into that item, in pixels.
    pub offset_px: i32,
}

/// A circular selection list.
///
/// This type holds no UI objects and no scroll state. The host reports a visible-items snapshot
/// on each layout pass and asks for the progress of every rendered slot:
///
/// ```
/// use wheelpicker::{Picker, PickerOptions, RunningSelection, Sizing, VisibleItem};
///
/// let picker = Picker::new(PickerOptions::new(7, Sizing::Fixed { item_size: 100.0 })
///     .with_spacing(0.0))
///     .unwrap();
/// let first = picker.initial_scroll().first_visible_index;
/// let visible: Vec<_> = (0..5)
///     .map(|slot| VisibleItem::new(first + slot, slot as i32 * 100))
///     .collect();
///
/// let (progress, _) = picker.progress(first + 2, &visible, RunningSelection::default());
/// assert_eq!(progress.scale, 1.0);
/// assert_eq!(progress.selected_virtual_index, first + 2);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Picker {
    config: PickerConfig,
}

impl Picker {
    /// Resolves `options`. Fails only for configurations with no valid geometry, such as an empty
    /// item list.
    pub fn new(options: PickerOptions) -> Result<Self, ConfigError> {
        let config = options.resolve()?;
        wdebug!(
            total_item_count = config.index.count(),
            visible_item_count = config.visible_item_count,
            item_size = config.item_size,
            selector_index = config.selector_index,
            scale_range = config.scale_range,
            "Picker::new"
        );
        Ok(Self { config })
    }

    pub fn from_config(config: PickerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Computes the progress of one slot. See [`crate::compute_progress`].
    pub fn progress(
        &self,
        virtual_index: i64,
        visible_items: &[VisibleItem],
        prior: RunningSelection,
    ) -> (AnimationProgress, RunningSelection) {
        compute_progress(&self.config, virtual_index, visible_items, prior)
    }

    pub fn logical_index(&self, virtual_index: i64) -> usize {
        self.config.index.to_logical(virtual_index)
    }

    pub fn total_item_count(&self) -> usize {
        self.config.index.count()
    }

    /// Initial position for the scroll surface. With partial items, the list starts scrolled
    /// half an item into the first one.
    pub fn initial_scroll(&self) -> InitialScroll {
        let offset_px = if self.config.show_partial_item {
            (self.config.item_size / 2.0) as i32
        } else {
            0
        };
        InitialScroll {
            first_visible_index: self.config.index.origin(),
            offset_px,
        }
    }

    pub fn selector_position(&self) -> f32 {
        let c = &self.config;
        let odd = region_is_odd(c.scale_range, c.show_partial_item);
        selector_position(c.selector_index, c.item_size, c.spacing, odd)
    }

    pub fn scale_region_size(&self) -> f32 {
        let c = &self.config;
        scale_region_size(c.item_size, c.spacing, c.scale_range)
    }

    /// Length of the list along the scroll axis.
    pub fn list_dimension(&self) -> f32 {
        self.config.available_space
    }

    pub fn item_size(&self) -> f32 {
        self.config.item_size
    }

    pub fn snap_position(&self) -> SnapPosition {
        SnapPosition::for_layout(
            self.config.visible_item_count,
            self.config.show_partial_item,
        )
    }

    /// Start offset in pixels at which a settled item rests.
    pub fn snap_offset_px(&self) -> f32 {
        self.snap_position()
            .offset_px(self.config.available_space, self.config.item_size)
    }
}
