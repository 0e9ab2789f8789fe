use crate::geometry::{item_size_for_space, list_dimension};
use crate::index::DEFAULT_CENTER;
use crate::{Color, ConfigError, InfiniteIndex, Orientation};

/// How item size and list length relate.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sizing {
    /// Items have a fixed size; the list is exactly long enough for the visible items.
    Fixed { item_size: f32 },
    /// The list has a fixed length; items share it evenly.
    Fill { available_space: f32 },
}

/// The scale that items outside the scale region shrink to.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InactiveScale {
    /// Percentage of the active size, clamped to `0..=100`.
    Percent(u8),
    /// Absolute active and inactive sizes; the scale is their ratio, clamped to `[0, 1]`.
    Sizes { active: f32, inactive: f32 },
}

impl InactiveScale {
    pub fn resolve(self) -> f32 {
        match self {
            Self::Percent(p) => p.min(100) as f32 / 100.0,
            Self::Sizes { active, inactive } => {
                let ratio = inactive / active;
                if ratio.is_finite() {
                    ratio.clamp(0.0, 1.0)
                } else {
                    1.0
                }
            }
        }
    }
}

impl Default for InactiveScale {
    fn default() -> Self {
        Self::Percent(85)
    }
}

/// Configuration for a [`crate::Picker`].
///
/// Values are taken as the host provides them and clamped into range by
/// [`PickerOptions::resolve`]; only structurally impossible configurations are rejected.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickerOptions {
    /// Size of the backing data list. Must be non-zero.
    pub total_item_count: usize,
    pub visible_item_count: usize,
    pub sizing: Sizing,
    /// Gap between two items in pixels.
    pub spacing: f32,
    /// Slot (within the visible items) the selector sits on.
    ///
    /// `None` picks the middle slot: `n / 2` for an odd visible count without partial items,
    /// `n / 2 - 1` otherwise.
    pub selector_index: Option<usize>,
    /// Number of item steps around the selector in which items scale.
    ///
    /// With an odd range the selector sits on an item center; with an even range it sits on the
    /// gap between the selector item and the next one.
    pub scale_range: usize,
    /// Shows the items at both edges cut in half.
    pub show_partial_item: bool,
    pub inactive_scale: InactiveScale,
    pub active_color: Color,
    pub inactive_color: Color,
    pub orientation: Orientation,
    /// Data index of the item that starts at the list origin. May be negative.
    pub initial_first_visible_index: i64,
    /// Virtual index around which the circular index space is seeded.
    pub virtual_center: i64,
}

impl PickerOptions {
    /// Creates options with five visible items, 4px spacing and an 85% inactive scale.
    pub fn new(total_item_count: usize, sizing: Sizing) -> Self {
        Self {
            total_item_count,
            visible_item_count: 5,
            sizing,
            spacing: 4.0,
            selector_index: None,
            scale_range: 1,
            show_partial_item: false,
            inactive_scale: InactiveScale::default(),
            active_color: Color::DEFAULT_ACTIVE,
            inactive_color: Color::DEFAULT_INACTIVE,
            orientation: Orientation::Horizontal,
            initial_first_visible_index: 0,
            virtual_center: DEFAULT_CENTER,
        }
    }

    pub fn with_visible_item_count(mut self, visible_item_count: usize) -> Self {
        self.visible_item_count = visible_item_count;
        self
    }

    pub fn with_spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_selector_index(mut self, selector_index: Option<usize>) -> Self {
        self.selector_index = selector_index;
        self
    }

    pub fn with_scale_range(mut self, scale_range: usize) -> Self {
        self.scale_range = scale_range;
        self
    }

    pub fn with_show_partial_item(mut self, show_partial_item: bool) -> Self {
        self.show_partial_item = show_partial_item;
        self
    }

    pub fn with_inactive_scale(mut self, inactive_scale: InactiveScale) -> Self {
        self.inactive_scale = inactive_scale;
        self
    }

    pub fn with_colors(mut self, active: Color, inactive: Color) -> Self {
        self.active_color = active;
        self.inactive_color = inactive;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_initial_first_visible_index(mut self, index: i64) -> Self {
        self.initial_first_visible_index = index;
        self
    }

    pub fn with_virtual_center(mut self, center: i64) -> Self {
        self.virtual_center = center;
        self
    }

    /// Validates and clamps the options into a [`PickerConfig`].
    pub fn resolve(&self) -> Result<PickerConfig, ConfigError> {
        if self.total_item_count == 0 {
            return Err(ConfigError::EmptyItems);
        }
        let n = self.visible_item_count;
        if n == 0 {
            return Err(ConfigError::NoVisibleItems);
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(ConfigError::InvalidSpacing(self.spacing));
        }

        let (item_size, available_space) = match self.sizing {
            Sizing::Fixed { item_size } => {
                if !item_size.is_finite() || item_size <= 0.0 {
                    return Err(ConfigError::InvalidItemSize(item_size));
                }
                (item_size, list_dimension(item_size, self.spacing, n))
            }
            Sizing::Fill { available_space } => {
                if !available_space.is_finite() || available_space <= 0.0 {
                    return Err(ConfigError::InvalidAvailableSpace(available_space));
                }
                let item_size = item_size_for_space(available_space, self.spacing, n);
                if !item_size.is_finite() || item_size <= 0.0 {
                    return Err(ConfigError::InvalidItemSize(item_size));
                }
                (item_size, available_space)
            }
        };

        let selector_index = match self.selector_index {
            Some(i) => {
                if i >= n {
                    wwarn!(selector_index = i, visible_item_count = n, "selector index clamped");
                }
                i.min(n - 1)
            }
            None => default_selector_index(n, self.show_partial_item),
        };

        let scale_range = self.scale_range.clamp(1, n);
        if scale_range != self.scale_range {
            wwarn!(
                scale_range = self.scale_range,
                clamped = scale_range,
                "scale range clamped"
            );
        }

        let index = InfiniteIndex::with_center(
            self.total_item_count,
            self.initial_first_visible_index,
            self.virtual_center,
        )?;

        Ok(PickerConfig {
            index,
            visible_item_count: n,
            item_size,
            spacing: self.spacing,
            available_space,
            selector_index,
            scale_range,
            show_partial_item: self.show_partial_item,
            inactive_scale: self.inactive_scale.resolve(),
            active_color: self.active_color,
            inactive_color: self.inactive_color,
            orientation: self.orientation,
        })
    }
}

fn default_selector_index(visible_item_count: usize, show_partial_item: bool) -> usize {
    let half = visible_item_count / 2;
    let index = if visible_item_count % 2 == 1 && !show_partial_item {
        half
    } else {
        half.saturating_sub(1)
    };
    index.min(visible_item_count.saturating_sub(1))
}

/// Validated configuration consumed by the progress computation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PickerConfig {
    pub index: InfiniteIndex,
    pub visible_item_count: usize,
    pub item_size: f32,
    pub spacing: f32,
    /// Length of the list along the scroll axis.
    pub available_space: f32,
    /// In `[0, visible_item_count)`.
    pub selector_index: usize,
    /// In `[1, visible_item_count]`.
    pub scale_range: usize,
    pub show_partial_item: bool,
    /// In `[0, 1]`.
    pub inactive_scale: f32,
    pub active_color: Color,
    pub inactive_color: Color,
    pub orientation: Orientation,
}
