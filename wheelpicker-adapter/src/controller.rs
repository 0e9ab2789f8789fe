use alloc::vec::Vec;

use wheelpicker::{AnimationProgress, ConfigError, Picker, PickerOptions, VisibleItem};

use crate::{Easing, SlotStates, Tween};

/// Progress of one rendered item within a frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemProgress {
    pub index: i64,
    /// Data index of this item.
    pub logical_index: usize,
    pub progress: AnimationProgress,
}

/// The item currently on the selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Selection {
    pub virtual_index: i64,
    pub logical_index: usize,
}

/// A framework-neutral controller that wraps a [`wheelpicker::Picker`] and keeps the per-slot
/// state a host would otherwise thread by hand.
///
/// This type does not hold any UI objects. Adapters drive it by calling:
/// - `frame(snapshot)` once per layout pass, then render every returned item
/// - `tick(now_ms)` each frame while a corrective scroll is running, applying the returned
///   scroll-by delta
/// - `on_user_scroll()` when a gesture takes over
#[derive(Clone, Debug)]
pub struct Controller {
    picker: Picker,
    slots: SlotStates,
    items: Vec<ItemProgress>,
    selected: Option<Selection>,
    tween: Option<Tween>,
    applied: f32,
}

impl Controller {
    pub fn new(options: PickerOptions) -> Result<Self, ConfigError> {
        Ok(Self::from_picker(Picker::new(options)?))
    }

    pub fn from_picker(picker: Picker) -> Self {
        Self {
            picker,
            slots: SlotStates::new(),
            items: Vec::new(),
            selected: None,
            tween: None,
            applied: 0.0,
        }
    }

    pub fn picker(&self) -> &Picker {
        &self.picker
    }

    pub fn into_picker(self) -> Picker {
        self.picker
    }

    pub fn slots(&self) -> &SlotStates {
        &self.slots
    }

    /// Replaces the configuration. Slot states survive; the next frame recomputes everything.
    pub fn set_options(&mut self, options: PickerOptions) -> Result<(), ConfigError> {
        self.picker = Picker::new(options)?;
        self.items.clear();
        Ok(())
    }

    /// Computes the progress of a single slot and stores its running selection.
    ///
    /// Before the first layout, pass an empty `visible` slice; the slot position is then
    /// estimated from the initial scroll.
    pub fn update(&mut self, virtual_index: i64, visible: &[VisibleItem]) -> AnimationProgress {
        let prior = self.slots.get(virtual_index);
        let (progress, next) = self.picker.progress(virtual_index, visible, prior);
        self.slots.store(virtual_index, next);
        if next.initialized {
            self.selected = Some(Selection {
                virtual_index: progress.selected_virtual_index,
                logical_index: progress.selected_logical_index,
            });
        }
        progress
    }

    /// Computes every visible item from the same snapshot.
    ///
    /// Slots that left the snapshot are dropped. An empty snapshot keeps all slot state and
    /// yields no items.
    pub fn frame(&mut self, visible: &[VisibleItem]) -> &[ItemProgress] {
        self.items.clear();
        if visible.is_empty() {
            return &self.items;
        }
        for it in visible {
            let progress = self.update(it.index, visible);
            self.items.push(ItemProgress {
                index: it.index,
                logical_index: self.picker.logical_index(it.index),
                progress,
            });
        }
        self.slots.retain_visible(visible);
        wtrace!(
            items = self.items.len(),
            selected = ?self.selected,
            "Controller::frame"
        );
        &self.items
    }

    /// Items of the last frame.
    pub fn items(&self) -> &[ItemProgress] {
        &self.items
    }

    /// The latest selection, once any snapshot has been seen.
    pub fn selected(&self) -> Option<Selection> {
        self.selected
    }

    /// Scroll-by distance that rests the nearest item on the snap position.
    ///
    /// Returns `None` for an empty snapshot.
    pub fn snap_delta(&self, visible: &[VisibleItem]) -> Option<f32> {
        let snap = self.picker.snap_offset_px();
        visible
            .iter()
            .map(|it| it.offset as f32 - snap)
            .min_by(|a, b| abs(*a).total_cmp(&abs(*b)))
    }

    /// Scroll-by distance that moves the center of `virtual_index` onto the selector.
    ///
    /// The item does not need to be visible: its position is extrapolated from the first item of
    /// the snapshot. Returns `None` for an empty snapshot.
    pub fn distance_to_item(&self, virtual_index: i64, visible: &[VisibleItem]) -> Option<f32> {
        let anchor = visible.first()?;
        let config = self.picker.config();
        let step = config.item_size + config.spacing;
        let steps = virtual_index.saturating_sub(anchor.index) as f32;
        let center = anchor.offset as f32 + steps * step + config.item_size / 2.0;
        Some(center - self.picker.selector_position())
    }

    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    pub fn cancel_animation(&mut self) {
        self.tween = None;
        self.applied = 0.0;
    }

    /// Call this when the user starts scrolling. This cancels any active tween.
    pub fn on_user_scroll(&mut self) {
        self.cancel_animation();
    }

    /// Starts a tween that brings `virtual_index` onto the selector.
    ///
    /// Returns the total distance, or `None` for an empty snapshot.
    pub fn start_scroll_to_item(
        &mut self,
        virtual_index: i64,
        visible: &[VisibleItem],
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<f32> {
        let distance = self.distance_to_item(virtual_index, visible)?;
        wdebug!(virtual_index, distance, "start_scroll_to_item");
        self.tween = Some(Tween::new(distance, now_ms, duration_ms, easing));
        self.applied = 0.0;
        Some(distance)
    }

    /// Starts a tween to the nearest occurrence of data item `logical_index`, measured from the
    /// current selection.
    pub fn start_scroll_to_logical(
        &mut self,
        logical_index: usize,
        visible: &[VisibleItem],
        now_ms: u64,
        duration_ms: u64,
        easing: Easing,
    ) -> Option<f32> {
        let from = match self.selected {
            Some(sel) => sel.virtual_index,
            None => visible.first()?.index,
        };
        let target = self.picker.config().index.nearest_virtual(from, logical_index);
        self.start_scroll_to_item(target, visible, now_ms, duration_ms, easing)
    }

    /// Advances the active tween.
    ///
    /// Returns the scroll-by delta to apply since the previous tick, or `None` when idle.
    pub fn tick(&mut self, now_ms: u64) -> Option<f32> {
        let tween = self.tween?;
        let covered = tween.sample(now_ms);
        let delta = covered - self.applied;
        self.applied = covered;
        if tween.is_done(now_ms) {
            self.cancel_animation();
        }
        Some(delta)
    }
}

fn abs(v: f32) -> f32 {
    if v < 0.0 { -v } else { v }
}
