#[cfg(not(feature = "std"))]
use alloc::collections::BTreeMap;
#[cfg(feature = "std")]
use std::collections::HashMap;

use wheelpicker::{RunningSelection, VisibleItem};

#[cfg(feature = "std")]
type SlotMap = HashMap<i64, RunningSelection>;
#[cfg(not(feature = "std"))]
type SlotMap = BTreeMap<i64, RunningSelection>;

/// Running selections of the rendered item slots, keyed by virtual index.
///
/// A slot keeps its state for as long as its item stays in the snapshot; a slot that scrolls out
/// and back in starts over from [`RunningSelection::BOOTSTRAP`].
#[derive(Clone, Debug, Default)]
pub struct SlotStates {
    slots: SlotMap,
}

impl SlotStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, virtual_index: i64) -> RunningSelection {
        self.slots
            .get(&virtual_index)
            .copied()
            .unwrap_or(RunningSelection::BOOTSTRAP)
    }

    pub fn store(&mut self, virtual_index: i64, selection: RunningSelection) {
        self.slots.insert(virtual_index, selection);
    }

    /// Drops every slot whose item is not in `visible`.
    pub fn retain_visible(&mut self, visible: &[VisibleItem]) {
        self.slots
            .retain(|index, _| visible.iter().any(|it| it.index == *index));
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }
}
