use crate::ConfigError;

/// Default virtual position of the seeded first item: the middle of the `i64` range.
pub const DEFAULT_CENTER: i64 = i64::MAX / 2;

/// Maps the unbounded virtual index space of a circular list onto a finite backing list.
///
/// The list starts at [`InfiniteIndex::origin`], a virtual index far from both ends of the `i64`
/// range. With the default center, roughly 4.6e18 items can be scrolled past in either
/// direction; at a sustained million items per second that is over 140,000 years of
/// scrolling, so the bound is never reached in interactive use.
///
/// Virtual indexes `<= 0` are never produced; the selection logic reserves them for a slot that
/// has not observed a layout yet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct InfiniteIndex {
    count: i64,
    origin: i64,
}

impl InfiniteIndex {
    /// Seeds the index space so that `origin() mod total_item_count` equals
    /// `initial_first_visible_index mod total_item_count`.
    ///
    /// `initial_first_visible_index` may be negative: `-2` with 10 items starts on item 8.
    pub fn new(total_item_count: usize, initial_first_visible_index: i64) -> Result<Self, ConfigError> {
        Self::with_center(total_item_count, initial_first_visible_index, DEFAULT_CENTER)
    }

    /// Like [`InfiniteIndex::new`], with a custom virtual center around which the origin is
    /// placed.
    ///
    /// `center` is clamped so that the origin stays strictly positive and at least one full
    /// cycle below `i64::MAX`.
    pub fn with_center(
        total_item_count: usize,
        initial_first_visible_index: i64,
        center: i64,
    ) -> Result<Self, ConfigError> {
        if total_item_count == 0 {
            return Err(ConfigError::EmptyItems);
        }
        let count = i64::try_from(total_item_count).unwrap_or(i64::MAX);
        let hi = i64::MAX.saturating_sub(count).max(count);
        let center = center.clamp(count, hi);
        let base = center - center.rem_euclid(count);
        let origin = base.saturating_add(initial_first_visible_index.rem_euclid(count));
        wdebug!(count, origin, "InfiniteIndex::new");
        Ok(Self { count, origin })
    }

    /// Size of the backing list.
    pub fn count(&self) -> usize {
        self.count as usize
    }

    /// Virtual index of the item seeded as the first visible one.
    pub fn origin(&self) -> i64 {
        self.origin
    }

    /// Folds a virtual index into `[0, count)`. Negative inputs wrap as well.
    pub fn to_logical(&self, virtual_index: i64) -> usize {
        virtual_index.rem_euclid(self.count) as usize
    }

    /// Returns the virtual index closest to `from` that maps to `logical`.
    ///
    /// Used to scroll to a data item along the shorter way around the circle. When both ways
    /// are equally long the forward one wins.
    pub fn nearest_virtual(&self, from: i64, logical: usize) -> i64 {
        let target = (logical as i64).rem_euclid(self.count);
        let current = from.rem_euclid(self.count);
        let forward = (target - current).rem_euclid(self.count);
        let backward = forward - self.count;
        let delta = if forward <= -backward { forward } else { backward };
        from.saturating_add(delta)
    }

    /// How many items can still be scrolled `(backward, forward)` from `virtual_index` before the
    /// index space is exhausted.
    pub fn headroom(&self, virtual_index: i64) -> (u64, u64) {
        let backward = virtual_index.saturating_sub(1).max(0) as u64;
        let forward = i64::MAX.saturating_sub(virtual_index).max(0) as u64;
        (backward, forward)
    }
}
