/// One entry of the host's visible-items snapshot.
///
/// Snapshots are rebuilt by the scroll surface on every layout pass and are expected in
/// ascending `offset` order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleItem {
    /// Virtual index in the circular index space.
    pub index: i64,
    /// Start offset in pixels from the scroll-axis origin of the list. May be negative for items
    /// that are partially scrolled out at the start.
    pub offset: i32,
}

impl VisibleItem {
    pub fn new(index: i64, offset: i32) -> Self {
        Self { index, offset }
    }

    /// Center of the item along the scroll axis.
    pub fn center(&self, item_size: f32) -> f32 {
        self.offset as f32 + item_size / 2.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Where a settled item rests after a fling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SnapPosition {
    /// Item start rests on the list start.
    Start,
    /// Item center rests on the list center.
    Center,
    /// Item start rests half an item away from the list start.
    HalfItem,
}

impl SnapPosition {
    /// Picks the snap position for a list layout.
    ///
    /// With an odd visible count and partial items shown, the edge items are cut in half, so
    /// items snap half an item in. An even count without partial items lines items up with the
    /// start edge; every other layout centers.
    pub fn for_layout(visible_item_count: usize, show_partial_item: bool) -> Self {
        let odd = visible_item_count % 2 == 1;
        match (odd, show_partial_item) {
            (true, true) => Self::HalfItem,
            (false, false) => Self::Start,
            _ => Self::Center,
        }
    }

    /// Offset in pixels from the list start at which a snapped item's start rests.
    pub fn offset_px(self, available_space: f32, item_size: f32) -> f32 {
        match self {
            Self::Start => 0.0,
            Self::Center => (available_space - item_size) / 2.0,
            Self::HalfItem => item_size / 2.0,
        }
    }
}
