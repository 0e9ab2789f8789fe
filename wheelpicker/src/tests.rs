use crate::geometry::*;
use crate::*;

use std::string::ToString;
use std::vec::Vec;

#[derive(Clone, Copy, Debug)]
struct Lcg(u64);

impl Lcg {
    fn new(seed: u64) -> Self {
        Self(seed)
    }

    fn next_u64(&mut self) -> u64 {
        // Deterministic, dependency-free PRNG for tests.
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0
    }

    fn gen_i64(&mut self) -> i64 {
        self.next_u64() as i64
    }

    fn gen_unit(&mut self) -> f32 {
        (self.next_u64() >> 40) as f32 / (1u64 << 24) as f32
    }

    fn gen_range_usize(&mut self, start: usize, end_exclusive: usize) -> usize {
        start + (self.next_u64() % (end_exclusive - start) as u64) as usize
    }
}

fn fixed(total: usize, item_size: f32) -> PickerOptions {
    PickerOptions::new(total, Sizing::Fixed { item_size })
        .with_visible_item_count(5)
        .with_spacing(0.0)
}

/// Five visible items of 100px, no spacing, selector on slot 2, scale range 1.
fn five_by_hundred(total: usize) -> Picker {
    Picker::new(
        fixed(total, 100.0)
            .with_selector_index(Some(2))
            .with_inactive_scale(InactiveScale::Percent(70)),
    )
    .unwrap()
}

fn snapshot(first: i64, scrolled_px: i32, count: i64) -> Vec<VisibleItem> {
    (0..count)
        .map(|slot| VisibleItem::new(first + slot, slot as i32 * 100 - scrolled_px))
        .collect()
}

#[test]
fn scale_is_inactive_outside_region() {
    for d in [100.0, 100.5, 250.0, 1e9] {
        assert_eq!(scale_for_distance(d, 100.0, 0.7), 0.7);
        assert_eq!(scale_for_distance(-d, 100.0, 0.7), 0.7);
    }
}

#[test]
fn scale_is_one_on_selector() {
    assert_eq!(scale_for_distance(0.0, 100.0, 0.7), 1.0);
    assert_eq!(scale_for_distance(0.0, 37.5, 0.0), 1.0);
}

#[test]
fn scale_midpoint_interpolates() {
    let s = scale_for_distance(50.0, 100.0, 0.7);
    assert!((s - 0.85).abs() < 1e-6, "{s}");
}

#[test]
fn scale_never_grows_with_distance() {
    let mut rng = Lcg::new(7);
    for _ in 0..200 {
        let region = 1.0 + rng.gen_unit() * 500.0;
        let inactive = rng.gen_unit();
        let mut distances: Vec<f32> = (0..32).map(|_| rng.gen_unit() * region * 1.5).collect();
        distances.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let mut prev = 1.0f32;
        for d in distances {
            let s = scale_for_distance(d, region, inactive);
            assert!(s >= inactive && s <= 1.0);
            assert!(s <= prev + 1e-6, "d={d} s={s} prev={prev}");
            prev = s;
        }
    }
}

#[test]
fn scale_region_widens_with_range() {
    assert_eq!(scale_region_size(100.0, 0.0, 1), 100.0);
    assert_eq!(scale_region_size(100.0, 0.0, 2), 150.0);
    // half gap + item + half gap, times (3 + 1) / 2
    assert_eq!(scale_region_size(90.0, 10.0, 3), 200.0);
}

#[test]
fn selector_on_center_or_gap() {
    assert_eq!(selector_position(2, 100.0, 0.0, true), 250.0);
    assert_eq!(selector_position(2, 100.0, 0.0, false), 300.0);
    // 2 * 110 + 50
    assert_eq!(selector_position(2, 100.0, 10.0, true), 270.0);
    // 2 * 110 + 100 + 5
    assert_eq!(selector_position(2, 100.0, 10.0, false), 325.0);
}

#[test]
fn partial_items_flip_region_parity() {
    assert!(region_is_odd(1, false));
    assert!(!region_is_odd(1, true));
    assert!(!region_is_odd(2, false));
    assert!(region_is_odd(2, true));
    assert!(region_is_odd(3, false));
}

#[test]
fn list_dimension_and_fill_size_agree() {
    assert_eq!(list_dimension(100.0, 4.0, 5), 516.0);
    assert_eq!(item_size_for_space(516.0, 4.0, 5), 100.0);
    assert_eq!(list_dimension(100.0, 4.0, 1), 100.0);
}

#[test]
fn color_lerp_endpoints_are_exact() {
    let a = Color::new(0.1, 0.2, 0.3, 0.4);
    let b = Color::new(0.7, 0.05, 0.9, 1.0);
    assert_eq!(Color::lerp(a, b, 0.0), a);
    assert_eq!(Color::lerp(a, b, 1.0), b);
    // out-of-range fractions are clamped
    assert_eq!(Color::lerp(a, b, -3.0), a);
    assert_eq!(Color::lerp(a, b, 3.0), b);
}

#[test]
fn color_lerp_between_identical_colors_is_identity() {
    let mut rng = Lcg::new(42);
    for _ in 0..200 {
        let c = Color::new(rng.gen_unit(), rng.gen_unit(), rng.gen_unit(), rng.gen_unit());
        let t = rng.gen_unit();
        assert_eq!(Color::lerp(c, c, t), c);
    }
}

#[test]
fn color_lerp_midpoint() {
    let black = Color::rgb(0.0, 0.0, 0.0);
    let white = Color::rgb(1.0, 1.0, 1.0);
    let mid = Color::lerp(black, white, 0.5);
    assert_eq!(mid, Color::rgb(0.5, 0.5, 0.5));
    assert_eq!(mid.to_rgba8(), [128, 128, 128, 255]);
}

#[test]
fn color_fraction_handles_empty_interval() {
    assert_eq!(color_fraction(1.0, 1.0), 1.0);
    assert_eq!(color_fraction(0.7, 0.7), 0.0);
    assert_eq!(color_fraction(1.0, 0.7), 1.0);
    assert!((color_fraction(0.85, 0.7) - 0.5).abs() < 1e-6);
}

#[test]
fn color_packs_argb() {
    let c = Color::from_argb(0xFF00_FFFF);
    assert_eq!(c, Color::DEFAULT_ACTIVE);
    assert_eq!(c.to_argb(), 0xFF00_FFFF);
    assert_eq!(Color::DEFAULT_INACTIVE.to_argb(), 0xFF88_8888);
}

#[test]
fn logical_index_is_periodic_and_in_range() {
    let mut rng = Lcg::new(3);
    for _ in 0..500 {
        let n = rng.gen_range_usize(1, 1000);
        let index = InfiniteIndex::new(n, 0).unwrap();
        let i = rng.gen_i64() / 4;
        let l = index.to_logical(i);
        assert!(l < n);
        assert_eq!(l, index.to_logical(i + n as i64));
        assert_eq!(l, index.to_logical(i - n as i64));
    }
}

#[test]
fn logical_index_scenarios() {
    let index = InfiniteIndex::new(7, 0).unwrap();
    assert_eq!(index.to_logical(23), 2);
    assert_eq!(index.to_logical(-1), 6);
    assert_eq!(index.to_logical(-7), 0);
}

#[test]
fn origin_matches_initial_first_visible_index() {
    for (n, initial, expected) in [(10usize, 0i64, 0usize), (10, 3, 3), (10, -2, 8), (7, 23, 2)] {
        let index = InfiniteIndex::new(n, initial).unwrap();
        assert_eq!(index.to_logical(index.origin()), expected);
        assert!(index.origin() > 0);
        let (back, fwd) = index.headroom(index.origin());
        assert!(back > 1 << 60 && fwd > 1 << 60);
    }
}

#[test]
fn custom_center_keeps_indexes_positive() {
    let index = InfiniteIndex::with_center(10, 4, -500).unwrap();
    assert_eq!(index.origin(), 14);
    let index = InfiniteIndex::with_center(10, 4, i64::MAX).unwrap();
    assert!(index.origin() < i64::MAX - 10);
    assert_eq!(index.to_logical(index.origin()), 4);
}

#[test]
fn empty_backing_list_is_rejected() {
    assert_eq!(InfiniteIndex::new(0, 0), Err(ConfigError::EmptyItems));
    assert_eq!(Picker::new(fixed(0, 100.0)).unwrap_err(), ConfigError::EmptyItems);
}

#[test]
fn nearest_virtual_takes_short_way_around() {
    let index = InfiniteIndex::new(10, 0).unwrap();
    let from = index.origin();
    assert_eq!(index.nearest_virtual(from, 3), from + 3);
    assert_eq!(index.nearest_virtual(from, 9), from - 1);
    assert_eq!(index.nearest_virtual(from, 0), from);
    // a tie goes forward
    assert_eq!(index.nearest_virtual(from, 5), from + 5);
    // logical indexes past the end wrap
    assert_eq!(index.nearest_virtual(from, 12), from + 2);
}

#[test]
fn resolver_returns_fallback_for_empty_snapshot() {
    assert_eq!(closest_to_selector(&[], 250.0, 100.0, -1), -1);
    assert_eq!(closest_to_selector(&[], 250.0, 100.0, 1234), 1234);
}

#[test]
fn resolver_picks_nearest_center() {
    let items = snapshot(40, 30, 6);
    // centers: 20, 120, 220, 320, ... -> 220 is nearest to 250
    assert_eq!(closest_to_selector(&items, 250.0, 100.0, -1), 42);
}

#[test]
fn resolver_breaks_ties_by_order() {
    let items = [VisibleItem::new(8, 100), VisibleItem::new(9, 200)];
    // centers 150 and 250 are both 50px from 200
    assert_eq!(closest_to_selector(&items, 200.0, 100.0, -1), 8);
    let reversed = [items[1], items[0]];
    assert_eq!(closest_to_selector(&reversed, 200.0, 100.0, -1), 9);
}

#[test]
fn item_on_selector_is_fully_active() {
    let p = five_by_hundred(7);
    assert_eq!(p.selector_position(), 250.0);
    assert_eq!(p.scale_region_size(), 100.0);

    let first = p.initial_scroll().first_visible_index;
    let visible = snapshot(first, 0, 5);
    let (progress, next) = p.progress(first + 2, &visible, RunningSelection::default());
    assert_eq!(progress.scale, 1.0);
    assert_eq!(progress.distance_to_selector_px, 0.0);
    assert_eq!(progress.item_center_offset_px, 250);
    assert_eq!(progress.item_fraction_of_available_space, 0.5);
    assert_eq!(progress.color, Color::DEFAULT_ACTIVE);
    assert_eq!(progress.selected_virtual_index, first + 2);
    assert!(progress.is_selected(first + 2));
    assert_eq!(
        next,
        RunningSelection {
            last_selected_virtual_index: first + 2,
            initialized: true,
        }
    );
}

#[test]
fn item_one_step_away_is_inactive() {
    let p = five_by_hundred(7);
    let first = p.initial_scroll().first_visible_index;
    let visible = snapshot(first, 0, 5);

    let (progress, _) = p.progress(first + 3, &visible, RunningSelection::default());
    assert_eq!(progress.scale, p.config().inactive_scale);
    assert_eq!(progress.color, Color::DEFAULT_INACTIVE);
    assert_eq!(progress.distance_to_selector_px, -100.0);
    assert_eq!(progress.scroll_delta_px(), 100.0);
}

#[test]
fn half_step_away_is_halfway_scaled() {
    let p = five_by_hundred(7);
    let first = p.initial_scroll().first_visible_index;
    // scrolled 50px: item 2's center is at 200, item 3's at 300
    let visible = snapshot(first, 50, 6);

    let (progress, _) = p.progress(first + 2, &visible, RunningSelection::default());
    assert!((progress.scale - 0.85).abs() < 1e-6, "{}", progress.scale);
    assert!((color_fraction(progress.scale, 0.7) - 0.5).abs() < 1e-5);
}

#[test]
fn partial_items_move_selector_to_gap() {
    let opts = fixed(7, 100.0).with_selector_index(Some(2));
    let full = Picker::new(opts.clone()).unwrap();
    let partial = Picker::new(opts.with_show_partial_item(true)).unwrap();

    // odd range: center of slot 2
    assert_eq!(full.selector_position(), 250.0);
    // parity flipped: boundary after slot 2
    assert_eq!(partial.selector_position(), 300.0);

    let even = Picker::new(fixed(7, 100.0).with_selector_index(Some(2)).with_scale_range(2))
        .unwrap();
    assert_eq!(even.selector_position(), 300.0);
    let even_partial = Picker::new(
        fixed(7, 100.0)
            .with_selector_index(Some(2))
            .with_scale_range(2)
            .with_show_partial_item(true),
    )
    .unwrap();
    assert_eq!(even_partial.selector_position(), 250.0);
}

#[test]
fn bootstrap_estimates_offsets_before_first_layout() {
    let p = five_by_hundred(7);
    let first = p.initial_scroll().first_visible_index;

    let (progress, next) = p.progress(first + 2, &[], RunningSelection::default());
    assert_eq!(progress.item_center_offset_px, 250);
    assert_eq!(progress.scale, 1.0);
    // no snapshot yet: the selector slot stands in for the selection
    assert_eq!(progress.selected_virtual_index, -1);
    assert_eq!(progress.selected_logical_index, 2);
    assert_eq!(next, RunningSelection::BOOTSTRAP);

    // slots wrap around the visible count
    let (progress, _) = p.progress(first - 1, &[], RunningSelection::default());
    assert_eq!(progress.item_center_offset_px, 450);
    let (progress, _) = p.progress(first + 6, &[], RunningSelection::default());
    assert_eq!(progress.item_center_offset_px, 150);
}

#[test]
fn bootstrap_shifts_by_half_item_with_partial_items() {
    let p = Picker::new(
        fixed(7, 100.0)
            .with_selector_index(Some(2))
            .with_show_partial_item(true),
    )
    .unwrap();
    assert_eq!(p.initial_scroll().offset_px, 50);

    let first = p.initial_scroll().first_visible_index;
    // slot 3 starts at 300 - 50, so its center sits on the selector at 300
    let (progress, _) = p.progress(first + 3, &[], RunningSelection::default());
    assert_eq!(progress.item_center_offset_px, 300);
    assert_eq!(progress.scale, 1.0);
}

#[test]
fn selection_converges_and_follows_scroll() {
    let p = five_by_hundred(7);
    let first = p.initial_scroll().first_visible_index;
    assert_eq!(p.logical_index(first), 0);

    let mut sel = RunningSelection::default();
    let (progress, next) = p.progress(first, &snapshot(first, 0, 5), sel);
    sel = next;
    assert_eq!(progress.selected_virtual_index, first + 2);
    assert_eq!(progress.selected_logical_index, 2);

    // one item further
    let (progress, next) = p.progress(first + 1, &snapshot(first + 1, 0, 5), sel);
    sel = next;
    assert_eq!(progress.selected_logical_index, 3);

    // an empty snapshot keeps the last selection
    let (progress, next) = p.progress(first + 1, &[], sel);
    assert_eq!(progress.selected_virtual_index, first + 3);
    assert_eq!(progress.selected_logical_index, 3);
    assert_eq!(next, sel);
}

#[test]
fn selection_wraps_past_end_of_data() {
    let p = five_by_hundred(7);
    let first = p.initial_scroll().first_visible_index;
    // 21 items scrolled: 23 items past the origin sit on the selector
    let (progress, _) = p.progress(
        first + 21,
        &snapshot(first + 21, 0, 5),
        RunningSelection::default(),
    );
    assert_eq!(progress.selected_virtual_index, first + 23);
    assert_eq!(progress.selected_logical_index, 23 % 7);
}

#[test]
fn scale_stays_in_bounds_for_random_snapshots() {
    let mut rng = Lcg::new(99);
    for _ in 0..100 {
        let visible = rng.gen_range_usize(1, 9);
        let range = rng.gen_range_usize(1, visible + 1);
        let p = Picker::new(
            PickerOptions::new(
                rng.gen_range_usize(1, 50),
                Sizing::Fill {
                    available_space: 200.0 + rng.gen_unit() * 800.0,
                },
            )
            .with_visible_item_count(visible)
            .with_scale_range(range)
            .with_show_partial_item(rng.next_u64() & 1 == 1)
            .with_inactive_scale(InactiveScale::Percent((rng.next_u64() % 101) as u8)),
        )
        .unwrap();
        let first = p.initial_scroll().first_visible_index;
        let scrolled = (rng.gen_unit() * p.item_size()) as i32;
        let items: Vec<VisibleItem> = (0..visible as i64 + 1)
            .map(|slot| {
                VisibleItem::new(
                    first + slot,
                    (slot as f32 * (p.item_size() + p.config().spacing)) as i32 - scrolled,
                )
            })
            .collect();

        let mut sel = RunningSelection::default();
        for it in &items {
            let (progress, next) = p.progress(it.index, &items, sel);
            sel = next;
            assert!(progress.scale >= p.config().inactive_scale && progress.scale <= 1.0);
            assert!(progress.selected_logical_index < p.total_item_count());
        }
    }
}

#[test]
fn options_reject_impossible_geometry() {
    assert_eq!(
        Picker::new(fixed(7, 100.0).with_visible_item_count(0)).unwrap_err(),
        ConfigError::NoVisibleItems
    );
    assert_eq!(
        Picker::new(fixed(7, 100.0).with_spacing(-1.0)).unwrap_err(),
        ConfigError::InvalidSpacing(-1.0)
    );
    assert_eq!(
        Picker::new(fixed(7, 0.0)).unwrap_err(),
        ConfigError::InvalidItemSize(0.0)
    );
    assert_eq!(
        Picker::new(PickerOptions::new(7, Sizing::Fill { available_space: -5.0 })).unwrap_err(),
        ConfigError::InvalidAvailableSpace(-5.0)
    );
    // 5 items and 4 gaps of 4px do not fit in 10px
    assert!(matches!(
        Picker::new(PickerOptions::new(7, Sizing::Fill { available_space: 10.0 })),
        Err(ConfigError::InvalidItemSize(_))
    ));
    assert_eq!(
        ConfigError::EmptyItems.to_string(),
        "the backing item list is empty"
    );
}

#[test]
fn options_clamp_into_range() {
    let c = fixed(7, 100.0)
        .with_selector_index(Some(9))
        .with_scale_range(0)
        .with_inactive_scale(InactiveScale::Percent(150))
        .resolve()
        .unwrap();
    assert_eq!(c.selector_index, 4);
    assert_eq!(c.scale_range, 1);
    assert_eq!(c.inactive_scale, 1.0);

    let c = fixed(7, 100.0).with_scale_range(9).resolve().unwrap();
    assert_eq!(c.scale_range, 5);

    let c = fixed(7, 100.0)
        .with_inactive_scale(InactiveScale::Sizes {
            active: 100.0,
            inactive: 85.0,
        })
        .resolve()
        .unwrap();
    assert_eq!(c.inactive_scale, 0.85);
}

#[test]
fn default_selector_sits_in_the_middle() {
    let sel = |n: usize, partial: bool| {
        fixed(7, 100.0)
            .with_visible_item_count(n)
            .with_show_partial_item(partial)
            .resolve()
            .unwrap()
            .selector_index
    };
    assert_eq!(sel(5, false), 2);
    assert_eq!(sel(5, true), 1);
    assert_eq!(sel(4, false), 1);
    assert_eq!(sel(1, false), 0);
    assert_eq!(sel(1, true), 0);
}

#[test]
fn sizing_modes_derive_each_other() {
    let p = Picker::new(
        PickerOptions::new(7, Sizing::Fixed { item_size: 100.0 }).with_visible_item_count(5),
    )
    .unwrap();
    // 5 * 100 + 4 * 4
    assert_eq!(p.list_dimension(), 516.0);

    let p = Picker::new(
        PickerOptions::new(7, Sizing::Fill {
            available_space: 500.0,
        })
        .with_spacing(0.0),
    )
    .unwrap();
    assert_eq!(p.item_size(), 100.0);
}

#[test]
fn snap_position_follows_layout() {
    assert_eq!(SnapPosition::for_layout(5, true), SnapPosition::HalfItem);
    assert_eq!(SnapPosition::for_layout(4, false), SnapPosition::Start);
    assert_eq!(SnapPosition::for_layout(5, false), SnapPosition::Center);
    assert_eq!(SnapPosition::for_layout(4, true), SnapPosition::Center);

    assert_eq!(SnapPosition::Center.offset_px(500.0, 100.0), 200.0);
    assert_eq!(SnapPosition::HalfItem.offset_px(500.0, 100.0), 50.0);

    let p = five_by_hundred(7);
    assert_eq!(p.snap_position(), SnapPosition::Center);
    assert_eq!(p.snap_offset_px(), 200.0);
}

#[test]
fn maximal_scale_range_reaches_every_visible_item() {
    let p = Picker::new(
        fixed(7, 100.0)
            .with_scale_range(5)
            .with_inactive_scale(InactiveScale::Percent(70)),
    )
    .unwrap();
    assert_eq!(p.scale_region_size(), 300.0);

    let first = p.initial_scroll().first_visible_index;
    let visible = snapshot(first, 0, 5);
    // slot 0 is 200px from the selector: a third of the way into the region
    let (edge, _) = p.progress(first, &visible, RunningSelection::default());
    assert!((edge.scale - 0.8).abs() < 1e-5, "{}", edge.scale);
    for it in &visible {
        let (progress, _) = p.progress(it.index, &visible, RunningSelection::default());
        assert!(progress.scale > p.config().inactive_scale);
    }
}
