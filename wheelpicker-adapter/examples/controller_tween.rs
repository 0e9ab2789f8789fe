// Example: a host loop that lets the controller snap and tween to a tapped item.
use wheelpicker::{PickerOptions, Sizing, VisibleItem};
use wheelpicker_adapter::{Controller, Easing};

fn snapshot(first: i64, scroll: f32, step: f32) -> Vec<VisibleItem> {
    let first_slot = (scroll / step).floor() as i64;
    (0..6)
        .map(|slot| {
            let index = first_slot + slot;
            VisibleItem::new(first + index, (index as f32 * step - scroll) as i32)
        })
        .collect()
}

fn main() {
    let mut c = Controller::new(
        PickerOptions::new(10, Sizing::Fixed { item_size: 80.0 })
            .with_visible_item_count(5)
            .with_spacing(8.0),
    )
    .expect("valid options");

    let first = c.picker().initial_scroll().first_visible_index;
    let step = c.picker().item_size() + c.picker().config().spacing;

    // A fling settled 30px off the snap position.
    let mut scroll = 30.0f32;
    let visible = snapshot(first, scroll, step);
    if let Some(delta) = c.snap_delta(&visible) {
        scroll += delta;
    }
    c.frame(&snapshot(first, scroll, step));
    println!("after snap: scroll={scroll} selected={:?}", c.selected());

    // The user taps data item 7: tween there the short way around.
    let visible = snapshot(first, scroll, step);
    c.start_scroll_to_logical(7, &visible, 0, 240, Easing::EaseInOutCubic);

    let mut now_ms = 0u64;
    while c.is_animating() {
        now_ms += 16;
        if let Some(delta) = c.tick(now_ms) {
            scroll += delta;
        }
        let items = c.frame(&snapshot(first, scroll, step));
        let active = items
            .iter()
            .max_by(|a, b| a.progress.scale.total_cmp(&b.progress.scale))
            .map(|it| it.logical_index);
        println!("t={now_ms}ms scroll={scroll:.1} most_active={active:?}");
    }

    println!("done: selected={:?}", c.selected());
}
