// Example: minimal usage with a simulated scroll surface.
use wheelpicker::{InactiveScale, Picker, PickerOptions, RunningSelection, Sizing, VisibleItem};

fn main() {
    let picker = Picker::new(
        PickerOptions::new(12, Sizing::Fill {
            available_space: 520.0,
        })
        .with_visible_item_count(5)
        .with_inactive_scale(InactiveScale::Percent(70)),
    )
    .expect("valid options");

    let start = picker.initial_scroll();
    let step = picker.item_size() + picker.config().spacing;
    println!(
        "item_size={} selector={} region={}",
        picker.item_size(),
        picker.selector_position(),
        picker.scale_region_size()
    );

    // One running selection per slot; a real host keeps these next to its item views.
    let mut selections = vec![RunningSelection::default(); 6];

    for scrolled in [0.0f32, 40.0, 80.0, 104.0] {
        let first_slot = (scrolled / step) as i64;
        let visible: Vec<VisibleItem> = (0..6)
            .map(|slot| {
                let index = first_slot + slot;
                let offset = index as f32 * step - scrolled;
                VisibleItem::new(start.first_visible_index + index, offset as i32)
            })
            .collect();

        for (slot, item) in visible.iter().enumerate() {
            let (progress, next) = picker.progress(item.index, &visible, selections[slot]);
            selections[slot] = next;
            println!(
                "scrolled={scrolled:>5} item={} scale={:.3} color={:08x} selected={}",
                picker.logical_index(item.index),
                progress.scale,
                progress.color.to_argb(),
                progress.selected_logical_index
            );
        }
    }
}
