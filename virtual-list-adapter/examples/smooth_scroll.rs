// Example: a frame loop driving smooth `scroll_to_item` through the headless host.
use virtual_list_adapter::{
    Align, Easing, Rect, ScrollToItemOptions, VirtualList, VirtualListOptions,
};

fn main() {
    let mut list = VirtualList::headless(
        VirtualListOptions::new(10_000, 20).with_scroll_easing(Easing::SmoothStep),
    );
    list.on_resize(Rect::new(320, 400), 0);

    list.scroll_to_item_with(
        ScrollToItemOptions::new(2_000)
            .with_align(Align::Center)
            .with_smooth(true),
        0,
        || println!("landed"),
    );

    let mut now_ms = 0u64;
    while let Some(frame) = list.host_mut().take_frame() {
        now_ms += 16;
        list.on_frame(frame, now_ms);
        if now_ms % 80 == 0 {
            let w = list.window().expect("list is not empty");
            println!(
                "t={now_ms} offset={} visible={}..={}",
                list.scroll_offset(),
                w.visible_start,
                w.visible_stop
            );
        }
    }

    list.tick(now_ms + 150);
    println!("done: {:?}", list.snapshot());
}
