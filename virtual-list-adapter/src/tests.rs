use crate::*;

use std::cell::Cell;
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

fn mounted(options: VirtualListOptions) -> VirtualList {
    let mut list = VirtualList::headless(options);
    list.on_resize(Rect::new(300, 500), 0);
    list
}

fn indexes(list: &VirtualList) -> Vec<usize> {
    list.items().iter().map(|i| i.index).collect()
}

fn completion() -> (Rc<Cell<bool>>, impl FnOnce() + 'static) {
    let flag = Rc::new(Cell::new(false));
    let set = flag.clone();
    (flag, move || set.set(true))
}

/// Delivers pending frames at 16ms intervals until the animation stops requesting them.
fn run_frames(list: &mut VirtualList, mut now_ms: u64) -> (Vec<u64>, u64) {
    let mut offsets = Vec::new();
    while let Some(frame) = list.host_mut().take_frame() {
        now_ms += 16;
        list.on_frame(frame, now_ms);
        offsets.push(list.scroll_offset());
        assert!(offsets.len() < 1000, "animation never finished");
    }
    (offsets, now_ms)
}

#[test]
fn first_layout_renders_visible_items_plus_overscan() {
    let list = mounted(VirtualListOptions::new(1000, 100));

    assert_eq!(indexes(&list), vec![0, 1, 2, 3, 4, 5]);
    let rendered = list.rendered();
    assert_eq!(rendered.margin, 0);
    assert_eq!(rendered.inner_size, 700);
    let starts: Vec<u64> = rendered.items.iter().map(|i| i.start).collect();
    assert_eq!(starts, vec![0, 100, 200, 300, 400, 500]);
    assert!(rendered.items.iter().all(|i| i.cross_size == 300));
    assert!(rendered.items.iter().all(|i| i.is_scrolling.is_none()));
    assert!(rendered.items.iter().all(|i| !i.is_sticky));
}

#[test]
fn nothing_renders_before_the_first_layout() {
    let list = VirtualList::headless(VirtualListOptions::new(1000, 100));
    assert!(list.items().is_empty());
    assert_eq!(list.window(), None);
}

#[test]
fn scroll_event_moves_window_and_reports_ranges() {
    let infos = Arc::new(Mutex::new(Vec::new()));
    let sink = infos.clone();
    let mut list = mounted(
        VirtualListOptions::new(1000, 100)
            .with_on_scroll(Some(move |info: ScrollInfo| sink.lock().unwrap().push(info))),
    );

    list.on_scroll(200, 10);
    assert_eq!(indexes(&list), vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(list.rendered().margin, 100);
    assert_eq!(list.items()[0].start, 0);
    assert_eq!(list.items()[1].start, 100);

    list.on_scroll(100, 20);

    let infos = infos.lock().unwrap();
    assert_eq!(infos.len(), 2);
    assert_eq!(
        infos[0],
        ScrollInfo {
            overscan_start_index: 1,
            overscan_stop_index: 7,
            visible_start_index: 2,
            visible_stop_index: 6,
            scroll_offset: 200,
            scroll_forward: true,
            user_scroll: true,
        }
    );
    assert!(!infos[1].scroll_forward);
    assert_eq!(infos[1].visible_start_index, 1);
}

#[test]
fn repeated_scroll_offset_is_ignored() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = calls.clone();
    let mut list = mounted(
        VirtualListOptions::new(1000, 100).with_on_scroll(Some(move |_: ScrollInfo| {
            counter.fetch_add(1, Ordering::SeqCst);
        })),
    );

    list.on_scroll(300, 0);
    list.on_scroll(300, 5);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn end_of_list_clamps_overscan() {
    let mut list = mounted(VirtualListOptions::new(20, 100));
    list.on_scroll(1500, 0);

    let window = list.window().unwrap();
    assert_eq!(window.visible_start, 15);
    assert_eq!(window.visible_stop, 19);
    assert_eq!(window.overscan_stop, 19);
    assert_eq!(list.rendered().margin + list.rendered().inner_size, 2000);
}

#[test]
fn on_change_fires_only_when_output_changes() {
    let changes = Arc::new(AtomicUsize::new(0));
    let counter = changes.clone();
    let mut list = VirtualList::headless(VirtualListOptions::new(1000, 100).with_on_change(Some(
        move |_: &Rendered| {
            counter.fetch_add(1, Ordering::SeqCst);
        },
    )));

    list.on_resize(Rect::new(300, 500), 0);
    assert_eq!(changes.load(Ordering::SeqCst), 1);

    list.on_resize(Rect::new(300, 500), 1);
    assert_eq!(changes.load(Ordering::SeqCst), 1);

    // Still inside the first item: same window, same layout.
    list.on_scroll(10, 2);
    assert_eq!(changes.load(Ordering::SeqCst), 1);

    list.on_scroll(200, 3);
    assert_eq!(changes.load(Ordering::SeqCst), 2);
}

#[test]
fn resize_reports_rect_and_rebuilds_on_cross_change() {
    let rects = Arc::new(Mutex::new(Vec::new()));
    let sink = rects.clone();
    let mut list = VirtualList::headless(
        VirtualListOptions::new(100, 0)
            .with_item_size_fn(|_, width| Some(width / 2))
            .with_on_resize(Some(move |rect: Rect| sink.lock().unwrap().push(rect))),
    );

    list.on_resize(Rect::new(200, 500), 0);
    assert_eq!(list.store().get(3).unwrap().size, 100);

    list.on_resize(Rect::new(400, 500), 1);
    assert_eq!(list.store().get(3).unwrap().size, 200);
    assert!(list.items().iter().all(|i| i.cross_size == 400));

    assert_eq!(
        *rects.lock().unwrap(),
        vec![Rect::new(200, 500), Rect::new(400, 500)]
    );
}

#[test]
fn horizontal_lists_scroll_along_width() {
    let mut list = VirtualList::headless(VirtualListOptions::new(100, 100).with_horizontal(true));
    list.on_resize(Rect::new(500, 80), 0);

    assert_eq!(list.window().unwrap().visible_stop, 4);
    assert!(list.items().iter().all(|i| i.cross_size == 80));
}

#[test]
fn dynamic_item_size_estimates_are_used() {
    let list = mounted(
        VirtualListOptions::new(100, 0)
            .with_item_size_fn(|i, _| Some(if i % 2 == 0 { 50 } else { 100 })),
    );
    let starts: Vec<u64> = list.items().iter().take(4).map(|i| i.start).collect();
    assert_eq!(starts, vec![0, 50, 150, 200]);
}

#[test]
fn item_size_fn_returning_none_falls_back_to_default() {
    let list = mounted(VirtualListOptions::new(10, 0).with_item_size_fn(|_, _| None));
    assert_eq!(list.store().get(0).unwrap().size, virtual_list::DEFAULT_ITEM_SIZE);
}

#[test]
fn ssr_item_count_seeds_items_before_layout() {
    let list = VirtualList::headless(
        VirtualListOptions::new(100, 100).with_ssr_item_count(Some(SsrItemCount::Count(4))),
    );
    assert_eq!(indexes(&list), vec![0, 1, 2, 3]);

    let list = VirtualList::headless(
        VirtualListOptions::new(100, 100).with_ssr_item_count(Some(SsrItemCount::Range(3, 5))),
    );
    assert_eq!(indexes(&list), vec![3, 4, 5]);

    let mut list = list;
    list.on_resize(Rect::new(300, 500), 0);
    assert_eq!(indexes(&list), vec![0, 1, 2, 3, 4, 5]);
}

#[test]
fn shrinking_item_count_rerenders() {
    let mut list = mounted(VirtualListOptions::new(1000, 100));
    list.set_item_count(3);
    assert_eq!(indexes(&list), vec![0, 1, 2]);

    list.set_item_count(0);
    assert!(list.items().is_empty());
    assert_eq!(list.window(), None);
}

#[test]
fn update_options_keeps_measured_sizes_when_count_grows() {
    let mut list = mounted(VirtualListOptions::new(10, 100));
    list.on_item_size(2, 140);
    list.update_options(|o| o.item_count = 20);

    assert_eq!(list.store().len(), 20);
    assert_eq!(list.store().get(2).unwrap().size, 140);
    assert_eq!(list.store().total_size(), 2040);
}

#[test]
fn sticky_item_is_pinned_in_front_of_window() {
    let mut list = mounted(VirtualListOptions::new(1000, 100).with_sticky_indices([0, 50]));
    list.on_scroll(6100, 0);

    let items = list.items();
    assert_eq!(items[0].index, 50);
    assert!(items[0].is_sticky);
    assert_eq!(items[0].start, 0);
    assert_eq!(items[1].index, 60);
    assert_eq!(items[1].start, 100);
    assert_eq!(items.len(), 8);
    assert_eq!(list.rendered().margin, 5900);
    assert_eq!(list.rendered().inner_size, 900);
}

#[test]
fn sticky_item_inside_window_is_flagged_but_not_duplicated() {
    let mut list = mounted(VirtualListOptions::new(1000, 100).with_sticky_indices([0, 50]));
    list.on_scroll(5000, 0);

    let stickies: Vec<usize> = list
        .items()
        .iter()
        .filter(|i| i.is_sticky)
        .map(|i| i.index)
        .collect();
    assert_eq!(stickies, vec![50]);
    assert_eq!(list.items()[0].index, 49);
}

#[test]
fn load_more_requests_each_new_page_once() {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let sink = requests.clone();
    let mut list = mounted(
        VirtualListOptions::new(1000, 100)
            .with_load_more(Some(move |req: PageRequest| sink.lock().unwrap().push(req))),
    );
    assert_eq!(requests.lock().unwrap().len(), 1);
    assert_eq!(requests.lock().unwrap()[0].page_index, 0);

    list.on_scroll(1000, 0);
    assert_eq!(list.window().unwrap().visible_stop, 14);
    assert_eq!(requests.lock().unwrap().len(), 1);

    list.on_scroll(1100, 10);
    assert_eq!(list.window().unwrap().visible_stop, 15);
    list.on_scroll(1200, 20);

    let requests = requests.lock().unwrap();
    assert_eq!(requests.len(), 2);
    assert_eq!(
        requests[1],
        PageRequest {
            start_index: 15,
            stop_index: 29,
            page_index: 1,
            scroll_offset: 1100,
            is_user_scroll: true,
        }
    );
}

#[test]
fn loaded_pages_are_not_requested() {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let sink = requests.clone();
    let mut list = mounted(
        VirtualListOptions::new(1000, 100)
            .with_is_item_loaded(Some(|page: usize| page < 2))
            .with_load_more(Some(move |req: PageRequest| {
                sink.lock().unwrap().push(req.page_index)
            })),
    );

    list.on_scroll(1100, 0);
    list.on_scroll(2600, 10);
    assert_eq!(*requests.lock().unwrap(), vec![2]);
}

#[test]
fn is_scrolling_flag_decays_after_quiet_period() {
    let mut list = mounted(
        VirtualListOptions::new(1000, 100).with_use_is_scrolling(UseIsScrolling::On),
    );
    assert!(list.items().iter().all(|i| i.is_scrolling == Some(false)));

    list.on_scroll(300, 10);
    assert!(list.is_scrolling());
    assert!(list.items().iter().all(|i| i.is_scrolling == Some(true)));

    list.tick(100);
    assert!(list.is_scrolling());

    list.tick(10 + QUIET_PERIOD_MS);
    assert!(!list.is_scrolling());
    assert!(list.items().iter().all(|i| i.is_scrolling == Some(false)));
}

#[test]
fn is_scrolling_predicate_sees_scroll_distance() {
    let mut list = mounted(
        VirtualListOptions::new(1000, 100)
            .with_use_is_scrolling(UseIsScrolling::when(|delta| delta > 1000)),
    );

    list.on_scroll(300, 0);
    assert!(!list.is_scrolling());

    list.on_scroll(2000, 10);
    assert!(list.is_scrolling());
}

#[test]
fn scroll_to_sets_offset_immediately_and_completes() {
    let infos = Arc::new(Mutex::new(Vec::new()));
    let sink = infos.clone();
    let mut list = mounted(
        VirtualListOptions::new(1000, 100)
            .with_on_scroll(Some(move |info: ScrollInfo| sink.lock().unwrap().push(info))),
    );
    let (done, on_complete) = completion();

    list.scroll_to_with(1000u64, 0, on_complete);
    assert!(done.get());
    assert_eq!(list.scroll_offset(), 1000);
    assert_eq!(list.host().scroll_offset(), 1000);
    assert!(!list.is_user_scroll());
    assert!(!infos.lock().unwrap()[0].user_scroll);

    // The host echoes the write back; nothing changes.
    list.on_scroll(1000, 5);
    assert_eq!(infos.lock().unwrap().len(), 1);

    list.tick(QUIET_PERIOD_MS);
    assert!(list.is_user_scroll());
}

#[test]
fn smooth_scroll_eases_over_frames() {
    let mut list = mounted(VirtualListOptions::new(1000, 100));
    let (done, on_complete) = completion();

    list.scroll_to_with(ScrollToOptions::smooth(1000), 0, on_complete);
    assert!(list.is_animating());
    assert!(!list.is_user_scroll());
    assert_eq!(list.scroll_offset(), 0);

    let (offsets, now_ms) = run_frames(&mut list, 0);
    assert!(offsets.windows(2).all(|w| w[0] <= w[1]));
    assert_eq!(offsets.last(), Some(&1000));
    assert!(offsets.len() > 2);
    assert!(done.get());
    assert!(!list.is_animating());
    assert_eq!(list.host().scroll_offset(), 1000);

    // Still flagged programmatic until the quiet period passes.
    assert!(!list.is_user_scroll());
    list.tick(now_ms + QUIET_PERIOD_MS);
    assert!(list.is_user_scroll());
}

#[test]
fn scroll_duration_controls_animation_length() {
    let mut list = mounted(
        VirtualListOptions::new(1000, 100)
            .with_scroll_duration(ScrollDuration::Fixed(160))
            .with_scroll_easing(Easing::Linear),
    );
    list.scroll_to(ScrollToOptions::smooth(1600), 0);

    let (offsets, _) = run_frames(&mut list, 0);
    assert_eq!(offsets.len(), 10);
    assert_eq!(offsets[0], 160);
    assert_eq!(offsets[9], 1600);
}

#[test]
fn new_scroll_request_supersedes_animation() {
    let mut list = mounted(VirtualListOptions::new(1000, 100));
    let (first, on_first) = completion();
    let (second, on_second) = completion();

    list.scroll_to_with(ScrollToOptions::smooth(5000), 0, on_first);
    let stale = list.host_mut().take_frame().unwrap();
    list.on_frame(stale, 16);
    assert!(list.host().pending_frame().is_some());

    list.scroll_to_with(3000u64, 20, on_second);
    assert!(second.get());
    assert!(!list.is_animating());
    assert!(list.host().pending_frame().is_none());

    list.on_frame(stale, 32);
    assert_eq!(list.scroll_offset(), 3000);
    assert!(!first.get());
}

#[test]
fn host_scroll_during_animation_does_not_cancel_it() {
    let mut list = mounted(VirtualListOptions::new(1000, 100));
    let (done, on_complete) = completion();

    list.scroll_to_with(ScrollToOptions::smooth(5000), 0, on_complete);
    let frame = list.host_mut().take_frame().unwrap();
    list.on_frame(frame, 16);
    let reached = list.scroll_offset();

    list.on_scroll(reached + 7, 20);
    assert!(list.is_animating());
    assert!(list.host().pending_frame().is_some());
    assert_eq!(list.scroll_offset(), reached + 7);

    let (offsets, _) = run_frames(&mut list, 20);
    assert_eq!(offsets.last(), Some(&5000));
    assert!(done.get());
}

#[test]
fn scroll_to_past_the_end_is_clamped() {
    let mut list = mounted(VirtualListOptions::new(1000, 100));
    list.scroll_to(200_000u64, 0);

    assert_eq!(list.scroll_offset(), 99_500);
    assert_eq!(list.host().scroll_offset(), 99_500);
    let window = list.window().unwrap();
    assert_eq!(window.visible_start, 995);
    assert_eq!(window.visible_stop, 999);
    assert_eq!(indexes(&list), vec![994, 995, 996, 997, 998, 999]);
}

#[test]
fn smooth_scroll_past_the_end_completes_against_clamping_host() {
    let mut list = mounted(VirtualListOptions::new(1000, 100));
    let (done, on_complete) = completion();

    list.scroll_to_with(ScrollToOptions::smooth(200_000), 0, on_complete);

    // The container clamps to its own maximum and reports the result back.
    let mut now_ms = 0;
    let mut frames = 0;
    while let Some(frame) = list.host_mut().take_frame() {
        now_ms += 16;
        list.on_frame(frame, now_ms);
        let echoed = list.host().scroll_offset().min(99_500);
        list.on_scroll(echoed, now_ms);
        frames += 1;
        assert!(frames < 1000, "animation never finished");
    }

    assert!(done.get());
    assert_eq!(list.scroll_offset(), 99_500);
    assert!(!list.is_animating());
}

#[test]
fn scroll_to_item_aligns_to_start() {
    let mut list = mounted(VirtualListOptions::new(1000, 100));
    let (done, on_complete) = completion();

    list.scroll_to_item_with(ScrollToItemOptions::new(50), 0, on_complete);
    assert!(done.get());
    assert_eq!(list.scroll_offset(), 5000);
    assert_eq!(list.window().unwrap().visible_start, 50);

    let item = list.items().iter().find(|i| i.index == 50).unwrap();
    assert_eq!(list.rendered().margin + item.start, 5000);
}

#[test]
fn scroll_to_item_clamps_index() {
    let mut list = mounted(VirtualListOptions::new(100, 100));
    list.scroll_to_item(ScrollToItemOptions::new(5000).with_align(Align::End), 0);
    assert_eq!(list.scroll_offset(), 9500);
}

#[test]
fn scroll_to_item_completes_when_content_fits() {
    let mut list = mounted(VirtualListOptions::new(3, 100));
    let (done, on_complete) = completion();

    list.scroll_to_item_with(ScrollToItemOptions::new(2), 0, on_complete);
    assert!(done.get());
    assert_eq!(list.scroll_offset(), 0);
    assert!(list.is_user_scroll());
}

#[test]
fn scroll_to_item_on_empty_list_completes() {
    let mut list = mounted(VirtualListOptions::new(0, 100));
    let (done, on_complete) = completion();
    list.scroll_to_item_with(ScrollToItemOptions::new(0), 0, on_complete);
    assert!(done.get());
}

#[test]
fn smooth_scroll_to_item_on_static_list_completes_after_frames() {
    let mut list = mounted(VirtualListOptions::new(1000, 100));
    let (done, on_complete) = completion();

    list.scroll_to_item_with(
        ScrollToItemOptions::new(20).with_smooth(true),
        0,
        on_complete,
    );
    assert!(!done.get());
    run_frames(&mut list, 0);
    assert!(done.get());
    assert_eq!(list.scroll_offset(), 2000);
    assert!(list.is_settled());
}

#[test]
fn align_policies() {
    let store = MeasurementStore::new(100, ItemSize::Fixed(100), 0);
    let at = |index, align, offset| align_offset(&store, index, align, offset, 500);

    assert_eq!(at(10, Align::Start, 0), Some(1000));
    assert_eq!(at(98, Align::Start, 0), Some(9500));

    assert_eq!(at(10, Align::Center, 0), Some(800));
    assert_eq!(at(99, Align::Center, 0), Some(9500));

    assert_eq!(at(2, Align::End, 0), Some(0));
    assert_eq!(at(10, Align::End, 0), Some(600));

    assert_eq!(at(10, Align::Auto, 2000), Some(1000));
    assert_eq!(at(10, Align::Auto, 0), Some(600));
    assert_eq!(at(10, Align::Auto, 800), Some(800));

    assert_eq!(at(100, Align::Start, 0), None);

    let small = MeasurementStore::new(3, ItemSize::Fixed(100), 0);
    assert_eq!(align_offset(&small, 1, Align::Start, 0, 500), None);
}

#[test]
fn scroll_to_item_refines_dynamic_lists_until_stable() {
    let mut list = mounted(VirtualListOptions::new(100, 100));
    list.on_item_size(0, 120);
    assert!(list.store().has_dynamic_size());

    let (done, on_complete) = completion();
    list.scroll_to_item_with(ScrollToItemOptions::new(50), 0, on_complete);
    assert_eq!(list.scroll_offset(), 5020);
    assert!(!done.get());
    assert!(!list.is_settled());

    // Items revealed above the target turn out taller than estimated.
    for index in 40..50 {
        list.on_item_size(index, 150);
    }

    list.tick(1);
    assert_eq!(list.scroll_offset(), 5520);
    assert!(!done.get());

    list.tick(2);
    assert!(done.get());
    assert!(list.is_settled());
    assert_eq!(list.store().get(50).unwrap().start, 5520);
}

#[test]
fn scroll_to_item_refinement_is_capped() {
    let mut list = mounted(VirtualListOptions::new(1000, 100));
    list.on_item_size(0, 120);

    let (done, on_complete) = completion();
    list.scroll_to_item_with(ScrollToItemOptions::new(500), 0, on_complete);

    // Keep moving the target: every pass grows an item above it.
    let mut now_ms = 0;
    let mut passes = 0;
    while !done.get() {
        passes += 1;
        assert!(passes <= MAX_REFINE_ITERATIONS as usize, "refinement never stopped");
        list.on_item_size(1, 100 + passes as u32 * 10);
        now_ms += 1;
        list.tick(now_ms);
    }
    assert!(list.is_settled());
}

#[test]
fn measurement_above_offset_compensates_backward_scroll() {
    let mut list = mounted(VirtualListOptions::new(100, 100));
    list.on_scroll(5000, 0);

    list.on_item_size(50, 110);
    assert_eq!(list.scroll_offset(), 5000);
    list.on_item_size(48, 130);
    assert_eq!(list.scroll_offset(), 5030);
    assert_eq!(list.host().scroll_offset(), 5030);

    list.on_item_size(60, 90);
    assert_eq!(list.scroll_offset(), 5030);
}

#[test]
fn unchanged_measurement_does_not_count_as_previous_change() {
    let mut list = mounted(VirtualListOptions::new(100, 100));
    list.on_scroll(5000, 0);

    list.on_item_size(40, 130);
    assert_eq!(list.scroll_offset(), 5000);

    list.on_item_size(60, 100);
    list.on_item_size(45, 130);
    assert_eq!(list.scroll_offset(), 5000);
    assert_eq!(list.host().scroll_offset(), 0);
}

#[test]
fn forward_measurements_do_not_shift_offset() {
    let mut list = mounted(VirtualListOptions::new(100, 100));
    list.on_scroll(5000, 0);

    for index in 49..56 {
        list.on_item_size(index, 80);
    }
    assert_eq!(list.scroll_offset(), 5000);
    assert_eq!(list.store().get(50).unwrap().start, 4980);
}

#[test]
fn probes_follow_mount_and_zero_size() {
    let mut list = mounted(VirtualListOptions::new(100, 100));
    let refs: Vec<MeasureRef> = list.items().iter().map(|i| i.measure_ref).collect();
    for r in &refs {
        list.mount(*r);
    }
    assert_eq!(list.host().observed().len(), refs.len());

    list.on_item_size(refs[0].index(), 0);
    assert!(!list.host().observed().contains(&refs[0].index()));
    assert_eq!(list.store().get(0).unwrap().size, 100);

    list.unmount(refs[1]);
    assert!(!list.host().observed().contains(&refs[1].index()));
}

#[test]
fn teardown_releases_probes_and_ignores_later_events() {
    let mut list = mounted(VirtualListOptions::new(100, 100));
    let refs: Vec<MeasureRef> = list.items().iter().map(|i| i.measure_ref).collect();
    for r in &refs {
        list.mount(*r);
    }
    list.scroll_to(ScrollToOptions::smooth(3000), 0);

    list.teardown();
    assert!(list.host().observed().is_empty());
    assert!(list.host().pending_frame().is_none());
    assert!(!list.is_animating());

    list.on_scroll(400, 10);
    list.scroll_to(800u64, 20);
    assert_eq!(list.scroll_offset(), 0);

    list.teardown();
}

#[test]
fn snapshot_reflects_scroll_state() {
    let mut list = mounted(
        VirtualListOptions::new(1000, 100).with_use_is_scrolling(UseIsScrolling::On),
    );
    list.on_scroll(250, 0);
    assert_eq!(
        list.snapshot(),
        ScrollSnapshot {
            offset: 250,
            is_scrolling: true,
            is_user_scroll: true,
        }
    );
}

#[test]
fn tween_reaches_target_exactly() {
    let tween = Tween::new(100, 900, 1000, 200, Easing::Linear);
    assert_eq!(tween.sample(1000), 100);
    assert_eq!(tween.sample(1100), 500);
    assert_eq!(tween.sample(1200), 900);
    assert_eq!(tween.sample(5000), 900);
    assert!(tween.is_done(1200));

    let backwards = Tween::new(900, 100, 0, 100, Easing::SmoothStep);
    assert_eq!(backwards.sample(50), 500);

    let zero = Tween::new(0, 10, 0, 0, Easing::default());
    assert_eq!(zero.duration_ms, 1);
    assert_eq!(zero.sample(1), 10);
}

#[test]
fn easing_curves_hit_endpoints() {
    for easing in [
        Easing::Linear,
        Easing::SmoothStep,
        Easing::EaseInOutCubic,
        Easing::EaseInOutSine,
    ] {
        assert!(easing.sample(0.0).abs() < 1e-6, "{easing:?}");
        assert!((easing.sample(1.0) - 1.0).abs() < 1e-6, "{easing:?}");
        assert!((easing.sample(0.5) - 0.5).abs() < 1e-6, "{easing:?}");
    }
    assert_eq!(Easing::custom(|t| t * t).sample(0.5), 0.25);
}

#[test]
fn auto_scroll_duration_is_clamped() {
    assert_eq!(ScrollDuration::Auto.resolve(0), 100);
    assert_eq!(ScrollDuration::Auto.resolve(4000), 300);
    assert_eq!(ScrollDuration::Auto.resolve(100_000), 500);
    assert_eq!(ScrollDuration::Fixed(42).resolve(9), 42);
    assert_eq!(ScrollDuration::from_fn(|d| d / 2).resolve(300), 150);
}

#[test]
fn timer_replaces_pending_task() {
    let mut timer = Timer::default();
    timer.schedule(0, 100);
    timer.schedule(50, 100);
    assert_eq!(timer.due_ms(), Some(150));
    assert!(!timer.fire(120));
    assert!(timer.fire(150));
    assert!(!timer.is_pending());
    assert_eq!(timer.due_ms(), None);
    assert!(!timer.fire(1000));
}

#[test]
fn decaying_flag_hold_and_release() {
    let mut flag = DecayingFlag::new(true, 150);
    flag.hold(false);
    assert!(!flag.tick(10_000));
    assert!(!flag.get());

    flag.release(100);
    assert!(!flag.tick(200));
    assert!(flag.tick(250));
    assert!(flag.get());

    flag.trigger(true, 300);
    assert!(!flag.tick(450));
}

#[test]
fn option_changes_before_layout_keep_the_seed() {
    let mut list = VirtualList::headless(
        VirtualListOptions::new(100, 100).with_ssr_item_count(Some(SsrItemCount::Count(3))),
    );
    list.update_options(|o| o.overscan = 2);
    assert_eq!(indexes(&list), vec![0, 1, 2]);
}
