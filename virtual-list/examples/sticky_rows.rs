// Example: section headers that stay pinned after scrolling past them.
use virtual_list::{ItemSize, MeasurementStore, StickyIndices, compute_window, resolve_sticky};

fn main() {
    let store = MeasurementStore::new(1_000, ItemSize::Fixed(30), 0);
    let headers = StickyIndices::new((0..1_000).step_by(25));

    for offset in [0u64, 700, 6_000, 20_000] {
        let mut w = compute_window(&store, offset, 300, 2).expect("list is not empty");
        let pinned = resolve_sticky(&headers, &store, &w);
        if let Some(p) = pinned {
            w.pin(p);
        }
        println!(
            "offset={offset} overscanned={}..={} pinned={:?} margin={} inner={}",
            w.overscan_start,
            w.overscan_stop,
            pinned.map(|p| p.index),
            w.margin,
            w.inner_size
        );
    }
}
