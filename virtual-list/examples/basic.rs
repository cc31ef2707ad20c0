// Example: fixed-size list and the window for a few scroll offsets.
use virtual_list::{ItemSize, MeasurementStore, compute_window};

fn main() {
    let store = MeasurementStore::new(1_000_000, ItemSize::Fixed(20), 0);
    println!("total_size={}", store.total_size());

    for offset in [0u64, 250, 123_456, store.total_size() - 400] {
        let w = compute_window(&store, offset, 400, 2).expect("list is not empty");
        println!(
            "offset={offset} visible={}..={} overscanned={}..={} margin={} inner={}",
            w.visible_start, w.visible_stop, w.overscan_start, w.overscan_stop, w.margin, w.inner_size
        );
    }
}
