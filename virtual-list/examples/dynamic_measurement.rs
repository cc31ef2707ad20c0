// Example: estimates corrected by measurements, and the switch to the linear search.
use virtual_list::{ItemSize, MeasurementStore, compute_window};

fn main() {
    // Estimate rows from the container width, as a text-wrapping list would.
    let mut store = MeasurementStore::new(
        100,
        ItemSize::from_fn(|i, width| (i % 10 != 0).then(|| if width < 400 { 48 } else { 24 })),
        320,
    );
    println!(
        "estimated: total={} mode={:?}",
        store.total_size(),
        store.mode()
    );

    // The renderer reports real sizes, possibly out of order.
    for (index, size) in [(3, 60), (1, 30), (2, 90)] {
        let delta = store.apply(index, size);
        println!("apply({index}, {size}) delta={delta}");
    }
    println!(
        "measured: total={} mode={:?}",
        store.total_size(),
        store.mode()
    );

    let w = compute_window(&store, 100, 200, 1).expect("list is not empty");
    println!("window at 100: {w:?}");

    // A wider container re-estimates every row.
    store.set_cross_size(800);
    println!("after resize: total={}", store.total_size());
}
