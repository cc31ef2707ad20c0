// Example: page requests while scrolling, and a list that grows as pages arrive.
use std::sync::{Arc, Mutex};

use virtual_list_adapter::{PageRequest, Rect, VirtualList, VirtualListOptions};

const PAGE: usize = 20;

fn main() {
    let pending = Arc::new(Mutex::new(Vec::<PageRequest>::new()));
    let loaded = Arc::new(Mutex::new(Vec::<usize>::new()));

    let sink = pending.clone();
    let seen = loaded.clone();
    let options = VirtualListOptions::new(PAGE, 40)
        .with_load_more_count(PAGE)
        .with_is_item_loaded(Some(move |page: usize| {
            seen.lock().map(|p| p.contains(&page)).unwrap_or(false)
        }))
        .with_load_more(Some(move |req: PageRequest| {
            if let Ok(mut p) = sink.lock() {
                p.push(req);
            }
        }));

    let mut list = VirtualList::headless(options);
    list.on_resize(Rect::new(320, 400), 0);

    for (step, offset) in (0u64..4_000).step_by(200).enumerate() {
        list.on_scroll(offset, step as u64 * 16);

        let requests: Vec<PageRequest> = pending
            .lock()
            .map(|mut p| p.drain(..).collect())
            .unwrap_or_default();
        for req in requests {
            println!(
                "offset={offset} load page {} ({}..={})",
                req.page_index, req.start_index, req.stop_index
            );
            if let Ok(mut l) = loaded.lock() {
                l.push(req.page_index);
            }
            // Keep one page of placeholders past the loaded data.
            let count = list.store().len().max(req.stop_index + 1 + PAGE);
            list.set_item_count(count);
        }
    }
    println!(
        "items={} total={}",
        list.store().len(),
        list.store().total_size()
    );
}
