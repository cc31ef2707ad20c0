use crate::{Measure, MeasurementStore, SizingMode, Window};

/// Maps a scroll offset to the items that must be rendered.
///
/// Returns `None` for an empty list. The search strategy for the first visible item follows
/// the store's [`SizingMode`]: binary search while every size is stable, a guarded linear
/// scan once any measured size has differed from its estimate.
pub fn compute_window(
    store: &MeasurementStore,
    scroll_offset: u64,
    viewport_size: u32,
    overscan: usize,
) -> Option<Window> {
    let measures = store.measures();
    let last = measures.len().checked_sub(1)?;

    let visible_start = match store.mode() {
        SizingMode::Static => find_start_binary(measures, scroll_offset),
        SizingMode::Dynamic => find_start_linear(measures, scroll_offset),
    };
    let visible_stop = find_stop(measures, visible_start, scroll_offset, viewport_size);

    let overscan_start = visible_start.saturating_sub(overscan);
    let overscan_stop = visible_stop.saturating_add(overscan).min(last);

    let margin = measures[overscan_start].start;
    let last_end = measures[last].end;
    let extent = if overscan_stop == last {
        last_end
    } else {
        let m = measures[overscan_stop];
        m.end.saturating_add(m.size as u64).min(last_end)
    };

    let window = Window {
        overscan_start,
        overscan_stop,
        visible_start,
        visible_stop,
        margin,
        inner_size: extent.saturating_sub(margin),
    };
    vtrace!(
        scroll_offset,
        viewport_size,
        visible_start,
        visible_stop,
        overscan_start,
        overscan_stop,
        "compute_window"
    );
    Some(window)
}

/// Index of the item containing `offset`, assuming `start` is nondecreasing.
///
/// Offsets past the end map to the last item.
pub fn find_start_binary(measures: &[Measure], offset: u64) -> usize {
    measures
        .partition_point(|m| m.start <= offset)
        .saturating_sub(1)
}

/// Index of the item containing `offset`, scanning forward from the first item.
///
/// The scan stops at the first pair whose starts are not strictly increasing, so a run of
/// entries that has not settled yet never pulls the window past it.
pub fn find_start_linear(measures: &[Measure], offset: u64) -> usize {
    let last = measures.len().saturating_sub(1);
    let mut index = 0;
    while index < last
        && measures[index].start < measures[index + 1].start
        && measures[index + 1].start <= offset
    {
        index += 1;
    }
    index
}

/// Last visible index (inclusive), accumulating sizes from `scroll_offset` until the viewport
/// end is reached.
fn find_stop(measures: &[Measure], start: usize, scroll_offset: u64, viewport_size: u32) -> usize {
    let viewport_end = scroll_offset.saturating_add(viewport_size as u64);
    let mut cursor = scroll_offset;
    let mut stop = start;
    while stop < measures.len() && cursor < viewport_end {
        cursor = cursor.saturating_add(measures[stop].size as u64);
        stop += 1;
    }
    stop.saturating_sub(1).max(start)
}
