use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::{MeasurementStore, Window};

/// Ascending, deduplicated set of item indexes that stick to the leading edge once scrolled
/// past.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StickyIndices(Arc<[usize]>);

impl StickyIndices {
    pub fn new(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut v: Vec<usize> = indices.into_iter().collect();
        v.sort_unstable();
        v.dedup();
        Self(v.into())
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, index: usize) -> bool {
        self.0.binary_search(&index).is_ok()
    }

    /// Greatest sticky index that is `<= index`.
    pub fn nearest_at_or_before(&self, index: usize) -> Option<usize> {
        let pos = self.0.partition_point(|&i| i <= index);
        pos.checked_sub(1).map(|p| self.0[p])
    }
}

impl<const N: usize> From<[usize; N]> for StickyIndices {
    fn from(indices: [usize; N]) -> Self {
        Self::new(indices)
    }
}

impl From<Vec<usize>> for StickyIndices {
    fn from(indices: Vec<usize>) -> Self {
        Self::new(indices)
    }
}

/// A sticky item that is not part of the overscanned range and must be prepended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PinnedItem {
    pub index: usize,
    pub size: u32,
}

/// Finds the sticky item that owns the current visible range, if it has scrolled out of the
/// rendered window.
pub fn resolve_sticky(
    sticky: &StickyIndices,
    store: &MeasurementStore,
    window: &Window,
) -> Option<PinnedItem> {
    let index = sticky.nearest_at_or_before(window.visible_start)?;
    if index >= window.overscan_start {
        return None;
    }
    let measure = store.get(index)?;
    Some(PinnedItem {
        index,
        size: measure.size,
    })
}

impl Window {
    /// Makes room for a pinned item in front of the overscanned range.
    ///
    /// The pinned item occupies the first `size` units of the inner content, so the leading
    /// margin shrinks and the inner size grows by the same amount.
    pub fn pin(&mut self, pinned: PinnedItem) {
        let size = pinned.size as u64;
        self.margin = self.margin.saturating_sub(size);
        self.inner_size = self.inner_size.saturating_add(size);
    }
}
