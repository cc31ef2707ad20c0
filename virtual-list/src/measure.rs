use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::Measure;

/// Size used when an item size function has no answer for an index.
pub const DEFAULT_ITEM_SIZE: u32 = 50;

/// Estimates an item's size from its index and the viewport's cross-axis size.
///
/// Returning `None` falls back to [`DEFAULT_ITEM_SIZE`].
pub type ItemSizeFn = Arc<dyn Fn(usize, u32) -> Option<u32> + Send + Sync>;

/// How item sizes are estimated before (or instead of) being measured.
#[derive(Clone)]
pub enum ItemSize {
    Fixed(u32),
    /// Size as a function of `(index, cross_size)`. Row heights that depend on the container
    /// width (text wrapping) are the typical use.
    Dynamic(ItemSizeFn),
}

impl ItemSize {
    pub fn from_fn(f: impl Fn(usize, u32) -> Option<u32> + Send + Sync + 'static) -> Self {
        Self::Dynamic(Arc::new(f))
    }

    /// Returns `true` if both values estimate sizes the same way.
    pub fn same_as(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Fixed(a), Self::Fixed(b)) => a == b,
            (Self::Dynamic(a), Self::Dynamic(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Default for ItemSize {
    fn default() -> Self {
        Self::Fixed(DEFAULT_ITEM_SIZE)
    }
}

impl From<u32> for ItemSize {
    fn from(size: u32) -> Self {
        Self::Fixed(size)
    }
}

impl core::fmt::Debug for ItemSize {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Fixed(v) => f.debug_tuple("Fixed").field(v).finish(),
            Self::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

/// Which offset → index search the window calculator may use.
///
/// The store starts out [`SizingMode::Static`] and switches to [`SizingMode::Dynamic`] the
/// first time a measured size differs from the stored one. It never switches back.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SizingMode {
    #[default]
    Static,
    Dynamic,
}

/// Cumulative layout of every item in the list.
///
/// Entries are owned in one contiguous vector. Each `start` is the previous entry's `end`, so
/// changing one size recomputes every entry after it in a single forward pass.
#[derive(Clone, Debug)]
pub struct MeasurementStore {
    item_size: ItemSize,
    cross_size: u32,
    count: usize,
    measures: Vec<Measure>,
    mode: SizingMode,
}

impl MeasurementStore {
    pub fn new(count: usize, item_size: ItemSize, cross_size: u32) -> Self {
        let mut store = Self {
            item_size,
            cross_size,
            count,
            measures: Vec::new(),
            mode: SizingMode::Static,
        };
        store.rebuild(false);
        store
    }

    pub fn item_count(&self) -> usize {
        self.count
    }

    pub fn len(&self) -> usize {
        self.measures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
    }

    pub fn cross_size(&self) -> u32 {
        self.cross_size
    }

    pub fn item_size(&self) -> &ItemSize {
        &self.item_size
    }

    pub fn mode(&self) -> SizingMode {
        self.mode
    }

    pub fn has_dynamic_size(&self) -> bool {
        self.mode == SizingMode::Dynamic
    }

    pub fn measures(&self) -> &[Measure] {
        &self.measures
    }

    pub fn get(&self, index: usize) -> Option<Measure> {
        self.measures.get(index).copied()
    }

    /// End of the last item, or 0 for an empty list.
    pub fn total_size(&self) -> u64 {
        self.measures.last().map_or(0, |m| m.end)
    }

    /// Estimated size of `index` under the current cross size.
    pub fn estimate(&self, index: usize) -> u32 {
        match &self.item_size {
            ItemSize::Fixed(size) => *size,
            ItemSize::Dynamic(f) => f(index, self.cross_size).unwrap_or(DEFAULT_ITEM_SIZE),
        }
    }

    /// Resizes the store to the current item count and recomputes every offset.
    ///
    /// With `use_cache`, existing entries keep their (possibly measured) size; new entries and
    /// all entries without `use_cache` are re-estimated.
    pub fn rebuild(&mut self, use_cache: bool) {
        vdebug!(
            count = self.count,
            use_cache,
            mode = ?self.mode,
            "MeasurementStore::rebuild"
        );
        let prev = core::mem::take(&mut self.measures);
        self.measures.reserve_exact(self.count);

        let mut start = 0u64;
        for index in 0..self.count {
            let size = match prev.get(index) {
                Some(m) if use_cache => m.size,
                _ => self.estimate(index),
            };
            let end = start.saturating_add(size as u64);
            self.measures.push(Measure {
                index,
                start,
                end,
                size,
            });
            start = end;
        }
    }

    /// Updates the item count, keeping cached sizes for indexes that still exist.
    pub fn set_item_count(&mut self, count: usize) {
        if self.count == count {
            return;
        }
        self.count = count;
        self.rebuild(true);
    }

    /// Updates the cross size. Estimates may depend on it, so every size is re-estimated.
    pub fn set_cross_size(&mut self, cross_size: u32) {
        if self.cross_size == cross_size {
            return;
        }
        self.cross_size = cross_size;
        self.rebuild(false);
    }

    pub fn set_item_size(&mut self, item_size: ItemSize) {
        if self.item_size.same_as(&item_size) {
            return;
        }
        self.item_size = item_size;
        self.rebuild(false);
    }

    /// Records a measured size for `index` and returns the size delta.
    ///
    /// Offsets after `index` are recomputed before returning, so no caller ever reads a stale
    /// `start`. Out-of-range indexes are ignored.
    pub fn apply(&mut self, index: usize, measured_size: u32) -> i64 {
        let Some(entry) = self.measures.get_mut(index) else {
            vwarn!(index, count = self.count, "apply: out-of-range index");
            return 0;
        };
        if entry.size == measured_size {
            return 0;
        }
        let delta = measured_size as i64 - entry.size as i64;
        vtrace!(index, measured_size, delta, "MeasurementStore::apply");

        entry.size = measured_size;
        self.mode = SizingMode::Dynamic;
        self.recompute_from(index);
        delta
    }

    fn recompute_from(&mut self, index: usize) {
        let mut start = match index.checked_sub(1) {
            Some(prev) => self.measures[prev].end,
            None => 0,
        };
        for m in &mut self.measures[index..] {
            m.start = start;
            m.end = start.saturating_add(m.size as u64);
            start = m.end;
        }
    }
}
