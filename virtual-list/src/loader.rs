/// Default page size for incremental loading.
pub const DEFAULT_LOAD_MORE_COUNT: usize = 15;

/// A request for one page of items.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageRequest {
    pub start_index: usize,
    /// Inclusive; may lie past the current item count.
    pub stop_index: usize,
    pub page_index: usize,
    pub scroll_offset: u64,
    pub is_user_scroll: bool,
}

/// Decides when scrolling has progressed into a page that should be loaded.
///
/// Pages are `page_size` items long and indexed by `visible_stop / page_size`. A request is
/// emitted once per page transition, unless the caller reports the page as already loaded.
#[derive(Clone, Debug)]
pub struct LoadTrigger {
    page_size: usize,
    prev_visible_stop: Option<usize>,
    prev_page: Option<usize>,
}

impl Default for LoadTrigger {
    fn default() -> Self {
        Self::new(DEFAULT_LOAD_MORE_COUNT)
    }
}

impl LoadTrigger {
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size,
            prev_visible_stop: None,
            prev_page: None,
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        if self.page_size == page_size {
            return;
        }
        self.page_size = page_size;
        self.reset();
    }

    /// Forgets the last seen page, so the next check may request it again.
    pub fn reset(&mut self) {
        self.prev_visible_stop = None;
        self.prev_page = None;
    }

    pub fn page_of(&self, visible_stop: usize) -> Option<usize> {
        (self.page_size > 0).then(|| visible_stop / self.page_size)
    }

    /// Requests the first page when a list mounts, unless it is already loaded.
    pub fn initial(&mut self, is_loaded: impl Fn(usize) -> bool) -> Option<PageRequest> {
        if self.page_size == 0 {
            return None;
        }
        self.prev_page = Some(0);
        if is_loaded(0) {
            return None;
        }
        vdebug!(page_index = 0, "LoadTrigger::initial");
        Some(self.request(0, 0, false))
    }

    /// Checks a new visible stop against the previously seen page.
    pub fn check(
        &mut self,
        visible_stop: usize,
        scroll_offset: u64,
        is_user_scroll: bool,
        is_loaded: impl Fn(usize) -> bool,
    ) -> Option<PageRequest> {
        let page = self.page_of(visible_stop)?;
        if self.prev_visible_stop == Some(visible_stop) {
            return None;
        }
        self.prev_visible_stop = Some(visible_stop);
        if self.prev_page == Some(page) {
            return None;
        }
        self.prev_page = Some(page);
        if is_loaded(page) {
            return None;
        }
        vdebug!(page_index = page, visible_stop, "LoadTrigger::check");
        Some(self.request(page, scroll_offset, is_user_scroll))
    }

    fn request(&self, page: usize, scroll_offset: u64, is_user_scroll: bool) -> PageRequest {
        let start_index = page.saturating_mul(self.page_size);
        PageRequest {
            start_index,
            stop_index: start_index.saturating_add(self.page_size - 1),
            page_index: page,
            scroll_offset,
            is_user_scroll,
        }
    }
}
