use std::sync::Arc;

use virtual_list::{Axis, DEFAULT_LOAD_MORE_COUNT, ItemSize, PageRequest, Rect, StickyIndices};

use crate::list::{Rendered, ScrollInfo};
use crate::navigator::ScrollDuration;
use crate::timer::QUIET_PERIOD_MS;
use crate::tween::Easing;

pub type OnScrollCallback = Arc<dyn Fn(ScrollInfo) + Send + Sync>;
pub type OnResizeCallback = Arc<dyn Fn(Rect) + Send + Sync>;
pub type OnChangeCallback = Arc<dyn Fn(&Rendered) + Send + Sync>;
pub type LoadMoreCallback = Arc<dyn Fn(PageRequest) + Send + Sync>;
/// Reports whether the page with the given index has already been loaded.
pub type IsItemLoadedCallback = Arc<dyn Fn(usize) -> bool + Send + Sync>;

/// Whether rendered items carry an `is_scrolling` flag.
#[derive(Clone, Default)]
pub enum UseIsScrolling {
    #[default]
    Off,
    On,
    /// Decides from the scroll distance of one event, e.g. only for fast flings.
    When(Arc<dyn Fn(u64) -> bool + Send + Sync>),
}

impl UseIsScrolling {
    pub fn when(f: impl Fn(u64) -> bool + Send + Sync + 'static) -> Self {
        Self::When(Arc::new(f))
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Off)
    }

    pub(crate) fn decide(&self, delta: u64) -> bool {
        match self {
            Self::Off => false,
            Self::On => true,
            Self::When(f) => f(delta),
        }
    }
}

impl std::fmt::Debug for UseIsScrolling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Off => f.write_str("Off"),
            Self::On => f.write_str("On"),
            Self::When(_) => f.write_str("When(..)"),
        }
    }
}

/// A precomputed first window for hosts that render before any layout is known.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SsrItemCount {
    /// Indexes `0..n`.
    Count(usize),
    /// Indexes `start..=stop`.
    Range(usize, usize),
}

impl SsrItemCount {
    pub(crate) fn indexes(self) -> std::ops::Range<usize> {
        match self {
            Self::Count(n) => 0..n,
            Self::Range(start, stop) => start..stop.saturating_add(1),
        }
    }
}

/// Configuration for [`crate::VirtualList`].
///
/// Closures are stored in `Arc`s, so cloning and then changing a few fields is cheap. The list
/// keeps the latest options and reads callbacks from them at call time.
#[derive(Clone)]
pub struct VirtualListOptions {
    pub item_count: usize,
    pub ssr_item_count: Option<SsrItemCount>,
    pub item_size: ItemSize,
    /// Scroll axis (`horizontal` when [`Axis::Horizontal`]).
    pub axis: Axis,
    pub overscan: usize,
    pub use_is_scrolling: UseIsScrolling,
    pub sticky_indices: StickyIndices,
    pub scroll_duration: ScrollDuration,
    pub scroll_easing: Easing,
    /// Page size for incremental loading.
    pub load_more_count: usize,
    pub is_item_loaded: Option<IsItemLoadedCallback>,
    pub load_more: Option<LoadMoreCallback>,
    pub on_scroll: Option<OnScrollCallback>,
    pub on_resize: Option<OnResizeCallback>,
    /// Fired whenever the rendered items or layout change.
    pub on_change: Option<OnChangeCallback>,
    /// Quiet interval before `is_scrolling` and `is_user_scroll` decay.
    pub quiet_period_ms: u64,
}

impl VirtualListOptions {
    pub fn new(item_count: usize, item_size: impl Into<ItemSize>) -> Self {
        Self {
            item_count,
            ssr_item_count: None,
            item_size: item_size.into(),
            axis: Axis::Vertical,
            overscan: 1,
            use_is_scrolling: UseIsScrolling::Off,
            sticky_indices: StickyIndices::default(),
            scroll_duration: ScrollDuration::Auto,
            scroll_easing: Easing::default(),
            load_more_count: DEFAULT_LOAD_MORE_COUNT,
            is_item_loaded: None,
            load_more: None,
            on_scroll: None,
            on_resize: None,
            on_change: None,
            quiet_period_ms: QUIET_PERIOD_MS,
        }
    }

    pub fn with_item_size_fn(
        mut self,
        f: impl Fn(usize, u32) -> Option<u32> + Send + Sync + 'static,
    ) -> Self {
        self.item_size = ItemSize::from_fn(f);
        self
    }

    pub fn with_ssr_item_count(mut self, ssr_item_count: Option<SsrItemCount>) -> Self {
        self.ssr_item_count = ssr_item_count;
        self
    }

    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.axis = if horizontal {
            Axis::Horizontal
        } else {
            Axis::Vertical
        };
        self
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_use_is_scrolling(mut self, use_is_scrolling: UseIsScrolling) -> Self {
        self.use_is_scrolling = use_is_scrolling;
        self
    }

    pub fn with_sticky_indices(mut self, sticky_indices: impl Into<StickyIndices>) -> Self {
        self.sticky_indices = sticky_indices.into();
        self
    }

    pub fn with_scroll_duration(mut self, scroll_duration: ScrollDuration) -> Self {
        self.scroll_duration = scroll_duration;
        self
    }

    pub fn with_scroll_easing(mut self, scroll_easing: Easing) -> Self {
        self.scroll_easing = scroll_easing;
        self
    }

    pub fn with_load_more_count(mut self, load_more_count: usize) -> Self {
        self.load_more_count = load_more_count;
        self
    }

    pub fn with_is_item_loaded(
        mut self,
        is_item_loaded: Option<impl Fn(usize) -> bool + Send + Sync + 'static>,
    ) -> Self {
        self.is_item_loaded = is_item_loaded.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_load_more(
        mut self,
        load_more: Option<impl Fn(PageRequest) + Send + Sync + 'static>,
    ) -> Self {
        self.load_more = load_more.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_scroll(
        mut self,
        on_scroll: Option<impl Fn(ScrollInfo) + Send + Sync + 'static>,
    ) -> Self {
        self.on_scroll = on_scroll.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_resize(mut self, on_resize: Option<impl Fn(Rect) + Send + Sync + 'static>) -> Self {
        self.on_resize = on_resize.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_on_change(
        mut self,
        on_change: Option<impl Fn(&Rendered) + Send + Sync + 'static>,
    ) -> Self {
        self.on_change = on_change.map(|f| Arc::new(f) as _);
        self
    }

    pub fn with_quiet_period_ms(mut self, quiet_period_ms: u64) -> Self {
        self.quiet_period_ms = quiet_period_ms;
        self
    }
}

impl std::fmt::Debug for VirtualListOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualListOptions")
            .field("item_count", &self.item_count)
            .field("ssr_item_count", &self.ssr_item_count)
            .field("item_size", &self.item_size)
            .field("axis", &self.axis)
            .field("overscan", &self.overscan)
            .field("use_is_scrolling", &self.use_is_scrolling)
            .field("sticky_indices", &self.sticky_indices)
            .field("scroll_duration", &self.scroll_duration)
            .field("scroll_easing", &self.scroll_easing)
            .field("load_more_count", &self.load_more_count)
            .field("quiet_period_ms", &self.quiet_period_ms)
            .finish_non_exhaustive()
    }
}
