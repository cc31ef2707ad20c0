use std::collections::BTreeSet;

use virtual_list::{LoadTrigger, MeasurementStore, Rect, Window, compute_window, resolve_sticky};

use crate::host::{FrameHandle, HeadlessHost, Host};
use crate::navigator::{
    AfterScroll, MAX_REFINE_ITERATIONS, Navigator, OnComplete, REFINE_TOLERANCE,
    ScrollToItemOptions, ScrollToOptions, align_offset,
};
use crate::options::VirtualListOptions;
use crate::timer::ScrollActivity;
use crate::tween::Tween;

/// Handle the renderer passes back to [`VirtualList::mount`] once the item's element exists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct MeasureRef {
    index: usize,
}

impl MeasureRef {
    pub fn index(&self) -> usize {
        self.index
    }
}

/// One item the renderer should mount.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub index: usize,
    /// Offset from the rendered window's margin.
    pub start: u64,
    pub size: u32,
    /// Cross-axis extent of the viewport (the width of a vertical list).
    pub cross_size: u32,
    /// `None` unless `use_is_scrolling` is enabled.
    pub is_scrolling: Option<bool>,
    pub is_sticky: bool,
    pub measure_ref: MeasureRef,
}

/// The published render output: items in order (a pinned sticky item first), plus the leading
/// margin and inner size the renderer applies along the scroll axis.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Rendered {
    pub items: Vec<Item>,
    pub margin: u64,
    pub inner_size: u64,
}

/// Range information passed to `on_scroll`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollInfo {
    pub overscan_start_index: usize,
    pub overscan_stop_index: usize,
    pub visible_start_index: usize,
    pub visible_stop_index: usize,
    pub scroll_offset: u64,
    pub scroll_forward: bool,
    pub user_scroll: bool,
}

/// A lightweight snapshot of the current scroll state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSnapshot {
    pub offset: u64,
    pub is_scrolling: bool,
    pub is_user_scroll: bool,
}

/// A virtualized list driven by host events.
///
/// The list owns the authoritative scroll offset and the measurement store. The host feeds it
/// events and answers its requests:
/// - `on_resize` / `on_scroll` when the container changes
/// - `mount` / `on_item_size` for each rendered item's size probe
/// - `on_frame` for frames requested through [`Host::request_frame`]
/// - `tick(now_ms)` on a timer or every frame, for debouncing and deferred work
///
/// Everything runs on the caller's thread; no handler observes a half-updated state.
pub struct VirtualList<H: Host = HeadlessHost> {
    options: VirtualListOptions,
    host: H,
    store: MeasurementStore,
    rect: Rect,
    scroll_offset: u64,
    window: Option<Window>,
    rendered: Rendered,
    activity: ScrollActivity,
    navigator: Navigator,
    loader: LoadTrigger,
    probes: BTreeSet<usize>,
    prev_item_index: usize,
    laid_out: bool,
    torn_down: bool,
}

impl VirtualList<HeadlessHost> {
    pub fn headless(options: VirtualListOptions) -> Self {
        Self::new(options, HeadlessHost::new())
    }
}

impl<H: Host> VirtualList<H> {
    /// Creates a list. Nothing is laid out until the first `on_resize`; a configured
    /// `ssr_item_count` seeds the rendered items until then.
    ///
    /// If `load_more` is set and page 0 is not loaded yet, it is requested immediately.
    pub fn new(options: VirtualListOptions, host: H) -> Self {
        vdebug!(
            item_count = options.item_count,
            overscan = options.overscan,
            "VirtualList::new"
        );
        let store = MeasurementStore::new(options.item_count, options.item_size.clone(), 0);
        let rendered = options
            .ssr_item_count
            .map(|seed| Rendered {
                items: seed
                    .indexes()
                    .map(|index| Item {
                        index,
                        start: 0,
                        size: 0,
                        cross_size: 0,
                        is_scrolling: None,
                        is_sticky: false,
                        measure_ref: MeasureRef { index },
                    })
                    .collect(),
                margin: 0,
                inner_size: 0,
            })
            .unwrap_or_default();

        let mut list = Self {
            loader: LoadTrigger::new(options.load_more_count),
            activity: ScrollActivity::new(options.quiet_period_ms),
            options,
            host,
            store,
            rect: Rect::default(),
            scroll_offset: 0,
            window: None,
            rendered,
            navigator: Navigator::default(),
            probes: BTreeSet::new(),
            prev_item_index: 0,
            laid_out: false,
            torn_down: false,
        };
        list.request_initial_page();
        list
    }

    pub fn options(&self) -> &VirtualListOptions {
        &self.options
    }

    /// Replaces the options. The store is rebuilt only for what changed: a new item size
    /// re-estimates every item, a new item count keeps cached sizes.
    pub fn set_options(&mut self, options: VirtualListOptions) {
        self.options = options;
        vtrace!(
            item_count = self.options.item_count,
            overscan = self.options.overscan,
            "VirtualList::set_options"
        );
        self.store.set_item_size(self.options.item_size.clone());
        self.store.set_item_count(self.options.item_count);
        self.loader.set_page_size(self.options.load_more_count);
        self.activity.set_quiet_ms(self.options.quiet_period_ms);
        if self.laid_out && !self.torn_down {
            self.render(self.scroll_offset);
        }
    }

    /// Clones the current options, applies `f`, then delegates to `set_options`.
    pub fn update_options(&mut self, f: impl FnOnce(&mut VirtualListOptions)) {
        let mut next = self.options.clone();
        f(&mut next);
        self.set_options(next);
    }

    pub fn set_item_count(&mut self, item_count: usize) {
        self.update_options(|o| o.item_count = item_count);
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn store(&self) -> &MeasurementStore {
        &self.store
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    /// The last computed window, before any sticky adjustment.
    pub fn window(&self) -> Option<Window> {
        self.window
    }

    pub fn rendered(&self) -> &Rendered {
        &self.rendered
    }

    pub fn items(&self) -> &[Item] {
        &self.rendered.items
    }

    pub fn is_scrolling(&self) -> bool {
        self.activity.is_scrolling.get()
    }

    pub fn is_user_scroll(&self) -> bool {
        self.activity.is_user_scroll.get()
    }

    pub fn is_animating(&self) -> bool {
        self.navigator.is_animating()
    }

    /// Returns `true` when no programmatic scroll is animating or waiting to refine.
    pub fn is_settled(&self) -> bool {
        self.navigator.is_idle()
    }

    pub fn snapshot(&self) -> ScrollSnapshot {
        ScrollSnapshot {
            offset: self.scroll_offset,
            is_scrolling: self.is_scrolling(),
            is_user_scroll: self.is_user_scroll(),
        }
    }

    /// Call this when the container's size changes (including the first layout).
    pub fn on_resize(&mut self, rect: Rect, now_ms: u64) {
        if self.torn_down {
            return;
        }
        vtrace!(width = rect.width, height = rect.height, now_ms, "on_resize");
        self.rect = rect;
        self.laid_out = true;
        self.store.set_cross_size(rect.cross(self.options.axis));
        if let Some(cb) = &self.options.on_resize {
            cb(rect);
        }
        self.render(self.scroll_offset);
    }

    /// Call this when the container reports a scroll position (user wheel/drag, or the echo of
    /// a position the list wrote itself).
    ///
    /// An in-flight programmatic scroll keeps running; only a newer scroll request or
    /// `teardown` cancels it.
    pub fn on_scroll(&mut self, scroll_offset: u64, now_ms: u64) {
        if self.torn_down || scroll_offset == self.scroll_offset {
            return;
        }
        self.apply_offset(scroll_offset, now_ms, false);
    }

    /// Attaches the size probe for a rendered item.
    pub fn mount(&mut self, measure_ref: MeasureRef) {
        if self.torn_down || measure_ref.index >= self.store.len() {
            return;
        }
        if self.probes.insert(measure_ref.index) {
            self.host.observe_item(measure_ref.index);
        }
    }

    /// Releases the size probe for an item that left the rendered set.
    pub fn unmount(&mut self, measure_ref: MeasureRef) {
        self.release_probe(measure_ref.index);
    }

    /// Call this when a probe reports the rendered size of an item.
    ///
    /// A size of zero means the element is gone and releases its probe. When an item above
    /// the scroll offset changes size while the list moves backwards, the offset is shifted by
    /// the same delta so the visible content stays put.
    pub fn on_item_size(&mut self, index: usize, size: u32) {
        if self.torn_down {
            return;
        }
        if size == 0 {
            self.release_probe(index);
            return;
        }
        let Some(measure) = self.store.get(index) else {
            return;
        };
        if measure.size != size {
            let delta = self.store.apply(index, size);
            if index < self.prev_item_index && measure.start < self.scroll_offset {
                let adjusted = self.scroll_offset.saturating_add_signed(delta);
                vtrace!(index, delta, adjusted, "compensate scroll offset");
                self.scroll_offset = adjusted;
                self.host.set_scroll_offset(adjusted);
            }
            self.prev_item_index = index;
            self.render(self.scroll_offset);
        }
    }

    /// Delivers a frame requested through [`Host::request_frame`]. Stale handles are ignored.
    pub fn on_frame(&mut self, handle: FrameHandle, now_ms: u64) {
        if self.torn_down {
            return;
        }
        let (offset, done) = {
            let Some(animation) = self.navigator.animation_for(handle) else {
                vtrace!(frame = handle.0, "stale frame");
                return;
            };
            let offset = animation.tween.sample(now_ms);
            let done = animation.tween.is_done(now_ms);
            if !done {
                animation.frame = self.host.request_frame();
            }
            (offset, done)
        };

        self.apply_offset(offset.min(self.max_scroll_offset()), now_ms, true);

        if done {
            if let Some(animation) = self.navigator.finish_animation() {
                self.activity.is_user_scroll.release(now_ms);
                self.finish(animation.after, now_ms);
            }
        }
    }

    /// Advances timers: decays the scrolling flags and runs deferred `scroll_to_item`
    /// refinement.
    pub fn tick(&mut self, now_ms: u64) {
        if self.torn_down {
            return;
        }
        if self.activity.is_scrolling.tick(now_ms) {
            self.render(self.scroll_offset);
        }
        self.activity.is_user_scroll.tick(now_ms);

        if let Some(refinement) = self.navigator.take_due_refinement(now_ms) {
            vdebug!(
                index = refinement.request.index,
                iteration = refinement.iteration,
                "refine scroll_to_item"
            );
            self.run_scroll_to_item(
                refinement.request,
                refinement.iteration,
                refinement.on_complete,
                now_ms,
            );
        }
    }

    pub fn scroll_to(&mut self, target: impl Into<ScrollToOptions>, now_ms: u64) {
        self.scroll_to_inner(target.into(), now_ms, None);
    }

    /// Scrolls to an offset and calls `on_complete` once it lands.
    ///
    /// A non-smooth scroll completes before this returns. A request superseded by another
    /// scroll never completes.
    pub fn scroll_to_with(
        &mut self,
        target: impl Into<ScrollToOptions>,
        now_ms: u64,
        on_complete: impl FnOnce() + 'static,
    ) {
        self.scroll_to_inner(target.into(), now_ms, Some(Box::new(on_complete)));
    }

    pub fn scroll_to_item(&mut self, target: impl Into<ScrollToItemOptions>, now_ms: u64) {
        self.scroll_to_item_inner(target.into(), now_ms, None);
    }

    /// Scrolls an item into view and calls `on_complete` once it lands.
    ///
    /// For dynamically sized lists the request is re-run on the next `tick` until the target
    /// offset stops moving (within one unit), since the items it reveals may not have been
    /// measured yet.
    pub fn scroll_to_item_with(
        &mut self,
        target: impl Into<ScrollToItemOptions>,
        now_ms: u64,
        on_complete: impl FnOnce() + 'static,
    ) {
        self.scroll_to_item_inner(target.into(), now_ms, Some(Box::new(on_complete)));
    }

    /// Cancels in-flight scrolling and releases every size probe. Later events are ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        vdebug!(probes = self.probes.len(), "VirtualList::teardown");
        self.torn_down = true;
        self.navigator.cancel(&mut self.host);
        self.activity.reset();
        for index in std::mem::take(&mut self.probes) {
            self.host.unobserve_item(index);
        }
    }

    fn scroll_to_inner(
        &mut self,
        target: ScrollToOptions,
        now_ms: u64,
        on_complete: Option<OnComplete>,
    ) {
        if self.torn_down {
            return;
        }
        vtrace!(offset = target.offset, smooth = target.smooth, "scroll_to");
        self.start_scroll(
            target.offset,
            target.smooth,
            now_ms,
            AfterScroll::Complete(on_complete),
        );
    }

    fn scroll_to_item_inner(
        &mut self,
        target: ScrollToItemOptions,
        now_ms: u64,
        on_complete: Option<OnComplete>,
    ) {
        if self.torn_down {
            return;
        }
        vtrace!(index = target.index, align = ?target.align, "scroll_to_item");
        self.run_scroll_to_item(target, 0, on_complete, now_ms);
    }

    fn run_scroll_to_item(
        &mut self,
        request: ScrollToItemOptions,
        iteration: u32,
        on_complete: Option<OnComplete>,
        now_ms: u64,
    ) {
        self.navigator.cancel(&mut self.host);

        let count = self.store.len();
        if count == 0 {
            complete(on_complete);
            return;
        }
        let index = request.index.min(count - 1);
        if self.store.has_dynamic_size() {
            self.store.rebuild(true);
        }

        let viewport = self.rect.main(self.options.axis);
        let Some(target) = align_offset(
            &self.store,
            index,
            request.align,
            self.scroll_offset,
            viewport,
        ) else {
            complete(on_complete);
            return;
        };

        if self.store.has_dynamic_size()
            && target.abs_diff(self.scroll_offset) <= REFINE_TOLERANCE
        {
            complete(on_complete);
            return;
        }

        let after = AfterScroll::Refine {
            request,
            iteration: iteration + 1,
            on_complete,
        };
        self.start_scroll(target, request.smooth, now_ms, after);
    }

    fn start_scroll(&mut self, target: u64, smooth: bool, now_ms: u64, after: AfterScroll) {
        self.navigator.cancel(&mut self.host);
        let target = target.min(self.max_scroll_offset());

        if !smooth {
            self.activity.is_user_scroll.trigger(false, now_ms);
            self.apply_offset(target, now_ms, true);
            self.finish(after, now_ms);
            return;
        }

        self.activity.is_user_scroll.hold(false);
        let from = self.scroll_offset;
        let duration = self.options.scroll_duration.resolve(from.abs_diff(target));
        let tween = Tween::new(
            from,
            target,
            now_ms,
            duration,
            self.options.scroll_easing.clone(),
        );
        self.navigator.start_animation(tween, &mut self.host, after);
    }

    /// Largest offset that still fills the viewport.
    fn max_scroll_offset(&self) -> u64 {
        self.store
            .total_size()
            .saturating_sub(self.rect.main(self.options.axis) as u64)
    }

    fn finish(&mut self, after: AfterScroll, now_ms: u64) {
        match after {
            AfterScroll::Complete(on_complete) => complete(on_complete),
            AfterScroll::Refine {
                request,
                iteration,
                on_complete,
            } => {
                if !self.store.has_dynamic_size() {
                    complete(on_complete);
                } else if iteration >= MAX_REFINE_ITERATIONS {
                    vwarn!(
                        index = request.index,
                        iteration,
                        "scroll_to_item did not converge"
                    );
                    complete(on_complete);
                } else {
                    self.navigator
                        .defer_refinement(request, iteration, on_complete, now_ms);
                }
            }
        }
    }

    fn apply_offset(&mut self, scroll_offset: u64, now_ms: u64, write_host: bool) {
        if write_host {
            self.host.set_scroll_offset(scroll_offset);
        }
        let prev = self.scroll_offset;
        if prev == scroll_offset {
            return;
        }
        self.scroll_offset = scroll_offset;

        let use_is_scrolling = &self.options.use_is_scrolling;
        if use_is_scrolling.is_enabled() {
            let scrolling = use_is_scrolling.decide(prev.abs_diff(scroll_offset));
            self.activity.is_scrolling.trigger(scrolling, now_ms);
        }

        self.render(scroll_offset);
        self.notify_scroll(prev, scroll_offset);
    }

    fn render(&mut self, scroll_offset: u64) {
        let axis = self.options.axis;
        let Some(window) = compute_window(
            &self.store,
            scroll_offset,
            self.rect.main(axis),
            self.options.overscan,
        ) else {
            self.window = None;
            self.publish(Rendered::default());
            return;
        };
        self.window = Some(window);

        let is_scrolling = self
            .options
            .use_is_scrolling
            .is_enabled()
            .then(|| self.activity.is_scrolling.get());
        let cross_size = self.rect.cross(axis);
        let sticky = &self.options.sticky_indices;

        let mut layout = window;
        let pinned = resolve_sticky(sticky, &self.store, &window);
        if let Some(p) = pinned {
            layout.pin(p);
        }

        let mut items = Vec::with_capacity(window.overscanned_len() + usize::from(pinned.is_some()));
        if let Some(p) = pinned {
            items.push(Item {
                index: p.index,
                start: 0,
                size: p.size,
                cross_size,
                is_scrolling,
                is_sticky: true,
                measure_ref: MeasureRef { index: p.index },
            });
        }
        for m in &self.store.measures()[window.overscan_start..=window.overscan_stop] {
            items.push(Item {
                index: m.index,
                start: m.start.saturating_sub(layout.margin),
                size: m.size,
                cross_size,
                is_scrolling,
                is_sticky: sticky.contains(m.index),
                measure_ref: MeasureRef { index: m.index },
            });
        }

        self.publish(Rendered {
            items,
            margin: layout.margin,
            inner_size: layout.inner_size,
        });
    }

    fn publish(&mut self, next: Rendered) {
        if next == self.rendered {
            return;
        }
        self.rendered = next;
        if let Some(cb) = &self.options.on_change {
            cb(&self.rendered);
        }
    }

    fn notify_scroll(&mut self, prev: u64, scroll_offset: u64) {
        let Some(window) = self.window else {
            return;
        };
        let user_scroll = self.activity.is_user_scroll.get();
        if let Some(cb) = &self.options.on_scroll {
            cb(ScrollInfo {
                overscan_start_index: window.overscan_start,
                overscan_stop_index: window.overscan_stop,
                visible_start_index: window.visible_start,
                visible_stop_index: window.visible_stop,
                scroll_offset,
                scroll_forward: scroll_offset > prev,
                user_scroll,
            });
        }

        let Some(load_more) = &self.options.load_more else {
            return;
        };
        let is_loaded = &self.options.is_item_loaded;
        if let Some(request) =
            self.loader
                .check(window.visible_stop, scroll_offset, user_scroll, |page| {
                    is_loaded.as_ref().is_some_and(|f| f(page))
                })
        {
            load_more(request);
        }
    }

    fn request_initial_page(&mut self) {
        let Some(load_more) = &self.options.load_more else {
            return;
        };
        let is_loaded = &self.options.is_item_loaded;
        if let Some(request) = self
            .loader
            .initial(|page| is_loaded.as_ref().is_some_and(|f| f(page)))
        {
            load_more(request);
        }
    }

    fn release_probe(&mut self, index: usize) {
        if self.probes.remove(&index) {
            vtrace!(index, "release probe");
            self.host.unobserve_item(index);
        }
    }
}

impl<H: Host> std::fmt::Debug for VirtualList<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualList")
            .field("options", &self.options)
            .field("rect", &self.rect)
            .field("scroll_offset", &self.scroll_offset)
            .field("window", &self.window)
            .field("rendered_len", &self.rendered.items.len())
            .field("activity", &self.activity)
            .field("probes", &self.probes)
            .field("torn_down", &self.torn_down)
            .finish_non_exhaustive()
    }
}

fn complete(on_complete: Option<OnComplete>) {
    if let Some(f) = on_complete {
        f();
    }
}
