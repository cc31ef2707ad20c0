use std::sync::Arc;

use virtual_list::{Align, MeasurementStore};

use crate::host::{FrameHandle, Host};
use crate::timer::Timer;
use crate::tween::Tween;

/// Upper bound on `scroll_to_item` refinement passes for dynamically sized lists.
///
/// Each pass lands closer because the items it reveals get measured; the cap only matters
/// when measurements keep oscillating.
pub const MAX_REFINE_ITERATIONS: u32 = 16;

/// A refinement pass is done once the target is within this distance of the current offset.
pub const REFINE_TOLERANCE: u64 = 1;

/// Called once a scroll request has landed.
pub type OnComplete = Box<dyn FnOnce()>;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollToOptions {
    pub offset: u64,
    pub smooth: bool,
}

impl ScrollToOptions {
    pub fn smooth(offset: u64) -> Self {
        Self {
            offset,
            smooth: true,
        }
    }
}

impl From<u64> for ScrollToOptions {
    fn from(offset: u64) -> Self {
        Self {
            offset,
            smooth: false,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScrollToItemOptions {
    pub index: usize,
    pub align: Align,
    pub smooth: bool,
}

impl ScrollToItemOptions {
    pub fn new(index: usize) -> Self {
        Self {
            index,
            ..Self::default()
        }
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn with_smooth(mut self, smooth: bool) -> Self {
        self.smooth = smooth;
        self
    }
}

impl From<usize> for ScrollToItemOptions {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

/// Animation length for a smooth scroll.
#[derive(Clone, Default)]
pub enum ScrollDuration {
    /// `clamp(distance * 0.075, 100, 500)` milliseconds.
    #[default]
    Auto,
    Fixed(u64),
    /// Milliseconds as a function of the scroll distance.
    Distance(Arc<dyn Fn(u64) -> u64 + Send + Sync>),
}

impl ScrollDuration {
    pub fn from_fn(f: impl Fn(u64) -> u64 + Send + Sync + 'static) -> Self {
        Self::Distance(Arc::new(f))
    }

    pub fn resolve(&self, distance: u64) -> u64 {
        match self {
            Self::Auto => ((distance as f64 * 0.075) as u64).clamp(100, 500),
            Self::Fixed(ms) => *ms,
            Self::Distance(f) => f(distance),
        }
    }
}

impl std::fmt::Debug for ScrollDuration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Auto => f.write_str("Auto"),
            Self::Fixed(ms) => f.debug_tuple("Fixed").field(ms).finish(),
            Self::Distance(_) => f.write_str("Distance(..)"),
        }
    }
}

/// Computes the offset that brings `index` into view under `align`.
///
/// Returns `None` when the list is empty, `index` is out of range, or the whole content fits
/// in the viewport (nothing to scroll).
pub fn align_offset(
    store: &MeasurementStore,
    index: usize,
    align: Align,
    scroll_offset: u64,
    viewport_size: u32,
) -> Option<u64> {
    let item = store.get(index)?;
    let total = store.total_size();
    let view = viewport_size as u64;
    if total <= view {
        return None;
    }
    let max = total - view;
    let end_aligned = item.end.saturating_sub(view);

    let target = match align {
        Align::Start => {
            if total - item.start <= view {
                max
            } else {
                item.start
            }
        }
        Align::Center => {
            let to = item
                .start
                .saturating_add(item.size as u64 / 2)
                .saturating_sub(view / 2);
            if total.saturating_sub(to) <= view {
                max
            } else {
                to
            }
        }
        Align::End => {
            if item.end <= view {
                0
            } else {
                end_aligned
            }
        }
        Align::Auto => {
            if scroll_offset >= item.start {
                item.start
            } else if scroll_offset.saturating_add(view) <= item.end {
                end_aligned
            } else {
                scroll_offset
            }
        }
    };
    Some(target)
}

/// What happens once a scroll lands.
pub(crate) enum AfterScroll {
    Complete(Option<OnComplete>),
    /// Re-run `scroll_to_item` on the next tick, with fresh measurements.
    Refine {
        request: ScrollToItemOptions,
        iteration: u32,
        on_complete: Option<OnComplete>,
    },
}

pub(crate) struct Animation {
    pub(crate) tween: Tween,
    pub(crate) frame: FrameHandle,
    pub(crate) after: AfterScroll,
}

pub(crate) struct Refinement {
    pub(crate) request: ScrollToItemOptions,
    pub(crate) iteration: u32,
    pub(crate) on_complete: Option<OnComplete>,
    timer: Timer,
}

/// In-flight programmatic scrolling: at most one animation or one pending refinement.
#[derive(Default)]
pub(crate) struct Navigator {
    animation: Option<Animation>,
    refinement: Option<Refinement>,
}

impl Navigator {
    pub(crate) fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    pub(crate) fn is_idle(&self) -> bool {
        self.animation.is_none() && self.refinement.is_none()
    }

    /// Drops the in-flight request without running its completion.
    pub(crate) fn cancel(&mut self, host: &mut impl Host) {
        if let Some(animation) = self.animation.take() {
            vtrace!(frame = animation.frame.0, "cancel animation");
            host.cancel_frame(animation.frame);
        }
        self.refinement = None;
    }

    pub(crate) fn start_animation(&mut self, tween: Tween, host: &mut impl Host, after: AfterScroll) {
        let frame = host.request_frame();
        self.animation = Some(Animation {
            tween,
            frame,
            after,
        });
    }

    /// Returns the animation if `handle` is its current frame.
    pub(crate) fn animation_for(&mut self, handle: FrameHandle) -> Option<&mut Animation> {
        self.animation.as_mut().filter(|a| a.frame == handle)
    }

    pub(crate) fn finish_animation(&mut self) -> Option<Animation> {
        self.animation.take()
    }

    pub(crate) fn defer_refinement(
        &mut self,
        request: ScrollToItemOptions,
        iteration: u32,
        on_complete: Option<OnComplete>,
        now_ms: u64,
    ) {
        let mut timer = Timer::default();
        timer.schedule(now_ms, 0);
        self.refinement = Some(Refinement {
            request,
            iteration,
            on_complete,
            timer,
        });
    }

    pub(crate) fn take_due_refinement(&mut self, now_ms: u64) -> Option<Refinement> {
        if !self.refinement.as_mut()?.timer.fire(now_ms) {
            return None;
        }
        self.refinement.take()
    }
}
