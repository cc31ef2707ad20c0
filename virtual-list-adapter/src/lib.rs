//! Host-driven orchestration for the `virtual-list` engine.
//!
//! The `virtual-list` crate computes layout and windows. This crate wraps it in a stateful
//! [`VirtualList`] that a UI layer drives with events and serves through the [`Host`] trait:
//!
//! - scroll and resize events, `is_scrolling` / `is_user_scroll` debouncing
//! - programmatic scrolling to an offset or an item, optionally eased over animation frames
//! - sticky items pinned in front of the window
//! - incremental loading, one page request per newly reached page
//!
//! Time is passed in explicitly (`now_ms`), so the whole list can be driven deterministically
//! by a test or a simulation through [`HeadlessHost`].
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod host;
mod list;
mod navigator;
mod options;
mod timer;
mod tween;

#[cfg(test)]
mod tests;

pub use host::{FrameHandle, HeadlessHost, Host};
pub use list::{Item, MeasureRef, Rendered, ScrollInfo, ScrollSnapshot, VirtualList};
pub use navigator::{
    MAX_REFINE_ITERATIONS, OnComplete, REFINE_TOLERANCE, ScrollDuration, ScrollToItemOptions,
    ScrollToOptions, align_offset,
};
pub use options::{
    IsItemLoadedCallback, LoadMoreCallback, OnChangeCallback, OnResizeCallback,
    OnScrollCallback, SsrItemCount, UseIsScrolling, VirtualListOptions,
};
pub use timer::{DecayingFlag, QUIET_PERIOD_MS, ScrollActivity, Timer};
pub use tween::{Easing, EasingFn, Tween};

pub use virtual_list::{
    Align, Axis, ItemSize, MeasurementStore, PageRequest, Rect, StickyIndices, Window,
};
