//! The core of a virtualized list: cumulative item layout and the window of items to render.
//!
//! For the host-driven orchestrator (scroll events, smooth scrolling, sticky rows, incremental
//! loading), see the `virtual-list-adapter` crate.
//!
//! This crate is UI-agnostic and holds no timers. It provides:
//! - [`MeasurementStore`]: per-item offsets, estimated up front and corrected by measurements
//! - [`compute_window`]: scroll offset → visible and overscanned index ranges
//! - [`resolve_sticky`]: which sticky item (if any) must be pinned in front of the window
//! - [`LoadTrigger`]: when a new page of data should be requested
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod loader;
mod measure;
mod sticky;
mod types;
mod window;


pub use loader::{DEFAULT_LOAD_MORE_COUNT, LoadTrigger, PageRequest};
pub use measure::{DEFAULT_ITEM_SIZE, ItemSize, ItemSizeFn, MeasurementStore, SizingMode};
pub use sticky::{PinnedItem, StickyIndices, resolve_sticky};
pub use types::{Align, Axis, Measure, Rect, Window};
pub use window::{compute_window, find_start_binary, find_start_linear};
