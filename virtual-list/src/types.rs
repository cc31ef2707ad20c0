/// Where a scrolled-to item should land inside the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Align {
    Start,
    Center,
    End,
    /// Scroll only as far as needed to make the item fully visible.
    #[default]
    Auto,
}

/// The scroll axis of a list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    #[default]
    Vertical,
    Horizontal,
}

/// Size of the scroll container, as reported by the host's resize observer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Extent along the scroll axis.
    pub fn main(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Vertical => self.height,
            Axis::Horizontal => self.width,
        }
    }

    /// Extent across the scroll axis.
    pub fn cross(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Vertical => self.width,
            Axis::Horizontal => self.height,
        }
    }
}

/// Resolved layout geometry of one item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measure {
    pub index: usize,
    pub start: u64,
    pub end: u64, // start + size
    pub size: u32,
}

/// Output of the window calculator for one scroll offset.
///
/// All indexes are inclusive. `inner_size` is the content extent that follows `margin`, so
/// `margin + inner_size` never exceeds the total list size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Window {
    pub overscan_start: usize,
    pub overscan_stop: usize,
    pub visible_start: usize,
    pub visible_stop: usize,
    /// Leading spacer size (start of `overscan_start`).
    pub margin: u64,
    pub inner_size: u64,
}

impl Window {
    pub fn contains_visible(&self, index: usize) -> bool {
        (self.visible_start..=self.visible_stop).contains(&index)
    }

    pub fn contains_overscanned(&self, index: usize) -> bool {
        (self.overscan_start..=self.overscan_stop).contains(&index)
    }

    pub fn overscanned_len(&self) -> usize {
        self.overscan_stop + 1 - self.overscan_start
    }
}
