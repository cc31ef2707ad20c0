use std::collections::BTreeSet;

/// Identifies one requested animation frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FrameHandle(pub u64);

/// Capabilities a UI layer provides to [`crate::VirtualList`].
///
/// The list never calls back into the host re-entrantly: every method is a request that the
/// host answers later through the list's event methods (`on_frame`, `on_item_size`, ...).
pub trait Host {
    /// Writes the container's real scroll position.
    fn set_scroll_offset(&mut self, offset: u64) {
        let _ = offset;
    }

    /// Asks for [`crate::VirtualList::on_frame`] to be called once before the next repaint.
    fn request_frame(&mut self) -> FrameHandle;

    /// Revokes a frame request. Late deliveries of a cancelled handle are ignored anyway.
    fn cancel_frame(&mut self, handle: FrameHandle) {
        let _ = handle;
    }

    /// Starts reporting the size of the mounted element for `index`.
    fn observe_item(&mut self, index: usize) {
        let _ = index;
    }

    /// Stops reporting the size of the element for `index`.
    fn unobserve_item(&mut self, index: usize) {
        let _ = index;
    }
}

/// A host with no UI behind it.
///
/// It records what the list asked for, which is enough for tests, simulations, and hosts
/// that poll (`pending_frame`) instead of registering callbacks.
#[derive(Clone, Debug, Default)]
pub struct HeadlessHost {
    scroll_offset: u64,
    next_frame: u64,
    pending_frame: Option<FrameHandle>,
    observed: BTreeSet<usize>,
}

impl HeadlessHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn scroll_offset(&self) -> u64 {
        self.scroll_offset
    }

    pub fn pending_frame(&self) -> Option<FrameHandle> {
        self.pending_frame
    }

    /// Takes the pending frame request, if any.
    pub fn take_frame(&mut self) -> Option<FrameHandle> {
        self.pending_frame.take()
    }

    pub fn observed(&self) -> &BTreeSet<usize> {
        &self.observed
    }
}

impl Host for HeadlessHost {
    fn set_scroll_offset(&mut self, offset: u64) {
        self.scroll_offset = offset;
    }

    fn request_frame(&mut self) -> FrameHandle {
        self.next_frame += 1;
        let handle = FrameHandle(self.next_frame);
        self.pending_frame = Some(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        if self.pending_frame == Some(handle) {
            self.pending_frame = None;
        }
    }

    fn observe_item(&mut self, index: usize) {
        self.observed.insert(index);
    }

    fn unobserve_item(&mut self, index: usize) {
        self.observed.remove(&index);
    }
}
