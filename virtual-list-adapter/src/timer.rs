/// Quiet interval after which the scrolling flags decay.
pub const QUIET_PERIOD_MS: u64 = 150;

/// A cancellable one-shot task, advanced by the host's clock.
///
/// Scheduling while a task is pending replaces it; there is never more than one deadline.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Timer {
    due_ms: Option<u64>,
}

impl Timer {
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64) {
        self.due_ms = Some(now_ms.saturating_add(delay_ms));
    }

    pub fn cancel(&mut self) {
        self.due_ms = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due_ms.is_some()
    }

    pub fn due_ms(&self) -> Option<u64> {
        self.due_ms
    }

    /// Returns `true` (and clears the task) if the deadline has passed.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.due_ms {
            Some(due) if now_ms >= due => {
                self.due_ms = None;
                true
            }
            _ => false,
        }
    }
}

/// A boolean that can be pushed away from its resting value and decays back after a quiet
/// period.
#[derive(Clone, Copy, Debug)]
pub struct DecayingFlag {
    value: bool,
    resting: bool,
    quiet_ms: u64,
    timer: Timer,
}

impl DecayingFlag {
    pub fn new(resting: bool, quiet_ms: u64) -> Self {
        Self {
            value: resting,
            resting,
            quiet_ms,
            timer: Timer::default(),
        }
    }

    pub fn get(&self) -> bool {
        self.value
    }

    pub fn set_quiet_ms(&mut self, quiet_ms: u64) {
        self.quiet_ms = quiet_ms;
    }

    /// Sets `value` now and (re)schedules the decay.
    pub fn trigger(&mut self, value: bool, now_ms: u64) {
        self.value = value;
        self.timer.schedule(now_ms, self.quiet_ms);
    }

    /// Sets `value` until [`Self::release`] is called.
    pub fn hold(&mut self, value: bool) {
        self.value = value;
        self.timer.cancel();
    }

    /// Schedules the decay of a held value.
    pub fn release(&mut self, now_ms: u64) {
        self.timer.schedule(now_ms, self.quiet_ms);
    }

    /// Returns to the resting value immediately.
    pub fn reset(&mut self) {
        self.value = self.resting;
        self.timer.cancel();
    }

    /// Returns `true` if the flag decayed on this tick.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if !self.timer.fire(now_ms) {
            return false;
        }
        let changed = self.value != self.resting;
        self.value = self.resting;
        changed
    }
}

/// The two transient scrolling flags of a list.
#[derive(Clone, Copy, Debug)]
pub struct ScrollActivity {
    /// Mid-motion flag, `false` at rest.
    pub is_scrolling: DecayingFlag,
    /// `false` while a programmatic scroll is in flight, `true` at rest.
    pub is_user_scroll: DecayingFlag,
}

impl ScrollActivity {
    pub fn new(quiet_ms: u64) -> Self {
        Self {
            is_scrolling: DecayingFlag::new(false, quiet_ms),
            is_user_scroll: DecayingFlag::new(true, quiet_ms),
        }
    }

    pub fn set_quiet_ms(&mut self, quiet_ms: u64) {
        self.is_scrolling.set_quiet_ms(quiet_ms);
        self.is_user_scroll.set_quiet_ms(quiet_ms);
    }

    pub fn reset(&mut self) {
        self.is_scrolling.reset();
        self.is_user_scroll.reset();
    }
}

impl Default for ScrollActivity {
    fn default() -> Self {
        Self::new(QUIET_PERIOD_MS)
    }
}
