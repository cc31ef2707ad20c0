use std::fmt;
use std::sync::Arc;

/// Maps animation progress `t ∈ [0, 1]` to eased progress.
pub type EasingFn = Arc<dyn Fn(f32) -> f32 + Send + Sync>;

#[derive(Clone, Default)]
pub enum Easing {
    Linear,
    SmoothStep,
    EaseInOutCubic,
    #[default]
    EaseInOutSine,
    Custom(EasingFn),
}

impl Easing {
    pub fn custom(f: impl Fn(f32) -> f32 + Send + Sync + 'static) -> Self {
        Self::Custom(Arc::new(f))
    }

    pub fn sample(&self, t: f32) -> f32 {
        match self {
            Self::Linear => t,
            Self::SmoothStep => t * t * (3.0 - 2.0 * t),
            Self::EaseInOutCubic => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let u = -2.0 * t + 2.0;
                    1.0 - (u * u * u) / 2.0
                }
            }
            Self::EaseInOutSine => -((std::f32::consts::PI * t).cos() - 1.0) / 2.0,
            Self::Custom(f) => f(t),
        }
    }
}

impl fmt::Debug for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("Linear"),
            Self::SmoothStep => f.write_str("SmoothStep"),
            Self::EaseInOutCubic => f.write_str("EaseInOutCubic"),
            Self::EaseInOutSine => f.write_str("EaseInOutSine"),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

/// One eased transition between two scroll offsets.
#[derive(Clone, Debug)]
pub struct Tween {
    pub from: u64,
    pub to: u64,
    pub start_ms: u64,
    pub duration_ms: u64,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: u64, to: u64, start_ms: u64, duration_ms: u64, easing: Easing) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms: duration_ms.max(1),
            easing,
        }
    }

    pub fn progress(&self, now_ms: u64) -> f32 {
        let elapsed = now_ms.saturating_sub(self.start_ms);
        (elapsed as f32 / self.duration_ms as f32).min(1.0)
    }

    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Offset at `now_ms`. The final sample is exactly `to`.
    pub fn sample(&self, now_ms: u64) -> u64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let eased = self.easing.sample(self.progress(now_ms)) as f64;
        let from = self.from as f64;
        let to = self.to as f64;
        let v = from + (to - from) * eased;
        v.round().max(0.0) as u64
    }
}
