//! Height animation primitives
//!
//! [`Tween`] is pure math: given an elapsed time it yields the eased height.
//! An [`Animator`] owns the frame loop that writes those heights into a
//! document; the browser uses `requestAnimationFrame`, tests use
//! [`SimulatedRuntime`](crate::SimulatedRuntime).

use crate::dom::Selector;
use serde::{Deserialize, Serialize};
use std::f32::consts::PI;
use std::time::Duration;

/// Easing curve applied to animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    /// Constant speed
    Linear,
    /// Slow start and end (`0.5 - cos(p * PI) / 2`)
    #[default]
    Swing,
}

impl Easing {
    /// Map linear progress in `[0, 1]` to eased progress in `[0, 1]`.
    pub fn apply(self, progress: f32) -> f32 {
        let p = progress.clamp(0.0, 1.0);
        match self {
            Easing::Linear => p,
            Easing::Swing => 0.5 - (p * PI).cos() / 2.0,
        }
    }
}

/// One height transition from `from` to `to` over `duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    pub from: f32,
    pub to: f32,
    pub duration: Duration,
    pub easing: Easing,
}

impl Tween {
    pub fn new(from: f32, to: f32, duration: Duration) -> Self {
        Self {
            from,
            to,
            duration,
            easing: Easing::default(),
        }
    }

    pub fn easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Linear progress in `[0, 1]` after `elapsed`.
    pub fn progress(&self, elapsed: Duration) -> f32 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased height after `elapsed`. Exactly `to` once the duration has passed.
    pub fn value_at(&self, elapsed: Duration) -> f32 {
        if elapsed >= self.duration {
            return self.to;
        }
        let eased = self.easing.apply(self.progress(elapsed));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// Identifies one running (or finished) animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationHandle(pub u64);

/// Capability that animates an element's inline height.
///
/// Implementations write `from` synchronously inside [`animate`](Animator::animate)
/// and `to` on the final frame, leaving the inline height in place.
pub trait Animator {
    fn animate(
        &self,
        target: &Selector,
        from: f32,
        to: f32,
        duration: Duration,
    ) -> AnimationHandle;

    /// Stop an animation where it is. Unknown or finished handles are ignored.
    fn stop(&self, handle: AnimationHandle);

    fn is_running(&self, handle: AnimationHandle) -> bool;
}
