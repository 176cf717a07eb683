// SPDX-License-Identifier: MPL-2.0
//! Time-based tween for smooth scrolling between slides.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween {
    start: f32,
    target: f32,
    started_at: Instant,
    duration: Duration,
}

/// Eases a horizontal offset from its current value to a target.
#[derive(Debug, Clone, Default)]
pub struct ScrollAnimator {
    tween: Option<Tween>,
}

impl ScrollAnimator {
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.tween.is_some()
    }

    pub fn start(&mut self, current: f32, target: f32, duration: Duration, now: Instant) {
        self.tween = Some(Tween {
            start: current,
            target,
            started_at: now,
            duration,
        });
    }

    /// Offset for the frame at `now`, or `None` when idle.
    ///
    /// The frame reaching the end of the duration yields exactly the target
    /// and stops the animation.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        let tween = self.tween?;
        let elapsed = now.saturating_duration_since(tween.started_at);
        if elapsed >= tween.duration {
            self.tween = None;
            return Some(tween.target);
        }

        let t = (elapsed.as_secs_f32() / tween.duration.as_secs_f32()).clamp(0.0, 1.0);
        Some(tween.start + (tween.target - tween.start) * ease_out(t))
    }

    pub fn cancel(&mut self) {
        self.tween = None;
    }
}

/// Quadratic ease-out.
fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}
