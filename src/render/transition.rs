// SPDX-License-Identifier: MPL-2.0
//! Crossfade timing between two rendered diagrams.
//!
//! Mirrors the fixed animation contract of the slideshow: an optional delay,
//! then a 750 ms fade following an ease-out-exponential curve. All queries take
//! an explicit `Instant` so timing stays deterministic in tests.

use std::time::{Duration, Instant};

/// Fixed crossfade duration.
pub const DURATION: Duration = Duration::from_millis(crate::config::TRANSITION_DURATION_MS);

/// Ease-out-exponential curve: starts fast, decelerates into the target.
pub fn ease_out_expo(t: f32) -> f32 {
    if t >= 1.0 {
        1.0
    } else if t <= 0.0 {
        0.0
    } else {
        1.0 - 2.0_f32.powf(-10.0 * t)
    }
}

/// One in-flight crossfade from the current diagram to the incoming one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    started_at: Instant,
    delay: Duration,
    duration: Duration,
}

impl Transition {
    /// Starts a transition now with the configured inter-transition delay.
    pub fn start(delay: Duration) -> Self {
        Self::starting_at(Instant::now(), delay)
    }

    /// Starts a transition at an explicit instant (used by tests).
    pub fn starting_at(started_at: Instant, delay: Duration) -> Self {
        Self {
            started_at,
            delay,
            duration: DURATION,
        }
    }

    /// Linear progress in `[0, 1]` at `now`; stays at 0 through the delay.
    pub fn progress_at(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started_at);
        let Some(animating) = elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        (animating.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Eased opacity for the incoming diagram at `now`.
    pub fn opacity_at(&self, now: Instant) -> f32 {
        ease_out_expo(self.progress_at(now))
    }

    /// Whether the fade (delay included) has fully elapsed at `now`.
    pub fn is_finished_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started_at) >= self.delay + self.duration
    }
}
