//! Fixed-duration value animation.
//!
//! The door swing is an explicit record advanced by the frame loop, not a
//! deferred engine callback, so tests can step it deterministically and
//! anything reading the value mid-swing sees the true in-between state.

use greybox_controller::math::lerp;

/// A linear interpolation from `start` to `end` over a fixed duration.
///
/// Advance it once per frame with the frame's delta time and apply the
/// returned value. On completion the value lands exactly on `end`, so
/// state checks can compare against the target without an epsilon.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tween {
    start: f32,
    end: f32,
    duration: f32,
    elapsed: f32,
}

impl Tween {
    /// Start a tween from `start` to `end` over `duration` seconds.
    ///
    /// A non-positive duration completes on the first advance.
    pub fn new(start: f32, end: f32, duration: f32) -> Self {
        Self {
            start,
            end,
            duration: duration.max(0.0),
            elapsed: 0.0,
        }
    }

    /// Advance by `dt` seconds and return the current value.
    pub fn advance(&mut self, dt: f32) -> f32 {
        self.elapsed = (self.elapsed + dt).min(self.duration);
        self.value()
    }

    /// The value at the current elapsed time.
    pub fn value(&self) -> f32 {
        if self.finished() {
            self.end
        } else {
            lerp(self.start, self.end, self.elapsed / self.duration)
        }
    }

    /// True once the full duration has elapsed.
    #[inline]
    pub fn finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}
