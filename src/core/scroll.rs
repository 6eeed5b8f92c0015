//! Scroll source contract and the smoothed scroll tracker behind it.

use super::constants::{SCROLL_SNAP_EPSILON_PX, SCROLL_SPEED_NORM_PX, SCROLL_SPEED_SMOOTHING};

/// Per-frame snapshot read by the orchestrator after stepping the source.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollState {
    /// Smoothed scroll offset in CSS pixels.
    pub offset: f32,
    /// Signed speed sample, roughly in [-1, 1], decaying to 0 when idle.
    pub speed: f32,
}

/// Anything that can supply a scroll offset and speed once per frame.
pub trait ScrollSource {
    /// Advance one frame.
    fn step(&mut self);
    /// Values produced by the last `step`.
    fn state(&self) -> ScrollState;
    /// Viewport or content size changed.
    fn resize(&mut self) {}
}

/// Lerped scroll position with a smoothed velocity sample.
#[derive(Clone, Debug)]
pub struct SmoothScroll {
    target: f32,
    current: f32,
    ease: f32,
    speed_sample: f32,
}

impl SmoothScroll {
    pub fn new(ease: f32) -> Self {
        Self {
            target: 0.0,
            current: 0.0,
            ease: ease.clamp(0.0, 1.0),
            speed_sample: 0.0,
        }
    }

    /// Start already settled at `offset` (e.g. page restored mid-scroll).
    pub fn jump_to(&mut self, offset: f32) {
        self.target = offset;
        self.current = offset;
        self.speed_sample = 0.0;
    }

    /// Latest raw document scroll position the tracker should follow.
    pub fn set_target(&mut self, offset: f32) {
        self.target = offset;
    }

    pub fn target(&self) -> f32 {
        self.target
    }
}

impl ScrollSource for SmoothScroll {
    fn step(&mut self) {
        let gap = self.target - self.current;
        let speed = (gap / SCROLL_SPEED_NORM_PX).clamp(-1.0, 1.0);
        self.speed_sample += (speed - self.speed_sample) * SCROLL_SPEED_SMOOTHING;
        self.current += gap * self.ease;
        if (self.target - self.current).abs() < SCROLL_SNAP_EPSILON_PX {
            self.current = self.target;
        }
    }

    fn state(&self) -> ScrollState {
        ScrollState {
            offset: self.current,
            speed: self.speed_sample,
        }
    }
}
