//! Time-bounded interpolation used for the per-image hover transition.

/// `power1.out` easing: fast start, gentle landing, monotone on [0, 1].
#[inline]
pub fn ease_out_quad(p: f32) -> f32 {
    let p = p.clamp(0.0, 1.0);
    1.0 - (1.0 - p) * (1.0 - p)
}

/// Scalar tween that can be retargeted mid-flight.
///
/// Retargeting always starts from the current value and always takes the
/// full `duration`, regardless of how far the value has to travel.
#[derive(Clone, Copy, Debug)]
pub struct HoverTween {
    value: f32,
    from: f32,
    target: f32,
    start: f32,
    duration: f32,
}

impl HoverTween {
    pub fn new(duration: f32) -> Self {
        Self {
            value: 0.0,
            from: 0.0,
            target: 0.0,
            start: 0.0,
            duration: duration.max(f32::EPSILON),
        }
    }

    #[inline]
    pub fn value(&self) -> f32 {
        self.value
    }

    #[inline]
    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Start moving toward `target` at time `now`.
    pub fn retarget(&mut self, target: f32, now: f32) {
        self.from = self.value;
        self.target = target;
        self.start = now;
    }

    pub fn is_settled(&self, now: f32) -> bool {
        now - self.start >= self.duration
    }

    /// Advance to time `now` and return the new value.
    pub fn sample(&mut self, now: f32) -> f32 {
        let p = (now - self.start) / self.duration;
        self.value = self.from + (self.target - self.from) * ease_out_quad(p);
        self.value
    }
}
