//! CPU mirror of the scroll-speed distortion pass (`shaders/distortion.wgsl`).
//!
//! UVs here follow texture convention: `v = 0` is the top edge of the frame.

use super::constants::{WARP_FALLOFF_END, WARP_FALLOFF_POWER};
use glam::Vec2;

/// Uniform state for the distortion pass, one per session.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DistortionState {
    pub scroll_speed: f32,
    pub strength: f32,
}

impl DistortionState {
    pub fn new(strength: f32) -> Self {
        Self {
            scroll_speed: 0.0,
            strength,
        }
    }

    pub fn warp(&self, uv: Vec2) -> Vec2 {
        warp_uv(uv, self.scroll_speed, self.strength)
    }
}

/// Hermite smoothstep with WGSL semantics.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Vertical band weight: 1 at the top edge, 0 from `v = 0.4` downward,
/// sharpened with a 4th power.
#[inline]
pub fn falloff(v: f32) -> f32 {
    (1.0 - smoothstep(0.0, WARP_FALLOFF_END, v)).powi(WARP_FALLOFF_POWER)
}

/// Horizontally pinch/stretch `uv` around the vertical center line by an
/// amount proportional to `scroll_speed`.
#[inline]
pub fn warp_uv(uv: Vec2, scroll_speed: f32, strength: f32) -> Vec2 {
    let area = falloff(uv.y);
    Vec2::new(uv.x - (uv.x - 0.5) * strength * area * scroll_speed, uv.y)
}
