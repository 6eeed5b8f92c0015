// Host-side tests for the CPU mirror of the scroll-speed distortion.

use glam::Vec2;
use scroll_gallery::core::constants::WARP_STRENGTH;
use scroll_gallery::core::distortion::{falloff, smoothstep, warp_uv, DistortionState};

#[test]
fn zero_speed_is_identity() {
    for i in 0..=10 {
        for j in 0..=10 {
            let uv = Vec2::new(i as f32 / 10.0, j as f32 / 10.0);
            assert_eq!(warp_uv(uv, 0.0, WARP_STRENGTH), uv);
        }
    }
}

#[test]
fn falloff_is_one_at_top_and_zero_from_band_end() {
    assert_eq!(falloff(0.0), 1.0);
    assert_eq!(falloff(0.4), 0.0);
    assert_eq!(falloff(0.7), 0.0);
    assert_eq!(falloff(1.0), 0.0);
    let mid = falloff(0.2);
    assert!(mid > 0.0 && mid < 1.0);
    // 4th power sharpens the band: half-way the weight is (1/2)^4.
    assert!((mid - 0.0625).abs() < 1e-6);
}

#[test]
fn no_warp_below_the_band_for_any_speed() {
    for speed in [-1.0, -0.3, 0.5, 1.0, 4.0] {
        let uv = Vec2::new(0.9, 0.4);
        assert_eq!(warp_uv(uv, speed, WARP_STRENGTH), uv);
    }
}

#[test]
fn warp_pulls_toward_center_proportionally_to_speed() {
    let uv = Vec2::new(1.0, 0.0);
    let slow = warp_uv(uv, 0.5, WARP_STRENGTH);
    let fast = warp_uv(uv, 1.0, WARP_STRENGTH);
    assert_eq!(slow.y, 0.0);
    assert!((slow.x - 0.875).abs() < 1e-6);
    assert!((fast.x - 0.75).abs() < 1e-6);
    // Vertical center line never moves.
    assert_eq!(warp_uv(Vec2::new(0.5, 0.0), 1.0, WARP_STRENGTH).x, 0.5);
}

#[test]
fn state_warp_uses_current_speed() {
    let mut s = DistortionState::new(WARP_STRENGTH);
    let uv = Vec2::new(0.0, 0.0);
    assert_eq!(s.warp(uv), uv);
    s.scroll_speed = 1.0;
    assert!((s.warp(uv).x - 0.25).abs() < 1e-6);
}

#[test]
fn smoothstep_endpoints() {
    assert_eq!(smoothstep(0.0, 0.4, -1.0), 0.0);
    assert_eq!(smoothstep(0.0, 0.4, 0.4), 1.0);
    assert_eq!(smoothstep(0.0, 0.4, 0.2), 0.5);
}
