// Host-side tests for the smoothed scroll tracker.

use scroll_gallery::core::scroll::{ScrollSource, SmoothScroll};

#[test]
fn converges_on_target_and_speed_decays() {
    let mut s = SmoothScroll::new(0.1);
    s.set_target(500.0);
    let mut peak = 0.0f32;
    for _ in 0..400 {
        s.step();
        peak = peak.max(s.state().speed);
    }
    let st = s.state();
    assert_eq!(st.offset, 500.0);
    assert!(peak > 0.3, "peak speed {}", peak);
    assert!(st.speed.abs() < 1e-3, "speed {}", st.speed);
}

#[test]
fn offset_moves_monotonically_toward_target() {
    let mut s = SmoothScroll::new(0.1);
    s.set_target(-200.0);
    let mut prev = s.state().offset;
    for _ in 0..50 {
        s.step();
        let off = s.state().offset;
        assert!(off <= prev);
        assert!(off >= -200.0);
        prev = off;
    }
}

#[test]
fn speed_sign_follows_scroll_direction() {
    let mut down = SmoothScroll::new(0.1);
    down.set_target(1000.0);
    down.step();
    assert!(down.state().speed > 0.0);

    let mut up = SmoothScroll::new(0.1);
    up.jump_to(1000.0);
    up.set_target(0.0);
    up.step();
    assert!(up.state().speed < 0.0);
}

#[test]
fn speed_is_bounded() {
    let mut s = SmoothScroll::new(0.1);
    s.set_target(1.0e6);
    for _ in 0..100 {
        s.step();
        assert!(s.state().speed <= 1.0);
    }
}

#[test]
fn idle_tracker_reports_zero() {
    let mut s = SmoothScroll::new(0.1);
    s.jump_to(42.0);
    s.step();
    let st = s.state();
    assert_eq!(st.offset, 42.0);
    assert_eq!(st.speed, 0.0);
}
