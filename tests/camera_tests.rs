// Host-side tests for the pixel-exact perspective camera.

use glam::{Vec2, Vec3, Vec4};
use scroll_gallery::core::camera::Camera;
use scroll_gallery::core::layout::Viewport;

const D: f32 = 600.0;

fn expected_fov(h: f32) -> f32 {
    2.0 * (h / 2.0 / D).atan() * (180.0 / std::f32::consts::PI)
}

#[test]
fn fov_matches_viewport_height() {
    for h in [300.0, 600.0, 768.0, 1080.0, 2160.0] {
        let cam = Camera::new(Viewport::new(1000.0, h), D, 100.0, 2000.0);
        assert!((cam.fov_deg - expected_fov(h)).abs() < 1e-4, "h={}", h);
    }
}

#[test]
fn resize_recomputes_fov_and_aspect() {
    let mut cam = Camera::new(Viewport::new(800.0, 600.0), D, 100.0, 2000.0);
    cam.resize(Viewport::new(1280.0, 720.0));
    assert!((cam.fov_deg - expected_fov(720.0)).abs() < 1e-4);
    assert!((cam.aspect - 1280.0 / 720.0).abs() < 1e-6);
    assert_eq!(cam.distance(), D);
}

#[test]
fn one_scene_unit_is_one_pixel_at_z0() {
    let vp = Viewport::new(800.0, 600.0);
    let cam = Camera::new(vp, D, 100.0, 2000.0);
    let vp_mat = cam.view_projection();
    // A point at the top-right corner of the viewport in scene units.
    let clip = vp_mat * Vec4::new(400.0, 300.0, 0.0, 1.0);
    let ndc = clip.truncate() / clip.w;
    assert!((ndc.x - 1.0).abs() < 1e-4, "ndc.x={}", ndc.x);
    assert!((ndc.y - 1.0).abs() < 1e-4, "ndc.y={}", ndc.y);
}

#[test]
fn center_ray_points_down_negative_z() {
    let cam = Camera::new(Viewport::new(800.0, 600.0), D, 100.0, 2000.0);
    let (ro, rd) = cam.ray_from_ndc(Vec2::ZERO);
    assert_eq!(ro, Vec3::new(0.0, 0.0, D));
    assert!((rd - Vec3::NEG_Z).length() < 1e-5);
}

#[test]
fn corner_ray_hits_corner_pixel_on_plane() {
    let vp = Viewport::new(800.0, 600.0);
    let cam = Camera::new(vp, D, 100.0, 2000.0);
    let (ro, rd) = cam.ray_from_ndc(vp.to_ndc(0.0, 0.0));
    let t = -ro.z / rd.z;
    let hit = ro + rd * t;
    assert!((hit.x + 400.0).abs() < 0.5, "x={}", hit.x);
    assert!((hit.y - 300.0).abs() < 0.5, "y={}", hit.y);
}
