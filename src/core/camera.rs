//! Perspective camera that keeps 1 scene unit = 1 CSS pixel at z = 0.

use super::layout::Viewport;
use glam::{Mat4, Vec2, Vec3, Vec4};

/// Right-handed perspective camera looking at `target`.
#[derive(Clone, Debug)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    distance: f32,
}

impl Camera {
    /// Build a camera `distance` units in front of the z = 0 plane.
    pub fn new(viewport: Viewport, distance: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 0.0, distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: viewport.aspect(),
            fov_deg: Self::fov_for_viewport(viewport.height, distance),
            near,
            far,
            distance,
        }
    }

    /// Vertical field of view (degrees) at which a `height`-pixel tall
    /// viewport spans exactly `height` scene units at `distance`.
    #[inline]
    pub fn fov_for_viewport(height: f32, distance: f32) -> f32 {
        (2.0 * (height / 2.0 / distance).atan()).to_degrees()
    }

    /// Camera-to-plane distance the field of view is derived from.
    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Recompute aspect and field of view after a viewport change.
    pub fn resize(&mut self, viewport: Viewport) {
        self.aspect = viewport.aspect();
        self.fov_deg = Self::fov_for_viewport(viewport.height, self.distance);
    }

    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_deg.to_radians(), self.aspect, self.near, self.far)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// World-space picking ray through a point given in normalized device
    /// coordinates. Returns `(ray_origin, ray_direction)`.
    pub fn ray_from_ndc(&self, ndc: Vec2) -> (Vec3, Vec3) {
        let inv = self.view_projection().inverse();
        let p_far = inv * Vec4::new(ndc.x, ndc.y, 1.0, 1.0);
        let p1: Vec3 = p_far.truncate() / p_far.w;
        let ro = self.position;
        let rd = (p1 - ro).normalize();
        (ro, rd)
    }
}
