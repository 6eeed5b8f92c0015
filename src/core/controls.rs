//! Drag-to-orbit camera controls with damping.
//!
//! Rotation input accumulates between frames; every frame `update` applies a
//! fraction (`damping_factor`) of the pending rotation and keeps the rest, so
//! the camera glides to a stop after a drag ends.

use super::camera::Camera;
use super::constants::{ORBIT_DAMPING_FACTOR, ORBIT_POLAR_EPSILON, ORBIT_ROTATE_SPEED};
use glam::{Vec2, Vec3};
use std::f32::consts::{PI, TAU};

#[derive(Clone, Copy, Debug, Default)]
struct Spherical {
    radius: f32,
    /// Polar angle from +Y.
    phi: f32,
    /// Azimuth around +Y, 0 along +Z.
    theta: f32,
}

impl Spherical {
    fn from_offset(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
            theta: v.x.atan2(v.z),
        }
    }

    fn to_offset(self) -> Vec3 {
        let s = self.phi.sin() * self.radius;
        Vec3::new(s * self.theta.sin(), self.radius * self.phi.cos(), s * self.theta.cos())
    }
}

#[derive(Clone, Debug)]
pub struct OrbitControls {
    pub enabled: bool,
    pub damping_factor: f32,
    pub rotate_speed: f32,
    pending: Spherical,
    drag_from: Option<Vec2>,
}

impl Default for OrbitControls {
    fn default() -> Self {
        Self {
            enabled: true,
            damping_factor: ORBIT_DAMPING_FACTOR,
            rotate_speed: ORBIT_ROTATE_SPEED,
            pending: Spherical::default(),
            drag_from: None,
        }
    }
}

impl OrbitControls {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            ..Self::default()
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag_from.is_some()
    }

    pub fn begin_drag(&mut self, pos: Vec2) {
        if self.enabled {
            self.drag_from = Some(pos);
        }
    }

    /// Accumulate rotation for a pointer move while dragging. Deltas are
    /// scaled by the viewport height so a full-height drag is one turn.
    pub fn drag_to(&mut self, pos: Vec2, viewport_height: f32) {
        let Some(from) = self.drag_from else {
            return;
        };
        let delta = (pos - from) * self.rotate_speed;
        let h = viewport_height.max(1.0);
        self.pending.theta -= TAU * delta.x / h;
        self.pending.phi -= TAU * delta.y / h;
        self.drag_from = Some(pos);
    }

    pub fn end_drag(&mut self) {
        self.drag_from = None;
    }

    /// Apply damped rotation to `camera`. Returns true if the camera moved.
    pub fn update(&mut self, camera: &mut Camera) -> bool {
        if !self.enabled {
            return false;
        }
        let d_theta = self.pending.theta * self.damping_factor;
        let d_phi = self.pending.phi * self.damping_factor;
        if d_theta == 0.0 && d_phi == 0.0 {
            return false;
        }
        let mut s = Spherical::from_offset(camera.position - camera.target);
        s.theta += d_theta;
        s.phi = (s.phi + d_phi).clamp(ORBIT_POLAR_EPSILON, PI - ORBIT_POLAR_EPSILON);
        camera.position = camera.target + s.to_offset();

        let keep = 1.0 - self.damping_factor;
        self.pending.theta *= keep;
        self.pending.phi *= keep;
        if self.pending.theta.abs() < 1e-7 && self.pending.phi.abs() < 1e-7 {
            self.pending.theta = 0.0;
            self.pending.phi = 0.0;
        }
        true
    }
}
