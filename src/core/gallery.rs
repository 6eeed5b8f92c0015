//! Registry of image planes: one textured plane per gallery image.
//!
//! Planes are built once from the captured DOM layout and are never added or
//! removed afterwards; every frame they are repositioned from their captured
//! rects and the current scroll offset.

use super::constants::HOVER_POINT_DEFAULT;
use super::error::GalleryError;
use super::layout::{place, DomRect, Viewport};
use super::tween::HoverTween;
use glam::{Mat4, Vec2, Vec3};
use smallvec::SmallVec;

/// Index of an uploaded GPU texture owned by the renderer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub usize);

/// Per-plane uniform values for the plane program.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MaterialUniforms {
    pub time: f32,
    pub hover: [f32; 2],
    pub hover_state: f32,
    pub texture: TextureHandle,
}

/// Shared starting point for every plane's uniforms.
#[derive(Clone, Copy, Debug)]
pub struct MaterialTemplate {
    pub hover: [f32; 2],
    pub hover_duration: f32,
}

impl MaterialTemplate {
    pub fn new(hover_duration: f32) -> Self {
        Self {
            hover: HOVER_POINT_DEFAULT,
            hover_duration,
        }
    }

    pub fn instantiate(&self, texture: TextureHandle) -> MaterialUniforms {
        MaterialUniforms {
            time: 0.0,
            hover: self.hover,
            hover_state: 0.0,
            texture,
        }
    }
}

/// An image as seen at setup: its layout plus the outcome of turning it into
/// a texture.
#[derive(Debug)]
pub struct ImageSource {
    pub rect: DomRect,
    pub texture: Result<TextureHandle, GalleryError>,
}

#[derive(Clone, Debug)]
pub struct ImagePlane {
    pub rect: DomRect,
    pub position: Vec3,
    pub scale: Vec2,
    pub uniforms: MaterialUniforms,
    tween: HoverTween,
}

impl ImagePlane {
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position) * Mat4::from_scale(self.scale.extend(1.0))
    }

    pub fn hover_target(&self) -> f32 {
        self.tween.target()
    }

    /// Ray against the (flat) plane quad. Returns the ray parameter and the
    /// hit's local UV (`v = 1` at the top edge).
    pub fn intersect(&self, ro: Vec3, rd: Vec3) -> Option<(f32, Vec2)> {
        if rd.z.abs() < 1e-6 {
            return None;
        }
        let t = (self.position.z - ro.z) / rd.z;
        if t < 0.0 {
            return None;
        }
        let hit = ro + rd * t;
        let u = (hit.x - self.position.x) / self.scale.x + 0.5;
        let v = (hit.y - self.position.y) / self.scale.y + 0.5;
        ((0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v)).then_some((t, Vec2::new(u, v)))
    }
}

/// Nearest plane under a ray.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlaneHit {
    pub index: usize,
    pub distance: f32,
    pub uv: Vec2,
}

#[derive(Clone, Debug, Default)]
pub struct Gallery {
    planes: Vec<ImagePlane>,
}

impl Gallery {
    /// Build one plane per source whose texture is usable. Failed sources
    /// are skipped; the rest keep their relative order.
    pub fn build(template: &MaterialTemplate, sources: impl IntoIterator<Item = ImageSource>) -> Self {
        let mut planes = Vec::new();
        for (i, src) in sources.into_iter().enumerate() {
            let texture = match src.texture {
                Ok(t) => t,
                Err(e) => {
                    log::warn!("[gallery] skipping image {}: {}", i, e);
                    continue;
                }
            };
            planes.push(ImagePlane {
                rect: src.rect,
                position: Vec3::ZERO,
                scale: Vec2::new(src.rect.width, src.rect.height),
                uniforms: template.instantiate(texture),
                tween: HoverTween::new(template.hover_duration),
            });
        }
        log::info!("[gallery] built {} planes", planes.len());
        Self { planes }
    }

    pub fn planes(&self) -> &[ImagePlane] {
        &self.planes
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    pub fn update_positions(&mut self, scroll_offset: f32, viewport: Viewport) {
        for plane in &mut self.planes {
            let p = place(&plane.rect, viewport, scroll_offset);
            plane.position = p.position;
            plane.scale = p.scale;
        }
    }

    /// Broadcast elapsed time and advance hover transitions.
    pub fn tick(&mut self, elapsed: f32) {
        for plane in &mut self.planes {
            plane.uniforms.time = elapsed;
            plane.uniforms.hover_state = plane.tween.sample(elapsed);
        }
    }

    pub fn hover_enter(&mut self, index: usize, now: f32) {
        if let Some(plane) = self.planes.get_mut(index) {
            plane.tween.retarget(1.0, now);
        }
    }

    pub fn hover_leave(&mut self, index: usize, now: f32) {
        if let Some(plane) = self.planes.get_mut(index) {
            plane.tween.retarget(0.0, now);
        }
    }

    /// Nearest plane hit by the ray, if any.
    pub fn pick(&self, ro: Vec3, rd: Vec3) -> Option<PlaneHit> {
        let mut hits: SmallVec<[PlaneHit; 4]> = self
            .planes
            .iter()
            .enumerate()
            .filter_map(|(index, p)| {
                p.intersect(ro, rd).map(|(distance, uv)| PlaneHit { index, distance, uv })
            })
            .collect();
        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        hits.first().copied()
    }

    /// Write the hit UV into the nearest plane's hover point. Returns the hit.
    pub fn apply_pointer_ray(&mut self, ro: Vec3, rd: Vec3) -> Option<PlaneHit> {
        let hit = self.pick(ro, rd)?;
        self.planes[hit.index].uniforms.hover = hit.uv.to_array();
        Some(hit)
    }

    /// Replace captured rects after a layout change. The plane count never
    /// changes, so the number of rects must match.
    pub fn recapture(&mut self, rects: &[DomRect]) -> Result<(), GalleryError> {
        if rects.len() != self.planes.len() {
            return Err(GalleryError::RectCountMismatch {
                expected: self.planes.len(),
                got: rects.len(),
            });
        }
        for (plane, rect) in self.planes.iter_mut().zip(rects) {
            plane.rect = *rect;
        }
        Ok(())
    }
}
