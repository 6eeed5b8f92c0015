//! Unit plane mesh shared by every image.

use super::constants::MAX_GRID_SEGMENTS;

/// Interleaved vertex: object-space position and texture coordinate.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct PlaneVertex {
    pub position: [f32; 3],
    pub uv: [f32; 2],
}

/// 1×1 plane centered on the origin in the XY plane, facing +Z.
///
/// Subdivided so the vertex program has interior vertices to displace.
/// UV `v = 1` is the top edge, matching what the hover point is written in.
/// Indices are `u16`, so `segments` is clamped to `1..=MAX_GRID_SEGMENTS`.
#[derive(Clone, Debug)]
pub struct PlaneGeometry {
    pub vertices: Vec<PlaneVertex>,
    pub indices: Vec<u16>,
    pub segments: u32,
}

impl PlaneGeometry {
    pub fn subdivided(segments: u32) -> Self {
        let segments = segments.clamp(1, MAX_GRID_SEGMENTS);
        let row = segments + 1;
        let mut vertices = Vec::with_capacity((row * row) as usize);
        for iy in 0..row {
            let v = 1.0 - iy as f32 / segments as f32;
            for ix in 0..row {
                let u = ix as f32 / segments as f32;
                vertices.push(PlaneVertex {
                    position: [u - 0.5, v - 0.5, 0.0],
                    uv: [u, v],
                });
            }
        }

        let mut indices = Vec::with_capacity((segments * segments * 6) as usize);
        for iy in 0..segments {
            for ix in 0..segments {
                let a = index(iy * row + ix);
                let b = index((iy + 1) * row + ix);
                let c = index((iy + 1) * row + ix + 1);
                let d = index(iy * row + ix + 1);
                indices.extend_from_slice(&[a, b, d, b, c, d]);
            }
        }

        Self {
            vertices,
            indices,
            segments,
        }
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[inline]
fn index(i: u32) -> u16 {
    u16::try_from(i).unwrap_or(u16::MAX)
}
