//! DOM-to-scene coordinate mapping.
//!
//! The camera is set up so that one scene unit equals one CSS pixel on the
//! z = 0 plane (see [`super::camera::Camera::fov_for_viewport`]). With that
//! in place a DOM bounding box can be turned into a plane placement with a
//! couple of offsets: the scene origin sits at the viewport center and the
//! scene Y axis points up, while the DOM origin is top-left with Y down.

use glam::{Vec2, Vec3};

/// Snapshot of an element's bounding box in CSS pixels.
///
/// `top` is document-space: the viewport-relative rect top plus the window
/// scroll offset at capture time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DomRect {
    pub top: f32,
    pub left: f32,
    pub width: f32,
    pub height: f32,
}

impl DomRect {
    pub const fn new(top: f32, left: f32, width: f32, height: f32) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

/// Visible area size in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width / self.height.max(1.0)
    }

    /// Convert a CSS pixel position to normalized device coordinates.
    ///
    /// Screen Y grows downward while clip-space Y grows upward, hence the flip.
    #[inline]
    pub fn to_ndc(&self, x: f32, y: f32) -> Vec2 {
        let w = self.width.max(1.0);
        let h = self.height.max(1.0);
        Vec2::new((x / w) * 2.0 - 1.0, -(y / h) * 2.0 + 1.0)
    }
}

/// Move viewport-relative rects into document space. All rects must have
/// been measured against the same `scroll_offset`.
pub fn to_document_space(
    rects: impl IntoIterator<Item = DomRect>,
    scroll_offset: f32,
) -> Vec<DomRect> {
    rects
        .into_iter()
        .map(|r| DomRect {
            top: r.top + scroll_offset,
            ..r
        })
        .collect()
}

/// Where a plane sits in the scene and how large it is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub position: Vec3,
    pub scale: Vec2,
}

/// Place a plane so it overlays `rect` after the document has scrolled by
/// `scroll_offset` pixels. Only the vertical axis follows the scroll.
#[inline]
pub fn place(rect: &DomRect, viewport: Viewport, scroll_offset: f32) -> Placement {
    let x = rect.left - viewport.width / 2.0 + rect.width / 2.0;
    let y = scroll_offset - rect.top + viewport.height / 2.0 - rect.height / 2.0;
    Placement {
        position: Vec3::new(x, y, 0.0),
        scale: Vec2::new(rect.width, rect.height),
    }
}
