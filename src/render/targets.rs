use super::helpers;
use wgpu;

/// Offscreen color target the scene pass renders into and the distortion
/// pass samples from. Same format and size as the surface.
pub(crate) struct RenderTargets {
    pub(crate) format: wgpu::TextureFormat,
    #[allow(dead_code)]
    pub(crate) scene_tex: wgpu::Texture,
    pub(crate) scene_view: wgpu::TextureView,
}

impl RenderTargets {
    pub(crate) fn new(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> Self {
        let (scene_tex, scene_view) = Self::create_scene(device, format, width, height);
        Self {
            format,
            scene_tex,
            scene_view,
        }
    }

    pub(crate) fn recreate(&mut self, device: &wgpu::Device, width: u32, height: u32) {
        (self.scene_tex, self.scene_view) = Self::create_scene(device, self.format, width, height);
    }

    fn create_scene(
        device: &wgpu::Device,
        format: wgpu::TextureFormat,
        width: u32,
        height: u32,
    ) -> (wgpu::Texture, wgpu::TextureView) {
        helpers::create_color_texture(
            device,
            "scene_tex",
            width,
            height,
            format,
            wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        )
    }
}
