use crate::core::error::GalleryError;
use crate::core::sketch::{FrameSink, FrameView};
use crate::core::TextureHandle;
use web_sys as web;

mod distortion;
mod helpers;
mod planes;
mod targets;

use distortion::DistortionResources;
use planes::{PlaneResources, PlaneTexture, PlaneUniforms};
use targets::RenderTargets;

/// WebGPU renderer: gallery planes into an offscreen target, then the
/// scroll-speed distortion pass onto the canvas.
pub struct GpuState {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,

    planes: PlaneResources,
    textures: Vec<PlaneTexture>,

    targets: RenderTargets,
    distortion: DistortionResources,
    bg_scene: wgpu::BindGroup,

    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl GpuState {
    pub async fn new(canvas: &web::HtmlCanvasElement, grid_segments: u32) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8UnormSrgb | wgpu::TextureFormat::Rgba8UnormSrgb
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Transparent canvas: the page shows through where no plane is drawn.
        let alpha_mode = if caps
            .alpha_modes
            .contains(&wgpu::CompositeAlphaMode::PreMultiplied)
        {
            wgpu::CompositeAlphaMode::PreMultiplied
        } else {
            caps.alpha_modes
                .first()
                .copied()
                .unwrap_or(wgpu::CompositeAlphaMode::Auto)
        };
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);

        let targets = RenderTargets::new(&device, format, width, height);
        let planes = planes::create_plane_resources(&device, format, grid_segments);
        let distortion = distortion::create_distortion_resources(&device, format);
        let bg_scene = distortion::create_bind_group(&device, &distortion, &targets.scene_view);

        log::info!("[render] WebGPU ready {}x{} {:?}", width, height, format);

        Ok(Self {
            canvas: canvas.clone(),
            surface,
            device,
            queue,
            config,
            planes,
            textures: Vec::new(),
            targets,
            distortion,
            bg_scene,
            width,
            height,
            clear_color: wgpu::Color::TRANSPARENT,
        })
    }

    /// Turn an `<img>` into a plane texture. The returned handle indexes the
    /// renderer's texture list.
    pub async fn upload_image(
        &mut self,
        img: &web::HtmlImageElement,
    ) -> Result<TextureHandle, GalleryError> {
        let tex = planes::upload_image(&self.device, &self.queue, &self.planes, img).await?;
        self.textures.push(tex);
        Ok(TextureHandle(self.textures.len() - 1))
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);

            // Recreate the offscreen target and the bind group that samples it
            self.targets.recreate(&self.device, width, height);
            self.bg_scene =
                distortion::create_bind_group(&self.device, &self.distortion, &self.targets.scene_view);
        }
    }

    pub fn render(&mut self, frame: &FrameView<'_>) -> Result<(), wgpu::SurfaceError> {
        self.resize_if_needed(self.canvas.width(), self.canvas.height());

        let view_proj = frame.camera.view_projection();
        for plane in frame.planes {
            let Some(tex) = self.textures.get(plane.uniforms.texture.0) else {
                continue;
            };
            let u = PlaneUniforms::new(view_proj, plane);
            self.queue
                .write_buffer(&tex.uniform_buffer, 0, bytemuck::bytes_of(&u));
        }
        distortion::write_uniforms(
            &self.queue,
            &self.distortion.uniform_buffer,
            frame.distortion.scroll_speed,
            frame.distortion.strength,
        );

        let output = self.surface.get_current_texture()?;
        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });

        // Pass 1: scene → offscreen
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("scene_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &self.targets.scene_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.planes.pipeline);
            rpass.set_vertex_buffer(0, self.planes.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.planes.index_buffer.slice(..), wgpu::IndexFormat::Uint16);
            for plane in frame.planes {
                if let Some(tex) = self.textures.get(plane.uniforms.texture.0) {
                    rpass.set_bind_group(0, &tex.bind_group, &[]);
                    rpass.draw_indexed(0..self.planes.index_count, 0, 0..1);
                }
            }
        }

        // Pass 2: distortion → swapchain
        distortion::blit(
            &mut encoder,
            "distortion_pass",
            &view,
            self.clear_color,
            &self.distortion.pipeline,
            &self.bg_scene,
        );

        self.queue.submit(Some(encoder.finish()));
        output.present();
        Ok(())
    }
}

impl FrameSink for GpuState {
    type Error = wgpu::SurfaceError;

    fn present(&mut self, frame: &FrameView<'_>) -> Result<(), Self::Error> {
        self.render(frame)
    }
}
