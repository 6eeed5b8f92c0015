use super::helpers;
use crate::core::error::GalleryError;
use crate::core::geometry::{PlaneGeometry, PlaneVertex};
use crate::core::ImagePlane;
use glam::Mat4;
use wgpu::util::DeviceExt;
use web_sys as web;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PlaneUniforms {
    pub(crate) view_proj: [[f32; 4]; 4],
    pub(crate) model: [[f32; 4]; 4],
    pub(crate) hover: [f32; 2],
    pub(crate) hover_state: f32,
    pub(crate) time: f32,
}

impl PlaneUniforms {
    pub(crate) fn new(view_proj: Mat4, plane: &ImagePlane) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            model: plane.model_matrix().to_cols_array_2d(),
            hover: plane.uniforms.hover,
            hover_state: plane.uniforms.hover_state,
            time: plane.uniforms.time,
        }
    }
}

/// GPU side of one gallery image: its texture and per-plane uniforms.
pub(crate) struct PlaneTexture {
    #[allow(dead_code)]
    pub(crate) texture: wgpu::Texture,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
}

/// Shared plane program, geometry and layout.
pub(crate) struct PlaneResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) bgl: wgpu::BindGroupLayout,
    pub(crate) vertex_buffer: wgpu::Buffer,
    pub(crate) index_buffer: wgpu::Buffer,
    pub(crate) index_count: u32,
    pub(crate) sampler: wgpu::Sampler,
}

const VERTEX_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x2];

pub(crate) fn create_plane_resources(
    device: &wgpu::Device,
    target_format: wgpu::TextureFormat,
    grid_segments: u32,
) -> PlaneResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("plane_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::PLANE_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("plane_bgl"),
        entries: &[
            helpers::uniform_entry(0, wgpu::ShaderStages::VERTEX_FRAGMENT),
            helpers::texture_entry(1),
            helpers::sampler_entry(2),
        ],
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("plane_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("plane_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_plane"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<PlaneVertex>() as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &VERTEX_ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        // Visible from both sides so orbiting behind a plane still shows it.
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        depth_stencil: None,
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_plane"),
            targets: &[Some(wgpu::ColorTargetState {
                format: target_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    let geometry = PlaneGeometry::subdivided(grid_segments);
    let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("plane_vertices"),
        contents: bytemuck::cast_slice(&geometry.vertices),
        usage: wgpu::BufferUsages::VERTEX,
    });
    let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
        label: Some("plane_indices"),
        contents: bytemuck::cast_slice(&geometry.indices),
        usage: wgpu::BufferUsages::INDEX,
    });

    PlaneResources {
        pipeline,
        bgl,
        vertex_buffer,
        index_buffer,
        index_count: geometry.indices.len() as u32,
        sampler: helpers::create_linear_sampler(device, "plane_sampler"),
    }
}

/// Copy a decoded `<img>` into a new texture and build its bind group.
///
/// Images that are not decoded, have no intrinsic size, or are rejected by
/// the GPU (e.g. cross-origin without CORS) come back as errors.
pub(crate) async fn upload_image(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
    res: &PlaneResources,
    img: &web::HtmlImageElement,
) -> Result<PlaneTexture, GalleryError> {
    let width = img.natural_width();
    let height = img.natural_height();
    if !img.complete() || width == 0 || height == 0 {
        return Err(GalleryError::TextureUnavailable(img.src()));
    }
    let size = wgpu::Extent3d {
        width,
        height,
        depth_or_array_layers: 1,
    };

    device.push_error_scope(wgpu::ErrorFilter::Validation);
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("image_tex"),
        size,
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: wgpu::TextureFormat::Rgba8UnormSrgb,
        usage: wgpu::TextureUsages::TEXTURE_BINDING
            | wgpu::TextureUsages::COPY_DST
            | wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    queue.copy_external_image_to_texture(
        &wgpu::CopyExternalImageSourceInfo {
            source: wgpu::ExternalImageSource::HTMLImageElement(img.clone()),
            origin: wgpu::Origin2d::ZERO,
            flip_y: false,
        },
        wgpu::CopyExternalImageDestInfo {
            texture: &texture,
            mip_level: 0,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
            color_space: wgpu::PredefinedColorSpace::Srgb,
            premultiplied_alpha: false,
        },
        size,
    );
    if let Some(err) = device.pop_error_scope().await {
        log::warn!("[render] texture upload rejected: {}", err);
        return Err(GalleryError::TextureUnavailable(img.src()));
    }

    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("plane_uniforms"),
        size: std::mem::size_of::<PlaneUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("plane_bg"),
        layout: &res.bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::TextureView(&view),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: wgpu::BindingResource::Sampler(&res.sampler),
            },
        ],
    });

    Ok(PlaneTexture {
        texture,
        uniform_buffer,
        bind_group,
    })
}
