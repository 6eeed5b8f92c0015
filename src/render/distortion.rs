use super::helpers;
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct DistortionUniforms {
    pub(crate) scroll_speed: f32,
    pub(crate) strength: f32,
    pub(crate) falloff_end: f32,
    pub(crate) _pad: f32,
}

pub(crate) struct DistortionResources {
    pub(crate) bgl: wgpu::BindGroupLayout, // tex+sampler+uniform
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) sampler: wgpu::Sampler,
}

pub(crate) fn create_distortion_resources(
    device: &wgpu::Device,
    swap_format: wgpu::TextureFormat,
) -> DistortionResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("distortion_shader"),
        source: wgpu::ShaderSource::Wgsl(crate::core::DISTORTION_WGSL.into()),
    });
    let bgl = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("distortion_bgl"),
        entries: &[
            helpers::texture_entry(0),
            helpers::sampler_entry(1),
            helpers::uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
        ],
    });
    let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
        label: Some("distortion_uniforms"),
        size: std::mem::size_of::<DistortionUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    });
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("distortion_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = helpers::make_fullscreen_pipeline(
        device,
        &pl,
        &shader,
        "fs_distort",
        swap_format,
        Some(wgpu::BlendState::REPLACE),
    );

    DistortionResources {
        bgl,
        uniform_buffer,
        pipeline,
        sampler: helpers::create_linear_sampler(device, "distortion_sampler"),
    }
}

/// Bind group reading from `input`; rebuilt whenever the input is recreated.
pub(crate) fn create_bind_group(
    device: &wgpu::Device,
    res: &DistortionResources,
    input: &wgpu::TextureView,
) -> wgpu::BindGroup {
    device.create_bind_group(&wgpu::BindGroupDescriptor {
        label: Some("distortion_bg"),
        layout: &res.bgl,
        entries: &[
            wgpu::BindGroupEntry {
                binding: 0,
                resource: wgpu::BindingResource::TextureView(input),
            },
            wgpu::BindGroupEntry {
                binding: 1,
                resource: wgpu::BindingResource::Sampler(&res.sampler),
            },
            wgpu::BindGroupEntry {
                binding: 2,
                resource: res.uniform_buffer.as_entire_binding(),
            },
        ],
    })
}

pub(crate) fn write_uniforms(
    queue: &wgpu::Queue,
    buffer: &wgpu::Buffer,
    scroll_speed: f32,
    strength: f32,
) {
    let u = DistortionUniforms {
        scroll_speed,
        strength,
        falloff_end: crate::core::constants::WARP_FALLOFF_END,
        _pad: 0.0,
    };
    queue.write_buffer(buffer, 0, bytemuck::bytes_of(&u));
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    clear: wgpu::Color,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(clear),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    r.draw(0..3, 0..1);
    drop(r);
}
