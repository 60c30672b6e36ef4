use super::helpers;
use super::targets::{RenderTargets, HDR_FORMAT};
use crate::config::BloomConfig;
use crate::constants::BLOOM_LEVELS;
use crate::passes::bloom_level_weights;
use crate::viewport::SurfaceSize;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct PostUniforms {
    resolution: [f32; 2],
    blur_dir: [f32; 2],
    strength: f32,
    threshold: f32,
    _pad: [f32; 2],
    weights_lo: [f32; 4],
    weights_hi: [f32; 4],
}

/// Uniform buffers for the two blur directions of one mip.
struct LevelUniforms {
    h: wgpu::Buffer,
    v: wgpu::Buffer,
}

/// Pipelines, layouts and uniforms of the bloom chain. Size-independent,
/// built once; the bind groups in `PostBindGroups` follow the targets.
pub(crate) struct PostResources {
    bgl0: wgpu::BindGroupLayout, // tex + sampler + uniform
    bgl1: wgpu::BindGroupLayout, // one tex per mip + sampler
    sampler: wgpu::Sampler,
    // One buffer per blur pass; queued writes land before the whole
    // submission, so a shared buffer can't hold per-pass values.
    base_uniforms: wgpu::Buffer,
    level_uniforms: Vec<LevelUniforms>,
    pub(crate) bright_pipeline: wgpu::RenderPipeline,
    pub(crate) blur_pipeline: wgpu::RenderPipeline,
    pub(crate) composite_pipeline: wgpu::RenderPipeline,
}

pub(crate) struct BlurBindGroups {
    pub(crate) h: wgpu::BindGroup,
    pub(crate) v: wgpu::BindGroup,
}

pub(crate) struct PostBindGroups {
    pub(crate) scene: wgpu::BindGroup,
    pub(crate) blur: Vec<BlurBindGroups>,
    pub(crate) levels: wgpu::BindGroup,
}

fn uniform_buffer(device: &wgpu::Device, label: &str) -> wgpu::Buffer {
    device.create_buffer(&wgpu::BufferDescriptor {
        label: Some(label),
        size: std::mem::size_of::<PostUniforms>() as u64,
        usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
        mapped_at_creation: false,
    })
}

pub(crate) fn create_post_resources(
    device: &wgpu::Device,
    swap_format: wgpu::TextureFormat,
) -> PostResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("bloom_shader"),
        source: wgpu::ShaderSource::Wgsl(super::BLOOM_WGSL.into()),
    });
    let bgl0 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl0"),
        entries: &[
            helpers::texture_entry(0),
            helpers::sampler_entry(1),
            helpers::uniform_entry(2, wgpu::ShaderStages::FRAGMENT),
        ],
    });
    let mut level_entries: Vec<_> = (0..BLOOM_LEVELS as u32)
        .map(helpers::texture_entry)
        .collect();
    level_entries.push(helpers::sampler_entry(BLOOM_LEVELS as u32));
    let bgl1 = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
        label: Some("post_bgl1"),
        entries: &level_entries,
    });
    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("linear_sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    });

    let pl_single = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_single"),
        bind_group_layouts: &[&bgl0],
        push_constant_ranges: &[],
    });
    let pl_composite = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("pl_post_composite"),
        bind_group_layouts: &[&bgl0, &bgl1],
        push_constant_ranges: &[],
    });
    let bright_pipeline = helpers::fullscreen_pipeline(
        device,
        "bright_pipeline",
        &pl_single,
        &shader,
        "fs_bright",
        HDR_FORMAT,
        None,
    );
    let blur_pipeline = helpers::fullscreen_pipeline(
        device,
        "blur_pipeline",
        &pl_single,
        &shader,
        "fs_blur",
        HDR_FORMAT,
        None,
    );
    let composite_pipeline = helpers::fullscreen_pipeline(
        device,
        "composite_pipeline",
        &pl_composite,
        &shader,
        "fs_composite",
        swap_format,
        Some(wgpu::BlendState::REPLACE),
    );

    let level_uniforms = (0..BLOOM_LEVELS)
        .map(|i| LevelUniforms {
            h: uniform_buffer(device, &format!("blur_h_uniforms_{i}")),
            v: uniform_buffer(device, &format!("blur_v_uniforms_{i}")),
        })
        .collect();

    PostResources {
        bgl0,
        bgl1,
        sampler,
        base_uniforms: uniform_buffer(device, "post_uniforms"),
        level_uniforms,
        bright_pipeline,
        blur_pipeline,
        composite_pipeline,
    }
}

impl PostResources {
    /// Refresh the bloom parameters and the per-pass sampled resolutions.
    pub(crate) fn write_uniforms(&self, queue: &wgpu::Queue, bloom: &BloomConfig, targets: &RenderTargets) {
        let w = bloom_level_weights(bloom.radius);
        let make = |size: SurfaceSize, blur_dir: [f32; 2]| PostUniforms {
            resolution: [size.width as f32, size.height as f32],
            blur_dir,
            strength: bloom.strength,
            threshold: bloom.threshold,
            _pad: [0.0; 2],
            weights_lo: [w[0], w[1], w[2], w[3]],
            weights_hi: [w[4], 0.0, 0.0, 0.0],
        };
        let base = make(targets.levels[0].size, [0.0, 0.0]);
        queue.write_buffer(&self.base_uniforms, 0, bytemuck::bytes_of(&base));
        for (i, (level, buffers)) in targets.levels.iter().zip(&self.level_uniforms).enumerate() {
            let (_, input_size) = targets.blur_input(i);
            let h = make(input_size, [1.0, 0.0]);
            let v = make(level.size, [0.0, 1.0]);
            queue.write_buffer(&buffers.h, 0, bytemuck::bytes_of(&h));
            queue.write_buffer(&buffers.v, 0, bytemuck::bytes_of(&v));
        }
    }

    fn group0(
        &self,
        device: &wgpu::Device,
        label: &str,
        view: &wgpu::TextureView,
        uniforms: &wgpu::Buffer,
    ) -> wgpu::BindGroup {
        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some(label),
            layout: &self.bgl0,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(&self.sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: uniforms.as_entire_binding(),
                },
            ],
        })
    }

    /// Bind groups referencing the current targets; rebuilt whenever the
    /// targets are recreated.
    pub(crate) fn bind_groups(&self, device: &wgpu::Device, targets: &RenderTargets) -> PostBindGroups {
        let blur = self
            .level_uniforms
            .iter()
            .enumerate()
            .map(|(i, buffers)| {
                let (input, _) = targets.blur_input(i);
                BlurBindGroups {
                    h: self.group0(device, &format!("bg_blur_h_{i}"), input, &buffers.h),
                    v: self.group0(
                        device,
                        &format!("bg_blur_v_{i}"),
                        &targets.levels[i].h_view,
                        &buffers.v,
                    ),
                }
            })
            .collect();

        let mut entries: Vec<_> = targets
            .levels
            .iter()
            .enumerate()
            .map(|(i, level)| wgpu::BindGroupEntry {
                binding: i as u32,
                resource: wgpu::BindingResource::TextureView(&level.v_view),
            })
            .collect();
        entries.push(wgpu::BindGroupEntry {
            binding: BLOOM_LEVELS as u32,
            resource: wgpu::BindingResource::Sampler(&self.sampler),
        });
        let levels = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg_bloom_levels"),
            layout: &self.bgl1,
            entries: &entries,
        });

        PostBindGroups {
            scene: self.group0(device, "bg_scene", &targets.scene_view, &self.base_uniforms),
            blur,
            levels,
        }
    }
}

pub(crate) fn blit(
    encoder: &mut wgpu::CommandEncoder,
    label: &str,
    target: &wgpu::TextureView,
    pipeline: &wgpu::RenderPipeline,
    bg0: &wgpu::BindGroup,
    bg1: Option<&wgpu::BindGroup>,
) {
    let mut r = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
        label: Some(label),
        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
            view: target,
            resolve_target: None,
            ops: wgpu::Operations {
                load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                store: wgpu::StoreOp::Store,
            },
        })],
        depth_stencil_attachment: None,
        timestamp_writes: None,
        occlusion_query_set: None,
    });
    r.set_pipeline(pipeline);
    r.set_bind_group(0, bg0, &[]);
    if let Some(g1) = bg1 {
        r.set_bind_group(1, g1, &[]);
    }
    r.draw(0..3, 0..1);
}
