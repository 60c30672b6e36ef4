use super::points::PointsResources;
use super::post::{self, PostBindGroups, PostResources};
use super::targets::RenderTargets;
use super::Renderer;
use crate::config::BloomConfig;
use crate::passes::{Pass, PassChain};
use crate::viewport::SurfaceSize;

/// Runs a `PassChain` every frame: the render pass fills the offscreen scene
/// target, bloom writes the final image to the swapchain.
pub struct Composer {
    chain: PassChain,
    bloom: BloomConfig,
    targets: RenderTargets,
    post: PostResources,
    bind_groups: PostBindGroups,
    size: SurfaceSize,
}

impl Composer {
    /// The chain must end in a bloom pass, which presents the frame.
    pub fn new(renderer: &Renderer, chain: PassChain) -> anyhow::Result<Self> {
        let bloom = chain
            .output_bloom()
            .ok_or_else(|| anyhow::anyhow!("pass chain does not end in a bloom pass"))?;
        let size = renderer.size();
        let targets = RenderTargets::new(&renderer.device, size);
        let post = post::create_post_resources(&renderer.device, renderer.format());
        let bind_groups = post.bind_groups(&renderer.device, &targets);
        post.write_uniforms(&renderer.queue, &bloom, &targets);
        Ok(Self {
            chain,
            bloom,
            targets,
            post,
            bind_groups,
            size,
        })
    }

    #[inline]
    pub fn chain(&self) -> &PassChain {
        &self.chain
    }

    /// Recreate offscreen targets for a new drawing-buffer size.
    pub fn set_size(&mut self, renderer: &Renderer, size: SurfaceSize) {
        if !self.size.needs_update(size) {
            return;
        }
        self.size = size;
        self.chain.set_size(size.width, size.height);
        self.targets = RenderTargets::new(&renderer.device, size);
        self.bind_groups = self.post.bind_groups(&renderer.device, &self.targets);
        self.post
            .write_uniforms(&renderer.queue, &self.bloom, &self.targets);
    }

    /// Encode and present one frame. The scene target is cleared to `clear`.
    pub fn render(
        &self,
        renderer: &Renderer,
        drawables: &[PointsResources],
        clear: wgpu::Color,
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = renderer.current_frame()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = renderer
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("composer_encoder"),
            });

        for pass in self.chain.passes() {
            match pass {
                Pass::Render => {
                    let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                        label: Some("scene_pass"),
                        color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                            view: &self.targets.scene_view,
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
                    for points in drawables {
                        points.draw(&mut rpass);
                    }
                }
                Pass::Bloom { .. } => self.encode_bloom(&mut encoder, &view),
            }
        }

        renderer.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }

    fn encode_bloom(&self, encoder: &mut wgpu::CommandEncoder, output: &wgpu::TextureView) {
        // scene -> bright
        post::blit(
            encoder,
            "bright_pass",
            &self.targets.bright_view,
            &self.post.bright_pipeline,
            &self.bind_groups.scene,
            None,
        );
        // previous level -> h -> v, halving each level
        for (level, groups) in self.targets.levels.iter().zip(&self.bind_groups.blur) {
            post::blit(
                encoder,
                "blur_h",
                &level.h_view,
                &self.post.blur_pipeline,
                &groups.h,
                None,
            );
            post::blit(
                encoder,
                "blur_v",
                &level.v_view,
                &self.post.blur_pipeline,
                &groups.v,
                None,
            );
        }
        post::blit(
            encoder,
            "composite",
            output,
            &self.post.composite_pipeline,
            &self.bind_groups.scene,
            Some(&self.bind_groups.levels),
        );
    }
}
