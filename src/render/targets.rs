use super::helpers;
use crate::passes::bloom_level_sizes;
use crate::viewport::SurfaceSize;

pub(crate) const HDR_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba16Float;

/// One mip of the bloom chain: horizontal blur lands in `h`, vertical in `v`.
pub(crate) struct BloomLevel {
    _h_tex: wgpu::Texture,
    pub(crate) h_view: wgpu::TextureView,
    _v_tex: wgpu::Texture,
    pub(crate) v_view: wgpu::TextureView,
    pub(crate) size: SurfaceSize,
}

/// Offscreen color targets owned by the composer.
///
/// - `scene_*` holds the rendered stars at full resolution.
/// - `bright_*` is the half-resolution bright-pass output.
/// - `levels` are the blur mips, each half the size of the one before.
///
/// Textures are kept alongside their views so they live as long as the views.
pub(crate) struct RenderTargets {
    _scene_tex: wgpu::Texture,
    pub(crate) scene_view: wgpu::TextureView,
    _bright_tex: wgpu::Texture,
    pub(crate) bright_view: wgpu::TextureView,
    pub(crate) levels: Vec<BloomLevel>,
}

impl RenderTargets {
    pub(crate) fn new(device: &wgpu::Device, size: SurfaceSize) -> Self {
        let sizes = bloom_level_sizes(size);
        let (_scene_tex, scene_view) =
            helpers::offscreen_target(device, "scene_hdr", size.width, size.height, HDR_FORMAT);
        let (_bright_tex, bright_view) = helpers::offscreen_target(
            device,
            "bloom_bright",
            sizes[0].width,
            sizes[0].height,
            HDR_FORMAT,
        );
        let levels = sizes
            .iter()
            .enumerate()
            .map(|(i, s)| {
                let (_h_tex, h_view) = helpers::offscreen_target(
                    device,
                    &format!("bloom_h_{i}"),
                    s.width,
                    s.height,
                    HDR_FORMAT,
                );
                let (_v_tex, v_view) = helpers::offscreen_target(
                    device,
                    &format!("bloom_v_{i}"),
                    s.width,
                    s.height,
                    HDR_FORMAT,
                );
                BloomLevel {
                    _h_tex,
                    h_view,
                    _v_tex,
                    v_view,
                    size: *s,
                }
            })
            .collect();
        Self {
            _scene_tex,
            scene_view,
            _bright_tex,
            bright_view,
            levels,
        }
    }

    /// Texture feeding the horizontal blur of `level`.
    pub(crate) fn blur_input(&self, level: usize) -> (&wgpu::TextureView, SurfaceSize) {
        match level {
            0 => (&self.bright_view, self.levels[0].size),
            i => (&self.levels[i - 1].v_view, self.levels[i - 1].size),
        }
    }
}
