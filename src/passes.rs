use crate::config::BloomConfig;
use crate::constants::BLOOM_LEVELS;
use crate::viewport::SurfaceSize;

/// One stage of the post-processing chain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Pass {
    /// Draw the scene into the offscreen HDR target.
    Render,
    /// Bright-pass, separable blur and additive composite.
    Bloom {
        settings: BloomConfig,
        width: u32,
        height: u32,
    },
}

impl Pass {
    pub fn bloom(settings: BloomConfig, width: u32, height: u32) -> Self {
        Pass::Bloom {
            settings,
            width,
            height,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Pass::Render => "render",
            Pass::Bloom { .. } => "bloom",
        }
    }
}

/// Ordered pass list executed once per frame by the composer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PassChain {
    passes: Vec<Pass>,
}

impl PassChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pass. Post-processing passes need a rendered scene to work
    /// on, so the first pass must be `Render`.
    pub fn add_pass(&mut self, pass: Pass) -> anyhow::Result<()> {
        anyhow::ensure!(
            !self.passes.is_empty() || matches!(pass, Pass::Render),
            "'{}' pass added before any render pass",
            pass.name()
        );
        self.passes.push(pass);
        Ok(())
    }

    /// Render pass followed by bloom sized to the drawing buffer.
    pub fn render_then_bloom(
        settings: BloomConfig,
        width: u32,
        height: u32,
    ) -> anyhow::Result<Self> {
        let mut chain = Self::new();
        chain.add_pass(Pass::Render)?;
        chain.add_pass(Pass::bloom(settings, width, height))?;
        Ok(chain)
    }

    #[inline]
    pub fn passes(&self) -> &[Pass] {
        &self.passes
    }

    /// Settings of the closing bloom pass, which writes to the screen.
    /// `None` when the chain ends in anything else.
    pub fn output_bloom(&self) -> Option<BloomConfig> {
        match self.passes.last() {
            Some(Pass::Bloom { settings, .. }) => Some(*settings),
            _ => None,
        }
    }

    /// Propagate a new output size to every size-dependent pass.
    pub fn set_size(&mut self, new_width: u32, new_height: u32) {
        for pass in &mut self.passes {
            if let Pass::Bloom { width, height, .. } = pass {
                *width = new_width;
                *height = new_height;
            }
        }
    }
}

/// Per-level weights for the bloom mip chain.
///
/// Coarser levels start with smaller base factors; `radius` blends every
/// factor towards its mirror `1.2 - f`, so a larger radius favours the wide
/// levels.
pub fn bloom_level_weights(radius: f32) -> [f32; BLOOM_LEVELS] {
    let mut weights = [0.0; BLOOM_LEVELS];
    for (i, w) in weights.iter_mut().enumerate() {
        let base = 1.0 - 0.2 * i as f32;
        *w = base + (1.2 - 2.0 * base) * radius;
    }
    weights
}

/// Sizes of the bloom mip chain for a drawing buffer: level 0 is half
/// resolution and each further level halves again, never below one pixel.
pub fn bloom_level_sizes(size: SurfaceSize) -> [SurfaceSize; BLOOM_LEVELS] {
    let mut sizes = [SurfaceSize::default(); BLOOM_LEVELS];
    let mut level = size;
    for s in sizes.iter_mut() {
        level = SurfaceSize {
            width: (level.width / 2).max(1),
            height: (level.height / 2).max(1),
        };
        *s = level;
    }
    sizes
}
