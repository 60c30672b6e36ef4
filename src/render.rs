use crate::config::RendererConfig;
use crate::viewport::{clamp_pixel_ratio, SurfaceSize, Viewport};
use web_sys as web;

mod composer;
mod helpers;
mod points;
mod post;
mod targets;

pub use composer::Composer;
pub use points::PointsResources;
pub(crate) use points::create_points_resources;

// Shaders bundled as string constants
pub(crate) static STARS_WGSL: &str = include_str!("../shaders/stars.wgsl");
pub(crate) static BLOOM_WGSL: &str = include_str!("../shaders/bloom.wgsl");

/// Owns the canvas and its WebGPU surface.
///
/// The pixel ratio is fixed at creation; `set_size` takes CSS pixels and sizes
/// the backing store as `css * pixel_ratio`.
pub struct Renderer {
    canvas: web::HtmlCanvasElement,
    surface: wgpu::Surface<'static>,
    pub(crate) device: wgpu::Device,
    pub(crate) queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pixel_ratio: f64,
    size: SurfaceSize,
}

impl Renderer {
    pub async fn new(
        canvas: &web::HtmlCanvasElement,
        viewport: Viewport,
        settings: &RendererConfig,
    ) -> anyhow::Result<Self> {
        let pixel_ratio = clamp_pixel_ratio(
            viewport.device_pixel_ratio,
            settings.min_pixel_ratio,
            settings.max_pixel_ratio,
        );
        let size = viewport.surface_size(pixel_ratio);
        canvas.set_width(size.width.max(1));
        canvas.set_height(size.height.max(1));
        set_css_size(canvas, viewport);

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
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: Some("starfield_device"),
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
        let alpha_mode = if settings.transparent
            && caps
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
            width: size.width.max(1),
            height: size.height.max(1),
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!(
            "[renderer] {:?} {}x{} pixel_ratio={} alpha={:?}",
            format,
            config.width,
            config.height,
            pixel_ratio,
            alpha_mode
        );

        Ok(Self {
            canvas: canvas.clone(),
            surface,
            device,
            queue,
            config,
            pixel_ratio,
            size,
        })
    }

    /// Current drawing-buffer size in physical pixels.
    #[inline]
    pub fn size(&self) -> SurfaceSize {
        self.size
    }

    #[inline]
    pub fn format(&self) -> wgpu::TextureFormat {
        self.config.format
    }

    /// Resize canvas and surface to the viewport; returns the drawing-buffer
    /// size. Unchanged or empty sizes leave the surface alone.
    pub fn set_size(&mut self, viewport: Viewport) -> SurfaceSize {
        let size = viewport.surface_size(self.pixel_ratio);
        if !self.size.needs_update(size) {
            return self.size;
        }
        self.size = size;
        self.canvas.set_width(size.width);
        self.canvas.set_height(size.height);
        set_css_size(&self.canvas, viewport);
        self.config.width = size.width;
        self.config.height = size.height;
        self.surface.configure(&self.device, &self.config);
        size
    }

    /// Re-apply the current configuration after a lost or outdated surface.
    pub fn reconfigure(&self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub(crate) fn current_frame(&self) -> Result<wgpu::SurfaceTexture, wgpu::SurfaceError> {
        self.surface.get_current_texture()
    }
}

fn set_css_size(canvas: &web::HtmlCanvasElement, viewport: Viewport) {
    let style = canvas.style();
    _ = style.set_property("width", &format!("{}px", viewport.width));
    _ = style.set_property("height", &format!("{}px", viewport.height));
}
