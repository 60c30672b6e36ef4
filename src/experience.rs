use crate::camera::PerspectiveCamera;
use crate::cancel::CancelToken;
use crate::config::ExperienceConfig;
use crate::dom;
use crate::frame::AnimationLoop;
use crate::particles;
use crate::passes::PassChain;
use crate::render::{self, Composer, PointsResources, Renderer};
use crate::scene::{Fog, PointCloud, Scene};
use crate::viewport::Viewport;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

/// The starfield background: one scene, one camera, one renderer and one
/// composer, built in that order by `new`.
pub struct Experience {
    window: web::Window,
    scene: Scene,
    camera: PerspectiveCamera,
    renderer: Renderer,
    drawables: Vec<PointsResources>,
    composer: Composer,
    viewport: Viewport,
    cancel: CancelToken,
}

impl Experience {
    /// init → add_objects → add_post_processing → resize.
    pub async fn new(config: ExperienceConfig) -> anyhow::Result<Self> {
        let (window, document) = dom::window_document()?;
        let viewport = dom::read_viewport(&window);

        let (mut scene, camera, renderer) = Self::init(&config, &document, viewport).await?;
        let drawables = Self::add_objects(&config, &mut scene, &camera, &renderer);
        let composer = Self::add_post_processing(&config, &renderer)?;
        let mut exp = Self {
            window,
            scene,
            camera,
            renderer,
            drawables,
            composer,
            viewport,
            cancel: CancelToken::new(),
        };
        exp.resize();
        log::info!(
            "[experience] ready: {} lights, {} point clouds, passes={:?}",
            exp.scene.lights.len(),
            exp.scene.point_clouds.len(),
            exp.composer
                .chain()
                .passes()
                .iter()
                .map(|p| p.name())
                .collect::<Vec<_>>()
        );
        Ok(exp)
    }

    async fn init(
        config: &ExperienceConfig,
        document: &web::Document,
        viewport: Viewport,
    ) -> anyhow::Result<(Scene, PerspectiveCamera, Renderer)> {
        let mut scene = Scene::new(Some(Fog::from(config.fog)));
        let camera = PerspectiveCamera::new(&config.camera, viewport.aspect());
        let canvas = dom::mount_canvas(document, &config.container_id)?;
        let renderer = Renderer::new(&canvas, viewport, &config.renderer).await?;
        Self::create_lights(config, &mut scene);
        Ok((scene, camera, renderer))
    }

    fn create_lights(config: &ExperienceConfig, scene: &mut Scene) {
        for light in config.lights {
            scene.add_light(light);
        }
    }

    fn add_objects(
        config: &ExperienceConfig,
        scene: &mut Scene,
        camera: &PerspectiveCamera,
        renderer: &Renderer,
    ) -> Vec<PointsResources> {
        let stars = config.stars;
        let cloud = particles::create_particles(
            &mut rand::thread_rng(),
            stars.count,
            stars.spread,
            stars.color,
            stars.size,
        );
        vec![Self::upload_points(scene, camera, renderer, cloud)]
    }

    /// Add a point cloud to the scene along with its GPU copy.
    fn upload_points(
        scene: &mut Scene,
        camera: &PerspectiveCamera,
        renderer: &Renderer,
        cloud: PointCloud,
    ) -> PointsResources {
        let gpu = render::create_points_resources(&renderer.device, &cloud, scene.fog);
        gpu.write_uniforms(&renderer.queue, camera, renderer.size());
        scene.add_points(cloud);
        gpu
    }

    /// Render pass followed by bloom, sized to the drawing buffer.
    fn add_post_processing(
        config: &ExperienceConfig,
        renderer: &Renderer,
    ) -> anyhow::Result<Composer> {
        let size = renderer.size();
        let chain = PassChain::render_then_bloom(config.bloom, size.width, size.height)?;
        Composer::new(renderer, chain)
    }

    /// Fit camera, canvas and composer to the current window size.
    pub fn resize(&mut self) {
        self.viewport = dom::read_viewport(&self.window);
        if self.viewport.width == 0 || self.viewport.height == 0 {
            log::warn!("[experience] ignoring empty viewport");
            return;
        }
        self.camera.fit(self.viewport.width, self.viewport.height);
        let size = self.renderer.set_size(self.viewport);
        self.composer.set_size(&self.renderer, size);
        for points in &self.drawables {
            points.write_uniforms(&self.renderer.queue, &self.camera, size);
        }
    }

    pub fn render_frame(&self) -> Result<(), wgpu::SurfaceError> {
        let [r, g, b, a] = self.scene.clear_rgba();
        let clear = wgpu::Color {
            r: r as f64,
            g: g as f64,
            b: b as f64,
            a: a as f64,
        };
        self.composer.render(&self.renderer, &self.drawables, clear)
    }

    #[inline]
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Token that stops the animation loop started for this experience.
    #[inline]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Render every display refresh until the cancel token fires or the
    /// returned loop is stopped.
    pub fn animate(this: &Rc<RefCell<Self>>) -> AnimationLoop {
        let cancel = this.borrow().cancel_token();
        AnimationLoop::start(this.clone(), cancel)
    }
}
