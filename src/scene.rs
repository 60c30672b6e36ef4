use crate::config::{Color, FogConfig, LightConfig};
use glam::Vec3;

/// Linear distance fog, blended with `smoothstep(near, far, depth)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Fog {
    pub color: Color,
    pub near: f32,
    pub far: f32,
}

impl From<FogConfig> for Fog {
    fn from(c: FogConfig) -> Self {
        Self {
            color: c.color,
            near: c.near,
            far: c.far,
        }
    }
}

/// Flat-colored, unlit material shared by every point of a cloud.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointsMaterial {
    pub color: Color,
    pub opacity: f32,
    /// World-space point size.
    pub size: f32,
    /// Shrink points with distance from the camera.
    pub size_attenuation: bool,
    pub transparent: bool,
    pub fog: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PointCloud {
    pub positions: Vec<Vec3>,
    pub material: PointsMaterial,
}

/// Root container for lights and drawables.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    /// `None` keeps the canvas transparent.
    pub background: Option<Color>,
    pub fog: Option<Fog>,
    pub lights: Vec<LightConfig>,
    pub point_clouds: Vec<PointCloud>,
}

impl Scene {
    pub fn new(fog: Option<Fog>) -> Self {
        Self {
            background: None,
            fog,
            ..Default::default()
        }
    }

    #[inline]
    pub fn add_light(&mut self, light: LightConfig) {
        self.lights.push(light);
    }

    /// Premultiplied clear color for the scene target: fully transparent
    /// without a background, opaque background color otherwise.
    pub fn clear_rgba(&self) -> [f32; 4] {
        match self.background {
            None => [0.0; 4],
            Some(c) => [c.r, c.g, c.b, 1.0],
        }
    }

    /// Adds the cloud and returns its index.
    pub fn add_points(&mut self, cloud: PointCloud) -> usize {
        self.point_clouds.push(cloud);
        self.point_clouds.len() - 1
    }
}
