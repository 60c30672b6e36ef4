use crate::constants::*;
use glam::Vec3;

/// Linear RGB color built from the usual `0xRRGGBB` hex literal.
///
/// Hex values are authored in sRGB; `from_hex` converts them to linear so the
/// shaders can work in linear space and let the sRGB swapchain encode.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| srgb_to_linear(((hex >> shift) & 0xff) as f32 / 255.0);
        Self {
            r: channel(16),
            g: channel(8),
            b: channel(0),
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

#[inline]
fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraConfig {
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub position: Vec3,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_deg: CAMERA_FOV_DEG,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            position: Vec3::new(0.0, 0.0, CAMERA_Z),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FogConfig {
    pub color: Color,
    pub near: f32,
    pub far: f32,
}

impl Default for FogConfig {
    fn default() -> Self {
        Self {
            color: Color::from_hex(FOG_COLOR),
            near: FOG_NEAR,
            far: FOG_FAR,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RendererConfig {
    pub min_pixel_ratio: f64,
    pub max_pixel_ratio: f64,
    /// Keep the canvas transparent so the page background shows through.
    pub transparent: bool,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            min_pixel_ratio: MIN_PIXEL_RATIO,
            max_pixel_ratio: MAX_PIXEL_RATIO,
            transparent: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LightKind {
    Spot {
        angle: f32,
        penumbra: f32,
        /// 0 means unbounded range.
        distance: f32,
    },
    Point,
    Ambient,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightConfig {
    pub kind: LightKind,
    pub color: Color,
    pub intensity: f32,
    pub position: Vec3,
}

impl LightConfig {
    /// Key light from above, slightly in front of the scene.
    pub fn top_spot() -> Self {
        Self {
            kind: LightKind::Spot {
                angle: TOP_SPOT_ANGLE,
                penumbra: SPOT_PENUMBRA,
                distance: 0.0,
            },
            color: Color::from_hex(WHITE),
            intensity: TOP_SPOT_INTENSITY,
            position: Vec3::from_array(TOP_SPOT_POSITION),
        }
    }

    /// Red neon rim light behind the scene.
    pub fn rim_spot() -> Self {
        Self {
            kind: LightKind::Spot {
                angle: RIM_SPOT_ANGLE,
                penumbra: SPOT_PENUMBRA,
                distance: RIM_SPOT_DISTANCE,
            },
            color: Color::from_hex(RED_NEON),
            intensity: RIM_SPOT_INTENSITY,
            position: Vec3::from_array(RIM_SPOT_POSITION),
        }
    }

    pub fn fill_point() -> Self {
        Self {
            kind: LightKind::Point,
            color: Color::from_hex(DEEP_RED),
            intensity: FILL_POINT_INTENSITY,
            position: Vec3::from_array(FILL_POINT_POSITION),
        }
    }

    pub fn ambient() -> Self {
        Self {
            kind: LightKind::Ambient,
            color: Color::from_hex(WHITE),
            intensity: AMBIENT_INTENSITY,
            position: Vec3::ZERO,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleConfig {
    pub count: usize,
    pub spread: f32,
    pub color: Color,
    pub size: f32,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: STAR_COUNT,
            spread: STAR_SPREAD,
            color: Color::from_hex(WHITE),
            size: STAR_BASE_SIZE,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BloomConfig {
    pub strength: f32,
    pub radius: f32,
    pub threshold: f32,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            strength: BLOOM_STRENGTH,
            radius: BLOOM_RADIUS,
            threshold: BLOOM_THRESHOLD,
        }
    }
}

/// Every knob of the background in one place.
#[derive(Clone, Debug, PartialEq)]
pub struct ExperienceConfig {
    pub container_id: String,
    pub camera: CameraConfig,
    pub fog: FogConfig,
    pub renderer: RendererConfig,
    pub lights: [LightConfig; 4],
    pub stars: ParticleConfig,
    pub bloom: BloomConfig,
}

impl Default for ExperienceConfig {
    fn default() -> Self {
        Self {
            container_id: CONTAINER_ID.to_string(),
            camera: CameraConfig::default(),
            fog: FogConfig::default(),
            renderer: RendererConfig::default(),
            lights: [
                LightConfig::top_spot(),
                LightConfig::rim_spot(),
                LightConfig::fill_point(),
                LightConfig::ambient(),
            ],
            stars: ParticleConfig::default(),
            bloom: BloomConfig::default(),
        }
    }
}
