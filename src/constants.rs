/// Literal tuning values for the starfield background.
///
/// Everything here is gathered into `config::ExperienceConfig`; keeping the
/// raw numbers in one place makes it easy to compare against the look we want.
// DOM
pub const CONTAINER_ID: &str = "canvas-container";

// Camera
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 100.0;
pub const CAMERA_Z: f32 = 8.0;

// Fog (linear, fades to black)
pub const FOG_COLOR: u32 = 0x000000;
pub const FOG_NEAR: f32 = 5.0;
pub const FOG_FAR: f32 = 15.0;

// Renderer
pub const MIN_PIXEL_RATIO: f64 = 1.0;
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Palette
pub const WHITE: u32 = 0xffffff;
pub const RED_NEON: u32 = 0xff0000;
pub const DEEP_RED: u32 = 0x330000;

// Lights
pub const TOP_SPOT_INTENSITY: f32 = 2.0;
pub const TOP_SPOT_POSITION: [f32; 3] = [0.0, 10.0, 5.0];
pub const TOP_SPOT_ANGLE: f32 = 0.5;

pub const RIM_SPOT_INTENSITY: f32 = 10.0;
pub const RIM_SPOT_POSITION: [f32; 3] = [0.0, 0.0, -5.0];
pub const RIM_SPOT_ANGLE: f32 = 1.0;
pub const RIM_SPOT_DISTANCE: f32 = 20.0;

pub const SPOT_PENUMBRA: f32 = 1.0;

pub const FILL_POINT_INTENSITY: f32 = 1.0;
pub const FILL_POINT_POSITION: [f32; 3] = [0.0, -5.0, 2.0];

pub const AMBIENT_INTENSITY: f32 = 0.1;

// Stars
pub const STAR_COUNT: usize = 3000;
pub const STAR_SPREAD: f32 = 50.0;
pub const STAR_BASE_SIZE: f32 = 0.5;
pub const STAR_SIZE_SCALE: f32 = 0.05; // base size -> world point size
pub const STAR_OPACITY: f32 = 0.6;

// Post-processing
pub const BLOOM_STRENGTH: f32 = 1.5;
pub const BLOOM_RADIUS: f32 = 0.5;
pub const BLOOM_THRESHOLD: f32 = 0.1;
pub const BLOOM_LEVELS: usize = 5; // blur mips, each half the previous size
