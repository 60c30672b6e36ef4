/// Window viewport as reported by the browser, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
    pub device_pixel_ratio: f64,
}

/// Backing-store size of the canvas after applying the pixel ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl SurfaceSize {
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Whether moving from `self` to `next` requires reconfiguring; empty
    /// or unchanged sizes are ignored.
    #[inline]
    pub fn needs_update(&self, next: SurfaceSize) -> bool {
        !next.is_empty() && next != *self
    }
}

/// Clamp the device pixel ratio into `[min, max]`.
///
/// Non-finite or non-positive ratios fall back to `min`.
#[inline]
pub fn clamp_pixel_ratio(device_pixel_ratio: f64, min: f64, max: f64) -> f64 {
    if !device_pixel_ratio.is_finite() || device_pixel_ratio <= 0.0 {
        return min;
    }
    device_pixel_ratio.clamp(min, max)
}

impl Viewport {
    #[inline]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    /// Physical size for a given (already clamped) pixel ratio.
    pub fn surface_size(&self, pixel_ratio: f64) -> SurfaceSize {
        SurfaceSize {
            width: (self.width as f64 * pixel_ratio).floor() as u32,
            height: (self.height as f64 * pixel_ratio).floor() as u32,
        }
    }
}
