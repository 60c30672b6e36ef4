// Host-side tests for camera fitting and drawing-buffer sizing on resize.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}
mod camera {
    include!("../src/camera.rs");
}
mod viewport {
    include!("../src/viewport.rs");
}

use camera::PerspectiveCamera;
use config::{CameraConfig, RendererConfig};
use glam::{Mat4, Vec3};
use viewport::*;

fn viewport(width: u32, height: u32, dpr: f64) -> Viewport {
    Viewport {
        width,
        height,
        device_pixel_ratio: dpr,
    }
}

#[test]
fn camera_defaults() {
    let cam = PerspectiveCamera::new(&CameraConfig::default(), 16.0 / 9.0);
    assert_eq!(cam.fov_deg, 45.0);
    assert_eq!(cam.near, 0.1);
    assert_eq!(cam.far, 100.0);
    assert_eq!(cam.position, Vec3::new(0.0, 0.0, 8.0));
    assert_eq!(cam.target, Vec3::ZERO);
}

#[test]
fn aspect_equals_width_over_height() {
    let mut cam = PerspectiveCamera::new(&CameraConfig::default(), 1.0);
    for (w, h) in [(1920u32, 1080u32), (800, 600), (375, 812), (1, 1), (3000, 7)] {
        cam.fit(w, h);
        assert_eq!(cam.aspect, w as f32 / h as f32);
        let expected = Mat4::perspective_rh(45f32.to_radians(), w as f32 / h as f32, 0.1, 100.0);
        assert!(cam.projection_matrix().abs_diff_eq(expected, 1e-6));
    }
}

#[test]
fn resize_is_idempotent() {
    let mut cam = PerspectiveCamera::new(&CameraConfig::default(), 1.0);
    let vp = viewport(1280, 720, 2.0);
    let current = SurfaceSize::default();

    cam.fit(vp.width, vp.height);
    let first = vp.surface_size(2.0);
    assert!(current.needs_update(first));
    assert_eq!(first, SurfaceSize { width: 2560, height: 1440 });

    let after_first = cam.clone();
    cam.fit(vp.width, vp.height);
    let second = vp.surface_size(2.0);
    assert_eq!(cam, after_first);
    assert!(!first.needs_update(second));
}

#[test]
fn surface_update_skips_empty_and_unchanged_sizes() {
    let current = SurfaceSize { width: 800, height: 600 };
    assert!(!current.needs_update(current));
    assert!(!current.needs_update(SurfaceSize { width: 0, height: 600 }));
    assert!(!current.needs_update(SurfaceSize { width: 800, height: 0 }));
    assert!(current.needs_update(SurfaceSize { width: 801, height: 600 }));
    assert!(current.needs_update(SurfaceSize { width: 800, height: 599 }));
}

#[test]
fn zero_sized_viewport_keeps_camera() {
    let mut cam = PerspectiveCamera::new(&CameraConfig::default(), 1.5);
    let before = cam.clone();
    cam.fit(0, 600);
    cam.fit(800, 0);
    assert_eq!(cam, before);
    assert!(viewport(0, 600, 1.0).surface_size(1.0).is_empty());
}

#[test]
fn pixel_ratio_clamped_to_one_and_two() {
    let r = RendererConfig::default();
    let clamp = |dpr| clamp_pixel_ratio(dpr, r.min_pixel_ratio, r.max_pixel_ratio);
    assert_eq!(clamp(3.0), 2.0);
    assert_eq!(clamp(1.0), 1.0);
    assert_eq!(clamp(1.5), 1.5);
    assert_eq!(clamp(2.0), 2.0);
    assert_eq!(clamp(0.5), 1.0);
    assert_eq!(clamp(0.0), 1.0);
    assert_eq!(clamp(f64::NAN), 1.0);
}

#[test]
fn surface_size_floors_fractional_pixels() {
    let size = viewport(333, 101, 1.5).surface_size(1.5);
    assert_eq!(size, SurfaceSize { width: 499, height: 151 });
}

#[test]
fn view_matrix_looks_down_negative_z() {
    let cam = PerspectiveCamera::new(&CameraConfig::default(), 1.0);
    let origin_in_view = cam.view_matrix().transform_point3(Vec3::ZERO);
    assert!((origin_in_view - Vec3::new(0.0, 0.0, -8.0)).length() < 1e-5);
}
