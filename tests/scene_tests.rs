// Host-side tests for scene setup: lights, fog and colors.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}
mod scene {
    include!("../src/scene.rs");
}

use config::*;
use glam::Vec3;
use scene::*;

fn close(a: f32, b: f32) -> bool {
    (a - b).abs() < 1e-5
}

fn scene_with_default_lights() -> Scene {
    let cfg = ExperienceConfig::default();
    let mut s = Scene::new(Some(Fog::from(cfg.fog)));
    for light in cfg.lights {
        s.add_light(light);
    }
    s
}

#[test]
fn scene_is_transparent_with_black_fog() {
    let s = scene_with_default_lights();
    assert!(s.background.is_none());
    let fog = s.fog.expect("fog");
    assert_eq!(fog.near, 5.0);
    assert_eq!(fog.far, 15.0);
    assert_eq!(fog.color.to_array(), [0.0, 0.0, 0.0]);
}

#[test]
fn four_lights_in_order() {
    let s = scene_with_default_lights();
    assert_eq!(s.lights.len(), 4);

    let top = s.lights[0];
    assert_eq!(
        top.kind,
        LightKind::Spot {
            angle: 0.5,
            penumbra: 1.0,
            distance: 0.0
        }
    );
    assert_eq!(top.intensity, 2.0);
    assert_eq!(top.position, Vec3::new(0.0, 10.0, 5.0));

    let rim = s.lights[1];
    assert_eq!(
        rim.kind,
        LightKind::Spot {
            angle: 1.0,
            penumbra: 1.0,
            distance: 20.0
        }
    );
    assert_eq!(rim.intensity, 10.0);
    assert_eq!(rim.position, Vec3::new(0.0, 0.0, -5.0));
    assert!(close(rim.color.r, 1.0) && rim.color.g == 0.0 && rim.color.b == 0.0);

    let fill = s.lights[2];
    assert_eq!(fill.kind, LightKind::Point);
    assert_eq!(fill.intensity, 1.0);
    assert_eq!(fill.position, Vec3::new(0.0, -5.0, 2.0));
    assert!(fill.color.r > 0.0 && fill.color.g == 0.0 && fill.color.b == 0.0);

    let ambient = s.lights[3];
    assert_eq!(ambient.kind, LightKind::Ambient);
    assert!(close(ambient.intensity, 0.1));
}

#[test]
fn hex_colors_are_linearized() {
    let white = Color::from_hex(0xffffff);
    assert!(close(white.r, 1.0) && close(white.g, 1.0) && close(white.b, 1.0));

    // 0x33 = 0.2 in sRGB ~ 0.0331 linear
    let deep_red = Color::from_hex(0x330000);
    assert!((deep_red.r - 0.0331).abs() < 1e-3, "{}", deep_red.r);

    let mid = Color::from_hex(0x808080);
    assert!(mid.r > 0.2 && mid.r < 0.23);
}

#[test]
fn clear_color_follows_background() {
    let mut s = scene_with_default_lights();
    assert_eq!(s.clear_rgba(), [0.0, 0.0, 0.0, 0.0]);

    s.background = Some(Color::from_hex(0xffffff));
    let [r, g, b, a] = s.clear_rgba();
    assert!(close(r, 1.0) && close(g, 1.0) && close(b, 1.0));
    assert_eq!(a, 1.0);
}
