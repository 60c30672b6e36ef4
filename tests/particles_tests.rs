// Host-side tests for star particle generation.
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
mod particles {
    include!("../src/particles.rs");
}

use config::{Color, ParticleConfig};
use particles::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn white() -> Color {
    Color::from_hex(0xffffff)
}

#[test]
fn produces_exactly_count_points() {
    let mut rng = StdRng::seed_from_u64(7);
    for n in [0usize, 1, 17, 3000] {
        let cloud = create_particles(&mut rng, n, 50.0, white(), 0.5);
        assert_eq!(cloud.positions.len(), n);
    }
}

#[test]
fn every_coordinate_within_half_spread() {
    let mut rng = StdRng::seed_from_u64(42);
    for spread in [0.5_f32, 10.0, 50.0] {
        let half = spread / 2.0;
        let positions = random_positions(&mut rng, 5000, spread);
        for p in positions {
            for c in p.to_array() {
                assert!(c >= -half && c <= half, "{} outside ±{}", c, half);
            }
        }
    }
}

#[test]
fn positions_cover_the_cube() {
    // With 3000 uniform samples each octant should be populated
    let mut rng = StdRng::seed_from_u64(1);
    let positions = random_positions(&mut rng, 3000, 50.0);
    let mut octants = [0usize; 8];
    for p in &positions {
        let idx = (p.x >= 0.0) as usize | ((p.y >= 0.0) as usize) << 1 | ((p.z >= 0.0) as usize) << 2;
        octants[idx] += 1;
    }
    assert!(octants.iter().all(|&n| n > 250), "{:?}", octants);

    let mean = positions.iter().fold(glam::Vec3::ZERO, |a, p| a + *p) / positions.len() as f32;
    assert!(mean.abs().max_element() < 2.0, "mean {:?}", mean);
}

#[test]
fn zero_spread_collapses_to_origin() {
    let mut rng = StdRng::seed_from_u64(3);
    let positions = random_positions(&mut rng, 10, 0.0);
    assert!(positions.iter().all(|p| *p == glam::Vec3::ZERO));
}

#[test]
fn same_seed_same_cloud() {
    let a = create_particles(&mut StdRng::seed_from_u64(99), 100, 50.0, white(), 0.5);
    let b = create_particles(&mut StdRng::seed_from_u64(99), 100, 50.0, white(), 0.5);
    assert_eq!(a, b);
}

#[test]
fn star_material_matches_defaults() {
    let stars = ParticleConfig::default();
    let mut rng = StdRng::seed_from_u64(5);
    let cloud = create_particles(&mut rng, stars.count, stars.spread, stars.color, stars.size);

    assert_eq!(cloud.positions.len(), 3000);
    let m = cloud.material;
    assert!((m.size - 0.025).abs() < 1e-6);
    assert!((m.opacity - 0.6).abs() < 1e-6);
    assert!(m.size_attenuation);
    assert!(m.transparent);
    assert!(m.fog);
    assert_eq!(m.color, white());
}

#[test]
fn scene_keeps_added_clouds() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut s = scene::Scene::new(None);
    let first = s.add_points(create_particles(&mut rng, 10, 1.0, white(), 1.0));
    let second = s.add_points(create_particles(&mut rng, 20, 1.0, white(), 1.0));
    assert_eq!((first, second), (0, 1));
    assert_eq!(s.point_clouds[1].positions.len(), 20);
}
