use crate::config::Color;
use crate::constants::{STAR_OPACITY, STAR_SIZE_SCALE};
use crate::scene::{PointCloud, PointsMaterial};
use glam::Vec3;
use rand::Rng;

/// `count` points drawn uniformly from the cube `[-spread/2, spread/2]^3`.
pub fn random_positions<R: Rng>(rng: &mut R, count: usize, spread: f32) -> Vec<Vec3> {
    let half = spread * 0.5;
    let mut axis = || {
        if half > 0.0 {
            rng.gen_range(-half..=half)
        } else {
            0.0
        }
    };
    (0..count)
        .map(|_| {
            let x = axis();
            let y = axis();
            let z = axis();
            Vec3::new(x, y, z)
        })
        .collect()
}

/// Material used for star particles; `size` is the authored base size.
pub fn star_material(color: Color, size: f32) -> PointsMaterial {
    PointsMaterial {
        color,
        opacity: STAR_OPACITY,
        size: size * STAR_SIZE_SCALE,
        size_attenuation: true,
        transparent: true,
        fog: true,
    }
}

pub fn create_particles<R: Rng>(
    rng: &mut R,
    count: usize,
    spread: f32,
    color: Color,
    size: f32,
) -> PointCloud {
    PointCloud {
        positions: random_positions(rng, count, spread),
        material: star_material(color, size),
    }
}
