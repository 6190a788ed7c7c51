//! Static scenery scattered once at generation time: the asteroid field and the nebula cloud.
//!
//! Neither takes part in the per-frame update.

use glam::{DVec3, Vec3};
use orrery_config::Span;
use rand::Rng;

use crate::generator::uniform;

/// A single rock at a fixed position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Asteroid {
    pub position: DVec3,
    pub radius: f64,
}

/// Asteroids uniformly scattered in an origin-centered cube.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AsteroidField {
    pub asteroids: Vec<Asteroid>,
    pub color: u32,
}

impl AsteroidField {
    /// Scatter `count` asteroids in the cube of edge `extent`.
    pub fn scatter<R: Rng>(
        rng: &mut R,
        count: usize,
        extent: f64,
        radius: Span,
        color: u32,
    ) -> Self {
        let asteroids = (0..count)
            .map(|_| Asteroid {
                position: point_in_cube(rng, extent),
                radius: uniform(rng, radius),
            })
            .collect();
        Self { asteroids, color }
    }

    pub fn len(&self) -> usize {
        self.asteroids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.asteroids.is_empty()
    }
}

/// Point cloud uniformly filling an origin-centered cube.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct NebulaCloud {
    pub points: Vec<Vec3>,
    pub color: u32,
}

impl NebulaCloud {
    /// Scatter `count` particles in the cube of edge `extent`.
    pub fn scatter<R: Rng>(rng: &mut R, count: usize, extent: f64, color: u32) -> Self {
        let points = (0..count)
            .map(|_| point_in_cube(rng, extent).as_vec3())
            .collect();
        Self { points, color }
    }

    /// Interleaved `x, y, z` buffer, ready for a vertex upload.
    pub fn position_buffer(&self) -> Vec<f32> {
        self.points.iter().flat_map(|p| p.to_array()).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn point_in_cube<R: Rng>(rng: &mut R, extent: f64) -> DVec3 {
    DVec3::new(
        (rng.random::<f64>() - 0.5) * extent,
        (rng.random::<f64>() - 0.5) * extent,
        (rng.random::<f64>() - 0.5) * extent,
    )
}
