//! Procedural construction of the star → planet → moon hierarchy.
//!
//! Generation order is fixed: central star, secondary stars, planets (each
//! with an optional ring and its moons), then the asteroid field and the
//! nebula. Randomness comes from an injected [`Rng`], so a seeded
//! [`ChaCha8Rng`] makes a run reproducible.

use std::f64::consts::TAU;

use glam::DVec3;
use orrery_config::{CatalogConfig, Config, ConfigError, Span, SystemConfig};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

use crate::body::{BodyId, BodyKind, Kinematics, OrbitGuide, PlanetBody, Ring, StarBody};
use crate::decoration::{AsteroidField, NebulaCloud};
use crate::orbital::OrbitalParams;

/// Rejected secondary-star distances before sampling the clear part of the range directly.
const MAX_DISTANCE_ATTEMPTS: u32 = 1_000;
use crate::registry::{BodySpec, MoonSpec, SystemRegistry};

/// Output of one generation run.
#[derive(Clone, Debug, Default)]
pub struct GeneratedSystem {
    /// Stars and planets that move.
    pub registry: SystemRegistry,
    /// Static asteroids.
    pub asteroids: AsteroidField,
    /// Static nebula particles.
    pub nebula: NebulaCloud,
    /// Planet slots that fell inside the exclusion radius and were left empty.
    pub skipped_slots: Vec<u32>,
}

/// Builds a [`GeneratedSystem`] from configuration and a random source.
pub struct SystemGenerator {
    system: SystemConfig,
    catalog: CatalogConfig,
    params: OrbitalParams,
}

impl SystemGenerator {
    /// Create a generator from an already validated config.
    pub fn new(config: &Config) -> Self {
        Self {
            system: config.system.clone(),
            catalog: config.catalog.clone(),
            params: OrbitalParams::from_config(&config.system),
        }
    }

    /// Validate `config`, then create a generator from it.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn params(&self) -> &OrbitalParams {
        &self.params
    }

    /// A random source seeded from the configured seed, or from OS entropy if none is set.
    pub fn rng(&self) -> ChaCha8Rng {
        match self.system.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_os_rng(),
        }
    }

    /// Run every generation step in order.
    pub fn generate<R: Rng>(&self, rng: &mut R) -> GeneratedSystem {
        let mut registry = SystemRegistry::new();
        self.add_central_star(&mut registry);
        self.add_secondary_stars(&mut registry, rng);
        let skipped_slots = self.add_planets(&mut registry, rng);

        let asteroids = AsteroidField::scatter(
            rng,
            self.system.asteroid_total(),
            self.system.asteroid_extent,
            self.system.asteroid_radius,
            self.catalog.asteroid_color,
        );
        let nebula = NebulaCloud::scatter(
            rng,
            self.system.nebula_total(),
            self.system.nebula_extent,
            self.catalog.nebula_color,
        );

        info!(
            "Generated system: {} stars, {} planets ({} slots skipped), {} moons, {} asteroids, {} nebula particles",
            registry.stars().count(),
            registry.planets().count(),
            skipped_slots.len(),
            registry.moon_count(),
            asteroids.len(),
            nebula.len(),
        );

        GeneratedSystem {
            registry,
            asteroids,
            nebula,
            skipped_slots,
        }
    }

    fn add_central_star(&self, registry: &mut SystemRegistry) -> BodyId {
        let star_type = self.system.central_star_type;
        registry.push(BodySpec {
            kind: BodyKind::Star(StarBody {
                mass: self.system.central_mass,
                star_type,
                color: self.catalog.star_color(star_type),
                emissive_intensity: star_type.emissive_intensity(),
            }),
            kinematics: Kinematics::AT_ORIGIN,
            visual_radius: self.system.central_radius,
            initial_velocity: DVec3::ZERO,
        })
    }

    fn add_secondary_stars<R: Rng>(&self, registry: &mut SystemRegistry, rng: &mut R) {
        let range = self.system.secondary_star_count;
        let count = rng.random_range(range.min..=range.max);

        for _ in 0..count {
            let entry = self.catalog.stars[rng.random_range(0..self.catalog.stars.len())];
            let mass = uniform(rng, self.system.secondary_star_mass);
            let orbit_radius = self.clear_star_distance(rng);
            let revolution_speed = uniform(rng, self.system.secondary_star_speed);
            let angle = random_angle(rng);
            let speed = self.params.velocity(mass, orbit_radius);

            let id = registry.push(BodySpec {
                kind: BodyKind::Star(StarBody {
                    mass,
                    star_type: entry.star_type,
                    color: entry.color,
                    emissive_intensity: entry.star_type.emissive_intensity(),
                }),
                kinematics: Kinematics {
                    orbit_radius,
                    revolution_speed,
                    angle,
                },
                visual_radius: self.system.secondary_star_radius,
                initial_velocity: DVec3::new(0.0, speed, 0.0),
            });
            debug!(
                "{id}: {:?} star, mass {mass:.3}, orbit {orbit_radius:.3}",
                entry.star_type
            );
        }
    }

    /// Resample the distance until it clears the exclusion radius.
    ///
    /// After [`MAX_DISTANCE_ATTEMPTS`] rejections the distance is drawn from the
    /// clear part of the range instead, which has the same distribution.
    fn clear_star_distance<R: Rng>(&self, rng: &mut R) -> f64 {
        let span = self.system.secondary_star_distance;
        for rejected in 0..MAX_DISTANCE_ATTEMPTS {
            let distance = uniform(rng, span);
            if self.params.is_clear(distance) {
                if rejected > 0 {
                    debug!("Secondary star distance accepted after {rejected} rejections");
                }
                return distance;
            }
        }
        let clear = Span::new(self.params.exclusion_radius.max(span.min), span.max);
        warn!(
            "No clear secondary star distance after {MAX_DISTANCE_ATTEMPTS} attempts, sampling [{:.3}, {:.3})",
            clear.min, clear.max
        );
        uniform(rng, clear)
    }

    /// Place planets slot by slot. Returns the slots left empty.
    fn add_planets<R: Rng>(&self, registry: &mut SystemRegistry, rng: &mut R) -> Vec<u32> {
        let central_mass = self.system.central_mass;
        let mut skipped = Vec::new();

        for slot in 0..self.system.max_planets {
            let orbit_radius = self.params.slot_radius(slot);
            if !self.params.is_clear(orbit_radius) {
                debug!(
                    "Planet slot {slot} at {orbit_radius:.3} lies inside exclusion radius {:.3}, skipping",
                    self.params.exclusion_radius
                );
                skipped.push(slot);
                continue;
            }

            let index = slot as usize;
            let radius = self.system.planet_radius(index);
            let entry = self.catalog.planets[rng.random_range(0..self.catalog.planets.len())];
            let speed = self.params.velocity(central_mass, orbit_radius);
            let angle = random_angle(rng);
            let ring = self.roll_ring(rng, radius);

            let id = registry.push(BodySpec {
                kind: BodyKind::Planet(PlanetBody {
                    planet_type: entry.planet_type,
                    color: entry.color,
                    ring,
                    guide: OrbitGuide::around(orbit_radius),
                }),
                kinematics: Kinematics {
                    orbit_radius,
                    revolution_speed: self.system.revolution_speed(index),
                    angle,
                },
                visual_radius: radius,
                initial_velocity: DVec3::new(0.0, speed * self.params.velocity_factor, 0.0),
            });

            let moons = self.add_moons(registry, rng, id);
            debug!(
                "{id}: {:?} planet in slot {slot}, orbit {orbit_radius:.3}, ring: {}, moons: {moons}",
                entry.planet_type,
                ring.is_some()
            );
        }

        skipped
    }

    fn roll_ring<R: Rng>(&self, rng: &mut R, planet_radius: f64) -> Option<Ring> {
        if !self.system.show_rings || !rng.random_bool(self.system.ring_probability) {
            return None;
        }
        let inner_radius = planet_radius * self.system.ring_inner_factor;
        Some(Ring {
            inner_radius,
            outer_radius: inner_radius + uniform(rng, self.system.ring_width),
            color: self.catalog.ring_color,
        })
    }

    fn add_moons<R: Rng>(&self, registry: &mut SystemRegistry, rng: &mut R, parent: BodyId) -> u32 {
        let range = self.system.moon_count;
        let count = rng.random_range(range.min..=range.max);
        for _ in 0..count {
            let moon = MoonSpec {
                distance: uniform(rng, self.system.moon_distance),
                speed: uniform(rng, self.system.moon_speed),
                angle: random_angle(rng),
                radius: uniform(rng, self.system.moon_radius),
                color: self.catalog.moon_color,
            };
            registry.add_moon(parent, moon);
        }
        count
    }
}

/// Uniform sample from `[span.min, span.max)`; a degenerate or empty span yields `min`.
pub(crate) fn uniform<R: Rng>(rng: &mut R, span: Span) -> f64 {
    if span.width() <= 0.0 {
        return span.min;
    }
    let value = rng.random_range(span.min..span.max);
    // Float rounding can land on the open bound.
    if value < span.max { value } else { span.min }
}

fn random_angle<R: Rng>(rng: &mut R) -> f64 {
    rng.random::<f64>() * TAU
}
