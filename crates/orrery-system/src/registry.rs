//! Append-only, creation-ordered store of every generated star and planet.

use glam::DVec3;

use crate::body::{BodyId, BodyKind, CelestialBody, Kinematics, Moon};

/// Everything needed to append a body. The registry assigns the id.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodySpec {
    pub kind: BodyKind,
    pub kinematics: Kinematics,
    pub visual_radius: f64,
    pub initial_velocity: DVec3,
}

/// Everything needed to attach a moon. The registry fills in the parent.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoonSpec {
    pub distance: f64,
    pub speed: f64,
    pub angle: f64,
    pub radius: f64,
    pub color: u32,
}

/// Ordered collection of bodies. The central star, when present, is at index 0.
///
/// Bodies can be appended and moons attached, but nothing is ever removed or
/// reordered, so a [`BodyId`] stays valid for the registry's lifetime.
#[derive(Clone, Debug, Default)]
pub struct SystemRegistry {
    bodies: Vec<CelestialBody>,
}

impl SystemRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a body and return its id.
    pub fn push(&mut self, spec: BodySpec) -> BodyId {
        let id = BodyId(self.bodies.len() as u32);
        self.bodies.push(CelestialBody {
            id,
            kind: spec.kind,
            kinematics: spec.kinematics,
            visual_radius: spec.visual_radius,
            initial_velocity: spec.initial_velocity,
            moons: Vec::new(),
        });
        id
    }

    /// Attach a moon to `parent`. Returns the moon's index within its parent,
    /// or `None` if `parent` is not in the registry.
    pub fn add_moon(&mut self, parent: BodyId, spec: MoonSpec) -> Option<usize> {
        let body = self.bodies.get_mut(parent.index())?;
        body.moons.push(Moon {
            parent,
            distance: spec.distance,
            speed: spec.speed,
            angle: spec.angle,
            radius: spec.radius,
            color: spec.color,
        });
        Some(body.moons.len() - 1)
    }

    pub fn get(&self, id: BodyId) -> Option<&CelestialBody> {
        self.bodies.get(id.index())
    }

    /// The body at index 0.
    pub fn central(&self) -> Option<&CelestialBody> {
        self.bodies.first()
    }

    pub fn bodies(&self) -> &[CelestialBody] {
        &self.bodies
    }

    pub fn iter(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter()
    }

    pub fn stars(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter().filter(|b| b.is_star())
    }

    pub fn planets(&self) -> impl Iterator<Item = &CelestialBody> {
        self.bodies.iter().filter(|b| b.is_planet())
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Total moons across all bodies.
    pub fn moon_count(&self) -> usize {
        self.bodies.iter().map(|b| b.moons.len()).sum()
    }
}

impl<'a> IntoIterator for &'a SystemRegistry {
    type Item = &'a CelestialBody;
    type IntoIter = std::slice::Iter<'a, CelestialBody>;

    fn into_iter(self) -> Self::IntoIter {
        self.bodies.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::{OrbitGuide, PlanetBody, StarBody};
    use orrery_config::{PlanetType, StarType};

    fn star_spec() -> BodySpec {
        BodySpec {
            kind: BodyKind::Star(StarBody {
                mass: 1.0,
                star_type: StarType::MainSequence,
                color: StarType::MainSequence.default_color(),
                emissive_intensity: 1.5,
            }),
            kinematics: Kinematics::AT_ORIGIN,
            visual_radius: 2.0,
            initial_velocity: DVec3::ZERO,
        }
    }

    fn planet_spec(orbit_radius: f64) -> BodySpec {
        BodySpec {
            kind: BodyKind::Planet(PlanetBody {
                planet_type: PlanetType::Terrestrial,
                color: 0x00ff00,
                ring: None,
                guide: OrbitGuide::around(orbit_radius),
            }),
            kinematics: Kinematics {
                orbit_radius,
                revolution_speed: 0.0005,
                angle: 0.0,
            },
            visual_radius: 0.05,
            initial_velocity: DVec3::ZERO,
        }
    }

    fn moon_spec(distance: f64, speed: f64, angle: f64) -> MoonSpec {
        MoonSpec {
            distance,
            speed,
            angle,
            radius: distance / 10.0,
            color: 0x888888,
        }
    }

    #[test]
    fn test_ids_follow_insertion_order() {
        let mut registry = SystemRegistry::new();
        let a = registry.push(star_spec());
        let b = registry.push(planet_spec(1.5));
        let c = registry.push(planet_spec(3.0));
        assert_eq!((a, b, c), (BodyId(0), BodyId(1), BodyId(2)));
        let radii: Vec<f64> = registry.iter().map(|b| b.kinematics.orbit_radius).collect();
        assert_eq!(radii, vec![0.0, 1.5, 3.0]);
        assert_eq!(registry.central().map(|b| b.id), Some(BodyId::CENTRAL));
    }

    #[test]
    fn test_add_moon_records_parent() {
        let mut registry = SystemRegistry::new();
        registry.push(star_spec());
        let planet = registry.push(planet_spec(1.5));
        assert_eq!(registry.add_moon(planet, moon_spec(0.2, 0.002, 1.0)), Some(0));
        assert_eq!(registry.add_moon(planet, moon_spec(0.3, 0.003, 2.0)), Some(1));

        let body = registry.get(planet).unwrap();
        assert_eq!(body.moons.len(), 2);
        assert!(body.moons.iter().all(|m| m.parent == planet));
        assert!(body.moons.iter().all(|m| m.color == 0x888888));
        assert_eq!(body.moons[1].distance, 0.3);
        assert_eq!(registry.moon_count(), 2);
        assert!(registry.get(BodyId::CENTRAL).unwrap().moons.is_empty());
    }

    #[test]
    fn test_add_moon_to_unknown_parent() {
        let mut registry = SystemRegistry::new();
        assert_eq!(registry.add_moon(BodyId(7), moon_spec(0.2, 0.002, 0.0)), None);
        assert_eq!(registry.moon_count(), 0);
    }

    #[test]
    fn test_star_and_planet_filters() {
        let mut registry = SystemRegistry::new();
        registry.push(star_spec());
        registry.push(planet_spec(1.5));
        registry.push(planet_spec(3.0));
        assert_eq!(registry.stars().count(), 1);
        assert_eq!(registry.planets().count(), 2);
        assert_eq!(registry.len(), 3);
        assert!(!registry.is_empty());
        assert!(registry.planets().all(|p| p.mass().is_none()));
        assert_eq!(registry.central().and_then(|c| c.mass()), Some(1.0));
    }
}
