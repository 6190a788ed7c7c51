//! Celestial body records: shared kinematics plus star- or planet-specific data.

use std::fmt;

use glam::DVec3;
use orrery_config::{PlanetType, StarType};

use crate::orbital::circular_position;

/// Index of a body in the [`SystemRegistry`](crate::SystemRegistry), in creation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BodyId(pub u32);

impl BodyId {
    /// The central star is always created first.
    pub const CENTRAL: BodyId = BodyId(0);

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "body#{}", self.0)
    }
}

/// The immutable parameters of a circular orbit around the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kinematics {
    /// Distance from the origin. Zero only for the central star.
    pub orbit_radius: f64,
    /// Angular rate in radians per simulation second.
    pub revolution_speed: f64,
    /// Phase at time zero, in `[0, 2π)`.
    pub angle: f64,
}

impl Kinematics {
    /// A body pinned to the origin.
    pub const AT_ORIGIN: Kinematics = Kinematics {
        orbit_radius: 0.0,
        revolution_speed: 0.0,
        angle: 0.0,
    };

    /// `time * revolution_speed + angle`.
    pub fn orbit_angle(&self, time: f64) -> f64 {
        time * self.revolution_speed + self.angle
    }

    /// Position at `time`. Depends on nothing but the orbit angle and radius.
    pub fn position_at(&self, time: f64) -> DVec3 {
        circular_position(self.orbit_radius, self.orbit_angle(time))
    }
}

/// Flat annulus in a body's equatorial plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    pub inner_radius: f64,
    pub outer_radius: f64,
    /// `0xRRGGBB`.
    pub color: u32,
}

impl Ring {
    pub fn width(&self) -> f64 {
        self.outer_radius - self.inner_radius
    }
}

/// Thin rims drawn just inside and just outside a planet's orbit.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitGuide {
    pub inner: Ring,
    pub outer: Ring,
}

impl OrbitGuide {
    const GAP: f64 = 0.01;
    const THICKNESS: f64 = 0.01;
    pub const INNER_COLOR: u32 = 0xff0000;
    pub const OUTER_COLOR: u32 = 0x00ff00;

    pub fn around(orbit_radius: f64) -> Self {
        Self {
            inner: Ring {
                inner_radius: orbit_radius - Self::GAP - Self::THICKNESS,
                outer_radius: orbit_radius - Self::GAP,
                color: Self::INNER_COLOR,
            },
            outer: Ring {
                inner_radius: orbit_radius + Self::GAP,
                outer_radius: orbit_radius + Self::GAP + Self::THICKNESS,
                color: Self::OUTER_COLOR,
            },
        }
    }
}

/// A satellite orbiting in its parent planet's local frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Moon {
    /// The planet this moon circles.
    pub parent: BodyId,
    /// Orbit radius relative to the parent.
    pub distance: f64,
    /// Angular rate in radians per simulation second.
    pub speed: f64,
    /// Phase at time zero.
    pub angle: f64,
    /// Visual sphere radius.
    pub radius: f64,
    /// `0xRRGGBB`.
    pub color: u32,
}

impl Moon {
    pub fn orbit_angle(&self, time: f64) -> f64 {
        time * self.speed + self.angle
    }

    /// Offset from the parent's center at `time`.
    pub fn local_position_at(&self, time: f64) -> DVec3 {
        circular_position(self.distance, self.orbit_angle(time))
    }
}

/// Star-only data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StarBody {
    pub mass: f64,
    pub star_type: StarType,
    pub color: u32,
    pub emissive_intensity: f32,
}

/// Planet-only data.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlanetBody {
    pub planet_type: PlanetType,
    pub color: u32,
    /// Static ring, if the planet got one.
    pub ring: Option<Ring>,
    pub guide: OrbitGuide,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BodyKind {
    Star(StarBody),
    Planet(PlanetBody),
}

/// One star or planet in the registry.
#[derive(Clone, Debug, PartialEq)]
pub struct CelestialBody {
    pub id: BodyId,
    pub kind: BodyKind,
    pub kinematics: Kinematics,
    /// Sphere radius handed to the renderer.
    pub visual_radius: f64,
    /// Circular-speed bookkeeping `(0, v, 0)`. Never read by the updater.
    pub initial_velocity: DVec3,
    pub moons: Vec<Moon>,
}

impl CelestialBody {
    pub fn is_star(&self) -> bool {
        matches!(self.kind, BodyKind::Star(_))
    }

    pub fn is_planet(&self) -> bool {
        matches!(self.kind, BodyKind::Planet(_))
    }

    /// Mass, for stars only.
    pub fn mass(&self) -> Option<f64> {
        match self.kind {
            BodyKind::Star(star) => Some(star.mass),
            BodyKind::Planet(_) => None,
        }
    }

    pub fn as_planet(&self) -> Option<&PlanetBody> {
        match &self.kind {
            BodyKind::Planet(planet) => Some(planet),
            BodyKind::Star(_) => None,
        }
    }

    pub fn as_star(&self) -> Option<&StarBody> {
        match &self.kind {
            BodyKind::Star(star) => Some(star),
            BodyKind::Planet(_) => None,
        }
    }

    pub fn position_at(&self, time: f64) -> DVec3 {
        self.kinematics.position_at(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_position_example_quarter_orbit() {
        let kin = Kinematics {
            orbit_radius: 10.0,
            revolution_speed: 0.0002,
            angle: 0.0,
        };
        assert_eq!(kin.position_at(0.0), DVec3::new(10.0, 0.0, 0.0));

        let t = FRAC_PI_2 / 0.0002;
        let p = kin.position_at(t);
        assert!(p.x.abs() < 1e-9, "x = {}", p.x);
        assert_eq!(p.y, 0.0);
        assert!((p.z - 10.0).abs() < 1e-9, "z = {}", p.z);
    }

    #[test]
    fn test_position_is_continuous_in_time() {
        let kin = Kinematics {
            orbit_radius: 7.5,
            revolution_speed: 0.0003,
            angle: 1.2,
        };
        let t = 4_321.0;
        let p = kin.position_at(t);
        for eps in [1.0, 1e-2, 1e-4, 1e-6] {
            let q = kin.position_at(t + eps);
            // The chord can never exceed the arc swept in eps seconds.
            let arc = kin.orbit_radius * kin.revolution_speed * eps;
            assert!((q - p).length() <= arc + 1e-12, "eps={eps}");
            assert!((kin.orbit_angle(t + eps) - kin.orbit_angle(t)).abs() <= 0.0003 * eps + 1e-12);
        }
    }

    #[test]
    fn test_origin_body_never_moves() {
        for t in [0.0, 1.0, 1e6] {
            assert_eq!(Kinematics::AT_ORIGIN.position_at(t), DVec3::ZERO);
        }
    }

    #[test]
    fn test_moon_local_position() {
        let moon = Moon {
            parent: BodyId(3),
            distance: 0.2,
            speed: 0.002,
            angle: 0.0,
            radius: 0.02,
            color: 0x888888,
        };
        assert_eq!(moon.local_position_at(0.0), DVec3::new(0.2, 0.0, 0.0));
        assert!((moon.local_position_at(123.0).length() - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_orbit_guide_brackets_orbit() {
        let guide = OrbitGuide::around(3.0);
        assert!(guide.inner.outer_radius < 3.0);
        assert!(guide.outer.inner_radius > 3.0);
        assert!((guide.inner.width() - 0.01).abs() < 1e-12);
        assert!((guide.outer.width() - 0.01).abs() < 1e-12);
        assert_eq!(guide.inner.color, OrbitGuide::INNER_COLOR);
        assert_eq!(guide.outer.color, OrbitGuide::OUTER_COLOR);
    }

    #[test]
    fn test_body_id_display() {
        assert_eq!(BodyId(4).to_string(), "body#4");
        assert_eq!(BodyId::CENTRAL.index(), 0);
    }
}
