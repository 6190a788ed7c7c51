//! Circular-orbit math: slot radii, circular speeds, and in-plane positions.
//!
//! Everything here is a pure function. Motion is analytic, so there is no
//! integrator and no step-size dependence.

use glam::DVec3;
use orrery_config::SystemConfig;

/// Gravitational constant in SI units, before any configured scaling.
pub const G: f64 = 6.6743e-11;

/// The gravitational constant scaled by `multiplier`.
pub fn gravitational_constant(multiplier: f64) -> f64 {
    G * multiplier
}

/// Orbit radius of planet slot `index`: `min_distance + index * spacing`.
pub fn orbital_radius(index: u32, min_distance: f64, spacing: f64) -> f64 {
    min_distance + index as f64 * spacing
}

/// Circular orbital speed `sqrt(g * central_mass / radius)`.
///
/// `radius` must be positive. Generated geometry never violates this, so it is
/// only checked in debug builds.
pub fn orbital_velocity(g: f64, central_mass: f64, radius: f64) -> f64 {
    debug_assert!(radius > 0.0, "orbital radius must be positive, got {radius}");
    (g * central_mass / radius).sqrt()
}

/// Point at `angle` on a circle of `radius` in the y = 0 orbital plane.
pub fn circular_position(radius: f64, angle: f64) -> DVec3 {
    DVec3::new(radius * angle.cos(), 0.0, radius * angle.sin())
}

/// Orbital constants derived from a [`SystemConfig`]'s multipliers.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitalParams {
    /// Scaled gravitational constant.
    pub g: f64,
    /// Radius of planet slot 0.
    pub min_distance: f64,
    /// Gap between consecutive planet slots.
    pub spacing: f64,
    /// Bodies closer to the center than this are not placed.
    pub exclusion_radius: f64,
    /// Scaling from circular speed to a planet's bookkeeping initial velocity.
    pub velocity_factor: f64,
}

impl OrbitalParams {
    pub fn from_config(config: &SystemConfig) -> Self {
        Self {
            g: gravitational_constant(config.gravity_multiplier),
            min_distance: config.min_distance(),
            spacing: config.orbit_spacing(),
            exclusion_radius: config.exclusion_radius(),
            velocity_factor: config.velocity_factor(),
        }
    }

    /// Orbit radius of planet slot `index`.
    pub fn slot_radius(&self, index: u32) -> f64 {
        orbital_radius(index, self.min_distance, self.spacing)
    }

    /// Circular speed around `central_mass` at `radius`.
    pub fn velocity(&self, central_mass: f64, radius: f64) -> f64 {
        orbital_velocity(self.g, central_mass, radius)
    }

    /// Whether a body at `radius` lies outside the exclusion zone.
    pub fn is_clear(&self, radius: f64) -> bool {
        radius >= self.exclusion_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    #[test]
    fn test_orbital_radius_is_linear_in_index() {
        for index in 0..50u32 {
            let (d, s) = (1.5, 1.5);
            assert_eq!(orbital_radius(index, d, s), d + index as f64 * s);
        }
        assert_eq!(orbital_radius(0, 1.5, 1.5), 1.5);
        assert_eq!(orbital_radius(3, 2.0, 0.25), 2.75);
    }

    #[test]
    fn test_orbital_velocity_matches_formula() {
        for &(mass, radius) in &[(1.0, 1.5), (0.5, 5.0), (1.5, 14.9), (1e6, 0.1)] {
            let v = orbital_velocity(G, mass, radius);
            assert_eq!(v, (G * mass / radius).sqrt());
            assert!(v.is_finite() && v >= 0.0, "v = {v}");
        }
    }

    #[test]
    fn test_orbital_velocity_reference_value() {
        let v = orbital_velocity(G, 1.0, 1.5);
        assert!((v - 6.6705e-6).abs() < 1e-9, "v = {v}");
    }

    #[test]
    fn test_velocity_falls_with_radius() {
        let near = orbital_velocity(G, 1.0, 2.0);
        let far = orbital_velocity(G, 1.0, 8.0);
        assert!((near / far - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_gravity_multiplier_scales_constant() {
        assert_eq!(gravitational_constant(1.0), G);
        assert_eq!(gravitational_constant(2.0), 2.0 * G);
    }

    #[test]
    fn test_circular_position_quarter_turn() {
        let start = circular_position(10.0, 0.0);
        assert_eq!(start, DVec3::new(10.0, 0.0, 0.0));

        let quarter = circular_position(10.0, FRAC_PI_2);
        assert!(quarter.x.abs() < 1e-12);
        assert_eq!(quarter.y, 0.0);
        assert!((quarter.z - 10.0).abs() < 1e-12);

        let half = circular_position(10.0, PI);
        assert!((half.x + 10.0).abs() < 1e-12);
    }

    #[test]
    fn test_circular_position_stays_on_circle() {
        for i in 0..32 {
            let angle = TAU * i as f64 / 32.0;
            let p = circular_position(4.5, angle);
            assert!((p.length() - 4.5).abs() < 1e-12);
            assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn test_params_from_default_config() {
        let params = OrbitalParams::from_config(&SystemConfig::default());
        assert_eq!(params.g, G);
        assert_eq!(params.slot_radius(0), 1.5);
        assert_eq!(params.slot_radius(9), 15.0);
        assert!(params.is_clear(1.5));
        assert!(!params.is_clear(1.4999));
        assert!((params.velocity_factor - 0.1).abs() < 1e-15);
    }

    #[test]
    fn test_params_exclusion_grows_with_multiplier() {
        let config = SystemConfig {
            min_distance_multiplier: 2.0,
            ..SystemConfig::default()
        };
        let params = OrbitalParams::from_config(&config);
        assert_eq!(params.slot_radius(0), 3.0);
        assert_eq!(params.exclusion_radius, 6.0);
        assert!(!params.is_clear(params.slot_radius(0)));
        assert!(params.is_clear(params.slot_radius(1)));
    }
}
