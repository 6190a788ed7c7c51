//! Procedural planetary system: body generation and analytic orbital kinematics.
//!
//! The [`SystemGenerator`] builds a [`SystemRegistry`] of stars and planets (with
//! rings and moons) plus static decoration, and the [`KinematicUpdater`] turns a
//! simulation time into per-body transforms for a [`RenderAdapter`].

pub mod body;
pub mod decoration;
pub mod generator;
pub mod orbital;
pub mod registry;
pub mod render;
pub mod simulation;
pub mod updater;

pub use body::{
    BodyId, BodyKind, CelestialBody, Kinematics, Moon, OrbitGuide, PlanetBody, Ring, StarBody,
};
pub use decoration::{Asteroid, AsteroidField, NebulaCloud};
pub use generator::{GeneratedSystem, SystemGenerator};
pub use orbital::{
    G, OrbitalParams, circular_position, gravitational_constant, orbital_radius, orbital_velocity,
};
pub use registry::{BodySpec, MoonSpec, SystemRegistry};
pub use render::RenderAdapter;
pub use simulation::Simulation;
pub use updater::{BodyTransform, FrameUpdate, KinematicUpdater, MoonTransform};
