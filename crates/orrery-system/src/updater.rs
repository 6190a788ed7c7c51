//! Per-frame kinematics: simulation time in, body and moon transforms out.
//!
//! Positions are a pure function of time and each body's immutable orbit, so
//! calling [`KinematicUpdater::update`] twice with the same time yields the
//! same positions. Only the cosmetic self-rotation accumulates between calls.

use glam::DVec3;
use orrery_config::SystemConfig;
use tracing::trace;

use crate::body::BodyId;
use crate::registry::SystemRegistry;

/// Where a moon is this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MoonTransform {
    pub parent: BodyId,
    /// Position within the parent's moon list.
    pub index: usize,
    /// Offset in the parent's frame.
    pub local: DVec3,
    /// `parent position + local`.
    pub world: DVec3,
}

/// Where a body is this frame and how far it has spun.
#[derive(Clone, Debug, PartialEq)]
pub struct BodyTransform {
    pub id: BodyId,
    pub position: DVec3,
    /// Accumulated self-rotation about the y axis, in radians.
    pub spin: f64,
    /// Rotation added by this update.
    pub spin_delta: f64,
    pub moons: Vec<MoonTransform>,
}

/// All transforms produced by one update call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameUpdate {
    /// Simulation time in seconds.
    pub time: f64,
    pub bodies: Vec<BodyTransform>,
}

/// Place a parent-local offset in the world frame.
fn compose_world(parent_world: DVec3, local: DVec3) -> DVec3 {
    parent_world + local
}

/// Recomputes every body's transform from simulation time.
#[derive(Clone, Debug)]
pub struct KinematicUpdater {
    spin_step: f64,
    spins: Vec<f64>,
    frame: FrameUpdate,
    update_count: u64,
}

impl KinematicUpdater {
    /// `spin_step` is added to every body's spin on each call, whatever the time.
    pub fn new(spin_step: f64) -> Self {
        Self {
            spin_step,
            spins: Vec::new(),
            frame: FrameUpdate::default(),
            update_count: 0,
        }
    }

    pub fn from_config(config: &SystemConfig) -> Self {
        Self::new(config.spin_step)
    }

    /// Recompute all transforms for `time` (seconds since start).
    pub fn update(&mut self, registry: &SystemRegistry, time: f64) -> &FrameUpdate {
        // The registry only grows, so existing spins keep their slot.
        self.spins.resize(registry.len(), 0.0);

        self.frame.time = time;
        self.frame.bodies.clear();

        for (body, spin) in registry.iter().zip(self.spins.iter_mut()) {
            let position = body.kinematics.position_at(time);
            *spin += self.spin_step;

            let moons = body
                .moons
                .iter()
                .enumerate()
                .map(|(index, moon)| {
                    let local = moon.local_position_at(time);
                    MoonTransform {
                        parent: moon.parent,
                        index,
                        local,
                        world: compose_world(position, local),
                    }
                })
                .collect();

            self.frame.bodies.push(BodyTransform {
                id: body.id,
                position,
                spin: *spin,
                spin_delta: self.spin_step,
                moons,
            });
        }

        self.update_count += 1;
        trace!(
            "Updated {} bodies at t={time:.3}s (update #{})",
            self.frame.bodies.len(),
            self.update_count
        );
        &self.frame
    }

    /// Transforms from the most recent update.
    pub fn frame(&self) -> &FrameUpdate {
        &self.frame
    }

    /// Accumulated spin of `id`, if it has been updated at least once.
    pub fn spin(&self, id: BodyId) -> Option<f64> {
        self.spins.get(id.index()).copied()
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }
}
