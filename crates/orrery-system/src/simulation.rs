//! A generated system paired with its updater: the unit a frame loop drives.

use orrery_config::{Config, ConfigError};

use crate::generator::{GeneratedSystem, SystemGenerator};
use crate::registry::SystemRegistry;
use crate::render::RenderAdapter;
use crate::updater::{FrameUpdate, KinematicUpdater};

/// Owns the generated bodies and the per-frame updater.
pub struct Simulation {
    system: GeneratedSystem,
    updater: KinematicUpdater,
}

impl Simulation {
    /// Validate `config`, generate a system with the configured seed, and wrap it.
    pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
        let generator = SystemGenerator::from_config(config)?;
        let mut rng = generator.rng();
        let system = generator.generate(&mut rng);
        Ok(Self::new(system, KinematicUpdater::from_config(&config.system)))
    }

    pub fn new(system: GeneratedSystem, updater: KinematicUpdater) -> Self {
        Self { system, updater }
    }

    pub fn system(&self) -> &GeneratedSystem {
        &self.system
    }

    pub fn registry(&self) -> &SystemRegistry {
        &self.system.registry
    }

    /// Recompute transforms for `time` without presenting them.
    pub fn update(&mut self, time: f64) -> &FrameUpdate {
        self.updater.update(&self.system.registry, time)
    }

    /// Recompute transforms for `time` and hand them to `adapter`.
    pub fn advance(&mut self, time: f64, adapter: &mut impl RenderAdapter) {
        let frame = self.updater.update(&self.system.registry, time);
        adapter.present(frame);
    }

    pub fn updater(&self) -> &KinematicUpdater {
        &self.updater
    }
}
