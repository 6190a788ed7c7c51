//! Configuration structs with sensible defaults, range validation, and RON persistence.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogConfig, StarType};
use crate::error::ConfigError;

/// Hard ceiling on moons per planet.
pub const MAX_MOONS_PER_PLANET: u32 = 5;

/// Upper bound on scaled asteroid and nebula counts.
pub const MAX_SCATTER_COUNT: usize = 4_000_000;

/// Smallest share of the secondary-star distance range that must clear the exclusion radius.
pub const MIN_CLEAR_DISTANCE_FRACTION: f64 = 0.01;

/// Half-open real interval `[min, max)` sampled uniformly by the generator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Distance between the bounds.
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// Whether `value` lies in `[min, max)`, or equals `min` for a degenerate span.
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && (value < self.max || value == self.min)
    }

    fn check(&self, field: &'static str, lower: f64, strict: bool) -> Result<(), ConfigError> {
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(ConfigError::invalid(field, "bounds must be finite"));
        }
        if self.min > self.max {
            return Err(ConfigError::invalid(
                field,
                format!("min {} exceeds max {}", self.min, self.max),
            ));
        }
        let below = if strict {
            self.min <= lower
        } else {
            self.min < lower
        };
        if below {
            let op = if strict { ">" } else { ">=" };
            return Err(ConfigError::invalid(
                field,
                format!("min {} must be {op} {lower}", self.min),
            ));
        }
        Ok(())
    }
}

/// Inclusive integer range `[min, max]`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn check(&self, field: &'static str) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::invalid(
                field,
                format!("min {} exceeds max {}", self.min, self.max),
            ));
        }
        Ok(())
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Generation and kinematic parameters.
    pub system: SystemConfig,
    /// Star/planet type catalogs and colors.
    pub catalog: CatalogConfig,
    /// Render-adapter settings. The core never reads these.
    pub display: DisplayConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Parameters of the procedural system and its motion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SystemConfig {
    /// Fixed seed for reproducible generation. `None` draws from OS entropy.
    pub seed: Option<u64>,

    /// Scales the gravitational constant.
    pub gravity_multiplier: f64,
    /// Scales the minimum orbital distance, the orbit spacing and the exclusion radius.
    pub min_distance_multiplier: f64,
    /// Scales the bookkeeping initial velocity of planets.
    pub initial_velocity_multiplier: f64,
    /// Scales every entry of `planet_radii`.
    pub planet_radius_multiplier: f64,
    /// Scales `asteroid_count`.
    pub asteroid_count_multiplier: f64,
    /// Scales `nebula_particle_count`.
    pub nebula_particle_count_multiplier: f64,

    /// Innermost planetary orbit before scaling.
    pub base_min_distance: f64,
    /// Gap between consecutive planetary orbits before scaling.
    pub base_orbit_spacing: f64,
    /// Planet initial velocity is the circular speed times this (times its multiplier).
    pub initial_velocity_factor: f64,

    /// Central star mass (reference mass, usually 1.0).
    pub central_mass: f64,
    /// Central star visual radius.
    pub central_radius: f64,
    /// Central star type.
    pub central_star_type: StarType,

    /// How many secondary stars to create (inclusive).
    pub secondary_star_count: CountRange,
    pub secondary_star_mass: Span,
    /// Orbit radius range, resampled until it clears the exclusion radius.
    pub secondary_star_distance: Span,
    /// Angular speed range in radians per simulation second.
    pub secondary_star_speed: Span,
    pub secondary_star_radius: f64,

    /// Number of planet slots. Slots inside the exclusion radius are skipped.
    pub max_planets: u32,
    /// Ascending size table, indexed by slot with wraparound.
    pub planet_radii: Vec<f64>,
    /// Descending angular speed table, indexed by slot with wraparound.
    pub revolution_speeds: Vec<f64>,

    /// Master switch for planetary rings.
    pub show_rings: bool,
    /// Chance that a planet gets a ring.
    pub ring_probability: f64,
    /// Ring inner radius as a multiple of the planet radius.
    pub ring_inner_factor: f64,
    /// Ring width added to the inner radius.
    pub ring_width: Span,

    pub moon_count: CountRange,
    pub moon_distance: Span,
    pub moon_speed: Span,
    pub moon_radius: Span,

    /// Asteroid count before scaling.
    pub asteroid_count: u32,
    /// Edge length of the cube asteroids are scattered in, centered on the origin.
    pub asteroid_extent: f64,
    pub asteroid_radius: Span,

    /// Nebula particle count before scaling.
    pub nebula_particle_count: u32,
    /// Edge length of the cube nebula particles are scattered in.
    pub nebula_extent: f64,

    /// Self-rotation added to every body on each update call, in radians.
    pub spin_step: f64,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            seed: None,
            gravity_multiplier: 1.0,
            min_distance_multiplier: 1.0,
            initial_velocity_multiplier: 1.0,
            planet_radius_multiplier: 1.0,
            asteroid_count_multiplier: 1.0,
            nebula_particle_count_multiplier: 1.0,
            base_min_distance: 1.5,
            base_orbit_spacing: 1.5,
            initial_velocity_factor: 0.1,
            central_mass: 1.0,
            central_radius: 2.0,
            central_star_type: StarType::MainSequence,
            secondary_star_count: CountRange::new(1, 2),
            secondary_star_mass: Span::new(0.5, 1.5),
            secondary_star_distance: Span::new(5.0, 15.0),
            secondary_star_speed: Span::new(0.0005, 0.0015),
            secondary_star_radius: 0.5,
            max_planets: 10,
            planet_radii: vec![0.05, 0.07, 0.09, 0.11, 0.13, 0.15, 0.17, 0.19, 0.21, 0.23],
            revolution_speeds: vec![
                0.0005, 0.0004, 0.0003, 0.0002, 0.00015, 0.0001, 0.00008, 0.00005, 0.00003,
                0.00001,
            ],
            show_rings: true,
            ring_probability: 0.5,
            ring_inner_factor: 1.5,
            ring_width: Span::new(0.0, 0.1),
            moon_count: CountRange::new(0, MAX_MOONS_PER_PLANET),
            moon_distance: Span::new(0.1, 0.4),
            moon_speed: Span::new(0.001, 0.004),
            moon_radius: Span::new(0.01, 0.04),
            asteroid_count: 200,
            asteroid_extent: 20.0,
            asteroid_radius: Span::new(0.01, 0.04),
            nebula_particle_count: 4000,
            nebula_extent: 30.0,
            spin_step: 0.001,
        }
    }
}

impl SystemConfig {
    /// Radius of the innermost planetary orbit.
    pub fn min_distance(&self) -> f64 {
        self.base_min_distance * self.min_distance_multiplier
    }

    /// Gap between consecutive planetary orbits.
    pub fn orbit_spacing(&self) -> f64 {
        self.base_orbit_spacing * self.min_distance_multiplier
    }

    /// Bodies may not be placed closer to the center than this.
    ///
    /// The multiplier is applied on top of [`min_distance`](Self::min_distance),
    /// so multipliers above 1 push the first planet slots inside the zone.
    pub fn exclusion_radius(&self) -> f64 {
        self.min_distance() * self.min_distance_multiplier
    }

    /// Scaling applied to a planet's circular speed for its initial velocity.
    pub fn velocity_factor(&self) -> f64 {
        self.initial_velocity_factor * self.initial_velocity_multiplier
    }

    /// Scaled asteroid count.
    pub fn asteroid_total(&self) -> usize {
        scaled_count(self.asteroid_count, self.asteroid_count_multiplier)
    }

    /// Scaled nebula particle count.
    pub fn nebula_total(&self) -> usize {
        scaled_count(self.nebula_particle_count, self.nebula_particle_count_multiplier)
    }

    /// Planet radius for slot `index`, wrapping around the size table.
    pub fn planet_radius(&self, index: usize) -> f64 {
        self.planet_radii[index % self.planet_radii.len()] * self.planet_radius_multiplier
    }

    /// Angular speed for slot `index`, wrapping around the speed table.
    pub fn revolution_speed(&self, index: usize) -> f64 {
        self.revolution_speeds[index % self.revolution_speeds.len()]
    }

    /// Reject values the generator cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_multiplier("system.gravity_multiplier", self.gravity_multiplier, false)?;
        check_multiplier(
            "system.min_distance_multiplier",
            self.min_distance_multiplier,
            true,
        )?;
        check_multiplier(
            "system.initial_velocity_multiplier",
            self.initial_velocity_multiplier,
            false,
        )?;
        check_multiplier(
            "system.planet_radius_multiplier",
            self.planet_radius_multiplier,
            true,
        )?;
        check_multiplier(
            "system.asteroid_count_multiplier",
            self.asteroid_count_multiplier,
            false,
        )?;
        check_multiplier(
            "system.nebula_particle_count_multiplier",
            self.nebula_particle_count_multiplier,
            false,
        )?;
        check_scaled_count(
            "system.asteroid_count_multiplier",
            self.asteroid_count,
            self.asteroid_count_multiplier,
        )?;
        check_scaled_count(
            "system.nebula_particle_count_multiplier",
            self.nebula_particle_count,
            self.nebula_particle_count_multiplier,
        )?;
        check_multiplier("system.base_min_distance", self.base_min_distance, true)?;
        check_multiplier("system.base_orbit_spacing", self.base_orbit_spacing, false)?;
        check_multiplier(
            "system.initial_velocity_factor",
            self.initial_velocity_factor,
            false,
        )?;
        check_multiplier("system.central_mass", self.central_mass, true)?;
        check_multiplier("system.central_radius", self.central_radius, true)?;

        self.secondary_star_count
            .check("system.secondary_star_count")?;
        self.secondary_star_mass
            .check("system.secondary_star_mass", 0.0, true)?;
        self.secondary_star_distance
            .check("system.secondary_star_distance", 0.0, true)?;
        let exclusion = self.exclusion_radius();
        let span = self.secondary_star_distance;
        let clear = if span.width() > 0.0 {
            (span.max - exclusion.max(span.min)) / span.width()
        } else if span.min >= exclusion {
            1.0
        } else {
            0.0
        };
        if clear < MIN_CLEAR_DISTANCE_FRACTION {
            return Err(ConfigError::invalid(
                "system.secondary_star_distance",
                format!(
                    "less than {}% of the range clears the exclusion radius {exclusion}",
                    MIN_CLEAR_DISTANCE_FRACTION * 100.0
                ),
            ));
        }
        self.secondary_star_speed
            .check("system.secondary_star_speed", f64::NEG_INFINITY, false)?;
        check_multiplier("system.secondary_star_radius", self.secondary_star_radius, true)?;

        check_table("system.planet_radii", &self.planet_radii, true)?;
        check_table("system.revolution_speeds", &self.revolution_speeds, false)?;

        if !(0.0..=1.0).contains(&self.ring_probability) {
            return Err(ConfigError::invalid(
                "system.ring_probability",
                format!("{} is not a probability", self.ring_probability),
            ));
        }
        check_multiplier("system.ring_inner_factor", self.ring_inner_factor, true)?;
        self.ring_width.check("system.ring_width", 0.0, false)?;

        self.moon_count.check("system.moon_count")?;
        if self.moon_count.max > MAX_MOONS_PER_PLANET {
            return Err(ConfigError::invalid(
                "system.moon_count",
                format!(
                    "max {} exceeds {MAX_MOONS_PER_PLANET} moons per planet",
                    self.moon_count.max
                ),
            ));
        }
        self.moon_distance
            .check("system.moon_distance", 0.0, true)?;
        self.moon_speed
            .check("system.moon_speed", f64::NEG_INFINITY, false)?;
        self.moon_radius.check("system.moon_radius", 0.0, true)?;

        check_multiplier("system.asteroid_extent", self.asteroid_extent, false)?;
        self.asteroid_radius
            .check("system.asteroid_radius", 0.0, true)?;
        check_multiplier("system.nebula_extent", self.nebula_extent, false)?;

        if !self.spin_step.is_finite() {
            return Err(ConfigError::invalid("system.spin_step", "must be finite"));
        }
        Ok(())
    }
}

/// Render-adapter settings carried through the configuration surface.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DisplayConfig {
    /// Enable the bloom post-processing pass.
    pub enable_bloom: bool,
    pub bloom_strength: f32,
    pub bloom_radius: f32,
    pub bloom_threshold: f32,
    /// Closest the orbit camera may zoom in.
    pub camera_min_distance: f32,
    /// Farthest the orbit camera may zoom out.
    pub camera_max_distance: f32,
    /// Camera distance from the origin at startup.
    pub camera_start_distance: f32,
}

impl DisplayConfig {
    /// Camera distances must be positive and ordered `min <= start <= max`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("display.camera_min_distance", self.camera_min_distance),
            ("display.camera_max_distance", self.camera_max_distance),
            ("display.camera_start_distance", self.camera_start_distance),
        ] {
            check_multiplier(field, value as f64, true)?;
        }
        if self.camera_min_distance > self.camera_max_distance {
            return Err(ConfigError::invalid(
                "display.camera_min_distance",
                format!(
                    "{} exceeds camera_max_distance {}",
                    self.camera_min_distance, self.camera_max_distance
                ),
            ));
        }
        if !(self.camera_min_distance..=self.camera_max_distance)
            .contains(&self.camera_start_distance)
        {
            return Err(ConfigError::invalid(
                "display.camera_start_distance",
                format!(
                    "{} outside [{}, {}]",
                    self.camera_start_distance, self.camera_min_distance, self.camera_max_distance
                ),
            ));
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            enable_bloom: true,
            bloom_strength: 1.5,
            bloom_radius: 0.4,
            bloom_threshold: 0.85,
            camera_min_distance: 0.01,
            camera_max_distance: 300.0,
            camera_start_distance: 20.0,
        }
    }
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Frames between frame summaries in the headless renderer. 0 disables them.
    pub log_frame_interval: u64,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_frame_interval: 60,
        }
    }
}

fn scaled_count(base: u32, multiplier: f64) -> usize {
    (base as f64 * multiplier).ceil() as usize
}

fn check_multiplier(field: &'static str, value: f64, strict: bool) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::invalid(field, "must be finite"));
    }
    if strict && value <= 0.0 {
        return Err(ConfigError::invalid(field, format!("{value} must be > 0")));
    }
    if value < 0.0 {
        return Err(ConfigError::invalid(field, format!("{value} must be >= 0")));
    }
    Ok(())
}

fn check_scaled_count(field: &'static str, base: u32, multiplier: f64) -> Result<(), ConfigError> {
    let scaled = (base as f64 * multiplier).ceil();
    if scaled > MAX_SCATTER_COUNT as f64 {
        return Err(ConfigError::invalid(
            field,
            format!("{base} x {multiplier} exceeds {MAX_SCATTER_COUNT} points"),
        ));
    }
    Ok(())
}

fn check_table(field: &'static str, table: &[f64], positive: bool) -> Result<(), ConfigError> {
    if table.is_empty() {
        return Err(ConfigError::invalid(field, "table is empty"));
    }
    for &value in table {
        check_multiplier(field, value, positive)?;
    }
    Ok(())
}

// --- Validation / Load / Save / Reload ---

impl Config {
    /// Check every section for values the generator cannot honor.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.system.validate()?;
        self.display.validate()?;
        if self.catalog.stars.is_empty() {
            return Err(ConfigError::invalid("catalog.stars", "catalog is empty"));
        }
        if self.catalog.planets.is_empty() {
            return Err(ConfigError::invalid("catalog.planets", "catalog is empty"));
        }
        Ok(())
    }

    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            config.validate()?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
        new_config.validate()?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
