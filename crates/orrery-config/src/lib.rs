//! Configuration system for Orrery.
//!
//! Provides the generation and display settings that persist to disk as RON
//! files. Supports CLI overrides via clap, hot-reload detection, range
//! validation at load time, and forward/backward compatible serialization.

mod catalog;
mod cli;
mod config;
mod error;

pub use catalog::{CatalogConfig, PlanetEntry, PlanetType, StarEntry, StarType};
pub use cli::CliArgs;
pub use config::{
    CountRange, Config, DebugConfig, DisplayConfig, MAX_MOONS_PER_PLANET, MAX_SCATTER_COUNT,
    MIN_CLEAR_DISTANCE_FRACTION, Span, SystemConfig,
};
pub use error::ConfigError;
