//! Command-line argument parsing for Orrery.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Orrery command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "orrery", about = "Procedural planetary system")]
pub struct CliArgs {
    /// Seed for reproducible generation.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of planet slots.
    #[arg(long)]
    pub max_planets: Option<u32>,

    /// Gravitational constant multiplier.
    #[arg(long)]
    pub gravity_multiplier: Option<f64>,

    /// Minimum orbital distance multiplier.
    #[arg(long)]
    pub min_distance_multiplier: Option<f64>,

    /// Disable planetary rings.
    #[arg(long)]
    pub no_rings: bool,

    /// Disable the bloom pass.
    #[arg(long)]
    pub no_bloom: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    ///
    /// Call [`Config::validate`] afterwards; overrides are not range-checked here.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.system.seed = Some(seed);
        }
        if let Some(n) = args.max_planets {
            self.system.max_planets = n;
        }
        if let Some(g) = args.gravity_multiplier {
            self.system.gravity_multiplier = g;
        }
        if let Some(m) = args.min_distance_multiplier {
            self.system.min_distance_multiplier = m;
        }
        if args.no_rings {
            self.system.show_rings = false;
        }
        if args.no_bloom {
            self.display.enable_bloom = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
