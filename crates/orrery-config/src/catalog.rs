//! Star and planet catalogs: the kinds the generator draws from and their display colors.
//!
//! Catalog entries only affect how a body looks. Kinematics never read them.

use serde::{Deserialize, Serialize};

/// Classification of a generated star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StarType {
    /// Yellow dwarf, the default for the central star.
    MainSequence,
    /// Cool, swollen, orange-red.
    RedGiant,
    /// Small and white-hot.
    WhiteDwarf,
    /// Hot, blue, very luminous.
    BlueGiant,
    /// Largest and reddest of the catalog.
    Supergiant,
}

impl StarType {
    /// Every star type, in catalog order.
    pub const ALL: [StarType; 5] = [
        StarType::MainSequence,
        StarType::RedGiant,
        StarType::WhiteDwarf,
        StarType::BlueGiant,
        StarType::Supergiant,
    ];

    /// Default display color as `0xRRGGBB`.
    pub fn default_color(&self) -> u32 {
        match self {
            StarType::MainSequence => 0xffff00,
            StarType::RedGiant => 0xff4500,
            StarType::WhiteDwarf => 0xffffff,
            StarType::BlueGiant => 0x1e90ff,
            StarType::Supergiant => 0xff6347,
        }
    }

    /// Emissive intensity handed to the renderer. Main-sequence stars glow hardest.
    pub fn emissive_intensity(&self) -> f32 {
        match self {
            StarType::MainSequence => 1.5,
            _ => 0.8,
        }
    }
}

/// Classification of a generated planet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlanetType {
    Terrestrial,
    GasGiant,
    IceGiant,
    DwarfPlanet,
}

impl PlanetType {
    /// Every planet type, in catalog order.
    pub const ALL: [PlanetType; 4] = [
        PlanetType::Terrestrial,
        PlanetType::GasGiant,
        PlanetType::IceGiant,
        PlanetType::DwarfPlanet,
    ];

    /// Default display color as `0xRRGGBB`.
    pub fn default_color(&self) -> u32 {
        match self {
            PlanetType::Terrestrial => 0x00ff00,
            PlanetType::GasGiant => 0x0000ff,
            PlanetType::IceGiant => 0x00ffff,
            PlanetType::DwarfPlanet => 0x888888,
        }
    }
}

/// A star kind the generator may pick, with its display color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StarEntry {
    pub star_type: StarType,
    pub color: u32,
}

/// A planet kind the generator may pick, with its display color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetEntry {
    pub planet_type: PlanetType,
    pub color: u32,
}

/// Type and color catalogs. Selection among entries is uniform.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// Star kinds available to secondary stars.
    pub stars: Vec<StarEntry>,
    /// Planet kinds available to planets.
    pub planets: Vec<PlanetEntry>,
    /// Moon color.
    pub moon_color: u32,
    /// Asteroid color.
    pub asteroid_color: u32,
    /// Nebula particle color.
    pub nebula_color: u32,
    /// Planetary ring color.
    pub ring_color: u32,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            stars: StarType::ALL
                .iter()
                .map(|&star_type| StarEntry {
                    star_type,
                    color: star_type.default_color(),
                })
                .collect(),
            planets: PlanetType::ALL
                .iter()
                .map(|&planet_type| PlanetEntry {
                    planet_type,
                    color: planet_type.default_color(),
                })
                .collect(),
            moon_color: 0x888888,
            asteroid_color: 0x888888,
            nebula_color: 0xaaaaaa,
            ring_color: 0xaaaaaa,
        }
    }
}

impl CatalogConfig {
    /// Color configured for a star type, falling back to the main-sequence color.
    pub fn star_color(&self, star_type: StarType) -> u32 {
        self.stars
            .iter()
            .find(|e| e.star_type == star_type)
            .or_else(|| {
                self.stars
                    .iter()
                    .find(|e| e.star_type == StarType::MainSequence)
            })
            .map(|e| e.color)
            .unwrap_or_else(|| StarType::MainSequence.default_color())
    }
}
