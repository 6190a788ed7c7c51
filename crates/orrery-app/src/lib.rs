//! Orrery application framework.
//!
//! Provides the fixed-timestep frame loop, platform directory resolution, and
//! a headless render adapter that reports frames through the log.

pub mod game_loop;
pub mod headless;
pub mod platform;
