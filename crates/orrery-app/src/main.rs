//! Headless entry point: generates a planetary system and runs it for a number of frames.
//!
//! Run with: `cargo run -p orrery-app -- --seed 42 --frames 300`

use std::time::Duration;

use clap::Parser;
use orrery_app::game_loop::{FIXED_DT, GameLoop};
use orrery_app::headless::{HeadlessApp, LogRenderer};
use orrery_app::platform::PlatformDirs;
use orrery_config::{CliArgs, Config};
use orrery_system::Simulation;
use tracing::{error, info};

/// CLI arguments for the orrery binary.
#[derive(Parser, Debug)]
#[command(name = "orrery", about = "Procedural planetary system (headless)")]
struct AppArgs {
    #[command(flatten)]
    config: CliArgs,

    /// Frames to run before exiting.
    #[arg(long, default_value_t = 600)]
    frames: u64,

    /// Step frames back to back at a fixed 60 Hz instead of pacing on the wall clock.
    #[arg(long)]
    unpaced: bool,
}

fn main() {
    let args = AppArgs::parse();

    let dirs = match &args.config.config {
        Some(dir) => PlatformDirs::with_config_dir(dir),
        None => match PlatformDirs::resolve() {
            Ok(dirs) => dirs,
            Err(e) => {
                eprintln!("Failed to resolve platform directories: {e}");
                std::process::exit(1);
            }
        },
    };
    if let Err(e) = dirs.create_dirs() {
        eprintln!("Failed to create platform directories: {e}");
        std::process::exit(1);
    }

    let mut config = match Config::load_or_create(&dirs.config_dir) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e}");
            std::process::exit(1);
        }
    };
    config.apply_cli_overrides(&args.config);

    orrery_log::init_logging(Some(&dirs.log_dir), cfg!(debug_assertions), Some(&config));

    info!("Orrery");
    info!("  config: {}", dirs.config_dir.display());
    info!("  logs:   {}", dirs.log_dir.display());
    match config.system.seed {
        Some(seed) => info!("Seed: {seed}"),
        None => info!("Seed: random"),
    }

    let simulation = match Simulation::from_config(&config) {
        Ok(simulation) => simulation,
        Err(e) => {
            error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    let renderer = LogRenderer::new(config.display.clone(), config.debug.log_frame_interval);
    let mut state = HeadlessApp::new(simulation, renderer);

    let mut game_loop = GameLoop::new();
    let update = |s: &mut HeadlessApp, dt: f64, sim_time: f64| s.step(dt, sim_time);
    let render = |s: &mut HeadlessApp, alpha: f64| s.render(alpha);

    for _ in 0..args.frames {
        if args.unpaced {
            game_loop.advance(FIXED_DT, &mut state, update, render);
        } else {
            game_loop.tick(&mut state, update, render);
            std::thread::sleep(Duration::from_secs_f64(FIXED_DT));
        }
    }

    info!(
        "Finished: {} frames, {} updates, {:.2}s simulated",
        game_loop.frame_count(),
        game_loop.update_count(),
        game_loop.total_sim_time()
    );
}
