//! Render adapter without a window: tracks what a renderer would draw and reports it through tracing.

use orrery_config::DisplayConfig;
use orrery_system::{BodyTransform, RenderAdapter, Simulation};
use tracing::{info, trace, warn};

/// Counts and summarizes presented frames instead of drawing them.
pub struct LogRenderer {
    display: DisplayConfig,
    /// Frames between summaries. 0 disables them.
    interval: u64,
    frames: u64,
    time: f64,
    bodies: usize,
    moons: usize,
    farthest: f64,
    /// Set once a body has been seen past the camera's zoom-out limit.
    out_of_view: bool,
}

impl LogRenderer {
    pub fn new(display: DisplayConfig, interval: u64) -> Self {
        // `display` is shadowed inside tracing macros by `tracing::field::display`.
        let settings = &display;
        info!(
            "Headless renderer: bloom {} (strength {:.2}, radius {:.2}, threshold {:.2})",
            if settings.enable_bloom { "on" } else { "off" },
            settings.bloom_strength,
            settings.bloom_radius,
            settings.bloom_threshold,
        );
        info!(
            "Camera at {:.1}, zoom {:.2}..{:.1}",
            settings.camera_start_distance, settings.camera_min_distance, settings.camera_max_distance,
        );
        Self {
            display,
            interval,
            frames: 0,
            time: 0.0,
            bodies: 0,
            moons: 0,
            farthest: 0.0,
            out_of_view: false,
        }
    }

    pub fn display(&self) -> &DisplayConfig {
        &self.display
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Bodies in the last presented frame.
    pub fn bodies(&self) -> usize {
        self.bodies
    }

    /// Moons in the last presented frame.
    pub fn moons(&self) -> usize {
        self.moons
    }

    /// Distance of the farthest body from the origin in the last presented frame.
    pub fn farthest(&self) -> f64 {
        self.farthest
    }

    /// Whether any presented body lay beyond `camera_max_distance`.
    pub fn out_of_view(&self) -> bool {
        self.out_of_view
    }
}

impl RenderAdapter for LogRenderer {
    fn begin_frame(&mut self, time: f64) {
        self.time = time;
        self.bodies = 0;
        self.moons = 0;
        self.farthest = 0.0;
    }

    fn set_body_transform(&mut self, transform: &BodyTransform) {
        self.bodies += 1;
        self.moons += transform.moons.len();
        self.farthest = self.farthest.max(transform.position.length());
        trace!(
            "{} at ({:.3}, {:.3}, {:.3}), spin {:.3}",
            transform.id,
            transform.position.x,
            transform.position.y,
            transform.position.z,
            transform.spin
        );
    }

    fn end_frame(&mut self) {
        if !self.out_of_view && self.farthest > self.display.camera_max_distance as f64 {
            self.out_of_view = true;
            warn!(
                "Body at {:.2} lies beyond the camera's zoom-out limit {:.1}",
                self.farthest, self.display.camera_max_distance
            );
        }
        self.frames += 1;
        if self.interval > 0 && self.frames % self.interval == 0 {
            info!(
                "Frame {} t={:.2}s: {} bodies, {} moons, farthest {:.2}",
                self.frames, self.time, self.bodies, self.moons, self.farthest
            );
        }
    }
}

/// Simulation and renderer stepped together by the frame loop.
pub struct HeadlessApp {
    pub simulation: Simulation,
    pub renderer: LogRenderer,
}

impl HeadlessApp {
    /// Evaluates the simulation at time zero so the first presented frame is populated.
    pub fn new(mut simulation: Simulation, renderer: LogRenderer) -> Self {
        simulation.update(0.0);
        Self {
            simulation,
            renderer,
        }
    }

    /// Fixed-step update callback.
    pub fn step(&mut self, _dt: f64, sim_time: f64) {
        self.simulation.update(sim_time);
    }

    /// Per-frame render callback. Positions are analytic, so `alpha` is unused.
    pub fn render(&mut self, _alpha: f64) {
        let frame = self.simulation.updater().frame();
        self.renderer.present(frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_loop::{FIXED_DT, GameLoop};
    use glam::DVec3;
    use orrery_config::Config;
    use orrery_system::{BodyId, FrameUpdate, MoonTransform};

    fn frame(time: f64) -> FrameUpdate {
        let planet = DVec3::new(3.0, 0.0, 4.0);
        FrameUpdate {
            time,
            bodies: vec![
                BodyTransform {
                    id: BodyId(0),
                    position: DVec3::ZERO,
                    spin: 0.001,
                    spin_delta: 0.001,
                    moons: Vec::new(),
                },
                BodyTransform {
                    id: BodyId(1),
                    position: planet,
                    spin: 0.001,
                    spin_delta: 0.001,
                    moons: vec![MoonTransform {
                        parent: BodyId(1),
                        index: 0,
                        local: DVec3::X * 0.2,
                        world: planet + DVec3::X * 0.2,
                    }],
                },
            ],
        }
    }

    #[test]
    fn test_counts_last_frame() {
        let mut renderer = LogRenderer::new(DisplayConfig::default(), 0);
        renderer.present(&frame(0.0));
        renderer.present(&frame(1.0 / 60.0));
        assert_eq!(renderer.frames(), 2);
        assert_eq!(renderer.bodies(), 2);
        assert_eq!(renderer.moons(), 1);
        assert!((renderer.farthest() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_keeps_display_settings() {
        let display = DisplayConfig {
            enable_bloom: false,
            ..DisplayConfig::default()
        };
        let renderer = LogRenderer::new(display.clone(), 60);
        assert_eq!(renderer.display(), &display);
    }

    #[test]
    fn test_reports_bodies_past_camera_limit() {
        let display = DisplayConfig {
            camera_max_distance: 4.0,
            ..DisplayConfig::default()
        };
        let mut renderer = LogRenderer::new(display, 0);
        renderer.present(&frame(0.0));
        assert!(renderer.out_of_view());

        let mut renderer = LogRenderer::new(DisplayConfig::default(), 0);
        renderer.present(&frame(0.0));
        assert!(!renderer.out_of_view());
    }

    #[test]
    fn test_first_frame_shows_system_at_time_zero() {
        let mut config = Config::default();
        config.system.seed = Some(4);
        let simulation = Simulation::from_config(&config).unwrap();
        let body_count = simulation.registry().len();
        let renderer = LogRenderer::new(config.display.clone(), 0);
        let mut app = HeadlessApp::new(simulation, renderer);

        // A frame shorter than one step renders without updating.
        let mut game_loop = GameLoop::new();
        game_loop.advance(
            0.25 * FIXED_DT,
            &mut app,
            |app, dt, t| app.step(dt, t),
            |app, alpha| app.render(alpha),
        );
        assert_eq!(game_loop.update_count(), 0);
        assert_eq!(app.renderer.frames(), 1);
        assert_eq!(app.renderer.bodies(), body_count);
        assert_eq!(app.simulation.updater().frame().time, 0.0);

        game_loop.advance(
            FIXED_DT,
            &mut app,
            |app, dt, t| app.step(dt, t),
            |app, alpha| app.render(alpha),
        );
        assert_eq!(game_loop.update_count(), 1);
        assert!(app.simulation.updater().frame().time > 0.0);
    }
}
