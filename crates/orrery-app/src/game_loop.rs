//! Fixed-timestep frame loop implementing the "Fix Your Timestep" pattern.
//!
//! Simulation updates run at a fixed 60 Hz from an accumulator; presentation
//! runs once per frame with an interpolation alpha. Simulation time starts at
//! zero and only ever increases.

use std::time::Instant;
use tracing::warn;

/// Fixed simulation timestep: 60 Hz.
pub const FIXED_DT: f64 = 1.0 / 60.0;

/// Frame times above this are clamped so a stall never triggers a burst of catch-up updates.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Fixed-timestep loop state.
///
/// Call [`tick`](Self::tick) once per frame, or [`advance`](Self::advance)
/// with an explicit frame time when wall-clock time should not matter.
pub struct GameLoop {
    previous_time: Instant,
    accumulator: f64,
    total_sim_time: f64,
    frame_count: u64,
    update_count: u64,
}

impl GameLoop {
    /// Creates a new `GameLoop` starting from the current instant.
    pub fn new() -> Self {
        Self {
            previous_time: Instant::now(),
            accumulator: 0.0,
            total_sim_time: 0.0,
            frame_count: 0,
            update_count: 0,
        }
    }

    /// Runs one frame using the wall-clock time since the previous call.
    pub fn tick<S>(
        &mut self,
        state: &mut S,
        update_fn: impl FnMut(&mut S, f64, f64),
        render_fn: impl FnMut(&mut S, f64),
    ) {
        let current_time = Instant::now();
        let frame_time = current_time
            .duration_since(self.previous_time)
            .as_secs_f64();
        self.previous_time = current_time;
        self.advance(frame_time, state, update_fn, render_fn);
    }

    /// Runs one frame of `frame_time` seconds.
    ///
    /// - `update_fn(state, fixed_dt, sim_time)` is called zero or more times,
    ///   with `sim_time` being the simulation time after the step.
    /// - `render_fn(state, alpha)` is called exactly once with the
    ///   interpolation alpha in `[0.0, 1.0)`.
    pub fn advance<S>(
        &mut self,
        frame_time: f64,
        state: &mut S,
        mut update_fn: impl FnMut(&mut S, f64, f64),
        mut render_fn: impl FnMut(&mut S, f64),
    ) {
        let mut frame_time = frame_time.max(0.0);
        if frame_time > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                frame_time * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            frame_time = MAX_FRAME_TIME;
        }

        self.accumulator += frame_time;

        while self.accumulator >= FIXED_DT {
            self.total_sim_time += FIXED_DT;
            self.accumulator -= FIXED_DT;
            self.update_count += 1;
            update_fn(state, FIXED_DT, self.total_sim_time);
        }

        render_fn(state, self.alpha());
        self.frame_count += 1;
    }

    /// Current interpolation alpha without running a frame.
    pub fn alpha(&self) -> f64 {
        if self.accumulator > 0.0 {
            self.accumulator / FIXED_DT
        } else {
            0.0
        }
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    pub fn update_count(&self) -> u64 {
        self.update_count
    }

    /// Total simulation time in seconds.
    pub fn total_sim_time(&self) -> f64 {
        self.total_sim_time
    }
}

impl Default for GameLoop {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Counters {
        updates: u32,
        renders: u32,
        last_sim_time: f64,
        last_alpha: f64,
    }

    fn run(loop_: &mut GameLoop, frame_time: f64, counters: &mut Counters) {
        loop_.advance(
            frame_time,
            counters,
            |c, _, sim_time| {
                c.updates += 1;
                c.last_sim_time = sim_time;
            },
            |c, alpha| {
                c.renders += 1;
                c.last_alpha = alpha;
            },
        );
    }

    #[test]
    fn test_fixed_dt_value() {
        assert!((FIXED_DT - 1.0 / 60.0).abs() < f64::EPSILON * 10.0);
    }

    #[test]
    fn test_single_step() {
        let mut loop_ = GameLoop::new();
        let mut c = Counters::default();
        run(&mut loop_, FIXED_DT, &mut c);
        assert_eq!(c.updates, 1);
        assert_eq!(c.renders, 1);
        assert!((c.last_sim_time - FIXED_DT).abs() < 1e-12);
    }

    #[test]
    fn test_multiple_steps() {
        let mut loop_ = GameLoop::new();
        let mut c = Counters::default();
        run(&mut loop_, 3.0 * FIXED_DT + 1e-9, &mut c);
        assert_eq!(c.updates, 3);
        assert!((loop_.total_sim_time() - 3.0 * FIXED_DT).abs() < 1e-12);
        assert_eq!(c.last_sim_time, loop_.total_sim_time());
    }

    #[test]
    fn test_partial_frame_only_renders() {
        let mut loop_ = GameLoop::new();
        let mut c = Counters::default();
        run(&mut loop_, 0.5 * FIXED_DT, &mut c);
        assert_eq!(c.updates, 0);
        assert_eq!(c.renders, 1);
        assert!((c.last_alpha - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_max_frame_time_clamp() {
        let mut loop_ = GameLoop::new();
        let mut c = Counters::default();
        run(&mut loop_, 1.0, &mut c);
        let max_updates = (MAX_FRAME_TIME / FIXED_DT).ceil() as u32;
        assert!(c.updates <= max_updates, "{} updates", c.updates);
        assert!(c.updates > 0);
    }

    #[test]
    fn test_negative_frame_time_ignored() {
        let mut loop_ = GameLoop::new();
        let mut c = Counters::default();
        run(&mut loop_, -1.0, &mut c);
        assert_eq!(c.updates, 0);
        assert_eq!(loop_.total_sim_time(), 0.0);
    }

    #[test]
    fn test_sim_time_is_monotonic() {
        let mut loop_ = GameLoop::new();
        let mut times = Vec::new();
        for &ft in &[0.017, 0.015, 0.020, 0.016, 0.033, 0.008, 0.018] {
            loop_.advance(ft, &mut times, |t, _, sim_time| t.push(sim_time), |_, _| {});
        }
        assert!(times.windows(2).all(|w| w[1] > w[0]));
        let expected = loop_.update_count() as f64 * FIXED_DT;
        assert!((loop_.total_sim_time() - expected).abs() < 1e-10);
    }

    #[test]
    fn test_frame_count_increments() {
        let mut loop_ = GameLoop::new();
        let mut c = Counters::default();
        for _ in 0..10 {
            run(&mut loop_, FIXED_DT, &mut c);
        }
        assert_eq!(loop_.frame_count(), 10);
        assert_eq!(c.renders, 10);
    }

    #[test]
    fn test_game_loop_default() {
        let loop_ = GameLoop::default();
        assert_eq!(loop_.frame_count(), 0);
        assert_eq!(loop_.update_count(), 0);
        assert_eq!(loop_.total_sim_time(), 0.0);
        assert_eq!(loop_.alpha(), 0.0);
    }
}
