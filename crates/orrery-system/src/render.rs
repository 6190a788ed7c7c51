//! Boundary to whatever draws the system.

use crate::updater::{BodyTransform, FrameUpdate};

/// Consumes per-frame transforms and applies them to visual objects.
///
/// The core knows nothing about meshes, materials or cameras. An adapter maps
/// each [`BodyTransform`] onto its own scene objects, nesting moons under their
/// parent (using `local`) or placing them directly (using `world`).
pub trait RenderAdapter {
    /// Called before the first transform of a frame.
    fn begin_frame(&mut self, _time: f64) {}

    /// Called once per registry body, in registry order.
    fn set_body_transform(&mut self, transform: &BodyTransform);

    /// Called after the last transform of a frame.
    fn end_frame(&mut self) {}

    /// Push a whole frame through the three hooks above.
    fn present(&mut self, frame: &FrameUpdate) {
        self.begin_frame(frame.time);
        for body in &frame.bodies {
            self.set_body_transform(body);
        }
        self.end_frame();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::body::BodyId;
    use glam::DVec3;

    #[derive(Default)]
    struct EventLog(Vec<String>);

    impl RenderAdapter for EventLog {
        fn begin_frame(&mut self, time: f64) {
            self.0.push(format!("begin {time}"));
        }

        fn set_body_transform(&mut self, transform: &BodyTransform) {
            self.0.push(format!("body {}", transform.id.0));
        }

        fn end_frame(&mut self) {
            self.0.push("end".to_string());
        }
    }

    #[test]
    fn test_present_calls_hooks_in_order() {
        let frame = FrameUpdate {
            time: 2.0,
            bodies: (0..2)
                .map(|i| BodyTransform {
                    id: BodyId(i),
                    position: DVec3::ZERO,
                    spin: 0.0,
                    spin_delta: 0.0,
                    moons: Vec::new(),
                })
                .collect(),
        };
        let mut log = EventLog::default();
        log.present(&frame);
        assert_eq!(log.0, vec!["begin 2", "body 0", "body 1", "end"]);
    }
}
