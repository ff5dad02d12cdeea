//! Drives a frame renderer once per display refresh.

use crate::domain::logging::LogComponent;
use crate::domain::scene::{FrameClock, FrameStats};
use crate::log_trace;

/// Anything that can draw one frame from a time delta
pub trait FrameRenderer {
    fn render_frame(&mut self, delta_time: f64);
}

/// Owns the renderer and the clock state threaded between ticks
pub struct AnimationDriver<R: FrameRenderer> {
    renderer: R,
    clock: FrameClock,
}

impl<R: FrameRenderer> AnimationDriver<R> {
    pub fn new(renderer: R) -> Self {
        Self { renderer, clock: FrameClock::new() }
    }

    /// Handle one refresh callback. `timestamp_ms` is the host's monotonic time.
    pub fn tick(&mut self, timestamp_ms: f64) {
        let delta_time = self.clock.tick(timestamp_ms);
        log_trace!(LogComponent::Application("AnimationDriver"), "tick dt={:.4}s", delta_time);
        self.renderer.render_frame(delta_time);
    }

    pub fn stats(&self) -> FrameStats {
        self.clock.stats()
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
