use serde::Serialize;
use std::collections::VecDeque;

/// How many FPS samples are averaged
pub const FPS_WINDOW: usize = 60;

/// Timing state threaded through every animation tick
#[derive(Debug, Clone, Default)]
pub struct FrameClock {
    previous_timestamp: f64,
    frame_count: u64,
    last_delta: f64,
    fps_log: VecDeque<f64>,
}

/// Snapshot of the clock for diagnostics
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameStats {
    pub frame_count: u64,
    pub last_delta: f64,
    pub avg_fps: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn previous_timestamp(&self) -> f64 {
        self.previous_timestamp
    }

    /// Advance to a host timestamp in milliseconds; returns the delta in seconds.
    pub fn tick(&mut self, timestamp_ms: f64) -> f64 {
        let now = timestamp_ms * 0.001;
        let delta_time = now - self.previous_timestamp;

        // the first tick measures against zero, not a real frame
        if self.frame_count > 0 && delta_time > 0.0 {
            self.fps_log.push_back(1.0 / delta_time);
            if self.fps_log.len() > FPS_WINDOW {
                self.fps_log.pop_front();
            }
        }

        self.previous_timestamp = now;
        self.frame_count += 1;
        self.last_delta = delta_time;
        delta_time
    }

    pub fn stats(&self) -> FrameStats {
        let avg_fps = if self.fps_log.is_empty() {
            0.0
        } else {
            self.fps_log.iter().sum::<f64>() / self.fps_log.len() as f64
        };
        FrameStats { frame_count: self.frame_count, last_delta: self.last_delta, avg_fps }
    }
}
