//! Frame timing

use std::time::{Duration, Instant};

/// Timing data handed to the application each frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameInfo {
    /// Zero-based index of the frame being rendered
    pub frame: u64,
    /// Seconds since the previous frame
    pub delta_time: f32,
    /// Seconds since the render loop started
    pub total_time: f32,
}

/// Frame timer driven by the render loop
#[derive(Debug)]
pub struct Timer {
    last_frame: Instant,
    delta_time: f32,
    total_time: f32,
    frame_count: u64,
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}

impl Timer {
    /// Create a new timer
    pub fn new() -> Self {
        Self {
            last_frame: Instant::now(),
            delta_time: 0.0,
            total_time: 0.0,
            frame_count: 0,
        }
    }

    /// Start a new frame using the wall clock
    pub fn tick(&mut self) -> FrameInfo {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_frame);
        self.last_frame = now;
        self.advance(elapsed)
    }

    /// Start a new frame that took `elapsed`
    pub fn advance(&mut self, elapsed: Duration) -> FrameInfo {
        self.delta_time = elapsed.as_secs_f32();
        self.total_time += self.delta_time;
        let info = FrameInfo {
            frame: self.frame_count,
            delta_time: self.delta_time,
            total_time: self.total_time,
        };
        self.frame_count += 1;
        info
    }

    /// Get the time since the last frame in seconds
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the total elapsed time since timer creation
    pub fn total_time(&self) -> f32 {
        self.total_time
    }

    /// Get the number of frames started so far
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Get the average FPS since timer creation
    #[allow(clippy::cast_precision_loss)]
    pub fn average_fps(&self) -> f32 {
        if self.total_time > 0.0 {
            self.frame_count as f32 / self.total_time
        } else {
            0.0
        }
    }
}
