//! Frame timing for driving the engine tick.

use web_time::Instant;

/// Measures per-tick delta time for feeding
/// [`ViewerEngine::tick`](crate::viewer::ViewerEngine::tick), with a clamp
/// so a stall (window drag, debugger pause) cannot feed the spring
/// integration a destabilizing step.
pub struct FrameTiming {
    /// Last tick timestamp.
    last_tick: Instant,
    /// Maximum delta handed to the engine, in seconds.
    max_step: f32,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl FrameTiming {
    /// Create a frame timer with the default 50 ms step clamp.
    #[must_use]
    pub fn new() -> Self {
        Self::with_max_step(0.05)
    }

    /// Create a frame timer with a custom step clamp in seconds.
    #[must_use]
    pub fn with_max_step(max_step: f32) -> Self {
        Self {
            last_tick: Instant::now(),
            max_step,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Call once per tick. Returns the clamped delta since the previous
    /// call, in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_tick);
        self.last_tick = now;

        let frame_time = elapsed.as_secs_f32();
        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        frame_time.min(self.max_step)
    }

    /// Get the current FPS (smoothed)
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameTiming {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delta_is_clamped() {
        let mut timing = FrameTiming::with_max_step(0.01);
        std::thread::sleep(std::time::Duration::from_millis(30));
        let dt = timing.tick();
        assert!(dt <= 0.01);
        assert!(dt > 0.0);
    }

    #[test]
    fn test_fps_stays_finite() {
        let mut timing = FrameTiming::new();
        for _ in 0..5 {
            let _ = timing.tick();
        }
        assert!(timing.fps().is_finite());
        assert!(timing.fps() > 0.0);
    }
}
