//! Frame pacing and frame-rate measurement.

use std::time::{Duration, Instant};

/// Soft frame-rate cap.
///
/// After a frame has been produced, [`FramePacer::pace`] sleeps for whatever
/// is left of the frame budget. A cap of `0`, anything non-finite, or one so
/// small that its frame budget does not fit in a `Duration` disables pacing.
#[derive(Debug, Clone)]
pub struct FramePacer {
    budget: Option<Duration>,
    frame_start: Instant,
}

impl FramePacer {
    pub fn new(max_fps: f64) -> Self {
        let budget = (max_fps.is_finite() && max_fps > 0.0)
            .then(|| Duration::try_from_secs_f64(1.0 / max_fps).ok())
            .flatten();
        Self {
            budget,
            frame_start: Instant::now(),
        }
    }

    pub fn budget(&self) -> Option<Duration> {
        self.budget
    }

    /// Time left in the frame budget after `elapsed`, if any.
    pub fn residual(&self, elapsed: Duration) -> Option<Duration> {
        let budget = self.budget?;
        budget.checked_sub(elapsed).filter(|d| !d.is_zero())
    }

    /// Sleep out the rest of the current frame and start the next one.
    pub fn pace(&mut self) {
        if let Some(rest) = self.residual(self.frame_start.elapsed()) {
            std::thread::sleep(rest);
        }
        self.frame_start = Instant::now();
    }
}

/// Frames-per-second counter, refreshed once per sampling window.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    window: Duration,
    accumulated: Duration,
    frames: u32,
    fps: u32,
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new(Duration::from_secs(1))
    }
}

impl FpsCounter {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            accumulated: Duration::ZERO,
            frames: 0,
            fps: 0,
        }
    }

    /// Count one frame that took `dt`.
    pub fn record(&mut self, dt: Duration) {
        self.frames = self.frames.saturating_add(1);
        self.accumulated += dt;
        if self.accumulated >= self.window && !self.accumulated.is_zero() {
            let rate = self.frames as f64 / self.accumulated.as_secs_f64();
            self.fps = rate.round() as u32;
            self.frames = 0;
            self.accumulated = Duration::ZERO;
        }
    }

    /// Rate measured over the last complete window.
    pub fn fps(&self) -> u32 {
        self.fps
    }
}
