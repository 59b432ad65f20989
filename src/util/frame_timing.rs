//! Frame pacing for the viewer loop.

use web_time::{Duration, Instant};

/// Weight of the newest sample in the FPS moving average.
const FPS_SMOOTHING: f32 = 0.05;
/// Spacing between FPS reports.
const REPORT_INTERVAL: Duration = Duration::from_secs(1);

/// Frame limiter and smoothed FPS counter.
///
/// The orbit advances a fixed step per frame, so the limiter is what keeps
/// the camera speed independent of the display refresh rate.
pub struct FrameTiming {
    /// Target FPS (0 = unlimited)
    target_fps: u32,
    min_frame_duration: Duration,
    last_frame: Instant,
    last_report: Instant,
    smoothed_fps: f32,
}

impl FrameTiming {
    /// Create a frame timer with the given FPS target (0 = unlimited).
    #[must_use]
    pub fn new(target_fps: u32) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        let now = Instant::now();
        Self {
            target_fps,
            min_frame_duration,
            last_frame: now,
            last_report: now,
            smoothed_fps: if target_fps > 0 { target_fps as f32 } else { 60.0 },
        }
    }

    /// Whether enough time has passed since the last frame to draw another.
    #[must_use]
    pub fn should_render(&self) -> bool {
        self.target_fps == 0
            || self.last_frame.elapsed() >= self.min_frame_duration
    }

    /// When the next frame is due, for `ControlFlow::WaitUntil`.
    #[must_use]
    pub fn next_frame_at(&self) -> Instant {
        self.last_frame + self.min_frame_duration
    }

    /// Minimum spacing between frames.
    #[must_use]
    pub fn frame_budget(&self) -> Duration {
        self.min_frame_duration
    }

    /// Call after presenting a frame.
    pub fn end_frame(&mut self) {
        let now = Instant::now();
        let frame_time = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;

        if frame_time > 0.0 {
            let instant_fps = 1.0 / frame_time;
            self.smoothed_fps = self.smoothed_fps * (1.0 - FPS_SMOOTHING)
                + instant_fps * FPS_SMOOTHING;
        }
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// The smoothed FPS, at most once per second.
    pub fn fps_report(&mut self) -> Option<f32> {
        self.fps_report_at(Instant::now())
    }

    fn fps_report_at(&mut self, now: Instant) -> Option<f32> {
        if now.duration_since(self.last_report) < REPORT_INTERVAL {
            return None;
        }
        self.last_report = now;
        Some(self.smoothed_fps)
    }
}
