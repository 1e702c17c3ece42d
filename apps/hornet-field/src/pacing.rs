//! Frame pacing.

use std::time::{Duration, Instant};

use spin_sleep::SpinSleeper;

/// Holds the loop to a target frame rate, switching to a second rate while
/// the traveler is colliding (usually slower, so collisions are visible).
pub struct FrameClock {
    frame:           Duration,
    collision_frame: Duration,
    sleeper:         SpinSleeper,
    last:            Instant,
}

impl FrameClock {
    /// Rates are frames per second and must be positive.
    pub fn new(frame_rate: f64, collision_frame_rate: f64) -> Self {
        Self {
            frame:           Duration::from_secs_f64(1.0 / frame_rate),
            collision_frame: Duration::from_secs_f64(1.0 / collision_frame_rate),
            sleeper:         SpinSleeper::default(),
            last:            Instant::now(),
        }
    }

    pub fn period(&self, colliding: bool) -> Duration {
        if colliding { self.collision_frame } else { self.frame }
    }

    /// Sleep out whatever remains of the current frame.
    ///
    /// A frame that already overran its period is not compensated for; the
    /// next frame starts now.
    pub fn wait(&mut self, colliding: bool) {
        let target = self.last + self.period(colliding);
        let now = Instant::now();
        if target > now {
            self.sleeper.sleep(target - now);
        }
        self.last = Instant::now();
    }
}
