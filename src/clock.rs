//! Fixed-rate frame clock
//!
//! Sleeps out the rest of each frame period. Frames that overrun are not
//! made up; the next period starts from when the late frame finished.

use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct FrameClock {
    period: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            period: Duration::from_secs(1) / frame_rate.max(1),
            last: Instant::now(),
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Block until one frame period has passed since the previous call
    ///
    /// Returns how long the caller's frame work took.
    pub fn wait(&mut self) -> Duration {
        let busy = self.last.elapsed();
        if let Some(remaining) = self.period.checked_sub(busy) {
            std::thread::sleep(remaining);
        } else {
            log::debug!("Frame overran by {:?}", busy - self.period);
        }
        self.last = Instant::now();
        busy
    }
}
