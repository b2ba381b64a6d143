use std::time::{Duration, Instant};

/// Gates the simulation to one tick per frame length of wall time, read from
/// the monotonic clock.
#[derive(Clone, Debug)]
pub struct FramePacer {
    frame: Duration,
    last_tick: Instant,
}

impl FramePacer {
    pub fn new(frame: Duration, now: Instant) -> Self {
        Self {
            frame,
            last_tick: now,
        }
    }

    /// Returns true, and restarts the frame, once a full frame has elapsed.
    pub fn poll(&mut self, now: Instant) -> bool {
        if now.saturating_duration_since(self.last_tick) >= self.frame {
            self.last_tick = now;
            true
        } else {
            false
        }
    }

    /// How long the caller may block on input before the next tick is due.
    pub fn until_next(&self, now: Instant) -> Duration {
        self.frame
            .saturating_sub(now.saturating_duration_since(self.last_tick))
    }
}
