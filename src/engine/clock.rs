use std::thread;
use std::time::{Duration, Instant};

use crate::config::ConfigError;

/// FrameClock paces the runtime loop to a target frequency.
/// Pacing is best-effort: the clock only sleeps to avoid running faster
/// than the target, it never bounds how long a frame may take.
pub struct FrameClock {
    period: Duration,
    next_deadline: Option<Instant>,
}

impl FrameClock {
    /// Create a clock for the given frequency; zero fps is a configuration
    /// error.
    pub fn new(fps: u32) -> Result<Self, ConfigError> {
        if fps == 0 {
            return Err(ConfigError::InvalidFps(fps));
        }
        Ok(Self {
            period: Duration::from_secs(1) / fps,
            next_deadline: None,
        })
    }

    /// Block until the next tick deadline, so successive returns are spaced
    /// at least one period apart. The first call anchors the schedule and
    /// returns immediately. A frame that ran past its deadline re-anchors
    /// the schedule instead of accumulating sleep debt.
    pub fn wait_for_next_tick(&mut self) {
        let now = Instant::now();
        match self.next_deadline {
            Some(deadline) if deadline > now => {
                thread::sleep(deadline - now);
                self.next_deadline = Some(deadline + self.period);
            }
            _ => {
                self.next_deadline = Some(now + self.period);
            }
        }
    }
}
