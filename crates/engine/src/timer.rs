//! Gravity timer.
//!
//! A fixed-interval countdown that only accumulates time while armed. The
//! owner disarms it whenever the game leaves the running phase; disarming
//! throws away partial progress so a resume starts a fresh interval.

use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GravityTimer {
    interval_ms: u32,
    elapsed_ms: u32,
    armed: bool,
}

impl GravityTimer {
    /// A disarmed timer. Zero intervals are clamped to 1ms.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            elapsed_ms: 0,
            armed: false,
        }
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Arm from zero. Re-arming an armed timer keeps its progress.
    pub fn arm(&mut self) {
        if !self.armed {
            self.armed = true;
            self.elapsed_ms = 0;
        }
    }

    pub fn disarm(&mut self) {
        self.armed = false;
        self.elapsed_ms = 0;
    }

    /// Arm or disarm, returning whether the state changed.
    pub fn set_armed(&mut self, armed: bool) -> bool {
        if armed == self.armed {
            return false;
        }
        if armed {
            self.arm();
        } else {
            self.disarm();
        }
        true
    }

    /// Feed elapsed time; returns how many whole intervals fired.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if !self.armed {
            return 0;
        }
        let total = self.elapsed_ms.saturating_add(elapsed_ms);
        self.elapsed_ms = total % self.interval_ms;
        total / self.interval_ms
    }

    /// Time until the next firing, `None` while disarmed.
    pub fn remaining(&self) -> Option<Duration> {
        if !self.armed {
            return None;
        }
        Some(Duration::from_millis(
            (self.interval_ms - self.elapsed_ms) as u64,
        ))
    }
}
