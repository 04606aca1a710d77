//! Heartbeat scheduler for the liveness indicator.
//!
//! A free-running monotonic-interval oscillator, independent of protocol
//! traffic. State is an explicit struct and the current time is passed into
//! [`Heartbeat::tick`], so the schedule is testable without real sleeps.

use std::time::{Duration, Instant};

use crate::constants::HEARTBEAT_INTERVAL_MS;

/// Liveness toggle state: the on/off phase plus the last toggle timestamp.
#[derive(Debug)]
pub struct Heartbeat {
    interval: Duration,
    phase: bool,
    last_toggle: Option<Instant>,
}

impl Default for Heartbeat {
    fn default() -> Self {
        Heartbeat::new(Duration::from_millis(HEARTBEAT_INTERVAL_MS))
    }
}

impl Heartbeat {
    pub fn new(interval: Duration) -> Self {
        Heartbeat {
            interval,
            phase: false,
            last_toggle: None,
        }
    }

    /// Advance the oscillator. Flips the phase and returns the new value
    /// when the interval has elapsed since the last toggle; the very first
    /// call always fires (never-initialized counts as already elapsed).
    pub fn tick(&mut self, now: Instant) -> Option<bool> {
        let due = match self.last_toggle {
            None => true,
            Some(last) => now.duration_since(last) >= self.interval,
        };
        if !due {
            return None;
        }
        self.phase = !self.phase;
        self.last_toggle = Some(now);
        Some(self.phase)
    }

    /// Current indicator phase.
    pub fn phase(&self) -> bool {
        self.phase
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_tick_always_fires() {
        let mut hb = Heartbeat::new(Duration::from_millis(1000));
        let t0 = Instant::now();
        assert_eq!(hb.tick(t0), Some(true));
    }

    #[test]
    fn does_not_fire_before_interval() {
        let mut hb = Heartbeat::new(Duration::from_millis(1000));
        let t0 = Instant::now();
        hb.tick(t0);
        assert_eq!(hb.tick(t0 + Duration::from_millis(999)), None);
        assert!(hb.phase());
    }

    #[test]
    fn fires_and_flips_at_interval() {
        let mut hb = Heartbeat::new(Duration::from_millis(1000));
        let t0 = Instant::now();
        assert_eq!(hb.tick(t0), Some(true));
        assert_eq!(hb.tick(t0 + Duration::from_millis(1000)), Some(false));
        assert_eq!(hb.tick(t0 + Duration::from_millis(1500)), None);
        assert_eq!(hb.tick(t0 + Duration::from_millis(2100)), Some(true));
    }

    #[test]
    fn interval_is_measured_from_last_toggle() {
        let mut hb = Heartbeat::new(Duration::from_millis(1000));
        let t0 = Instant::now();
        hb.tick(t0);
        // Late service shifts the reference point, it does not accumulate.
        assert_eq!(hb.tick(t0 + Duration::from_millis(1700)), Some(false));
        assert_eq!(hb.tick(t0 + Duration::from_millis(2400)), None);
        assert_eq!(hb.tick(t0 + Duration::from_millis(2700)), Some(true));
    }
}
