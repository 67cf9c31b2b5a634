//! Frame pacing
//!
//! Holds each frame to a minimum interval and turns the real elapsed time into
//! a clamped delta for the simulation.

use std::thread;
use std::time::{Duration, Instant};

use crate::consts::{FRAME_INTERVAL_MS, MAX_DELTA};

/// Monotonic millisecond clock with a way to wait
pub trait Clock {
    /// Milliseconds since some fixed start point; never goes backwards
    fn now_ms(&self) -> u64;
    /// Block until `now_ms() >= deadline_ms`
    fn wait_until(&mut self, deadline_ms: u64);
}

/// Wall clock backed by `Instant`, waiting with `thread::sleep`
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.start.elapsed().as_millis() as u64
    }

    fn wait_until(&mut self, deadline_ms: u64) {
        // sleep may wake early on some platforms, so re-check
        loop {
            let now = self.now_ms();
            if now >= deadline_ms {
                return;
            }
            thread::sleep(Duration::from_millis(deadline_ms - now));
        }
    }
}

/// Clamp a raw delta (seconds) to `[0, max]`
#[inline]
pub fn clamp_delta(dt: f32, max: f32) -> f32 {
    dt.clamp(0.0, max)
}

/// Fixed-cadence frame pacer
#[derive(Debug)]
pub struct Pacer<C: Clock> {
    clock: C,
    interval_ms: u64,
    max_delta: f32,
    last_tick_ms: u64,
}

impl<C: Clock> Pacer<C> {
    /// Pacer with the default 16 ms interval and 0.05 s delta cap
    pub fn new(clock: C) -> Self {
        Self::with_timing(clock, FRAME_INTERVAL_MS, MAX_DELTA)
    }

    pub fn with_timing(clock: C, interval_ms: u64, max_delta: f32) -> Self {
        let last_tick_ms = clock.now_ms();
        Self {
            clock,
            interval_ms,
            max_delta,
            last_tick_ms,
        }
    }

    /// Wait for the next frame boundary and return the delta time in seconds
    pub fn tick(&mut self) -> f32 {
        let deadline = self.last_tick_ms + self.interval_ms;
        if self.clock.now_ms() < deadline {
            self.clock.wait_until(deadline);
        }

        let now = self.clock.now_ms();
        let elapsed_ms = now.saturating_sub(self.last_tick_ms);
        self.last_tick_ms = now;

        clamp_delta(elapsed_ms as f32 / 1000.0, self.max_delta)
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::headless::ManualClock;
    use proptest::prelude::*;

    #[test]
    fn test_waits_for_interval() {
        let mut pacer = Pacer::new(ManualClock::new(1000));
        let dt = pacer.tick();
        assert_eq!(pacer.clock().now_ms(), 1016);
        assert!((dt - 0.016).abs() < 1e-6);
    }

    #[test]
    fn test_no_wait_when_late() {
        let mut pacer = Pacer::new(ManualClock::new(0));
        pacer.clock_mut().advance(30);
        let dt = pacer.tick();
        assert_eq!(pacer.clock().now_ms(), 30);
        assert!((dt - 0.030).abs() < 1e-6);
    }

    #[test]
    fn test_stall_is_clamped() {
        let mut pacer = Pacer::new(ManualClock::new(0));
        pacer.tick();
        pacer.clock_mut().advance(2_000);
        assert_eq!(pacer.tick(), 0.05);
    }

    #[test]
    fn test_clamp_delta() {
        assert_eq!(clamp_delta(0.2, MAX_DELTA), 0.05);
        assert_eq!(clamp_delta(0.051, MAX_DELTA), 0.05);
        assert_eq!(clamp_delta(0.02, MAX_DELTA), 0.02);
        assert_eq!(clamp_delta(-1.0, MAX_DELTA), 0.0);
    }

    #[test]
    fn test_system_clock_waits() {
        let mut clock = SystemClock::new();
        let deadline = clock.now_ms() + 5;
        clock.wait_until(deadline);
        assert!(clock.now_ms() >= deadline);
    }

    proptest! {
        #[test]
        fn prop_delta_within_range(gaps in proptest::collection::vec(0u64..500, 1..20)) {
            let mut pacer = Pacer::new(ManualClock::new(0));
            for gap in gaps {
                pacer.clock_mut().advance(gap);
                let dt = pacer.tick();
                prop_assert!(dt >= 0.016 - 1e-6);
                prop_assert!(dt <= MAX_DELTA);
            }
        }
    }
}
