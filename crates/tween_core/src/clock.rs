//! Time sources
//!
//! Playback only needs a monotonically non-decreasing reading. The unit is
//! chosen by the caller and must match the lifetime used in tween
//! instructions; [`SystemClock`] reports seconds.

use std::cell::Cell;
use std::time::Instant;

/// A monotonically non-decreasing time source
pub trait Clock {
    fn now(&self) -> f64;
}

/// Wall-clock time in seconds since the clock was created
#[derive(Clone, Copy, Debug)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// A clock that only moves when told to.
///
/// Used for deterministic playback in tests and replays. The reading never
/// goes backwards: setting an earlier time is ignored.
#[derive(Debug, Default)]
pub struct ManualClock {
    position: Cell<f64>,
}

impl ManualClock {
    pub fn new(start: f64) -> Self {
        Self {
            position: Cell::new(start),
        }
    }

    /// Move the clock to `time`, if that is not in the past
    pub fn set(&self, time: f64) {
        if time > self.position.get() {
            self.position.set(time);
        }
    }

    /// Move the clock forward by `delta`
    pub fn advance(&self, delta: f64) {
        self.set(self.position.get() + delta);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> f64 {
        self.position.get()
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> f64 {
        (**self).now()
    }
}
