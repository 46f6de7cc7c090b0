//! Monotonic clock seam for the stopwatch.
//!
//! The stopwatch only needs a non-decreasing nanosecond timestamp. Production
//! code uses [`SystemClock`] (anchored on `std::time::Instant`, so it is
//! immune to wall-clock adjustments); tests drive [`ManualClock`] to get
//! deterministic deltas.

use std::cell::Cell;
use std::time::Instant;

/// A monotonic, nanosecond-resolution timestamp source.
///
/// Implementations must be non-decreasing across calls. Timestamps are only
/// ever compared against each other, so the origin is arbitrary.
pub trait MonotonicClock {
    /// Current timestamp in nanoseconds since an arbitrary fixed origin.
    fn now_ns(&self) -> u64;
}

/// Monotonic clock backed by `std::time::Instant`.
///
/// The origin is the moment the clock was constructed. `Instant` is
/// monotonic on all supported platforms and does not observe wall-clock
/// (NTP, manual) adjustments.
#[derive(Debug, Clone)]
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

impl MonotonicClock for SystemClock {
    fn now_ns(&self) -> u64 {
        // u64 nanoseconds cover ~584 years from the origin.
        self.origin.elapsed().as_nanos() as u64
    }
}

/// Manually advanced clock for deterministic tests.
///
/// Starts at zero; callers move time forward with [`ManualClock::advance`].
/// Interior mutability keeps the `MonotonicClock` read path `&self`.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance the clock by `delta_ns` nanoseconds.
    pub fn advance(&self, delta_ns: u64) {
        self.now.set(self.now.get() + delta_ns);
    }

    /// Jump the clock to an absolute timestamp.
    ///
    /// # Panics
    /// Panics if `now_ns` would move the clock backwards.
    pub fn set(&self, now_ns: u64) {
        assert!(
            now_ns >= self.now.get(),
            "ManualClock must remain monotonic (current: {}, requested: {})",
            self.now.get(),
            now_ns
        );
        self.now.set(now_ns);
    }
}

impl MonotonicClock for ManualClock {
    fn now_ns(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_non_decreasing() {
        let clock = SystemClock::new();
        let a = clock.now_ns();
        let b = clock.now_ns();
        assert!(b >= a);
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new();
        assert_eq!(clock.now_ns(), 0);
        clock.advance(100);
        clock.advance(23);
        assert_eq!(clock.now_ns(), 123);
        clock.set(200);
        assert_eq!(clock.now_ns(), 200);
    }

    #[test]
    #[should_panic(expected = "monotonic")]
    fn manual_clock_rejects_backwards_set() {
        let clock = ManualClock::new();
        clock.advance(100);
        clock.set(50);
    }
}
