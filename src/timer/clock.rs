//! Simulated time source.
//!
//! Time advances only when explicitly requested, which makes every delay in
//! the engine exactly reproducible in tests.

use serde::{Deserialize, Serialize};

/// Deterministic millisecond clock.
///
/// # Example
///
/// ```rust
/// use rendersim::timer::SimClock;
///
/// let mut clock = SimClock::new();
/// clock.advance_by(800);
/// assert_eq!(clock.now_ms(), 800);
///
/// // Time never goes backwards.
/// assert!(!clock.advance_to(100));
/// assert_eq!(clock.now_ms(), 800);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimClock {
    now_ms: u64,
}

impl SimClock {
    /// Creates a new clock starting at time zero.
    pub fn new() -> Self {
        Self { now_ms: 0 }
    }

    /// Creates a clock starting at the specified time.
    pub fn at(now_ms: u64) -> Self {
        Self { now_ms }
    }

    #[inline]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Moves the clock to `time_ms`.
    ///
    /// Returns `false` and leaves the clock untouched if `time_ms` is in the
    /// past.
    pub fn advance_to(&mut self, time_ms: u64) -> bool {
        if time_ms < self.now_ms {
            return false;
        }
        self.now_ms = time_ms;
        true
    }

    /// Moves the clock forward by `delta_ms`, saturating at `u64::MAX`.
    #[inline]
    pub fn advance_by(&mut self, delta_ms: u64) {
        self.now_ms = self.now_ms.saturating_add(delta_ms);
    }

    /// Absolute time `delay_ms` from now.
    #[inline]
    pub fn deadline_after(&self, delay_ms: u64) -> u64 {
        self.now_ms.saturating_add(delay_ms)
    }
}
