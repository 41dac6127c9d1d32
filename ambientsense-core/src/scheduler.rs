//! Dual-cadence sampling scheduler
//!
//! Two independent cadences run off one monotonic clock: a fast one for
//! audio bursts and a slow one for environmental reads plus snapshot
//! assembly. Every poll evaluates both by comparing elapsed time against
//! each cadence's interval; neither blocks the other and both may fire on
//! the same poll.
//!
//! ## Drift
//!
//! On firing, a cadence rearms to the current poll time rather than the
//! ideal next boundary, so there is no drift correction: sustained
//! per-poll overhead lets the effective period run long without bound.
//! Known limitation, kept on purpose. Consumers treat each snapshot as
//! latest-known state, not as a fixed-rate time series, so a late tick
//! costs nothing they care about.

use crate::time::Timestamp;

/// A single rearm-on-fire cadence
#[derive(Debug, Clone)]
pub struct Cadence {
    interval_ms: u64,
    last_fired: Timestamp,
}

impl Cadence {
    /// New cadence armed at `now`; first fires one full interval later
    pub fn new(interval_ms: u64, now: Timestamp) -> Self {
        Self { interval_ms, last_fired: now }
    }

    /// Fire if the interval has elapsed, rearming at the current time
    pub fn poll(&mut self, now: Timestamp) -> bool {
        if now.saturating_sub(self.last_fired) >= self.interval_ms {
            self.last_fired = now;
            true
        } else {
            false
        }
    }

    /// The configured interval in milliseconds
    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }
}

/// What a scheduler poll found due
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickDue {
    /// The fast (audio) cadence fired
    pub fast: bool,
    /// The slow (environmental/snapshot) cadence fired
    pub slow: bool,
}

/// The fast/slow cadence pair driving the acquisition loop
#[derive(Debug, Clone)]
pub struct SamplingScheduler {
    fast: Cadence,
    slow: Cadence,
}

impl SamplingScheduler {
    /// New scheduler with both cadences armed at `now`
    pub fn new(fast_interval_ms: u64, slow_interval_ms: u64, now: Timestamp) -> Self {
        Self {
            fast: Cadence::new(fast_interval_ms, now),
            slow: Cadence::new(slow_interval_ms, now),
        }
    }

    /// Evaluate both cadences against the current time
    pub fn poll(&mut self, now: Timestamp) -> TickDue {
        TickDue {
            fast: self.fast.poll(now),
            slow: self.slow.poll(now),
        }
    }
}
