//! Measurement values and last-known-good channel state
//!
//! ## Staleness Policy
//!
//! A channel never reports a hole. When a read attempt fails validation,
//! the channel re-reports the last value that passed, flagged invalid so a
//! consumer can tell fresh data from stale. The stored value is only ever
//! overwritten by a reading that passed validation, so "last known good"
//! is literal.
//!
//! Before the first valid reading exists there is nothing to fall back on;
//! the fallback is then a defined zero value, still flagged invalid. An
//! all-zero invalid field means "sensor not warmed up yet", not a real
//! zero reading - consumers must treat it that way.
//!
//! A failed read is never retried here. Retry is simply the scheduler
//! invoking the read again on its next cadence tick, which bounds the
//! worst-case latency added by a dead sensor to one cadence interval.

/// A typed sensor value plus its validity flag.
///
/// Immutable once constructed: channels build a fresh one per read attempt.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measurement<T> {
    /// The reported value (fresh, stale, or cold-start zero)
    pub value: T,
    /// True iff the value came from this read attempt and passed validation
    pub valid: bool,
}

impl<T> Measurement<T> {
    /// A fresh reading that passed validation
    pub fn fresh(value: T) -> Self {
        Self { value, valid: true }
    }

    /// A fallback reading carrying an earlier (or zero) value
    pub fn stale(value: T) -> Self {
        Self { value, valid: false }
    }
}

/// Per-channel record of the last reading that passed validation.
///
/// Owned exclusively by the device-level aggregator; overwritten on every
/// validated read, never deleted, for the life of the process.
#[derive(Debug, Clone)]
pub struct ChannelState<T> {
    last_good: T,
    warmed: bool,
}

impl<T: Copy + Default> ChannelState<T> {
    /// New channel with no history: fallback is the type's zero value
    pub fn new() -> Self {
        Self {
            last_good: T::default(),
            warmed: false,
        }
    }

    /// Store a validated reading and return it as a fresh measurement
    pub fn accept(&mut self, value: T) -> Measurement<T> {
        self.last_good = value;
        self.warmed = true;
        Measurement::fresh(value)
    }

    /// Return the last-known-good value as an invalid measurement.
    ///
    /// Cold start (no valid reading yet) yields the zero value.
    pub fn fallback(&self) -> Measurement<T> {
        Measurement::stale(self.last_good)
    }

    /// Whether any reading has ever passed validation on this channel
    pub fn is_warmed(&self) -> bool {
        self.warmed
    }
}

impl<T: Copy + Default> Default for ChannelState<T> {
    fn default() -> Self {
        Self::new()
    }
}
