//! Cadence Intervals and Time Conversions

// ===== TIME UNIT CONVERSIONS =====

/// Milliseconds per second.
pub const MS_PER_SECOND: u64 = 1000;

/// Microseconds per millisecond.
pub const US_PER_MS: u64 = 1000;

// ===== SAMPLING CADENCES =====

/// Fast cadence interval (milliseconds): audio burst sampling.
///
/// 10 Hz keeps peak detection responsive to short sounds without saturating
/// the loop with ADC work.
pub const FAST_CADENCE_MS: u64 = 100;

/// Slow cadence interval (milliseconds): environmental reads and snapshot
/// assembly.
///
/// The DHT22 needs about two seconds between transactions to produce fresh
/// data, so polling faster buys nothing.
///
/// Source: Aosong DHT22/AM2302 datasheet (sampling period >= 2 s)
pub const SLOW_CADENCE_MS: u64 = 2000;

/// One-time sensor settle delay before the startup probe (milliseconds).
///
/// Source: Aosong DHT22/AM2302 datasheet (power-on settling)
pub const WARM_UP_MS: u32 = 2000;
