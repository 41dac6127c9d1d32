//! Aggregated telemetry snapshot
//!
//! One consistent view of environmental state, assembled by the aggregator
//! once per slow-cadence tick and handed to consumers by copy. A snapshot
//! is never mutated after assembly; the next tick supersedes it with a
//! fresh one. Consumers treat it as "latest known state", not as a point
//! in a precisely spaced time series.
//!
//! Validity flags carry the staleness story: a false flag means the value
//! shown is the last one that passed validation (or the cold-start zero if
//! none ever has). All-zero fields with false flags mean "sensor not
//! warmed up yet", not a real zero reading.

use crate::light::LightCondition;
use crate::time::Timestamp;

/// Read-only composite of the latest per-channel state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TelemetrySnapshot {
    /// Scheduler tick time at which this snapshot was assembled
    pub taken_at: Timestamp,

    /// Temperature in °C
    pub temperature: f32,
    /// Relative humidity in %
    pub humidity: f32,
    /// Apparent temperature in °C, derived from the reported pair
    pub heat_index: f32,

    /// Illuminance in lux
    pub lux: f32,
    /// Band classification of the reported lux
    pub light_condition: LightCondition,

    /// Most recent noise-floor-corrected audio level
    pub audio_level: i32,
    /// Peak corrected level over the closing reporting window
    pub audio_peak: i32,
    /// Mean corrected level over the closing reporting window
    pub audio_average: i32,

    /// Whether the temperature value is fresh
    pub temperature_valid: bool,
    /// Whether the humidity value is fresh
    pub humidity_valid: bool,
    /// Whether the lux value is fresh
    pub light_valid: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_cold_start_shape() {
        let snap = TelemetrySnapshot::default();

        assert_eq!(snap.temperature, 0.0);
        assert_eq!(snap.humidity, 0.0);
        assert_eq!(snap.lux, 0.0);
        assert_eq!(snap.light_condition, LightCondition::Dark);
        assert_eq!(snap.audio_peak, 0);
        assert!(!snap.temperature_valid);
        assert!(!snap.humidity_valid);
        assert!(!snap.light_valid);
    }
}
