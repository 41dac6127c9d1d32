//! Error types for sensor reading classification
//!
//! ## Design Philosophy
//!
//! AmbientSense runs as a polling loop on constrained hardware, so the error
//! type follows the same rules the rest of the crate does:
//!
//! 1. **Small Size**: every variant keeps its payload inline (a handful of
//!    f32s at most) so errors can be returned from the hot read path without
//!    touching the heap.
//!
//! 2. **Copy Semantics**: errors implement `Copy` and move freely between
//!    the validator layer and the channel layer that consumes them.
//!
//! 3. **Never Escapes the Loop**: no error here is ever propagated out of
//!    `EnvironmentMonitor::tick()`. Validators return them, channels fold
//!    them into stale-fallback measurements, and the loop keeps polling.
//!    A reading failure is data, not control flow.
//!
//! ## Failure Taxonomy
//!
//! - `NotFinite`: the raw value is NaN or infinite. For the climate pair
//!   this is the "sensor did not respond" sentinel.
//! - `OutOfRange`: the value is finite but physically implausible for the
//!   channel (temperature outside [-40, 80] °C, humidity outside [0, 100] %).
//! - `SensorFault`: the port signalled an explicit error condition through
//!   its sentinel convention (negative lux from the light sensor).

use thiserror_no_std::Error;

/// Result type for validation operations
pub type SensorResult<T> = Result<T, SensorError>;

/// Reading classification errors - kept small for embedded use
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SensorError {
    /// Value is NaN or infinite
    #[error("invalid value: not a finite number")]
    NotFinite,

    /// Value outside the channel's plausible physical range
    #[error("value {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// The reading that failed validation
        value: f32,
        /// Minimum acceptable value for the channel
        min: f32,
        /// Maximum acceptable value for the channel
        max: f32,
    },

    /// The port reported an explicit error sentinel
    #[error("sensor fault: error sentinel {value}")]
    SensorFault {
        /// The sentinel value the port returned
        value: f32,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::NotFinite =>
                defmt::write!(fmt, "not a finite number"),
            Self::OutOfRange { value, min, max } =>
                defmt::write!(fmt, "value {} outside [{}, {}]", value, min, max),
            Self::SensorFault { value } =>
                defmt::write!(fmt, "sensor fault sentinel {}", value),
        }
    }
}
