//! Core traits for the acquisition engine
//!
//! These are the seams between the algorithmic core and everything it
//! deliberately does not contain: hardware drivers, clocks, and per-channel
//! validation rules. Keep them small - a polling loop on a microcontroller
//! does not need elaborate abstractions.

use crate::errors::SensorResult;

/// Capability trait for the raw sensor hardware.
///
/// One implementation per board wires the three physical transducers (and
/// their timing quirks) behind a uniform surface. The core owns no driver
/// handles and performs no bus I/O of its own; everything physical goes
/// through here.
///
/// Error conventions, matching what the cheap parts actually do:
/// - temperature/humidity: `f32::NAN` in either slot means the transaction
///   failed or no sensor responded
/// - lux: a negative value is the sensor's explicit error sentinel; `NAN`
///   means no sensor responded at all
/// - audio: every sample is a raw ADC count, always numeric
pub trait SensorPort {
    /// One temperature/humidity transaction, in (°C, %RH)
    fn read_temperature_humidity(&mut self) -> (f32, f32);

    /// One light level read, in lux
    fn read_lux(&mut self) -> f32;

    /// One raw ADC sample from the microphone
    fn read_audio_sample(&mut self) -> u16;

    /// Busy-wait for the given number of microseconds.
    ///
    /// Used to spread burst samples across the cadence window. Simulated
    /// ports may make this a no-op.
    fn delay_us(&mut self, us: u32);

    /// Block for the one-time startup settle delay.
    ///
    /// Called once from `begin()`, never from the hot path.
    fn warm_up_ms(&mut self, ms: u32);
}

/// Per-channel reading validator.
///
/// Implementations are pure: same input, same verdict, no history and no
/// side effects.
pub trait Validator {
    /// The reading type this validator judges
    type Value;

    /// Classify a raw reading as plausible or not
    fn validate(&self, value: Self::Value) -> SensorResult<()>;
}

/// Trait for values that can be checked for numeric sanity
pub trait Validatable {
    /// Check if the value is numerically usable (not NaN, not infinite)
    fn is_usable(&self) -> bool;
}

impl Validatable for f32 {
    fn is_usable(&self) -> bool {
        self.is_finite()
    }
}

impl Validatable for f64 {
    fn is_usable(&self) -> bool {
        self.is_finite()
    }
}
