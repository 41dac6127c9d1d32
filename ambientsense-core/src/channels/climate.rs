//! Temperature/humidity channel
//!
//! One physical transaction yields both values, so the channel stores and
//! falls back on them as a pair. The heat index is derived from whichever
//! pair is being reported, fresh or stale, on every read; caching it would
//! let a derived field drift out of step with its base values.

use crate::{
    measure::ChannelState,
    traits::{SensorPort, Validator},
    validators::ClimateValidator,
};

/// One climate acquisition result.
///
/// `Default` is the cold all-zero reading a channel reports before it has
/// ever seen valid data.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClimateReading {
    /// Temperature in °C
    pub temperature: f32,
    /// Relative humidity in %
    pub humidity: f32,
    /// Apparent temperature in °C derived from the reported pair
    pub heat_index: f32,
    /// True iff this attempt's raw pair passed validation
    pub valid: bool,
}

impl ClimateReading {
    /// Temperature converted to °F
    pub fn temperature_f(&self) -> f32 {
        self.temperature * 9.0 / 5.0 + 32.0
    }
}

/// Staleness-arbitrated temperature/humidity channel
#[derive(Debug, Clone)]
pub struct ClimateChannel {
    validator: ClimateValidator,
    state: ChannelState<(f32, f32)>,
    initialized: bool,
}

impl ClimateChannel {
    /// New channel with default plausibility limits
    pub fn new() -> Self {
        Self {
            validator: ClimateValidator::default(),
            state: ChannelState::new(),
            initialized: false,
        }
    }

    /// New channel with a custom validator
    pub fn with_validator(validator: ClimateValidator) -> Self {
        Self {
            validator,
            state: ChannelState::new(),
            initialized: false,
        }
    }

    /// One-time startup probe.
    ///
    /// The sensor's first transaction after power-up often fails, so a
    /// failed probe is retried once. A valid probe seeds the last-known-good
    /// pair. If both attempts fail the channel stays dead for the life of
    /// the process: every `read` reports the cold zero pair without
    /// touching the port.
    pub fn begin<P: SensorPort>(&mut self, port: &mut P) -> bool {
        for _ in 0..2 {
            let raw = port.read_temperature_humidity();
            if self.validator.validate(raw).is_ok() {
                self.state.accept(raw);
                self.initialized = true;
                break;
            }
        }
        self.initialized
    }

    /// One acquisition attempt: read, validate, fall back on failure
    pub fn read<P: SensorPort>(&mut self, port: &mut P) -> ClimateReading {
        if !self.initialized {
            return ClimateReading::default();
        }

        let raw = port.read_temperature_humidity();
        let measurement = match self.validator.validate(raw) {
            Ok(()) => self.state.accept(raw),
            Err(_) => self.state.fallback(),
        };

        let (temperature, humidity) = measurement.value;
        ClimateReading {
            temperature,
            humidity,
            heat_index: heat_index_c(temperature, humidity),
            valid: measurement.valid,
        }
    }

    /// Probe whether the sensor currently answers with plausible data.
    ///
    /// Costs one transaction; does not update channel state.
    pub fn is_connected<P: SensorPort>(&self, port: &mut P) -> bool {
        self.initialized && self.validator.validate(port.read_temperature_humidity()).is_ok()
    }

    /// Whether the startup probe succeeded
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl Default for ClimateChannel {
    fn default() -> Self {
        Self::new()
    }
}

/// Apparent temperature (heat index) in °C for a temperature/humidity pair.
///
/// Rothfusz regression over the NWS heat index table, with the standard
/// low-humidity and high-humidity adjustments. Below the regression's
/// domain the simpler Steadman form is used; both are computed in °F and
/// converted back. Outside roughly [26 °C, 44 °C] the result approaches
/// the dry-bulb temperature, which is the intended behavior.
pub fn heat_index_c(temperature_c: f32, humidity_pct: f32) -> f32 {
    let t = temperature_c * 9.0 / 5.0 + 32.0;
    let rh = humidity_pct;

    // Steadman's simple formula, accurate below the regression's domain
    let mut hi = 0.5 * (t + 61.0 + (t - 68.0) * 1.2 + rh * 0.094);

    if hi > 79.0 {
        hi = -42.379 + 2.049_015_23 * t + 10.143_331_27 * rh
            - 0.224_755_41 * t * rh
            - 6.837_83e-3 * t * t
            - 5.481_717e-2 * rh * rh
            + 1.228_74e-3 * t * t * rh
            + 8.528_2e-4 * t * rh * rh
            - 1.99e-6 * t * t * rh * rh;

        if rh < 13.0 && (80.0..=112.0).contains(&t) {
            hi -= ((13.0 - rh) * 0.25) * libm::sqrtf((17.0 - libm::fabsf(t - 95.0)) / 17.0);
        } else if rh > 85.0 && (80.0..=87.0).contains(&t) {
            hi += ((rh - 85.0) * 0.1) * ((87.0 - t) * 0.2);
        }
    }

    (hi - 32.0) * 5.0 / 9.0
}
