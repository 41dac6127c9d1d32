//! Climate pair validator
//!
//! Temperature and humidity come out of one physical transaction on the
//! same sensor, so they are judged together: a glitched transaction rarely
//! corrupts only one of the two values, and reporting half of a bad pair
//! would let an implausible combination through. Either value failing its
//! check rejects the whole pair.

use crate::{
    constants::sensors::{HUMIDITY_MAX_PCT, HUMIDITY_MIN_PCT, TEMP_MAX_C, TEMP_MIN_C},
    errors::SensorResult,
    traits::Validator,
};

use super::utils;

/// Validator for a (temperature °C, relative humidity %) pair
#[derive(Debug, Clone)]
pub struct ClimateValidator {
    min_c: f32,
    max_c: f32,
    min_rh: f32,
    max_rh: f32,
}

impl Default for ClimateValidator {
    fn default() -> Self {
        Self {
            min_c: TEMP_MIN_C,
            max_c: TEMP_MAX_C,
            min_rh: HUMIDITY_MIN_PCT,
            max_rh: HUMIDITY_MAX_PCT,
        }
    }
}

impl ClimateValidator {
    /// Create a validator with custom temperature limits.
    ///
    /// Humidity stays at the physical [0, 100] % bounds; there is no
    /// deployment where those widen.
    pub fn new_with_limits(min_c: f32, max_c: f32) -> Self {
        // Guard against swapped arguments
        let (min_c, max_c) = if min_c > max_c { (max_c, min_c) } else { (min_c, max_c) };

        Self {
            min_c,
            max_c,
            ..Self::default()
        }
    }
}

impl Validator for ClimateValidator {
    type Value = (f32, f32);

    fn validate(&self, (temperature, humidity): Self::Value) -> SensorResult<()> {
        // NaN in either slot means the transaction itself failed
        utils::check_finite(temperature)?;
        utils::check_finite(humidity)?;

        utils::check_range(temperature, self.min_c, self.max_c)?;
        utils::check_range(humidity, self.min_rh, self.max_rh)?;

        Ok(())
    }
}
