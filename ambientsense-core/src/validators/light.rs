//! Light reading validator
//!
//! The lux sensor reports failure in-band: a negative reading is its error
//! sentinel. Zero lux is a real measurement (total darkness), so the valid
//! range is any non-negative finite value with no upper bound.

use crate::{
    errors::{SensorError, SensorResult},
    traits::Validator,
};

use super::utils;

/// Validator for lux readings
#[derive(Debug, Clone, Default)]
pub struct LightValidator;

impl Validator for LightValidator {
    type Value = f32;

    fn validate(&self, lux: Self::Value) -> SensorResult<()> {
        utils::check_finite(lux)?;

        if lux < 0.0 {
            return Err(SensorError::SensorFault { value: lux });
        }

        Ok(())
    }
}
