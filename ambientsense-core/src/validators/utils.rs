//! Shared validation helpers
//!
//! Pure functions used by every validator. No allocation, no side effects,
//! safe to call from anywhere in the loop.

use crate::{
    errors::{SensorError, SensorResult},
    traits::Validatable,
};

/// Check if a value is within the inclusive range [min, max]
pub fn check_range(value: f32, min: f32, max: f32) -> SensorResult<()> {
    if value < min || value > max {
        Err(SensorError::OutOfRange { value, min, max })
    } else {
        Ok(())
    }
}

/// Check that a value is a finite number
pub fn check_finite(value: f32) -> SensorResult<()> {
    if value.is_usable() {
        Ok(())
    } else {
        Err(SensorError::NotFinite)
    }
}
