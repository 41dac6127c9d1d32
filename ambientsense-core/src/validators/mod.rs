//! Reading validators
//!
//! ## Overview
//!
//! A validator answers one question: could this raw reading possibly be
//! real? The rules are deliberately simple - numeric sanity plus a fixed
//! plausibility range per channel. There is no history, no rate-of-change
//! tracking, and no statistics: a reading is judged entirely on its own.
//!
//! What happens to a rejected reading is not the validator's business.
//! The channel layer owns the fallback policy (report the last value that
//! passed, flagged invalid); validators only classify.
//!
//! ## Channel Rules
//!
//! - **Climate** ([`ClimateValidator`]): temperature and humidity arrive
//!   from a single sensor transaction and are accepted or rejected as a
//!   pair. Either value being non-finite, temperature outside
//!   [-40, 80] °C, or humidity outside [0, 100] % rejects the pair.
//! - **Light** ([`LightValidator`]): the sensor signals failure in-band
//!   with a negative lux value. Any non-negative finite lux, including
//!   zero, is valid.
//! - **Audio**: not validated. Raw ADC counts are numeric by construction;
//!   noise handling happens in the statistics engine instead.

mod climate;
mod light;
pub(crate) mod utils;

pub use climate::ClimateValidator;
pub use light::LightValidator;
