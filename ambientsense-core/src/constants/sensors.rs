//! Sensor Plausibility Limits and Classification Thresholds
//!
//! Limits are per-channel "could this reading possibly be real" bounds.
//! They describe what the attached sensor can report when healthy, not what
//! the deployment environment is expected to look like.

// ===== CLIMATE (TEMPERATURE / HUMIDITY) LIMITS =====

/// Minimum plausible temperature reading (°C).
///
/// Lower bound of the DHT22 operating range. Anything below this is a
/// transaction glitch, not weather.
///
/// Source: Aosong DHT22/AM2302 datasheet
pub const TEMP_MIN_C: f32 = -40.0;

/// Maximum plausible temperature reading (°C).
///
/// Upper bound of the DHT22 operating range.
///
/// Source: Aosong DHT22/AM2302 datasheet
pub const TEMP_MAX_C: f32 = 80.0;

/// Minimum plausible relative humidity (%).
///
/// Physical lower limit: completely dry air.
pub const HUMIDITY_MIN_PCT: f32 = 0.0;

/// Maximum plausible relative humidity (%).
///
/// Physical upper limit: saturated air.
pub const HUMIDITY_MAX_PCT: f32 = 100.0;

// ===== LIGHT CLASSIFICATION THRESHOLDS (LUX) =====
//
// Band boundaries are half-open on the lower side: a reading equal to a
// boundary falls into the brighter band.

/// Upper boundary of the Dark band (lux). Below this is effectively night.
pub const LUX_DARK_MAX: f32 = 10.0;

/// Upper boundary of the Dim band (lux). Hallway / mood lighting.
pub const LUX_DIM_MAX: f32 = 50.0;

/// Upper boundary of the Normal band (lux). Typical indoor lighting.
pub const LUX_NORMAL_MAX: f32 = 300.0;

/// Upper boundary of the Bright band (lux). Well-lit workspace; above this
/// is direct sun or studio lighting.
///
/// Source: BH1750 application note, typical illuminance tables
pub const LUX_BRIGHT_MAX: f32 = 1000.0;
