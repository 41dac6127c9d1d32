//! Ambient light channel
//!
//! The lux sensor distinguishes two failure shapes and the channel keeps
//! them apart at startup: a NaN probe means nothing answered on the bus and
//! the channel is dead for the life of the process, while the negative
//! error sentinel means the hardware is present but has no measurement
//! ready yet, so the channel comes up cold and resolves itself on the
//! first valid reading.

use crate::{
    light::LightCondition,
    measure::ChannelState,
    traits::{SensorPort, Validatable, Validator},
    validators::LightValidator,
};

/// One light acquisition result.
///
/// `Default` is the zero-lux Dark reading a channel reports before it has
/// ever seen valid data.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LightReading {
    /// Illuminance in lux
    pub lux: f32,
    /// Band classification of the reported lux value
    pub condition: LightCondition,
    /// True iff this attempt's raw value passed validation
    pub valid: bool,
}

/// Staleness-arbitrated lux channel
#[derive(Debug, Clone)]
pub struct LightChannel {
    validator: LightValidator,
    state: ChannelState<f32>,
    initialized: bool,
}

impl LightChannel {
    /// New channel; call [`begin`](Self::begin) before reading
    pub fn new() -> Self {
        Self {
            validator: LightValidator,
            state: ChannelState::new(),
            initialized: false,
        }
    }

    /// One-time startup probe.
    ///
    /// A valid probe seeds the last-known-good value. The negative error
    /// sentinel still initializes the channel (the sensor answered, its
    /// first conversion just is not done), leaving it cold until a valid
    /// reading arrives. A NaN probe means no sensor responded and the
    /// channel stays dead.
    pub fn begin<P: SensorPort>(&mut self, port: &mut P) -> bool {
        let probe = port.read_lux();
        if !probe.is_usable() {
            return false;
        }

        if self.validator.validate(probe).is_ok() {
            self.state.accept(probe);
        }
        self.initialized = true;
        true
    }

    /// One acquisition attempt: read, validate, fall back on failure
    pub fn read<P: SensorPort>(&mut self, port: &mut P) -> LightReading {
        if !self.initialized {
            return LightReading::default();
        }

        let raw = port.read_lux();
        let measurement = match self.validator.validate(raw) {
            Ok(()) => self.state.accept(raw),
            Err(_) => self.state.fallback(),
        };

        LightReading {
            lux: measurement.value,
            condition: LightCondition::classify(measurement.value),
            valid: measurement.valid,
        }
    }

    /// Probe whether the sensor currently answers with plausible data.
    ///
    /// Costs one read; does not update channel state.
    pub fn is_connected<P: SensorPort>(&self, port: &mut P) -> bool {
        self.initialized && self.validator.validate(port.read_lux()).is_ok()
    }

    /// Whether the startup probe found a responding sensor
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

impl Default for LightChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ScriptPort {
        script: std::vec::Vec<f32>,
        pos: usize,
    }

    impl ScriptPort {
        fn new(script: &[f32]) -> Self {
            Self { script: script.to_vec(), pos: 0 }
        }
    }

    impl SensorPort for ScriptPort {
        fn read_temperature_humidity(&mut self) -> (f32, f32) {
            (f32::NAN, f32::NAN)
        }

        fn read_lux(&mut self) -> f32 {
            let idx = self.pos.min(self.script.len() - 1);
            self.pos += 1;
            self.script[idx]
        }

        fn read_audio_sample(&mut self) -> u16 {
            0
        }

        fn delay_us(&mut self, _us: u32) {}

        fn warm_up_ms(&mut self, _ms: u32) {}
    }

    #[test]
    fn valid_read_classifies_fresh_value() {
        let mut port = ScriptPort::new(&[120.0, 450.0]);
        let mut channel = LightChannel::new();
        assert!(channel.begin(&mut port));

        let reading = channel.read(&mut port);
        assert!(reading.valid);
        assert_eq!(reading.lux, 450.0);
        assert_eq!(reading.condition, LightCondition::Bright);
    }

    #[test]
    fn sentinel_read_falls_back_and_reclassifies_stale_value() {
        let mut port = ScriptPort::new(&[120.0, 800.0, -2.0]);
        let mut channel = LightChannel::new();
        channel.begin(&mut port);

        assert!(channel.read(&mut port).valid);

        let stale = channel.read(&mut port);
        assert!(!stale.valid);
        assert_eq!(stale.lux, 800.0);
        // Condition is derived from the reported (stale) lux, not the sentinel
        assert_eq!(stale.condition, LightCondition::Bright);
    }

    #[test]
    fn sentinel_probe_initializes_cold() {
        let mut port = ScriptPort::new(&[-1.0, -1.0, 75.0]);
        let mut channel = LightChannel::new();

        // Sensor answered with its sentinel: present but not ready
        assert!(channel.begin(&mut port));
        assert!(channel.is_initialized());

        // Cold until the first valid reading
        let cold = channel.read(&mut port);
        assert!(!cold.valid);
        assert_eq!(cold.lux, 0.0);
        assert_eq!(cold.condition, LightCondition::Dark);

        // Resolves itself once real data arrives
        let warm = channel.read(&mut port);
        assert!(warm.valid);
        assert_eq!(warm.lux, 75.0);
    }

    #[test]
    fn nan_probe_leaves_channel_dead() {
        let mut port = ScriptPort::new(&[f32::NAN, 100.0]);
        let mut channel = LightChannel::new();
        assert!(!channel.begin(&mut port));

        let before = port.pos;
        let reading = channel.read(&mut port);
        assert_eq!(port.pos, before);
        assert_eq!(reading, LightReading::default());
    }

    #[test]
    fn zero_lux_is_a_real_reading() {
        let mut port = ScriptPort::new(&[30.0, 0.0]);
        let mut channel = LightChannel::new();
        channel.begin(&mut port);

        let reading = channel.read(&mut port);
        assert!(reading.valid);
        assert_eq!(reading.lux, 0.0);
        assert_eq!(reading.condition, LightCondition::Dark);
    }
}
