//! Shared test support: a fully scriptable sensor port
//!
//! Each channel has a queue of scripted readings; once a queue runs dry
//! the port serves a fixed healthy value, so tests only script the moments
//! they care about. Audio is scripted as a square-wave spread retuned
//! between ticks.

#![allow(dead_code)]

use std::collections::VecDeque;

use ambientsense_core::SensorPort;

/// Healthy defaults served once a script runs out
pub const DEFAULT_CLIMATE: (f32, f32) = (21.0, 40.0);
pub const DEFAULT_LUX: f32 = 100.0;

pub struct ScriptedPort {
    climate_script: VecDeque<(f32, f32)>,
    lux_script: VecDeque<f32>,
    tone: (u16, u16),
    flip: bool,

    pub climate_reads: u32,
    pub lux_reads: u32,
    pub audio_reads: u32,
}

impl ScriptedPort {
    /// Port that always answers with healthy values
    pub fn healthy() -> Self {
        Self {
            climate_script: VecDeque::new(),
            lux_script: VecDeque::new(),
            tone: (2000, 2000),
            flip: false,
            climate_reads: 0,
            lux_reads: 0,
            audio_reads: 0,
        }
    }

    /// Queue climate transactions to serve before the healthy default
    pub fn queue_climate(&mut self, pairs: &[(f32, f32)]) -> &mut Self {
        self.climate_script.extend(pairs.iter().copied());
        self
    }

    /// Queue lux readings to serve before the healthy default
    pub fn queue_lux(&mut self, values: &[f32]) -> &mut Self {
        self.lux_script.extend(values.iter().copied());
        self
    }

    /// Retune the microphone square wave; spread = hi - lo
    pub fn set_tone(&mut self, lo: u16, hi: u16) {
        self.tone = (lo, hi);
    }
}

impl SensorPort for ScriptedPort {
    fn read_temperature_humidity(&mut self) -> (f32, f32) {
        self.climate_reads += 1;
        self.climate_script.pop_front().unwrap_or(DEFAULT_CLIMATE)
    }

    fn read_lux(&mut self) -> f32 {
        self.lux_reads += 1;
        self.lux_script.pop_front().unwrap_or(DEFAULT_LUX)
    }

    fn read_audio_sample(&mut self) -> u16 {
        self.audio_reads += 1;
        self.flip = !self.flip;
        if self.flip { self.tone.1 } else { self.tone.0 }
    }

    fn delay_us(&mut self, _us: u32) {}

    fn warm_up_ms(&mut self, _ms: u32) {}
}
