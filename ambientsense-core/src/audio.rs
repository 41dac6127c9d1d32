//! Audio statistics engine
//!
//! ## Level Estimation
//!
//! Loudness is approximated as peak-to-peak amplitude over a short burst of
//! consecutive ADC samples. A burst wide enough to span a few waveform
//! cycles captures the signal envelope without any frequency-domain work,
//! which is the right trade for an interrupt-free polling loop on a cheap
//! analog front end.
//!
//! Per invocation:
//!
//! 1. Draw [`BURST_LEN`] consecutive samples, each separated by a fixed
//!    [`SAMPLE_GAP_US`] delay to spread the burst across the cadence window.
//! 2. Take min, max, and mean over the burst.
//! 3. `peak_to_peak = max - min`.
//! 4. Correct for the noise floor: spreads below [`NOISE_FLOOR`] are
//!    amplifier self-noise and report as silence; anything louder has the
//!    floor subtracted so levels start at zero.
//! 5. Fold the corrected level into the open accumulation window.
//!
//! ## Accumulation Window
//!
//! The engine tracks a running peak and running average across an open
//! window bounded by explicit [`AudioEngine::reset_window`] calls. The
//! aggregator resets once per reporting interval, so peak and average mean
//! "since the last report", not "since boot". Within a window the peak is
//! monotonic non-decreasing. The average is undefined until at least one
//! burst lands in the window; it reports zero by convention, not as an
//! error.

use heapless::Vec;

use crate::constants::audio::{ADC_MAX, BURST_LEN, NOISE_FLOOR, SAMPLE_GAP_US};
use crate::traits::SensorPort;

/// One audio measurement: corrected level plus window statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AudioReading {
    /// Noise-floor-corrected peak-to-peak level for this burst
    pub level: i32,
    /// Highest corrected level since the last window reset
    pub peak: i32,
    /// Mean corrected level since the last window reset
    pub average: i32,
    /// False only when the engine never initialized
    pub valid: bool,
}

impl AudioReading {
    /// The all-zero reading an uninitialized engine reports
    const fn silent() -> Self {
        Self { level: 0, peak: 0, average: 0, valid: false }
    }
}

/// Raw statistics over a single burst
#[derive(Debug, Clone, Copy)]
pub struct BurstStats {
    /// Smallest raw sample in the burst
    pub min: u16,
    /// Largest raw sample in the burst
    pub max: u16,
    /// Arithmetic mean of the burst; tracks the front end's DC bias point
    pub mean: u16,
}

impl BurstStats {
    /// Uncorrected peak-to-peak amplitude
    pub fn peak_to_peak(&self) -> i32 {
        i32::from(self.max) - i32::from(self.min)
    }
}

/// Running statistics across one accumulation window.
///
/// The three fields are reset together; a partial reset would let a stale
/// sum leak into the next window's average.
#[derive(Debug, Clone)]
struct AudioAccumulator {
    peak: i32,
    running_sum: i64,
    sample_count: u32,
}

impl AudioAccumulator {
    const fn new() -> Self {
        Self { peak: 0, running_sum: 0, sample_count: 0 }
    }

    fn record(&mut self, level: i32) {
        if level > self.peak {
            self.peak = level;
        }
        // Widened sum so the i32 average can never silently truncate
        self.running_sum += i64::from(level);
        self.sample_count += 1;
    }

    fn average(&self) -> i32 {
        if self.sample_count == 0 {
            return 0;
        }
        (self.running_sum / i64::from(self.sample_count)) as i32
    }

    fn reset(&mut self) {
        self.peak = 0;
        self.running_sum = 0;
        self.sample_count = 0;
    }
}

/// Burst sampler plus accumulation window for the analog microphone
#[derive(Debug, Clone)]
pub struct AudioEngine {
    acc: AudioAccumulator,
    last_level: i32,
    initialized: bool,
}

impl AudioEngine {
    /// New engine with an empty window; call [`begin`](Self::begin) before
    /// sampling
    pub const fn new() -> Self {
        Self {
            acc: AudioAccumulator::new(),
            last_level: 0,
            initialized: false,
        }
    }

    /// One-time startup probe.
    ///
    /// Draws a single sample and accepts the channel iff it falls within
    /// the converter's range. On failure the engine stays dead and every
    /// [`sample`](Self::sample) call reports silence without touching the
    /// port.
    pub fn begin<P: SensorPort>(&mut self, port: &mut P) -> bool {
        let probe = port.read_audio_sample();
        self.initialized = probe <= ADC_MAX;
        self.initialized
    }

    /// Draw one burst, fold it into the window, and report the result
    pub fn sample<P: SensorPort>(&mut self, port: &mut P) -> AudioReading {
        if !self.initialized {
            return AudioReading::silent();
        }

        let stats = Self::collect_burst(port);

        let mut level = stats.peak_to_peak();
        if level < NOISE_FLOOR {
            level = 0;
        } else {
            level -= NOISE_FLOOR;
        }

        self.acc.record(level);
        self.last_level = level;

        AudioReading {
            level,
            peak: self.acc.peak,
            average: self.acc.average(),
            valid: true,
        }
    }

    /// Close the accumulation window: peak, sum, and count go to zero
    /// together
    pub fn reset_window(&mut self) {
        self.acc.reset();
    }

    /// Current window peak without drawing a fresh burst
    pub fn peak(&self) -> i32 {
        self.acc.peak
    }

    /// Corrected level of the most recent burst
    pub fn last_level(&self) -> i32 {
        self.last_level
    }

    /// Mean corrected level over the open window (zero while empty)
    pub fn window_average(&self) -> i32 {
        self.acc.average()
    }

    /// Whether the most recent corrected level exceeds a threshold
    pub fn is_above(&self, threshold: i32) -> bool {
        self.last_level > threshold
    }

    fn collect_burst<P: SensorPort>(port: &mut P) -> BurstStats {
        let mut burst: Vec<u16, BURST_LEN> = Vec::new();
        for _ in 0..BURST_LEN {
            // Capacity equals the loop bound, push cannot fail
            let _ = burst.push(port.read_audio_sample());
            port.delay_us(SAMPLE_GAP_US);
        }

        let mut min = u16::MAX;
        let mut max = 0u16;
        let mut sum = 0u32;
        for &sample in &burst {
            if sample < min {
                min = sample;
            }
            if sample > max {
                max = sample;
            }
            sum += u32::from(sample);
        }

        BurstStats {
            min,
            max,
            mean: (sum / burst.len() as u32) as u16,
        }
    }
}

impl Default for AudioEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Port producing a square wave between `lo` and `hi`; retune between
    /// bursts to script a level sequence
    struct TonePort {
        lo: u16,
        hi: u16,
        flip: bool,
        reads: u32,
    }

    impl TonePort {
        fn new(lo: u16, hi: u16) -> Self {
            Self { lo, hi, flip: false, reads: 0 }
        }

        fn retune(&mut self, lo: u16, hi: u16) {
            self.lo = lo;
            self.hi = hi;
        }
    }

    impl SensorPort for TonePort {
        fn read_temperature_humidity(&mut self) -> (f32, f32) {
            (f32::NAN, f32::NAN)
        }

        fn read_lux(&mut self) -> f32 {
            -1.0
        }

        fn read_audio_sample(&mut self) -> u16 {
            self.reads += 1;
            self.flip = !self.flip;
            if self.flip { self.hi } else { self.lo }
        }

        fn delay_us(&mut self, _us: u32) {}

        fn warm_up_ms(&mut self, _ms: u32) {}
    }

    fn live_engine(port: &mut TonePort) -> AudioEngine {
        let mut engine = AudioEngine::new();
        assert!(engine.begin(port));
        engine
    }

    #[test]
    fn spread_below_noise_floor_is_silence() {
        let mut port = TonePort::new(1000, 1099);
        let mut engine = live_engine(&mut port);

        let reading = engine.sample(&mut port);
        assert_eq!(reading.level, 0);
        assert!(reading.valid);
    }

    #[test]
    fn spread_above_noise_floor_subtracts_it() {
        let mut port = TonePort::new(1000, 1150);
        let mut engine = live_engine(&mut port);

        let reading = engine.sample(&mut port);
        assert_eq!(reading.level, 50);
    }

    #[test]
    fn peak_is_monotonic_until_reset() {
        let mut port = TonePort::new(1000, 1110);
        let mut engine = live_engine(&mut port);

        // Corrected levels 10, 45, 20
        assert_eq!(engine.sample(&mut port).peak, 10);

        port.retune(1000, 1145);
        assert_eq!(engine.sample(&mut port).peak, 45);

        port.retune(1000, 1120);
        let reading = engine.sample(&mut port);
        assert_eq!(reading.level, 20);
        assert_eq!(reading.peak, 45);

        engine.reset_window();
        assert_eq!(engine.peak(), 0);
    }

    #[test]
    fn average_over_window() {
        let mut port = TonePort::new(1000, 1110);
        let mut engine = live_engine(&mut port);

        // Corrected levels 10, 20, 30 accumulated without reset
        engine.sample(&mut port);
        port.retune(1000, 1120);
        engine.sample(&mut port);
        port.retune(1000, 1130);
        let reading = engine.sample(&mut port);

        assert_eq!(reading.average, 20);
    }

    #[test]
    fn reset_clears_sum_and_count_together() {
        let mut port = TonePort::new(1000, 1200);
        let mut engine = live_engine(&mut port);

        engine.sample(&mut port);
        engine.reset_window();

        // A stale sum or count would skew the first post-reset average
        port.retune(1000, 1140);
        let reading = engine.sample(&mut port);
        assert_eq!(reading.average, 40);
        assert_eq!(reading.peak, 40);
    }

    #[test]
    fn dead_engine_reports_silence_without_port_io() {
        let mut port = TonePort::new(1000, 1200);
        let mut engine = AudioEngine::new();

        let reading = engine.sample(&mut port);
        assert_eq!(reading, AudioReading::silent());
        assert_eq!(port.reads, 0);
    }

    #[test]
    fn begin_rejects_out_of_range_probe() {
        let mut port = TonePort::new(5000, 5000);
        let mut engine = AudioEngine::new();
        assert!(!engine.begin(&mut port));
    }

    #[test]
    fn threshold_check_uses_last_level() {
        let mut port = TonePort::new(1000, 1150);
        let mut engine = live_engine(&mut port);

        engine.sample(&mut port);
        assert!(engine.is_above(40));
        assert!(!engine.is_above(50));
    }
}
