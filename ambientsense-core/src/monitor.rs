//! Device-level aggregator
//!
//! `EnvironmentMonitor` owns every piece of mutable acquisition state: the
//! channels, the audio engine, the scheduler, and the latest snapshot.
//! Nothing here is global; a monitor is constructed once at startup from a
//! [`MonitorConfig`] and a port, and tests build as many independent
//! instances as they like.
//!
//! The host drives it with one call per loop iteration:
//!
//! ```no_run
//! # use ambientsense_core::{Clock, EnvironmentMonitor, MonitorConfig, SensorPort, SystemClock};
//! # fn run<P: SensorPort>(port: P) {
//! let clock = SystemClock::new();
//! let mut monitor = EnvironmentMonitor::new(port, MonitorConfig::default(), clock.now());
//! monitor.begin();
//!
//! loop {
//!     if monitor.tick(clock.now()) {
//!         let snapshot = monitor.latest_snapshot();
//!         // hand the snapshot to the reporting side
//!         # let _ = snapshot; break;
//!     }
//! }
//! # }
//! ```
//!
//! One configurable core covers every channel-subset deployment; disabling
//! a channel skips its port reads entirely and leaves its snapshot fields
//! at the cold-start zeros.

use crate::{
    audio::AudioEngine,
    channels::{ClimateChannel, ClimateReading, LightChannel, LightReading},
    constants::time::{FAST_CADENCE_MS, SLOW_CADENCE_MS, WARM_UP_MS},
    scheduler::SamplingScheduler,
    snapshot::TelemetrySnapshot,
    time::Timestamp,
    traits::SensorPort,
};

// Optional logging shims so no_std builds compile the calls away
#[cfg(feature = "log")]
macro_rules! log_info {
    ($($arg:tt)*) => { log::info!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "log")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "log"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

/// Channel set and cadence configuration for one monitor instance
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Acquire temperature/humidity
    pub climate: bool,
    /// Acquire ambient light
    pub light: bool,
    /// Acquire audio statistics
    pub audio: bool,
    /// Fast (audio) cadence interval in milliseconds
    pub fast_interval_ms: u64,
    /// Slow (environmental/snapshot) cadence interval in milliseconds
    pub slow_interval_ms: u64,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            climate: true,
            light: true,
            audio: true,
            fast_interval_ms: FAST_CADENCE_MS,
            slow_interval_ms: SLOW_CADENCE_MS,
        }
    }
}

impl MonitorConfig {
    /// Climate channel only: the minimal thermostat-style deployment
    pub fn climate_only() -> Self {
        Self {
            light: false,
            audio: false,
            ..Self::default()
        }
    }

    /// Environmental channels without the microphone
    pub fn without_audio() -> Self {
        Self {
            audio: false,
            ..Self::default()
        }
    }
}

/// Per-channel outcome of [`EnvironmentMonitor::begin`].
///
/// A disabled channel reports `true`: there was nothing to fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeginStatus {
    /// Climate channel initialized (or disabled)
    pub climate_ok: bool,
    /// Light channel initialized (or disabled)
    pub light_ok: bool,
    /// Audio probe accepted (or disabled)
    pub audio_ok: bool,
}

impl BeginStatus {
    /// Whether every enabled channel came up
    pub fn all_ok(&self) -> bool {
        self.climate_ok && self.light_ok && self.audio_ok
    }
}

/// Owns all acquisition state and drives it from `tick()`
#[derive(Debug)]
pub struct EnvironmentMonitor<P: SensorPort> {
    port: P,
    config: MonitorConfig,
    scheduler: SamplingScheduler,
    climate: ClimateChannel,
    light: LightChannel,
    audio: AudioEngine,
    latest: TelemetrySnapshot,
}

impl<P: SensorPort> EnvironmentMonitor<P> {
    /// New monitor with both cadences armed at `start`
    pub fn new(port: P, config: MonitorConfig, start: Timestamp) -> Self {
        let scheduler =
            SamplingScheduler::new(config.fast_interval_ms, config.slow_interval_ms, start);

        Self {
            port,
            config,
            scheduler,
            climate: ClimateChannel::new(),
            light: LightChannel::new(),
            audio: AudioEngine::new(),
            latest: TelemetrySnapshot::default(),
        }
    }

    /// One-time startup: warm-up delay, then a probe per enabled channel.
    ///
    /// A channel whose probe fails stays dead until the process restarts;
    /// its snapshot fields keep the cold-start zeros. Never called from
    /// the hot path.
    pub fn begin(&mut self) -> BeginStatus {
        self.port.warm_up_ms(WARM_UP_MS);

        let mut status = BeginStatus { climate_ok: true, light_ok: true, audio_ok: true };

        if self.config.climate {
            status.climate_ok = self.climate.begin(&mut self.port);
            if status.climate_ok {
                log_info!("climate channel up");
            } else {
                log_warn!("climate channel failed to initialize");
            }
        }

        if self.config.light {
            status.light_ok = self.light.begin(&mut self.port);
            if status.light_ok {
                log_info!("light channel up");
            } else {
                log_warn!("light channel failed to initialize");
            }
        }

        if self.config.audio {
            status.audio_ok = self.audio.begin(&mut self.port);
            if status.audio_ok {
                log_info!("audio channel up");
            } else {
                log_warn!("audio channel failed to initialize");
            }
        }

        status
    }

    /// One loop iteration: perform whatever reads are due at `now`.
    ///
    /// Returns true iff a new snapshot was assembled, so the caller knows
    /// when there is something fresh to report. The fast cadence is
    /// evaluated first so a coinciding slow tick sees the newest audio
    /// state; the audio window resets only after the snapshot has captured
    /// it.
    pub fn tick(&mut self, now: Timestamp) -> bool {
        let due = self.scheduler.poll(now);

        if due.fast && self.config.audio {
            self.audio.sample(&mut self.port);
        }

        if due.slow {
            self.latest = self.assemble_snapshot(now);
            self.audio.reset_window();
            log_debug!(
                "snapshot at {}: {:.1}C {:.1}% {:.1}lx audio {}",
                now,
                self.latest.temperature,
                self.latest.humidity,
                self.latest.lux,
                self.latest.audio_level,
            );
        }

        due.slow
    }

    /// The most recently assembled snapshot, by copy
    pub fn latest_snapshot(&self) -> TelemetrySnapshot {
        self.latest
    }

    /// The audio engine, for threshold queries between snapshots
    pub fn audio(&self) -> &AudioEngine {
        &self.audio
    }

    /// The active configuration
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// The underlying port, for driver-level operations between ticks
    /// (mode changes, recalibration commands)
    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    fn assemble_snapshot(&mut self, now: Timestamp) -> TelemetrySnapshot {
        let climate = if self.config.climate {
            self.climate.read(&mut self.port)
        } else {
            ClimateReading::default()
        };

        let light = if self.config.light {
            self.light.read(&mut self.port)
        } else {
            LightReading::default()
        };

        TelemetrySnapshot {
            taken_at: now,
            temperature: climate.temperature,
            humidity: climate.humidity,
            heat_index: climate.heat_index,
            lux: light.lux,
            light_condition: light.condition,
            audio_level: self.audio.last_level(),
            audio_peak: self.audio.peak(),
            audio_average: self.audio.window_average(),
            // The pair shares one transaction, so one verdict covers both
            temperature_valid: climate.valid,
            humidity_valid: climate.valid,
            light_valid: light.valid,
        }
    }
}
