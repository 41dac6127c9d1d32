//! Core acquisition engine for AmbientSense
//!
//! Samples environmental sensors (temperature/humidity, ambient light,
//! ambient sound amplitude) on a constrained device and maintains a
//! consistent, up-to-date snapshot of environmental state for downstream
//! reporting.
//!
//! Key constraints:
//! - Single-threaded cooperative polling loop, no locks, no cancellation
//! - No heap allocation in the hot path
//! - Failures are data (stale/invalid fields), never unwinding
//!
//! ```
//! use ambientsense_core::{EnvironmentMonitor, MonitorConfig, SensorPort};
//!
//! // Hardware goes behind the port trait; simulated here
//! struct FlatPort;
//! impl SensorPort for FlatPort {
//!     fn read_temperature_humidity(&mut self) -> (f32, f32) { (21.0, 40.0) }
//!     fn read_lux(&mut self) -> f32 { 120.0 }
//!     fn read_audio_sample(&mut self) -> u16 { 2000 }
//!     fn delay_us(&mut self, _us: u32) {}
//!     fn warm_up_ms(&mut self, _ms: u32) {}
//! }
//!
//! let mut monitor = EnvironmentMonitor::new(FlatPort, MonitorConfig::default(), 0);
//! monitor.begin();
//!
//! // Host loop: one tick per iteration, report when a snapshot lands
//! if monitor.tick(2000) {
//!     let snapshot = monitor.latest_snapshot();
//!     assert!(snapshot.temperature_valid);
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod audio;
pub mod channels;
pub mod constants;
pub mod errors;
pub mod light;
pub mod measure;
pub mod monitor;
pub mod scheduler;
pub mod snapshot;
pub mod time;
pub mod traits;
pub mod validators;

// Public API
pub use audio::{AudioEngine, AudioReading};
pub use channels::{heat_index_c, ClimateChannel, ClimateReading, LightChannel, LightReading};
pub use errors::{SensorError, SensorResult};
pub use light::LightCondition;
pub use measure::{ChannelState, Measurement};
pub use monitor::{BeginStatus, EnvironmentMonitor, MonitorConfig};
pub use scheduler::{Cadence, SamplingScheduler, TickDue};
pub use snapshot::TelemetrySnapshot;
pub use time::{Clock, FixedClock, Timestamp};
pub use traits::{SensorPort, Validatable, Validator};
pub use validators::{ClimateValidator, LightValidator};

#[cfg(feature = "std")]
pub use time::SystemClock;

/// Crate version string
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
