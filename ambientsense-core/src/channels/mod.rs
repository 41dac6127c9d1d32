//! Sensor channels
//!
//! A channel is a plain owned value type that drives one sensor through the
//! read -> validate -> fallback sequence against a [`SensorPort`]
//! implementation. Channels hold no driver handles and do no bus I/O of
//! their own; ownership is single and static, so there is nothing nullable
//! to check.
//!
//! Lifecycle per channel:
//!
//! 1. `begin(&mut port)`: one startup probe after warm-up. Decides whether
//!    the channel is live at all (see each channel for its exact rules).
//! 2. `read(&mut port)`: one acquisition attempt per scheduler tick. Valid
//!    readings overwrite the last-known-good value; invalid ones re-report
//!    it flagged stale. Never retries within the call.
//!
//! [`SensorPort`]: crate::traits::SensorPort

mod climate;
mod light;

pub use climate::{heat_index_c, ClimateChannel, ClimateReading};
pub use light::{LightChannel, LightReading};
