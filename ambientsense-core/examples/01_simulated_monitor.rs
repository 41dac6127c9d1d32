//! Simulated Monitor Example
//!
//! Runs the full acquisition engine against a simulated sensor port: a
//! slowly drifting climate, a lamp that switches on partway through, a
//! noisy microphone, and an occasional failed sensor transaction.
//!
//! ## What You'll Learn
//!
//! - Implementing `SensorPort` for your hardware (or a simulation)
//! - Driving `EnvironmentMonitor` from a host loop
//! - Reading validity flags to tell fresh data from stale
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_simulated_monitor
//! ```

use ambientsense_core::{EnvironmentMonitor, MonitorConfig, SensorPort};

/// Deterministic simulated hardware.
///
/// A small linear congruential generator stands in for electrical noise so
/// runs are reproducible without pulling in a random number crate.
struct SimulatedPort {
    rng: u32,
    climate_reads: u32,
}

impl SimulatedPort {
    fn new() -> Self {
        Self { rng: 0x2f6e2b1, climate_reads: 0 }
    }

    fn next_noise(&mut self, spread: u32) -> u32 {
        self.rng = self.rng.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        (self.rng >> 16) % spread
    }
}

impl SensorPort for SimulatedPort {
    fn read_temperature_humidity(&mut self) -> (f32, f32) {
        self.climate_reads += 1;

        // Every sixth transaction glitches, like a real single-wire sensor
        if self.climate_reads % 6 == 0 {
            return (f32::NAN, f32::NAN);
        }

        let drift = self.climate_reads as f32 * 0.1;
        (21.0 + drift, 42.0 + drift / 2.0)
    }

    fn read_lux(&mut self) -> f32 {
        // Lamp switches on after the fourth snapshot
        if self.climate_reads > 4 { 320.0 } else { 8.0 }
    }

    fn read_audio_sample(&mut self) -> u16 {
        1800 + self.next_noise(260) as u16
    }

    fn delay_us(&mut self, _us: u32) {}

    fn warm_up_ms(&mut self, _ms: u32) {}
}

fn main() {
    println!("AmbientSense Simulated Monitor");
    println!("==============================\n");

    let mut monitor = EnvironmentMonitor::new(SimulatedPort::new(), MonitorConfig::default(), 0);

    let status = monitor.begin();
    println!("Startup: climate={} light={} audio={}\n",
        status.climate_ok, status.light_ok, status.audio_ok);

    // Host loop with simulated time: poll every 100 ms for 16 seconds
    let mut now = 0u64;
    while now < 16_000 {
        now += 100;

        if monitor.tick(now) {
            let snap = monitor.latest_snapshot();
            let staleness = if snap.temperature_valid { "fresh" } else { "stale" };

            println!(
                "t={:5}ms  {:5.1}°C {:5.1}% ({})  feels {:4.1}°C  {:6.1} lx [{}]  audio level {:3} peak {:3} avg {:3}",
                snap.taken_at,
                snap.temperature,
                snap.humidity,
                staleness,
                snap.heat_index,
                snap.lux,
                snap.light_condition,
                snap.audio_level,
                snap.audio_peak,
                snap.audio_average,
            );
        }
    }

    println!("\n{}", "=".repeat(60));
    println!("Key Insights:");
    println!("- Glitched transactions re-report the last good pair, flagged stale");
    println!("- The lux band flips from Dark to Bright when the lamp comes on");
    println!("- Audio peak/average cover one reporting window, then reset");
}
