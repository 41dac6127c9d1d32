//! Channel Subset Example
//!
//! One parameterized core covers every deployment shape: full environmental
//! station, thermostat-style climate-only node, or a quiet variant with the
//! microphone left out. This example runs the same port against three
//! configurations and shows what each one reports.
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 02_channel_subsets
//! ```

use ambientsense_core::{EnvironmentMonitor, MonitorConfig, SensorPort, TelemetrySnapshot};

#[derive(Default)]
struct BenchPort {
    flip: bool,
}

impl SensorPort for BenchPort {
    fn read_temperature_humidity(&mut self) -> (f32, f32) {
        (23.4, 38.0)
    }

    fn read_lux(&mut self) -> f32 {
        450.0
    }

    fn read_audio_sample(&mut self) -> u16 {
        // Square wave well above the noise floor
        self.flip = !self.flip;
        if self.flip { 2200 } else { 1900 }
    }

    fn delay_us(&mut self, _us: u32) {}

    fn warm_up_ms(&mut self, _ms: u32) {}
}

fn run(name: &str, config: MonitorConfig) -> TelemetrySnapshot {
    let mut monitor = EnvironmentMonitor::new(BenchPort::default(), config, 0);
    monitor.begin();

    for step in 1..=20 {
        monitor.tick(step * 100);
    }

    let snap = monitor.latest_snapshot();
    println!(
        "{name:<16} temp={:5.1}°C ({}) lux={:6.1} ({}) audio peak={}",
        snap.temperature,
        if snap.temperature_valid { "on" } else { "off" },
        snap.lux,
        if snap.light_valid { "on" } else { "off" },
        snap.audio_peak,
    );
    snap
}

fn main() {
    println!("AmbientSense Channel Subsets");
    println!("============================\n");

    run("full station", MonitorConfig::default());
    run("climate only", MonitorConfig::climate_only());
    run("without audio", MonitorConfig::without_audio());

    println!("\nDisabled channels stay at their cold-start zeros with");
    println!("validity off; consumers cannot mistake them for real data.");
}
