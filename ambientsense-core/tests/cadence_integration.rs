//! Scheduler behavior observed through the full engine
//!
//! The cadence unit tests pin down the timer math; these tests confirm the
//! same behavior holds when real reads hang off each cadence, by counting
//! port transactions instead of inspecting the scheduler.

mod common;

use ambientsense_core::{EnvironmentMonitor, FixedClock, Clock, MonitorConfig};
use common::ScriptedPort;

/// Samples per audio burst (engine constant)
const BURST_LEN: u32 = 64;

#[test]
fn twenty_fast_fires_and_one_slow_fire_per_window() {
    let mut monitor =
        EnvironmentMonitor::new(ScriptedPort::healthy(), MonitorConfig::default(), 0);
    monitor.begin();

    let probe_reads = monitor.port_mut().audio_reads;
    let climate_probe_reads = monitor.port_mut().climate_reads;

    let mut clock = FixedClock::new(0);
    let mut snapshots = 0;
    for _ in 0..20 {
        clock.advance(100);
        if monitor.tick(clock.now()) {
            snapshots += 1;
        }
    }

    // 20 bursts on the fast cadence, exactly one snapshot on the slow one
    assert_eq!(monitor.port_mut().audio_reads - probe_reads, 20 * BURST_LEN);
    assert_eq!(snapshots, 1);
    assert_eq!(monitor.port_mut().climate_reads - climate_probe_reads, 1);
}

#[test]
fn coarse_polling_skips_fast_ticks_without_breaking_slow() {
    let mut monitor =
        EnvironmentMonitor::new(ScriptedPort::healthy(), MonitorConfig::default(), 0);
    monitor.begin();
    let probe_reads = monitor.port_mut().audio_reads;

    // Host only gets around to polling every 500 ms: the fast cadence
    // fires once per poll (no catch-up), the slow one still lands on time
    let mut snapshots = 0;
    for step in 1..=8 {
        if monitor.tick(step * 500) {
            snapshots += 1;
        }
    }

    assert_eq!(monitor.port_mut().audio_reads - probe_reads, 8 * BURST_LEN);
    assert_eq!(snapshots, 2);
}

#[test]
fn late_slow_tick_rearms_from_fire_time() {
    let mut monitor =
        EnvironmentMonitor::new(ScriptedPort::healthy(), MonitorConfig::default(), 0);
    monitor.begin();

    // Slow cadence due at 2000 but the host shows up at 2700
    assert!(monitor.tick(2700));
    assert_eq!(monitor.latest_snapshot().taken_at, 2700);

    // Rearmed at 2700, not at the ideal 4000 boundary
    assert!(!monitor.tick(4000));
    assert!(monitor.tick(4700));
}

#[test]
fn stalled_clock_fires_nothing() {
    let mut monitor =
        EnvironmentMonitor::new(ScriptedPort::healthy(), MonitorConfig::default(), 500);
    monitor.begin();
    let probe_reads = monitor.port_mut().audio_reads;

    for _ in 0..10 {
        assert!(!monitor.tick(500));
    }
    assert_eq!(monitor.port_mut().audio_reads, probe_reads);
}

#[test]
fn custom_intervals_flow_through_config() {
    let config = MonitorConfig {
        fast_interval_ms: 50,
        slow_interval_ms: 200,
        ..MonitorConfig::default()
    };
    let mut monitor = EnvironmentMonitor::new(ScriptedPort::healthy(), config, 0);
    monitor.begin();
    let probe_reads = monitor.port_mut().audio_reads;

    let mut snapshots = 0;
    for step in 1..=8 {
        if monitor.tick(step * 50) {
            snapshots += 1;
        }
    }

    assert_eq!(monitor.port_mut().audio_reads - probe_reads, 8 * BURST_LEN);
    assert_eq!(snapshots, 2);
}
