//! Dumps panel snapshot JSON contracts for a synthetic dataset.
//!
//! Useful for eyeballing axis-range and tick decisions without a drawing
//! backend, and for refreshing differential fixtures.

use chrono::{Duration, TimeZone, Utc};
use meteogram::api::{
    PanelSeries, humidity_panel, precipitation_panel, snapshot_panel, temperature_panel,
    wind_panel,
};
use meteogram::render::SurfaceSpec;
use meteogram::telemetry::init_default_tracing;

fn main() {
    let _ = init_default_tracing();

    let start = Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap();
    let timestamps: Vec<_> = (0..48).map(|h| start + Duration::hours(h)).collect();

    let temp: Vec<f64> = (0..48)
        .map(|h| 14.0 + 8.0 * ((h as f64) * std::f64::consts::TAU / 24.0).sin())
        .collect();
    let precip: Vec<f64> = (0..48)
        .map(|h| if h % 11 == 0 { 0.01 } else { 0.0 })
        .collect();
    let wind: Vec<f64> = (0..48).map(|h| 6.0 + (h % 7) as f64).collect();
    let rh: Vec<f64> = (0..48).map(|h| 45.0 + (h % 13) as f64).collect();

    let spec = SurfaceSpec::new(640.0, 220.0, 2.0);
    let panels = [
        ("temperature", &temp, temperature_panel()),
        (
            "precipitation",
            &precip,
            precipitation_panel(precip.iter().copied().fold(0.0, f64::max)),
        ),
        ("wind", &wind, wind_panel()),
        ("humidity", &rh, humidity_panel()),
    ];

    for (name, values, options) in panels {
        let snapshot = snapshot_panel(spec, PanelSeries::new(&timestamps, values), &options);
        let json = snapshot
            .to_json_contract_v1_pretty()
            .expect("snapshot serializes");
        println!("--- {name} ---");
        println!("{json}");
    }
}
