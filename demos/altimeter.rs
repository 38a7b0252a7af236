//! Altimeter demo
//!
//! Feeds a simulated barometer through the altitude estimator and prints the
//! altitude together with the background gray level a UI would use.
//!
//! Run with: `RUST_LOG=debug cargo run --example altimeter`

use baro_compass::{
    AltitudeEstimator, AltitudeSettings, PressureSource, SimulatedPressure, gray_level,
};
use std::error::Error;

const SAMPLES: usize = 10;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let mut estimator = AltitudeEstimator::new();
    estimator.set_settings(AltitudeSettings {
        max_altitude: 10_000.0,
        ..estimator.settings()
    });

    let mut source = SimulatedPressure::default();

    for _ in 0..SAMPLES {
        let Some(pressure) = source.next_pressure() else {
            break;
        };

        let reading = estimator.try_estimate(pressure)?;
        let gray = gray_level(reading.display_factor);

        println!(
            "{:8.2} hPa -> {} (background rgb({gray}, {gray}, {gray}))",
            pressure, reading
        );
    }

    // A climb: 20 hPa less every step
    println!("\nClimbing:");
    for step in 0..6 {
        let pressure = 1013.25 - step as f32 * 20.0;
        let reading = estimator.estimate(pressure);
        println!(
            "{:8.2} hPa -> {:>10}  factor {:.3}",
            pressure,
            reading.to_string(),
            reading.display_factor
        );
    }

    Ok(())
}
