//! Compass and level demo
//!
//! Synthesises a device slowly turning on a table while a constant gyro rate
//! tilts it forward, pushes the samples through a `SensorHub` and prints the
//! heading, pitch and roll a UI would display.
//!
//! Run with: `RUST_LOG=trace cargo run --example compass_level`

use baro_compass::{MotionVector3, SensorEvent, SensorHub};
use nalgebra::{Rotation3, Vector3};

const SAMPLE_PERIOD_NS: i64 = 20_000_000; // 50 Hz
const SAMPLES: i64 = 250;

fn main() {
    env_logger::init();

    let mut hub = SensorHub::new();
    let gravity = Vector3::new(0.0, 0.0, 9.81);
    let field = Vector3::new(0.0, 22.0, -42.0); // East-North-Up, µT

    // 0.05 rad/s forward tilt, integrated into pitch
    let gyroscope = MotionVector3::new(0.05, 0.0, 0.0);

    for i in 0..SAMPLES {
        let timestamp = i * SAMPLE_PERIOD_NS;
        let heading = i as f32 * 360.0 / SAMPLES as f32;

        // World-to-device rotation for a level device facing `heading`
        let to_device =
            Rotation3::from_axis_angle(&Vector3::z_axis(), -heading.to_radians()).inverse();

        hub.push(SensorEvent::Accelerometer(to_device * gravity));
        hub.push(SensorEvent::MagneticField(to_device * field));
        let readout = hub.push(SensorEvent::Gyroscope {
            rate: gyroscope,
            timestamp,
        });

        if i % 25 == 0 {
            println!(
                "Heading: {:>3}°  Pitch: {:>3}°  Roll: {:>3}°",
                readout.heading.round() as i32,
                readout.pitch.round() as i32,
                readout.roll.round() as i32
            );
        }
    }

    // Falling phone: gravity vanishes and the last heading is kept
    let readout = hub.push(SensorEvent::Accelerometer(MotionVector3::zeros()));
    println!("Free fall, heading held at {:.1}°", readout.heading);
}
