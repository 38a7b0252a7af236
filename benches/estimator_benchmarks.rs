use baro_compass::{
    AltitudeEstimator, MotionVector3, OrientationEstimator, SensorEvent, SensorHub,
    compass::rotation_matrix,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rand::prelude::*;
use rand_pcg::Pcg64;
use std::f32::consts::PI;

// Pre-generated sensor data to keep RNG cost out of the measurements
struct PreGeneratedData {
    samples: Vec<(MotionVector3, MotionVector3, MotionVector3)>,
    index: usize,
}

impl PreGeneratedData {
    fn new(count: usize, seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        let mut samples = Vec::with_capacity(count);

        for i in 0..count {
            let time = i as f32 * 0.02; // 50Hz, SENSOR_DELAY_GAME-like
            let motion_phase = time * 0.5 * 2.0 * PI;

            let gyroscope = MotionVector3::new(
                0.2 * motion_phase.sin() + rng.random_range(-0.01..0.01),
                0.2 * (motion_phase * 1.3).cos() + rng.random_range(-0.01..0.01),
                0.2 * (motion_phase * 0.7).sin() + rng.random_range(-0.01..0.01),
            );

            let accelerometer = MotionVector3::new(
                -0.9 * motion_phase.sin() + rng.random_range(-0.02..0.02),
                0.9 * motion_phase.cos() + rng.random_range(-0.02..0.02),
                9.81 + rng.random_range(-0.02..0.02),
            );

            let magnetometer = MotionVector3::new(
                3.0 * motion_phase.cos() + rng.random_range(-0.5..0.5),
                22.0 + rng.random_range(-0.5..0.5),
                -42.0 + rng.random_range(-0.5..0.5),
            );

            samples.push((gyroscope, accelerometer, magnetometer));
        }

        Self { samples, index: 0 }
    }

    fn next(&mut self) -> (MotionVector3, MotionVector3, MotionVector3) {
        let sample = self.samples[self.index];
        self.index = (self.index + 1) % self.samples.len();
        sample
    }
}

fn bench_altitude(c: &mut Criterion) {
    let estimator = AltitudeEstimator::new();

    c.bench_function("altitude_estimate", |b| {
        b.iter(|| estimator.estimate(black_box(900.0)))
    });
}

fn bench_rotation_matrix(c: &mut Criterion) {
    let gravity = MotionVector3::new(0.3, -0.2, 9.8);
    let magnetic = MotionVector3::new(4.0, 22.0, -42.0);

    c.bench_function("rotation_matrix", |b| {
        b.iter(|| rotation_matrix(black_box(gravity), black_box(magnetic), black_box(0.1)))
    });
}

fn bench_orientation_update(c: &mut Criterion) {
    let mut data = PreGeneratedData::new(1000, 42);
    let mut estimator = OrientationEstimator::new();
    let mut timestamp = 0i64;

    c.bench_function("orientation_full_update", |b| {
        b.iter(|| {
            let (gyroscope, accelerometer, magnetometer) = data.next();
            timestamp += 20_000_000;
            estimator.update_gravity(black_box(accelerometer));
            estimator.update_magnetic_field(black_box(magnetometer));
            estimator.update_gyro(black_box(gyroscope), timestamp);
            estimator.recompute_heading()
        })
    });
}

fn bench_hub_push(c: &mut Criterion) {
    let mut data = PreGeneratedData::new(1000, 7);
    let mut hub = SensorHub::new();
    let mut timestamp = 0i64;

    c.bench_function("hub_push_motion", |b| {
        b.iter(|| {
            let (gyroscope, accelerometer, magnetometer) = data.next();
            timestamp += 20_000_000;
            hub.push(SensorEvent::Accelerometer(accelerometer));
            hub.push(SensorEvent::MagneticField(magnetometer));
            hub.push(black_box(SensorEvent::Gyroscope {
                rate: gyroscope,
                timestamp,
            }))
        })
    });
}

criterion_group!(
    benches,
    bench_altitude,
    bench_rotation_matrix,
    bench_orientation_update,
    bench_hub_push
);
criterion_main!(benches);
