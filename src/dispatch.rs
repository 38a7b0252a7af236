//! Push interface routing typed sensor samples to the estimators
//!
//! The host calls [`SensorHub::push`] from whatever event loop delivers its
//! samples and reads a [`Readout`] back for display.
//!
//! # Example
//! ```
//! use baro_compass::{MotionVector3, SensorEvent, SensorHub};
//!
//! let mut hub = SensorHub::new();
//! hub.push(SensorEvent::Pressure(900.0));
//! hub.push(SensorEvent::Accelerometer(MotionVector3::new(0.0, 0.0, 9.81)));
//! let readout = hub.push(SensorEvent::MagneticField(MotionVector3::new(-22.0, 0.0, -42.0)));
//!
//! assert!((readout.altitude.unwrap().altitude - 988.6).abs() < 0.5);
//! assert!((readout.heading - 90.0).abs() < 1e-3);
//! ```

use crate::altitude::AltitudeEstimator;
use crate::orientation::OrientationEstimator;
use crate::source::PressureSource;
use crate::types::{AltitudeReading, MotionVector3};

/// A single typed sensor sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorEvent {
    /// Barometer reading in hPa
    Pressure(f32),
    /// Accelerometer reading, used as the gravity vector
    Accelerometer(MotionVector3),
    /// Magnetometer reading
    MagneticField(MotionVector3),
    /// Gyroscope rate in rad/s with its timestamp in nanoseconds
    Gyroscope { rate: MotionVector3, timestamp: i64 },
}

/// Latest derived values after an event
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Readout {
    /// Most recent altitude, `None` until a pressure sample arrives
    pub altitude: Option<AltitudeReading>,
    /// Compass heading in degrees within [0, 360)
    pub heading: f32,
    /// Gyro-integrated pitch in degrees
    pub pitch: f32,
    /// Gyro-integrated roll in degrees
    pub roll: f32,
}

/// Owns both estimators and keeps the latest outputs
///
/// Motion events recompute the heading right away; a degenerate
/// gravity/magnetic pair leaves the previous heading in place.
#[derive(Debug, Clone, Default)]
pub struct SensorHub {
    altitude: AltitudeEstimator,
    orientation: OrientationEstimator,
    latest_altitude: Option<AltitudeReading>,
}

impl SensorHub {
    /// Create a hub with default estimator settings
    pub fn new() -> Self {
        Self::with_estimators(AltitudeEstimator::new(), OrientationEstimator::new())
    }

    /// Create a hub around preconfigured estimators
    pub fn with_estimators(altitude: AltitudeEstimator, orientation: OrientationEstimator) -> Self {
        Self {
            altitude,
            orientation,
            latest_altitude: None,
        }
    }

    /// Route one event and return the updated readout
    pub fn push(&mut self, event: SensorEvent) -> Readout {
        match event {
            SensorEvent::Pressure(pressure) => {
                self.latest_altitude = Some(self.altitude.estimate(pressure));
            }
            SensorEvent::Accelerometer(gravity) => {
                self.orientation.update_gravity(gravity);
                self.orientation.recompute_heading();
            }
            SensorEvent::MagneticField(magnetic) => {
                self.orientation.update_magnetic_field(magnetic);
                self.orientation.recompute_heading();
            }
            SensorEvent::Gyroscope { rate, timestamp } => {
                self.orientation.update_gyro(rate, timestamp);
                self.orientation.recompute_heading();
            }
        }

        self.readout()
    }

    /// Feed up to `limit` pressure samples from `source`
    ///
    /// Stops early when the source runs dry. Returns the number consumed.
    pub fn drain_pressure(&mut self, source: &mut impl PressureSource, limit: usize) -> usize {
        let mut consumed = 0;
        while consumed < limit {
            let Some(pressure) = source.next_pressure() else {
                break;
            };
            self.push(SensorEvent::Pressure(pressure));
            consumed += 1;
        }

        log::debug!("consumed {} pressure samples", consumed);
        consumed
    }

    /// Current outputs without pushing anything
    pub fn readout(&self) -> Readout {
        Readout {
            altitude: self.latest_altitude,
            heading: self.orientation.heading(),
            pitch: self.orientation.pitch(),
            roll: self.orientation.roll(),
        }
    }

    /// Altitude estimator in use
    pub fn altitude_estimator(&self) -> &AltitudeEstimator {
        &self.altitude
    }

    /// Orientation estimator in use
    pub fn orientation_estimator(&self) -> &OrientationEstimator {
        &self.orientation
    }

    /// Mutable access, e.g. to reset the gyro baseline after a gap
    pub fn orientation_estimator_mut(&mut self) -> &mut OrientationEstimator {
        &mut self.orientation
    }
}
