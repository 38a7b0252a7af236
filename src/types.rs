//! Core types and settings for the baro-compass library

use core::fmt;
use nalgebra::Vector3;

/// Three-axis sensor reading (gravity, magnetic field or angular rate)
///
/// Units follow whatever the producing sensor reports; the fusion math only
/// depends on directions, and the gyroscope integration expects rad/s.
pub type MotionVector3 = Vector3<f32>;

/// Standard sea-level reference pressure in hectopascals
pub const STANDARD_SEA_LEVEL_PRESSURE: f32 = 1013.25;

/// Altitude at which the display factor saturates, in meters
pub const DEFAULT_MAX_ALTITUDE: f32 = 10_000.0;

/// Minimum magnitude of `magnetic × gravity` accepted by the compass
pub const DEFAULT_DEGENERATE_THRESHOLD: f32 = 0.1;

/// Altitude estimator settings
///
/// # Example
/// ```
/// use baro_compass::{AltitudeEstimator, AltitudeSettings};
///
/// let settings = AltitudeSettings {
///     sea_level_pressure: 1020.0, // today's QNH
///     ..Default::default()
/// };
/// let estimator = AltitudeEstimator::with_settings(settings);
/// assert!(estimator.estimate(1020.0).altitude.abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeSettings {
    /// Reference pressure at altitude zero, in hectopascals
    pub sea_level_pressure: f32,
    /// Altitude in meters mapped to a display factor of 1.0
    pub max_altitude: f32,
}

impl Default for AltitudeSettings {
    fn default() -> Self {
        Self {
            sea_level_pressure: STANDARD_SEA_LEVEL_PRESSURE,
            max_altitude: DEFAULT_MAX_ALTITUDE,
        }
    }
}

/// Orientation estimator settings
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationSettings {
    /// Smallest `|magnetic × gravity|` that still yields a heading
    ///
    /// Below this the two vectors are treated as parallel (free fall, or the
    /// device sits close to a magnetic pole) and no heading is produced.
    /// The magnitude is in raw sensor units, so scale it with them.
    pub degenerate_threshold: f32,
}

impl Default for OrientationSettings {
    fn default() -> Self {
        Self {
            degenerate_threshold: DEFAULT_DEGENERATE_THRESHOLD,
        }
    }
}

/// Altitude derived from a single pressure sample
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeReading {
    /// Altitude above the reference pressure level in meters
    pub altitude: f32,
    /// Altitude scaled into [0, 1] for display
    pub display_factor: f32,
}

impl fmt::Display for AltitudeReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} m", self.altitude)
    }
}

/// Snapshot of the orientation estimator state
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrientationState {
    /// Compass heading in degrees, always within [0, 360)
    pub heading: f32,
    /// Gyro-integrated pitch in degrees (unbounded, drifts)
    pub pitch: f32,
    /// Gyro-integrated roll in degrees (unbounded, drifts)
    pub roll: f32,
    /// Timestamp of the last gyroscope sample in nanoseconds
    pub last_gyro_timestamp: Option<i64>,
}

/// Absolute attitude extracted from a gravity/magnetic rotation matrix
///
/// All angles are in radians. `azimuth` is in [-π, π].
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FusedAttitude {
    /// Rotation about the vertical axis, 0 = magnetic north, positive east
    pub azimuth: f32,
    /// Rotation about the device X axis
    pub pitch: f32,
    /// Rotation about the device Y axis
    pub roll: f32,
}

/// How much input the orientation estimator has received so far
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// Nothing written yet
    Uninitialized,
    /// Some but not all of gravity, magnetic field and gyro baseline
    PartiallyInitialized,
    /// Both vectors written and a gyro baseline recorded
    Ready,
}
