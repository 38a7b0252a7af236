//! Orientation estimation: compass heading plus gyro-integrated pitch/roll
//!
//! Heading comes from fusing the latest gravity and magnetic field vectors.
//! Pitch and roll come from open-loop integration of the gyroscope X and Y
//! rates; they drift without bound and nothing corrects them.

use crate::compass::{attitude_from_rotation, rotation_matrix};
use crate::math::{NANOS_TO_SECONDS, RAD_TO_DEG, normalize_degrees};
use crate::types::{FusedAttitude, MotionVector3, OrientationSettings, OrientationState, Readiness};

/// Heading and pitch/roll estimator
///
/// All updates take `&mut self`; share an instance across threads only
/// behind a lock or by confining it to one task.
///
/// # Example
/// ```
/// use baro_compass::{MotionVector3, OrientationEstimator};
///
/// let mut estimator = OrientationEstimator::new();
/// estimator.update_gravity(MotionVector3::new(0.0, 0.0, 9.81));
/// estimator.update_magnetic_field(MotionVector3::new(0.0, 22.0, -42.0));
///
/// let heading = estimator.recompute_heading().unwrap();
/// assert!(heading < 1e-3);
///
/// let rate = MotionVector3::new(core::f32::consts::PI / 180.0, 0.0, 0.0); // 1 deg/s
/// estimator.update_gyro(rate, 0);
/// estimator.update_gyro(rate, 1_000_000_000);
/// assert!((estimator.pitch() - 1.0).abs() < 1e-4);
/// ```
#[derive(Debug, Clone)]
pub struct OrientationEstimator {
    settings: OrientationSettings,
    gravity: MotionVector3,
    magnetic: MotionVector3,
    gravity_written: bool,
    magnetic_written: bool,
    state: OrientationState,
}

impl OrientationEstimator {
    /// Create an estimator with default settings
    pub fn new() -> Self {
        Self::with_settings(OrientationSettings::default())
    }

    /// Create an estimator with specified settings
    pub fn with_settings(settings: OrientationSettings) -> Self {
        Self {
            settings,
            gravity: MotionVector3::zeros(),
            magnetic: MotionVector3::zeros(),
            gravity_written: false,
            magnetic_written: false,
            state: OrientationState::default(),
        }
    }

    /// Get current settings
    pub fn settings(&self) -> OrientationSettings {
        self.settings
    }

    /// Replace current settings
    pub fn set_settings(&mut self, settings: OrientationSettings) {
        self.settings = settings;
    }

    /// Replace the stored gravity vector
    pub fn update_gravity(&mut self, gravity: MotionVector3) {
        self.gravity = gravity;
        self.gravity_written = true;
    }

    /// Replace the stored magnetic field vector
    pub fn update_magnetic_field(&mut self, magnetic: MotionVector3) {
        self.magnetic = magnetic;
        self.magnetic_written = true;
    }

    /// Integrate a gyroscope sample into pitch and roll
    ///
    /// The first sample after construction (or after
    /// [`reset_gyro_baseline`](Self::reset_gyro_baseline)) only records the
    /// time baseline. The Z (yaw) rate is ignored.
    ///
    /// # Arguments
    /// * `rate` - Angular rate in radians per second
    /// * `timestamp` - Monotonic sample time in nanoseconds
    pub fn update_gyro(&mut self, rate: MotionVector3, timestamp: i64) {
        let Some(last) = self.state.last_gyro_timestamp.replace(timestamp) else {
            log::trace!("gyro baseline at {} ns", timestamp);
            return;
        };

        let elapsed = timestamp.wrapping_sub(last);
        if elapsed < 0 {
            log::warn!(
                "gyro timestamp went backwards by {} ns, integrating anyway",
                elapsed.unsigned_abs()
            );
        }

        let delta_time = elapsed as f32 * NANOS_TO_SECONDS;
        self.state.pitch += rate.x * delta_time * RAD_TO_DEG;
        self.state.roll += rate.y * delta_time * RAD_TO_DEG;
    }

    /// Forget the gyro time baseline
    ///
    /// Use after a gap in the gyroscope stream. The next sample becomes the
    /// new baseline; accumulated pitch and roll are kept.
    pub fn reset_gyro_baseline(&mut self) {
        self.state.last_gyro_timestamp = None;
    }

    /// Recompute the heading from the stored gravity and magnetic vectors
    ///
    /// # Returns
    /// The new heading in degrees within [0, 360), or `None` if the vectors
    /// are degenerate or have not both been written. On `None` the previous
    /// heading is kept.
    pub fn recompute_heading(&mut self) -> Option<f32> {
        let attitude = self.fused_attitude()?;
        let heading = normalize_degrees(attitude.azimuth * RAD_TO_DEG);
        self.state.heading = heading;
        Some(heading)
    }

    /// Absolute attitude from the stored vectors, without touching state
    pub fn fused_attitude(&self) -> Option<FusedAttitude> {
        if !(self.gravity_written && self.magnetic_written) {
            return None;
        }

        let rotation = rotation_matrix(
            self.gravity,
            self.magnetic,
            self.settings.degenerate_threshold,
        )?;
        Some(attitude_from_rotation(&rotation))
    }

    /// Last successfully computed heading in degrees
    pub fn heading(&self) -> f32 {
        self.state.heading
    }

    /// Integrated pitch in degrees
    pub fn pitch(&self) -> f32 {
        self.state.pitch
    }

    /// Integrated roll in degrees
    pub fn roll(&self) -> f32 {
        self.state.roll
    }

    /// Snapshot of heading, pitch, roll and the gyro baseline
    pub fn state(&self) -> OrientationState {
        self.state
    }

    /// Last gravity vector written
    pub fn gravity(&self) -> MotionVector3 {
        self.gravity
    }

    /// Last magnetic field vector written
    pub fn magnetic_field(&self) -> MotionVector3 {
        self.magnetic
    }

    /// Which inputs have been received so far
    pub fn readiness(&self) -> Readiness {
        let has_baseline = self.state.last_gyro_timestamp.is_some();
        match (self.gravity_written, self.magnetic_written, has_baseline) {
            (true, true, true) => Readiness::Ready,
            (false, false, false) => Readiness::Uninitialized,
            _ => Readiness::PartiallyInitialized,
        }
    }
}

impl Default for OrientationEstimator {
    fn default() -> Self {
        Self::new()
    }
}
