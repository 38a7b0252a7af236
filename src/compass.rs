//! Tilt-compensated compass built from gravity and magnetic field readings

use crate::math::{RAD_TO_DEG, normalize_degrees};
use crate::types::{FusedAttitude, MotionVector3};
use nalgebra::Matrix3;

/// Build a device-to-world rotation matrix from gravity and magnetic field
///
/// Both vectors are in device coordinates. The rows of the returned matrix
/// are the world East, North and Up axes expressed in device coordinates:
///
/// - East = normalize(magnetic × gravity)
/// - Up = normalize(gravity)
/// - North = Up × East
///
/// Multiplying a device-frame vector by the matrix yields its world-frame
/// (East-North-Up) components.
///
/// # Arguments
/// * `gravity` - Accelerometer reading while (mostly) at rest
/// * `magnetic` - Magnetometer reading
/// * `threshold` - Minimum `|magnetic × gravity|` accepted
///
/// # Returns
/// `None` when the vectors cannot span a basis: either is zero, they are
/// parallel, the cross product magnitude falls below `threshold`, or it is
/// not finite.
///
/// # Example
/// ```
/// use baro_compass::{MotionVector3, compass::rotation_matrix};
///
/// let gravity = MotionVector3::new(0.0, 0.0, 9.81);
/// let magnetic = MotionVector3::new(0.0, 22.0, -42.0);
/// let rotation = rotation_matrix(gravity, magnetic, 0.1).unwrap();
///
/// // Device Y points north
/// let north = rotation * MotionVector3::new(0.0, 1.0, 0.0);
/// assert!((north.y - 1.0).abs() < 1e-6);
///
/// assert!(rotation_matrix(gravity, gravity, 0.1).is_none());
/// ```
pub fn rotation_matrix(
    gravity: MotionVector3,
    magnetic: MotionVector3,
    threshold: f32,
) -> Option<Matrix3<f32>> {
    let east = magnetic.cross(&gravity);
    let east_norm = east.norm();

    if !east_norm.is_finite() || east_norm < threshold || east_norm == 0.0 {
        log::trace!(
            "degenerate compass input: |m x g| = {} (threshold {})",
            east_norm,
            threshold
        );
        return None;
    }

    let gravity_norm = gravity.norm();
    if !(gravity_norm.is_finite() && gravity_norm > 0.0) {
        return None;
    }

    let east = east / east_norm;
    let up = gravity / gravity_norm;
    let north = up.cross(&east);

    Some(Matrix3::from_rows(&[
        east.transpose(),
        north.transpose(),
        up.transpose(),
    ]))
}

/// Extract azimuth, pitch and roll in radians from a rotation matrix
///
/// The matrix is expected in the layout produced by [`rotation_matrix`].
/// Azimuth is the heading of the device Y axis projected onto the horizontal
/// plane, measured from north towards east.
pub fn attitude_from_rotation(rotation: &Matrix3<f32>) -> FusedAttitude {
    FusedAttitude {
        azimuth: rotation[(0, 1)].atan2(rotation[(1, 1)]),
        pitch: (-rotation[(2, 1)]).clamp(-1.0, 1.0).asin(),
        roll: (-rotation[(2, 0)]).atan2(rotation[(2, 2)]),
    }
}

/// Calculate tilt-compensated magnetic heading
///
/// # Returns
/// Heading in degrees within [0, 360), 0 = magnetic north, 90 = east, or
/// `None` for degenerate input (see [`rotation_matrix`])
///
/// # Example
/// ```
/// use baro_compass::{MotionVector3, compass::calculate_heading};
///
/// let gravity = MotionVector3::new(0.0, 0.0, 9.81); // Level device
/// let magnetic = MotionVector3::new(-22.0, 0.0, -42.0); // North is to the left
/// let heading = calculate_heading(gravity, magnetic, 0.1).unwrap();
/// assert!((heading - 90.0).abs() < 1e-3); // Facing east
/// ```
pub fn calculate_heading(
    gravity: MotionVector3,
    magnetic: MotionVector3,
    threshold: f32,
) -> Option<f32> {
    let rotation = rotation_matrix(gravity, magnetic, threshold)?;
    let attitude = attitude_from_rotation(&rotation);

    Some(normalize_degrees(attitude.azimuth * RAD_TO_DEG))
}
