//! Angle constants and helpers

/// Mathematical constants
pub const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;
pub const RAD_TO_DEG: f32 = 180.0 / core::f32::consts::PI;

/// Nanoseconds to seconds
pub const NANOS_TO_SECONDS: f32 = 1e-9;

/// Fold an angle in degrees into [0, 360)
///
/// Applies `(degrees + 360) % 360`, which covers any input from -360 up.
/// Anything further out is reduced with `rem_euclid` first. The final clamp
/// handles `-tiny + 360` rounding to exactly 360 in f32.
pub fn normalize_degrees(degrees: f32) -> f32 {
    let folded = if degrees >= -360.0 {
        (degrees + 360.0) % 360.0
    } else {
        degrees.rem_euclid(360.0)
    };

    if folded >= 360.0 { 0.0 } else { folded }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert!((90.0 * DEG_TO_RAD - core::f32::consts::FRAC_PI_2).abs() < 1e-6);
        assert!((core::f32::consts::PI * RAD_TO_DEG - 180.0).abs() < 1e-4);
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(180.0), 180.0);
        assert_eq!(normalize_degrees(-180.0), 180.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert!((normalize_degrees(-725.0) - 355.0).abs() < 1e-4);
    }

    #[test]
    fn test_normalize_degrees_tiny_negative() {
        let heading = normalize_degrees(-1e-6);
        assert!((0.0..360.0).contains(&heading));
    }
}
