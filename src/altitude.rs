//! Barometric altitude estimation
//!
//! Converts pressure samples to altitude with the international barometric
//! formula and scales the result into a display factor.
//!
//! # Example
//! ```
//! use baro_compass::altitude::{compute_altitude, compute_display_factor, gray_level};
//!
//! let altitude = compute_altitude(900.0, 1013.25);
//! assert!((altitude - 988.6).abs() < 0.5);
//!
//! let factor = compute_display_factor(altitude, 10_000.0);
//! assert_eq!(gray_level(factor), 230);
//! ```

use crate::error::{Error, Result};
use crate::types::{AltitudeReading, AltitudeSettings};

/// Altitude scale of the barometric formula in meters
const ALTITUDE_SCALE: f32 = 44_330.0;

/// Exponent of the barometric formula (1 / 5.255)
const PRESSURE_EXPONENT: f32 = 1.0 / 5.255;

/// Convert a pressure reading to altitude
///
/// `altitude = 44330 * (1 - (pressure / sea_level)^(1/5.255))`
///
/// No validation is performed: zero, negative or non-finite inputs propagate
/// NaN or infinities to the caller. Use [`try_compute_altitude`] to reject
/// them instead.
///
/// # Arguments
/// * `pressure` - Measured pressure in hPa
/// * `sea_level` - Reference pressure at altitude zero in hPa
///
/// # Returns
/// Altitude in meters above the reference level
pub fn compute_altitude(pressure: f32, sea_level: f32) -> f32 {
    ALTITUDE_SCALE * (1.0 - (pressure / sea_level).powf(PRESSURE_EXPONENT))
}

/// Validating variant of [`compute_altitude`]
///
/// Both pressures must be finite and strictly positive.
///
/// # Example
/// ```
/// use baro_compass::{Error, altitude::try_compute_altitude};
///
/// assert!(try_compute_altitude(1013.25, 1013.25).is_ok());
/// assert_eq!(try_compute_altitude(0.0, 1013.25), Err(Error::InvalidPressure(0.0)));
/// ```
pub fn try_compute_altitude(pressure: f32, sea_level: f32) -> Result<f32> {
    if !is_valid_pressure(pressure) {
        return Err(Error::InvalidPressure(pressure));
    }
    if !is_valid_pressure(sea_level) {
        return Err(Error::InvalidSeaLevel(sea_level));
    }

    Ok(compute_altitude(pressure, sea_level))
}

/// Scale altitude into [0, 1] relative to `max_altitude`
///
/// Negative altitudes map to 0, anything at or above `max_altitude` to 1.
/// A NaN ratio maps to 0.
pub fn compute_display_factor(altitude: f32, max_altitude: f32) -> f32 {
    let factor = altitude / max_altitude;
    if factor.is_nan() {
        return 0.0;
    }

    factor.clamp(0.0, 1.0)
}

/// Grayscale intensity for a display factor
///
/// White (255) at sea level, darkening to black (0) at the maximum altitude.
pub fn gray_level(display_factor: f32) -> u8 {
    (255.0 * (1.0 - display_factor)).round().clamp(0.0, 255.0) as u8
}

fn is_valid_pressure(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

/// Altitude estimator bound to a reference pressure and display range
///
/// Holds no state besides its settings; every call is independent.
#[derive(Debug, Clone, Copy, Default)]
pub struct AltitudeEstimator {
    settings: AltitudeSettings,
}

impl AltitudeEstimator {
    /// Create an estimator with the standard sea-level reference
    pub fn new() -> Self {
        Self::with_settings(AltitudeSettings::default())
    }

    /// Create an estimator with specified settings
    pub fn with_settings(settings: AltitudeSettings) -> Self {
        Self { settings }
    }

    /// Get current settings
    pub fn settings(&self) -> AltitudeSettings {
        self.settings
    }

    /// Replace current settings
    pub fn set_settings(&mut self, settings: AltitudeSettings) {
        log::debug!(
            "altitude reference {} hPa, display range {} m",
            settings.sea_level_pressure,
            settings.max_altitude
        );
        self.settings = settings;
    }

    /// Derive altitude and display factor from a pressure sample in hPa
    pub fn estimate(&self, pressure: f32) -> AltitudeReading {
        let altitude = compute_altitude(pressure, self.settings.sea_level_pressure);
        self.reading(altitude)
    }

    /// Like [`estimate`](Self::estimate) but rejects out-of-domain pressure
    pub fn try_estimate(&self, pressure: f32) -> Result<AltitudeReading> {
        let altitude = try_compute_altitude(pressure, self.settings.sea_level_pressure)?;
        Ok(self.reading(altitude))
    }

    fn reading(&self, altitude: f32) -> AltitudeReading {
        AltitudeReading {
            altitude,
            display_factor: compute_display_factor(altitude, self.settings.max_altitude),
        }
    }
}
