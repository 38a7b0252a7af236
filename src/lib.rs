//! Baro Compass - altitude, heading and tilt from phone-style sensors
//!
//! Turns raw sensor samples into a few derived quantities:
//!
//! - Barometric altitude from pressure, plus a display factor in [0, 1]
//! - Tilt-compensated compass heading fused from gravity and magnetic field
//! - Pitch and roll from open-loop gyroscope integration
//!
//! The two estimators are independent. The host pushes samples in, either
//! directly or through [`SensorHub`], and renders whatever comes out.
//!
//! # Quick Start
//!
//! ```rust
//! use baro_compass::{AltitudeEstimator, MotionVector3, OrientationEstimator};
//!
//! let altimeter = AltitudeEstimator::new();
//! let reading = altimeter.estimate(900.0); // hPa
//! println!("{reading}"); // "988.64 m"
//!
//! let mut orientation = OrientationEstimator::new();
//! orientation.update_gravity(MotionVector3::new(0.0, 0.0, 9.81));
//! orientation.update_magnetic_field(MotionVector3::new(0.0, 22.0, -42.0));
//!
//! if let Some(heading) = orientation.recompute_heading() {
//!     println!("Heading: {heading:.0}°");
//! }
//! ```
//!
//! # Limitations
//!
//! Pitch and roll are integrated without any absolute reference and drift
//! without bound. Headings pair whatever gravity and magnetic vectors were
//! written last, however stale.

pub mod altitude;
pub mod compass;
pub mod dispatch;
mod error;
mod math;
pub mod orientation;
pub mod source;
mod types;

pub use altitude::{AltitudeEstimator, compute_altitude, compute_display_factor, gray_level};
pub use compass::calculate_heading;
pub use dispatch::{Readout, SensorEvent, SensorHub};
pub use error::{Error, Result};
pub use math::{DEG_TO_RAD, RAD_TO_DEG, normalize_degrees};
pub use orientation::OrientationEstimator;
pub use source::{PressureSource, ReplayPressure, SimulatedPressure};
pub use types::*;
