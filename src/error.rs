//! Error type for the validating entry points

use thiserror::Error;

/// Input rejected by a `try_*` function
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum Error {
    #[error("pressure must be finite and positive, got {0} hPa")]
    InvalidPressure(f32),
    #[error("sea-level reference must be finite and positive, got {0} hPa")]
    InvalidSeaLevel(f32),
}

pub type Result<T> = core::result::Result<T, Error>;
