//! Pressure sample sources
//!
//! Real sensor drivers, recorded data and the demo random walk all implement
//! [`PressureSource`], so estimators never care where samples come from.

use crate::types::STANDARD_SEA_LEVEL_PRESSURE;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

/// Largest change a simulated sample makes to the previous one, in hPa
pub const SIMULATED_STEP: f32 = 0.5;

/// Something that yields pressure samples in hPa
pub trait PressureSource {
    /// Next sample, or `None` once the source is exhausted
    fn next_pressure(&mut self) -> Option<f32>;
}

/// Any iterator of hPa samples is a source
impl<I: Iterator<Item = f32>> PressureSource for I {
    fn next_pressure(&mut self) -> Option<f32> {
        self.next()
    }
}

/// Random-walk pressure generator for demos and tests
///
/// Every call perturbs the current value by a uniform delta in
/// `[-SIMULATED_STEP, SIMULATED_STEP)`. The walk is unbounded and never ends.
///
/// # Example
/// ```
/// use baro_compass::source::{PressureSource, SimulatedPressure};
///
/// let mut source = SimulatedPressure::with_seed(1013.25, 7);
/// let sample = source.next_pressure().unwrap();
/// assert!((sample - 1013.25).abs() <= 0.5);
/// ```
#[derive(Debug, Clone)]
pub struct SimulatedPressure {
    rng: Pcg64,
    current: f32,
}

impl SimulatedPressure {
    /// Start a walk at `baseline` hPa seeded from the thread RNG
    pub fn new(baseline: f32) -> Self {
        Self {
            rng: Pcg64::from_rng(&mut rand::rng()),
            current: baseline,
        }
    }

    /// Start a reproducible walk at `baseline` hPa
    pub fn with_seed(baseline: f32, seed: u64) -> Self {
        Self {
            rng: Pcg64::seed_from_u64(seed),
            current: baseline,
        }
    }

    /// Value returned by the most recent call (or the baseline)
    pub fn current(&self) -> f32 {
        self.current
    }
}

impl Default for SimulatedPressure {
    fn default() -> Self {
        Self::new(STANDARD_SEA_LEVEL_PRESSURE)
    }
}

impl PressureSource for SimulatedPressure {
    fn next_pressure(&mut self) -> Option<f32> {
        self.current += self.rng.random_range(-SIMULATED_STEP..SIMULATED_STEP);
        Some(self.current)
    }
}

/// Replays recorded samples in order
#[derive(Debug, Clone)]
pub struct ReplayPressure {
    samples: std::vec::IntoIter<f32>,
}

impl ReplayPressure {
    /// Queue `samples` for replay
    pub fn new(samples: impl IntoIterator<Item = f32>) -> Self {
        Self {
            samples: samples.into_iter().collect::<Vec<_>>().into_iter(),
        }
    }

    /// Samples not yet replayed
    pub fn remaining(&self) -> usize {
        self.samples.len()
    }
}

impl PressureSource for ReplayPressure {
    fn next_pressure(&mut self) -> Option<f32> {
        self.samples.next()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulated_steps_are_bounded() {
        let mut source = SimulatedPressure::with_seed(1013.25, 42);
        let mut previous = source.current();

        for _ in 0..1_000 {
            let sample = source.next_pressure().unwrap();
            assert!(
                (sample - previous).abs() <= SIMULATED_STEP + 1e-3,
                "step {} -> {}",
                previous,
                sample
            );
            previous = sample;
        }
    }

    #[test]
    fn test_simulated_seed_is_reproducible() {
        let mut a = SimulatedPressure::with_seed(900.0, 3);
        let mut b = SimulatedPressure::with_seed(900.0, 3);

        for _ in 0..50 {
            assert_eq!(a.next_pressure(), b.next_pressure());
        }
    }

    #[test]
    fn test_simulated_default_starts_at_sea_level() {
        let source = SimulatedPressure::default();
        assert_eq!(source.current(), STANDARD_SEA_LEVEL_PRESSURE);
    }

    #[test]
    fn test_iterator_as_source() {
        let mut source = (0..3).map(|i| 1000.0 - i as f32 * 10.0);
        assert_eq!(source.next_pressure(), Some(1000.0));
        assert_eq!(source.next_pressure(), Some(990.0));
        assert_eq!(source.next_pressure(), Some(980.0));
        assert_eq!(source.next_pressure(), None);
    }

    #[test]
    fn test_replay_in_order() {
        let mut source = ReplayPressure::new([1000.0, 990.0, 980.0]);
        assert_eq!(source.remaining(), 3);
        assert_eq!(source.next_pressure(), Some(1000.0));
        assert_eq!(source.next_pressure(), Some(990.0));
        assert_eq!(source.next_pressure(), Some(980.0));
        assert_eq!(source.next_pressure(), None);
        assert_eq!(source.remaining(), 0);
    }
}
