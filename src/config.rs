//! Scenario configuration
//!
//! Decoded from `%NrzIsi.Types.ScenarioParams{}` on the Elixir side.
//! Lengths are signed so that a bad value from the front end surfaces
//! as `InvalidParameter` instead of a decode failure.

use rustler::NifStruct;

use crate::error::{positive_len, Result};

/// Reference scenario: 20 bits
pub const DEFAULT_BIT_LENGTH: i64 = 20;

/// Reference scenario: 100 samples per bit
pub const DEFAULT_SAMPLES_PER_BIT: i64 = 100;

/// Lower end of the time-constant slider
pub const TAU_MIN: f64 = 0.001;

/// Upper end of the time-constant slider
pub const TAU_MAX: f64 = 2.0;

/// Parameters fixed for the lifetime of a scenario
#[derive(NifStruct, Debug, Clone, PartialEq)]
#[module = "NrzIsi.Types.ScenarioParams"]
pub struct ScenarioParams {
    pub bit_length: i64,
    pub samples_per_bit: i64,
    /// Replays the same bit pattern when set
    pub seed: Option<u64>,
}

impl Default for ScenarioParams {
    fn default() -> Self {
        Self {
            bit_length: DEFAULT_BIT_LENGTH,
            samples_per_bit: DEFAULT_SAMPLES_PER_BIT,
            seed: None,
        }
    }
}

impl ScenarioParams {
    /// Validated `(bit_length, samples_per_bit)`
    pub fn dimensions(&self) -> Result<(usize, usize)> {
        let bit_length = positive_len("bit_length", self.bit_length)?;
        let samples_per_bit = positive_len("samples_per_bit", self.samples_per_bit)?;
        Ok((bit_length, samples_per_bit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let params = ScenarioParams::default();
        assert_eq!(params.dimensions(), Ok((20, 100)));
        assert_eq!(params.seed, None);
    }

    #[test]
    fn test_dimensions_reject_non_positive() {
        let params = ScenarioParams {
            bit_length: 0,
            ..Default::default()
        };
        assert!(params.dimensions().is_err());

        let params = ScenarioParams {
            samples_per_bit: -1,
            ..Default::default()
        };
        assert!(params.dimensions().is_err());
    }
}
