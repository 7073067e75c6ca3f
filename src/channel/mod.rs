//! Channel model
//!
//! A channel is characterized by its continuous-time impulse response.
//! The response is sampled on the caller's time grid; closed forms are
//! evaluated directly, so the returned times are the input grid unchanged.

mod rc;

pub use rc::RcLowPass;

use crate::error::{Error, Result};

/// Continuous-time impulse response of a linear time-invariant channel
pub trait ChannelResponse: Send + Sync {
    /// Amplitude of h(t); zero for t < 0 (causal)
    fn amplitude(&self, t: f64) -> f64;

    /// Dominant time constant in time units
    fn time_constant(&self) -> f64;

    /// Sample the response at every point of `time_grid`
    fn sample(&self, time_grid: &[f64]) -> Result<ImpulseResponse> {
        if time_grid.is_empty() {
            return Err(Error::invalid("time_grid", "must not be empty"));
        }

        let amplitudes = time_grid.iter().map(|&t| self.amplitude(t)).collect();
        Ok(ImpulseResponse {
            times: time_grid.to_vec(),
            amplitudes,
        })
    }
}

/// Sampled impulse response
///
/// `times` is the grid the response was evaluated on. Later stages align
/// their x-axis to it rather than to the grid they originally passed in.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpulseResponse {
    pub times: Vec<f64>,
    pub amplitudes: Vec<f64>,
}

impl ImpulseResponse {
    pub fn len(&self) -> usize {
        self.amplitudes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amplitudes.is_empty()
    }
}

/// Impulse response of 1/(1+τs) sampled on `time_grid`
pub fn impulse_response(time_constant: f64, time_grid: &[f64]) -> Result<ImpulseResponse> {
    RcLowPass::new(time_constant)?.sample(time_grid)
}
