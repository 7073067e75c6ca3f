//! First-order RC low-pass
//!
//! G(s) = 1/(1+τs) with τ = R·C. Its impulse response is the decaying
//! exponential
//!
//!   h(t) = (1/τ)·exp(−t/τ),  t ≥ 0
//!
//! which integrates to one, so the channel has unity DC gain.

use super::ChannelResponse;
use crate::error::{Error, Result};

/// One-pole RC low-pass channel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RcLowPass {
    tau: f64,
}

impl RcLowPass {
    /// Create from a time constant
    ///
    /// # Errors
    /// `InvalidParameter` when τ is not a finite positive number
    pub fn new(time_constant: f64) -> Result<Self> {
        if !time_constant.is_finite() || time_constant <= 0.0 {
            return Err(Error::invalid(
                "time_constant",
                format!("must be finite and > 0, got {}", time_constant),
            ));
        }
        Ok(Self { tau: time_constant })
    }

    /// Create from resistance (Ω) and capacitance (F)
    pub fn from_rc(resistance: f64, capacitance: f64) -> Result<Self> {
        Self::new(resistance * capacitance)
    }

    /// -3 dB cutoff in cycles per time unit: 1/(2πτ)
    pub fn cutoff(&self) -> f64 {
        1.0 / (2.0 * std::f64::consts::PI * self.tau)
    }
}

impl ChannelResponse for RcLowPass {
    fn amplitude(&self, t: f64) -> f64 {
        if t < 0.0 {
            return 0.0;
        }
        (-t / self.tau).exp() / self.tau
    }

    fn time_constant(&self) -> f64 {
        self.tau
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_peak_at_zero() {
        for tau in [0.001, 0.1, 1.0, 2.0] {
            let rc = RcLowPass::new(tau).unwrap();
            assert!(
                (rc.amplitude(0.0) - 1.0 / tau).abs() < 1e-10 / tau,
                "h(0) should be 1/tau for tau={}",
                tau
            );
        }
    }

    #[test]
    fn test_monotonic_decay() {
        let rc = RcLowPass::new(0.25).unwrap();
        let grid = crate::nrz::time_grid(4, 50).unwrap();
        let ir = rc.sample(&grid).unwrap();

        for w in ir.amplitudes.windows(2) {
            assert!(w[1] <= w[0], "Response increased: {} -> {}", w[0], w[1]);
        }
    }

    #[test]
    fn test_causal() {
        let rc = RcLowPass::new(1.0).unwrap();
        assert_eq!(rc.amplitude(-0.5), 0.0);
    }

    #[test]
    fn test_unity_area() {
        // Riemann sum of h(t) over ~20 time constants
        let tau = 0.5;
        let rc = RcLowPass::new(tau).unwrap();
        let dt = 1e-4;
        let area: f64 = (0..100_000).map(|i| rc.amplitude(i as f64 * dt) * dt).sum();
        assert!((area - 1.0).abs() < 1e-3, "Area: {}", area);
    }

    #[test]
    fn test_from_rc() {
        let rc = RcLowPass::from_rc(1_000.0, 1e-4).unwrap();
        assert!((rc.time_constant() - 0.1).abs() < 1e-12);
        assert!(RcLowPass::from_rc(-1.0, 1e-6).is_err());
    }

    #[test]
    fn test_cutoff() {
        let rc = RcLowPass::new(1.0).unwrap();
        assert!((rc.cutoff() - 0.159_154_943).abs() < 1e-8);
    }
}
