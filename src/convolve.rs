//! Convolution stage
//!
//! Full linear convolution y[n] = Σ_k h[k]·x[n−k] of length
//! len(x) + len(h) − 1, followed by peak normalization. Direct form:
//! no windowing, truncation or circular wraparound.

use crate::error::{Error, Result};
use crate::nrz;

/// Full linear convolution of `signal` with `response`
pub fn convolve(signal: &[f64], response: &[f64]) -> Result<Vec<f64>> {
    if signal.is_empty() {
        return Err(Error::invalid("signal", "must not be empty"));
    }
    if response.is_empty() {
        return Err(Error::invalid("response", "must not be empty"));
    }

    let mut output = vec![0.0; signal.len() + response.len() - 1];
    for (i, &x) in signal.iter().enumerate() {
        for (k, &h) in response.iter().enumerate() {
            output[i + k] += h * x;
        }
    }
    Ok(output)
}

/// Scale `samples` so the largest magnitude is 1
///
/// An all-zero slice is left untouched.
pub fn normalize_peak(samples: &mut [f64]) {
    let peak = samples.iter().fold(0.0_f64, |m, &s| m.max(s.abs()));
    if peak > 0.0 {
        for s in samples.iter_mut() {
            *s /= peak;
        }
    }
}

/// Convolve and normalize to unit peak magnitude
pub fn convolve_and_normalize(signal: &[f64], response: &[f64]) -> Result<Vec<f64>> {
    let mut output = convolve(signal, response)?;
    normalize_peak(&mut output);
    Ok(output)
}

/// X-axis for a convolution output of `len` samples
pub fn convolution_times(len: usize, samples_per_bit: usize) -> Result<Vec<f64>> {
    nrz::check_samples_per_bit(samples_per_bit)?;
    Ok(nrz::sample_times(len, samples_per_bit))
}

/// X-axis for a convolution output of `len` samples, aligned to `times`
///
/// The first `times.len()` points are `times` itself; later points continue
/// at the mean spacing of `times`. A single-point grid falls back to a step
/// of `1 / samples_per_bit`.
pub fn extend_times(times: &[f64], len: usize, samples_per_bit: usize) -> Result<Vec<f64>> {
    nrz::check_samples_per_bit(samples_per_bit)?;
    let (&first, &last) = match (times.first(), times.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(Error::invalid("times", "must not be empty")),
    };

    let step = if times.len() > 1 {
        (last - first) / (times.len() - 1) as f64
    } else {
        1.0 / samples_per_bit as f64
    };

    Ok((0..len)
        .map(|n| times.get(n).copied().unwrap_or(first + n as f64 * step))
        .collect())
}
