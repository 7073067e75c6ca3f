//! NRZ modulator
//!
//! Zero-order hold: every bit is held for `samples_per_bit` samples.
//! One bit period is one time unit, so sample `i` sits at `i / samples_per_bit`.

use crate::error::{Error, Result};

/// Hold each bit for `samples_per_bit` samples (1.0 for a one, 0.0 for a zero)
pub fn modulate_nrz(bits: &[bool], samples_per_bit: usize) -> Result<Vec<f64>> {
    let len = signal_len(bits.len(), samples_per_bit)?;

    let mut signal = Vec::with_capacity(len);
    for &bit in bits {
        let level = if bit { 1.0 } else { 0.0 };
        signal.extend(std::iter::repeat(level).take(samples_per_bit));
    }
    Ok(signal)
}

/// Uniform sample grid over `[0, bit_length)` with step `1 / samples_per_bit`
pub fn time_grid(bit_length: usize, samples_per_bit: usize) -> Result<Vec<f64>> {
    if bit_length == 0 {
        return Err(Error::invalid("bit_length", "must be positive, got 0"));
    }
    let len = signal_len(bit_length, samples_per_bit)?;

    Ok(sample_times(len, samples_per_bit))
}

/// Time of each of `len` samples at `samples_per_bit` samples per time unit
///
/// Each point is `i / samples_per_bit`, computed directly so rounding
/// does not accumulate along the grid.
pub(crate) fn sample_times(len: usize, samples_per_bit: usize) -> Vec<f64> {
    let sps = samples_per_bit as f64;
    (0..len).map(|i| i as f64 / sps).collect()
}

pub(crate) fn check_samples_per_bit(samples_per_bit: usize) -> Result<()> {
    if samples_per_bit == 0 {
        return Err(Error::invalid("samples_per_bit", "must be positive, got 0"));
    }
    Ok(())
}

/// Sample count of `bit_count` bits held for `samples_per_bit` samples each
pub(crate) fn signal_len(bit_count: usize, samples_per_bit: usize) -> Result<usize> {
    check_samples_per_bit(samples_per_bit)?;
    bit_count.checked_mul(samples_per_bit).ok_or_else(|| {
        Error::invalid(
            "samples_per_bit",
            format!("{} bits at {} samples per bit overflows usize", bit_count, samples_per_bit),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modulate_scenario() {
        let bits = [true, false, true, true];
        let signal = modulate_nrz(&bits, 2).unwrap();
        assert_eq!(signal, vec![1.0, 1.0, 0.0, 0.0, 1.0, 1.0, 1.0, 1.0]);
    }

    #[test]
    fn test_modulate_holds_each_bit() {
        let bits = [false, true, true, false, true, false, false];
        for sps in [1, 3, 100] {
            let signal = modulate_nrz(&bits, sps).unwrap();
            assert_eq!(signal.len(), bits.len() * sps);

            for (i, &s) in signal.iter().enumerate() {
                let expected = if bits[i / sps] { 1.0 } else { 0.0 };
                assert_eq!(s, expected, "Mismatch at index {} (sps={})", i, sps);
            }
        }
    }

    #[test]
    fn test_modulate_empty_bits() {
        assert!(modulate_nrz(&[], 4).unwrap().is_empty());
    }

    #[test]
    fn test_modulate_rejects_zero_oversampling() {
        assert!(matches!(
            modulate_nrz(&[true], 0),
            Err(Error::InvalidParameter { name: "samples_per_bit", .. })
        ));
    }

    #[test]
    fn test_time_grid_spacing() {
        let grid = time_grid(20, 100).unwrap();
        assert_eq!(grid.len(), 2000);
        assert_eq!(grid[0], 0.0);

        for (i, &t) in grid.iter().enumerate() {
            assert!((t * 100.0 - i as f64).abs() < 1e-9, "Grid point {} is {}", i, t);
        }
        assert!(*grid.last().unwrap() < 20.0);
    }

    #[test]
    fn test_oversized_length_rejected() {
        let huge = usize::MAX / 2 + 1;

        assert!(matches!(
            time_grid(huge, 2),
            Err(Error::InvalidParameter { name: "samples_per_bit", .. })
        ));
        assert!(matches!(
            modulate_nrz(&[true, false], huge),
            Err(Error::InvalidParameter { name: "samples_per_bit", .. })
        ));
        assert_eq!(signal_len(4, 2), Ok(8));
    }

    #[test]
    fn test_time_grid_rejects_zero() {
        assert!(time_grid(0, 100).is_err());
        assert!(time_grid(20, 0).is_err());
    }
}
