//! Eye opening at bit centres
//!
//! Samples the filtered signal in the middle of every bit period and
//! measures the gap between the weakest "1" and the strongest "0".
//! A shrinking (or negative) opening is the ISI the slider makes visible.

use crate::error::{Error, Result};
use crate::nrz;

/// Bit-centre decision margins
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EyeOpening {
    /// Lowest centre sample among "1" bits
    pub min_one: Option<f64>,
    /// Highest centre sample among "0" bits
    pub max_zero: Option<f64>,
}

impl EyeOpening {
    /// `min_one - max_zero`; `None` unless both symbols occur
    pub fn opening(&self) -> Option<f64> {
        Some(self.min_one? - self.max_zero?)
    }
}

/// Measure the eye of `filtered` for the transmitted `bits`
pub fn eye_opening(filtered: &[f64], bits: &[bool], samples_per_bit: usize) -> Result<EyeOpening> {
    if filtered.len() < nrz::signal_len(bits.len(), samples_per_bit)? {
        return Err(Error::invalid(
            "filtered",
            format!(
                "{} samples cannot cover {} bits at {} samples per bit",
                filtered.len(),
                bits.len(),
                samples_per_bit
            ),
        ));
    }

    let mut eye = EyeOpening {
        min_one: None,
        max_zero: None,
    };
    for (k, &bit) in bits.iter().enumerate() {
        let sample = filtered[k * samples_per_bit + samples_per_bit / 2];
        if bit {
            eye.min_one = Some(eye.min_one.map_or(sample, |m| m.min(sample)));
        } else {
            eye.max_zero = Some(eye.max_zero.map_or(sample, |m| m.max(sample)));
        }
    }
    Ok(eye)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unfiltered_eye_is_fully_open() {
        let bits = [true, false, false, true, true, false];
        let nrz = nrz::modulate_nrz(&bits, 8).unwrap();
        let eye = eye_opening(&nrz, &bits, 8).unwrap();

        assert_eq!(eye.min_one, Some(1.0));
        assert_eq!(eye.max_zero, Some(0.0));
        assert_eq!(eye.opening(), Some(1.0));
    }

    #[test]
    fn test_single_symbol_has_no_opening() {
        let bits = [true, true, true];
        let nrz = nrz::modulate_nrz(&bits, 4).unwrap();
        let eye = eye_opening(&nrz, &bits, 4).unwrap();

        assert_eq!(eye.max_zero, None);
        assert_eq!(eye.opening(), None);
    }

    #[test]
    fn test_short_signal_rejected() {
        let bits = [true, false];
        assert!(eye_opening(&[1.0, 1.0, 0.0], &bits, 2).is_err());
        assert!(eye_opening(&[1.0, 0.0], &bits, 0).is_err());
    }

    #[test]
    fn test_oversized_oversampling_rejected() {
        let bits = [true, false];
        assert!(matches!(
            eye_opening(&[1.0, 0.0], &bits, usize::MAX / 2 + 1),
            Err(Error::InvalidParameter { name: "samples_per_bit", .. })
        ));
    }
}
