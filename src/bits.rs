//! Random bit source
//!
//! Independent, uniformly distributed binary symbols. The unseeded variant
//! draws from the thread-local RNG; the seeded variant uses ChaCha8 so a
//! scenario can be replayed from the front end.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::error::{Error, Result};

/// Generate `bit_length` random bits
pub fn generate_bits(bit_length: usize) -> Result<Vec<bool>> {
    check_length(bit_length)?;
    Ok(draw(&mut rand::thread_rng(), bit_length))
}

/// Generate `bit_length` random bits from a seeded ChaCha8 stream
///
/// The same seed always yields the same sequence.
pub fn generate_bits_seeded(bit_length: usize, seed: u64) -> Result<Vec<bool>> {
    check_length(bit_length)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Ok(draw(&mut rng, bit_length))
}

fn check_length(bit_length: usize) -> Result<()> {
    if bit_length == 0 {
        return Err(Error::invalid("bit_length", "must be positive, got 0"));
    }
    Ok(())
}

fn draw<R: Rng>(rng: &mut R, bit_length: usize) -> Vec<bool> {
    (0..bit_length).map(|_| rng.gen::<bool>()).collect()
}
