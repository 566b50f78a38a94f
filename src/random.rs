//! The secure random source a generator draws from.

use rand::rngs::OsRng;
use rand::{CryptoRng, Rng, RngCore};

use crate::GeneratorError;

/// A source of uniformly distributed indices, suitable for security-sensitive use.
///
/// Implemented for every RNG marked as [`CryptoRng`], and nothing else.
pub trait SecureRandom {
    /// Draw an index uniformly from `0..bound`. `bound` must be non-zero.
    fn index_below(&mut self, bound: usize) -> usize;
}

impl<R> SecureRandom for R
where
    R: RngCore + CryptoRng,
{
    fn index_below(&mut self, bound: usize) -> usize {
        // `gen_range` re-samples values that fall outside a multiple of the range, rather than
        // reducing modulo `bound`, so every index is equally likely.
        self.gen_range(0..bound)
    }
}

/// Resolve the operating system's CSPRNG.
///
/// The source is probed once, here; if it can't produce bytes, there's no fallback.
pub fn os_rng() -> Result<OsRng, GeneratorError> {
    let mut rng = OsRng;
    probe(&mut rng)?;
    tracing::debug!("using the operating system's random source");
    Ok(rng)
}

/// Check that `rng` is able to produce randomness at all.
pub fn probe<R: RngCore + ?Sized>(rng: &mut R) -> Result<(), GeneratorError> {
    let mut buf = [0u8; 16];
    rng.try_fill_bytes(&mut buf)
        .map_err(GeneratorError::UnsupportedPlatform)
}
