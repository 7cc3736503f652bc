//! Default [`RandomSource`] backed by `rand`'s `SmallRng`.

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::io::RandomSource;

/// A small, fast, non-cryptographic random source.
///
/// Puzzle scrambles and arithmetic problems need nothing stronger. Seed it
/// from whatever entropy the board has (a floating ADC pin, a cycle
/// counter); a fixed seed gives a reproducible run.
pub struct SmallRngSource {
    rng: SmallRng,
}

impl SmallRngSource {
    /// Creates a source from a 64-bit seed.
    pub fn seed_from_u64(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SmallRngSource {
    fn uniform(&mut self, lo: u8, hi: u8) -> u8 {
        debug_assert!(lo <= hi, "empty range {lo}..={hi}");
        let span = u32::from(hi - lo) + 1;
        // Modulo bias over a span of at most 17 values is negligible here.
        lo + (self.rng.next_u32() % span) as u8
    }
}
