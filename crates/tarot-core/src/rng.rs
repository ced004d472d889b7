//! Seeded randomness for reproducible draws.
//!
//! General draws take any `rand::Rng` (normally `rand::rng()`). The daily
//! selector instead builds a fresh [`DailyRng`] from a date seed on every call,
//! so its output depends on nothing but the seed.

use rand::{RngCore, SeedableRng};

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;

/// SplitMix64: a small, fully specified generator whose output for a given
/// seed is stable across platforms and crate versions.
#[derive(Debug, Clone)]
pub struct DailyRng {
    state: u64,
}

impl DailyRng {
    /// Create a generator from a raw seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Uniform index in `0..bound` via multiply-shift on the high 32 bits.
    ///
    /// `bound` must be non-zero and fit in 32 bits.
    pub fn pick_index(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0 && bound <= u32::MAX as usize);
        let high = self.next_u64() >> 32;
        ((high * bound as u64) >> 32) as usize
    }

    /// A fair coin: the top bit of the next output.
    pub fn flip(&mut self) -> bool {
        self.next_u64() >> 63 == 1
    }
}

impl RngCore for DailyRng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

impl SeedableRng for DailyRng {
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Self::new(state)
    }
}
