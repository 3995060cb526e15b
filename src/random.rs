//! Random number source abstraction.
//!
//! The sparkle effect is the only consumer. Hardware platforms implement
//! [`RandomSource`] on top of their RNG peripheral; [`SplitMix64`] is a
//! small deterministic fallback, also handy in tests.

/// Source of random bits
pub trait RandomSource {
    fn next_u32(&mut self) -> u32;
}

/// SplitMix64 pseudo-random generator
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub const fn new(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl RandomSource for SplitMix64 {
    #[allow(clippy::cast_possible_truncation)]
    fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_add(0x9e37_79b9_7f4a_7c15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
        (z ^ (z >> 31)) as u32
    }
}
