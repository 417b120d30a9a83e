//! Deterministic random number generation for card composition.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces the identical sequence, forever
//! - **Counter-based**: One `u32` of state, O(1) capture and restore
//! - **Portable**: Wrapping 32-bit arithmetic only, no platform variance
//!
//! The stream is part of the compatibility contract with previously shared
//! cards: a seed string hashed with [`seed_from_string`] and fed to
//! [`CardRng`] must reproduce the exact card it produced before.

use serde::{Deserialize, Serialize};

/// Odd increment added to the counter before each mix.
const STREAM_INCREMENT: u32 = 0x6D2B_79F5;

/// Accumulator basis for [`seed_from_string`].
const HASH_BASIS: u32 = 2_166_136_261;

/// Deterministic counter-based RNG driving card composition.
///
/// Each draw advances a 32-bit counter by a fixed odd constant, mixes the
/// result through xor-shifts and wrapping multiplications by constants
/// derived from the evolving state, and normalizes to `[0, 1)`.
/// Not cryptographic. Each instance owns its counter exclusively.
///
/// ## Example
///
/// ```
/// use bingo_engine::core::CardRng;
///
/// let mut a = CardRng::new(42);
/// let mut b = CardRng::new(42);
/// assert_eq!(a.next_f64(), b.next_f64());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardRng {
    counter: u32,
}

impl CardRng {
    /// Create a new provider from a 32-bit seed.
    #[must_use]
    pub fn new(seed: u32) -> Self {
        Self { counter: seed }
    }

    /// Create a provider from a text seed via [`seed_from_string`].
    #[must_use]
    pub fn from_text(seed: &str) -> Self {
        Self::new(seed_from_string(seed))
    }

    /// Draw the next value in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / 4_294_967_296.0
    }

    /// Draw the next raw 32-bit value.
    pub fn next_u32(&mut self) -> u32 {
        self.counter = self.counter.wrapping_add(STREAM_INCREMENT);
        let t = self.counter;
        let mut r = (t ^ (t >> 15)).wrapping_mul(t | 1);
        r ^= r.wrapping_add((r ^ (r >> 7)).wrapping_mul(r | 61));
        r ^ (r >> 14)
    }

    /// Draw an index in `[0, bound)` the way the composer draws swap
    /// positions: `floor(next_f64() * bound)`.
    pub fn next_index(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64) as usize
    }

    /// Current counter, for checkpointing.
    #[must_use]
    pub fn state(&self) -> u32 {
        self.counter
    }

    /// Restore a provider from a saved counter.
    #[must_use]
    pub fn from_state(counter: u32) -> Self {
        Self { counter }
    }
}

/// Map an arbitrary text seed onto the 32-bit seed space.
///
/// Order-sensitive multiplicative/xor accumulation over the string's UTF-16
/// code units, wrapped to 32 bits. Pure function of the character codes:
/// equal strings hash equal on every platform, so shared links resolve to
/// the same card everywhere.
#[must_use]
pub fn seed_from_string(seed: &str) -> u32 {
    let mut h = HASH_BASIS;
    for unit in seed.encode_utf16() {
        h ^= u32::from(unit);
        h = h.wrapping_add(
            (h << 1)
                .wrapping_add(h << 4)
                .wrapping_add(h << 7)
                .wrapping_add(h << 8)
                .wrapping_add(h << 24),
        );
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let mut rng1 = CardRng::new(42);
        let mut rng2 = CardRng::new(42);

        for _ in 0..1000 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = CardRng::new(1);
        let mut rng2 = CardRng::new(2);

        let seq1: Vec<_> = (0..10).map(|_| rng1.next_u32()).collect();
        let seq2: Vec<_> = (0..10).map(|_| rng2.next_u32()).collect();

        assert_ne!(seq1, seq2);
    }

    #[test]
    fn test_known_stream() {
        // Recorded from the reference stream; guards the mixing constants.
        let mut rng = CardRng::new(1);
        let seq: Vec<_> = (0..6).map(|_| rng.next_u32()).collect();
        assert_eq!(
            seq,
            vec![
                2_693_262_067,
                11_749_833,
                2_265_367_787,
                4_213_581_821,
                4_159_151_403,
                1_207_330_352
            ]
        );
    }

    #[test]
    fn test_text_seed_stream() {
        let mut rng = CardRng::from_text("123456");
        let seq: Vec<_> = (0..6).map(|_| rng.next_u32()).collect();
        assert_eq!(
            seq,
            vec![
                2_812_683_243,
                3_838_267_589,
                2_672_882_843,
                590_295_174,
                2_961_239_792,
                3_016_862_948
            ]
        );
    }

    #[test]
    fn test_unit_range() {
        let mut rng = CardRng::new(7);
        for _ in 0..1000 {
            let x = rng.next_f64();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn test_next_index_in_bounds() {
        let mut rng = CardRng::new(99);
        for bound in 1..=25 {
            for _ in 0..100 {
                assert!(rng.next_index(bound) < bound);
            }
        }
    }

    #[test]
    fn test_state_restore() {
        let mut rng = CardRng::new(42);
        for _ in 0..100 {
            rng.next_u32();
        }

        let state = rng.state();
        let expected: Vec<_> = (0..10).map(|_| rng.next_u32()).collect();

        let mut restored = CardRng::from_state(state);
        let actual: Vec<_> = (0..10).map(|_| restored.next_u32()).collect();

        assert_eq!(expected, actual);
    }

    #[test]
    fn test_hash_vectors() {
        assert_eq!(seed_from_string(""), 2_166_136_261);
        assert_eq!(seed_from_string("123456"), 2_576_725_674);
        assert_eq!(seed_from_string("bingo"), 691_857_180);
        assert_eq!(seed_from_string("night shift"), 1_233_630_257);
    }

    #[test]
    fn test_hash_is_order_sensitive() {
        assert_ne!(seed_from_string("ab"), seed_from_string("ba"));
    }
}
