//! `BloomFilter` - a probabilistic set membership test.
//!
//! `contains` never returns `false` for an inserted item, but may return
//! `true` for one that was never inserted. The bit array and the number of
//! hash functions are sized from the expected item count and the target
//! false-positive rate; `k` hash functions are simulated by double hashing.

use core::fmt;
use core::hash::{BuildHasher, Hash};
use core::marker::PhantomData;
use std::collections::hash_map::RandomState;

const DEFAULT_FP_RATE: f64 = 0.01;

/// A Bloom filter over items of type `T`.
pub struct BloomFilter<T: ?Sized, S = RandomState> {
    words: Vec<u64>,
    /// Size of the bit array (m).
    bit_size: usize,
    /// Number of hash functions (k).
    num_hashes: u32,
    hasher: S,
    _marker: PhantomData<fn(&T)>,
}

impl<T: ?Sized> BloomFilter<T> {
    /// Creates a filter for `expected_items` with false-positive rate `fp_rate`.
    ///
    /// A rate outside `(0, 1)` falls back to 1%; zero expected items is treated as one.
    pub fn new(expected_items: usize, fp_rate: f64) -> Self {
        Self::with_hasher(expected_items, fp_rate, RandomState::new())
    }
}

impl<T: ?Sized, S> BloomFilter<T, S> {
    /// Creates a filter that hashes with `hasher`.
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn with_hasher(expected_items: usize, fp_rate: f64, hasher: S) -> Self {
        let p = if fp_rate > 0.0 && fp_rate < 1.0 {
            fp_rate
        } else {
            tracing::debug!(fp_rate, "false-positive rate out of range, using default");
            DEFAULT_FP_RATE
        };
        let n = expected_items.max(1) as f64;
        let ln2 = core::f64::consts::LN_2;

        // m = -(n ln p) / (ln 2)^2, k = (m / n) ln 2
        let m = (-(n * p.ln()) / (ln2 * ln2)).ceil().max(1.0);
        let k = ((m / n) * ln2).ceil().max(1.0);
        let bit_size = m as usize;

        Self {
            words: vec![0; bit_size.div_ceil(64)],
            bit_size,
            num_hashes: k as u32,
            hasher,
            _marker: PhantomData,
        }
    }

    /// Size of the bit array.
    pub fn bit_size(&self) -> usize {
        self.bit_size
    }

    /// Number of hash functions.
    pub fn num_hashes(&self) -> u32 {
        self.num_hashes
    }

    /// Number of bits set.
    pub fn set_bits_count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Clears every bit.
    pub fn clear(&mut self) {
        self.words.fill(0);
    }
}

impl<T, S> BloomFilter<T, S>
where
    T: Hash + ?Sized,
    S: BuildHasher,
{
    #[allow(clippy::cast_possible_truncation)]
    fn bit_indices(&self, item: &T) -> impl Iterator<Item = usize> {
        let h1 = self.hasher.hash_one(item);
        // Second hash from the first with MurmurHash3's 64-bit finalizer.
        let mut h2 = h1;
        h2 = (h2 ^ (h2 >> 33)).wrapping_mul(0xff51_afd7_ed55_8ccd);
        h2 = (h2 ^ (h2 >> 33)).wrapping_mul(0xc4ce_b9fe_1a85_ec53);
        h2 ^= h2 >> 33;

        let m = self.bit_size as u64;
        (0..u64::from(self.num_hashes))
            .map(move |i| (h1.wrapping_add(i.wrapping_mul(h2)) % m) as usize)
    }

    /// Adds `item`.
    pub fn insert(&mut self, item: &T) {
        for bit in self.bit_indices(item) {
            self.words[bit / 64] |= 1u64 << (bit % 64);
        }
    }

    /// Returns `false` if `item` was definitely never inserted.
    pub fn contains(&self, item: &T) -> bool {
        self.bit_indices(item)
            .all(|bit| self.words[bit / 64] & (1u64 << (bit % 64)) != 0)
    }
}

impl<T: ?Sized, S> fmt::Debug for BloomFilter<T, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BloomFilter")
            .field("bit_size", &self.bit_size)
            .field("num_hashes", &self.num_hashes)
            .field("set_bits", &self.set_bits_count())
            .finish_non_exhaustive()
    }
}
