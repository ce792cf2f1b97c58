//! Benchmark inputs for the ixmem structures.
//!
//! - [`scrambled_indices`]: a deterministic permutation of `0..n`
//! - [`pair_stream`]: deterministic element pairs for union-find workloads

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A deterministic permutation of `0..n` seeded by `seed`.
///
/// Used to free arena slots and delete dictionary keys in an order that
/// is neither ascending nor descending.
pub fn scrambled_indices(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut out: Vec<usize> = (0..n).collect();
    out.shuffle(&mut rng);
    out
}

/// `count` deterministic pairs of indices below `n`.
pub fn pair_stream(n: usize, count: usize, seed: u64) -> Vec<(usize, usize)> {
    if n == 0 {
        return Vec::new();
    }
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| (rng.random_range(0..n), rng.random_range(0..n)))
        .collect()
}
