//! Benchmark support for the braid workspace.
//!
//! Deterministic workload generators shared by the criterion benches so
//! every run measures the same union scripts.

use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// Adjacent `(i, i + 1)` pairs chaining the whole universe in order.
#[must_use]
pub fn chain_pairs(element_count: usize) -> Vec<(usize, usize)> {
    (0..element_count.saturating_sub(1))
        .map(|element| (element, element + 1))
        .collect()
}

/// Chain pairs over a seeded shuffle of the universe, so successive unions
/// keep hitting unrelated trees instead of one growing root.
#[must_use]
pub fn shuffled_chain_pairs(element_count: usize, seed: u64) -> Vec<(usize, usize)> {
    let mut ids: Vec<usize> = (0..element_count).collect();
    ids.shuffle(&mut SmallRng::seed_from_u64(seed));
    ids.windows(2)
        .map(|window| (window[0], window[1]))
        .collect()
}

/// Splits `pairs` into `chunk_count` contiguous chunks for per-thread work,
/// round-robining the remainder.
#[must_use]
pub fn chunked(pairs: &[(usize, usize)], chunk_count: usize) -> Vec<Vec<(usize, usize)>> {
    let mut chunks = vec![Vec::new(); chunk_count.max(1)];
    let len = chunks.len();
    for (index, pair) in pairs.iter().enumerate() {
        chunks[index % len].push(*pair);
    }
    chunks
}
