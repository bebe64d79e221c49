//! Script generation for the concurrent union property tests.
//!
//! Provides both a proptest strategy over all shapes and a seeded generator
//! for rstest-pinned cases, mirroring each other's distributions.

use proptest::prelude::*;
use rand::Rng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use super::types::{ScriptShape, UnionScript};

const MAX_ELEMENTS: usize = 48;

pub(super) fn union_script_strategy() -> impl Strategy<Value = UnionScript> {
    prop_oneof![
        chain_strategy(),
        random_pairs_strategy(),
        clustered_strategy(),
        duplicate_heavy_strategy(),
    ]
}

fn chain_strategy() -> impl Strategy<Value = UnionScript> {
    (2usize..MAX_ELEMENTS).prop_flat_map(|element_count| {
        let pairs: Vec<(usize, usize)> = (0..element_count - 1).map(|i| (i, i + 1)).collect();
        Just(pairs)
            .prop_shuffle()
            .prop_map(move |pairs| UnionScript {
                element_count,
                pairs,
                shape: ScriptShape::Chain,
            })
    })
}

fn random_pairs_strategy() -> impl Strategy<Value = UnionScript> {
    (2usize..MAX_ELEMENTS).prop_flat_map(|element_count| {
        proptest::collection::vec((0..element_count, 0..element_count), 1..96).prop_map(
            move |pairs| UnionScript {
                element_count,
                pairs,
                shape: ScriptShape::RandomPairs,
            },
        )
    })
}

fn clustered_strategy() -> impl Strategy<Value = UnionScript> {
    (2usize..=4, 3usize..=8).prop_flat_map(|(cluster_count, span)| {
        let element_count = cluster_count * span;
        proptest::collection::vec((0..cluster_count, 0..span, 0..span), 4..64).prop_map(
            move |triples| UnionScript {
                element_count,
                pairs: triples
                    .into_iter()
                    .map(|(cluster, left, right)| (cluster * span + left, cluster * span + right))
                    .collect(),
                shape: ScriptShape::Clustered,
            },
        )
    })
}

fn duplicate_heavy_strategy() -> impl Strategy<Value = UnionScript> {
    (4usize..16).prop_flat_map(|element_count| {
        (
            proptest::collection::vec((0..element_count, 0..element_count), 1..6),
            2usize..8,
        )
            .prop_map(move |(base, repeats)| UnionScript {
                element_count,
                pairs: base
                    .iter()
                    .copied()
                    .cycle()
                    .take(base.len() * repeats)
                    .collect(),
                shape: ScriptShape::DuplicateHeavy,
            })
    })
}

/// Generates a script for a pinned `(shape, seed)` rstest case, matching the
/// corresponding strategy's distribution.
pub(super) fn generate_script(shape: ScriptShape, rng: &mut SmallRng) -> UnionScript {
    match shape {
        ScriptShape::Chain => {
            let element_count = rng.gen_range(8..=MAX_ELEMENTS);
            let mut pairs: Vec<(usize, usize)> =
                (0..element_count - 1).map(|i| (i, i + 1)).collect();
            pairs.shuffle(rng);
            UnionScript {
                element_count,
                pairs,
                shape,
            }
        }
        ScriptShape::RandomPairs => {
            let element_count = rng.gen_range(8..=MAX_ELEMENTS);
            let pair_count = rng.gen_range(element_count..element_count * 3);
            let pairs = (0..pair_count)
                .map(|_| {
                    (
                        rng.gen_range(0..element_count),
                        rng.gen_range(0..element_count),
                    )
                })
                .collect();
            UnionScript {
                element_count,
                pairs,
                shape,
            }
        }
        ScriptShape::Clustered => {
            let cluster_count = rng.gen_range(2..=4);
            let span = rng.gen_range(3..=8);
            let element_count = cluster_count * span;
            let pairs = (0..element_count * 2)
                .map(|_| {
                    let cluster = rng.gen_range(0..cluster_count);
                    (
                        cluster * span + rng.gen_range(0..span),
                        cluster * span + rng.gen_range(0..span),
                    )
                })
                .collect();
            UnionScript {
                element_count,
                pairs,
                shape,
            }
        }
        ScriptShape::DuplicateHeavy => {
            let element_count = rng.gen_range(4..16);
            let base: Vec<(usize, usize)> = (0..rng.gen_range(1..6))
                .map(|_| {
                    (
                        rng.gen_range(0..element_count),
                        rng.gen_range(0..element_count),
                    )
                })
                .collect();
            let repeats = rng.gen_range(2..8);
            UnionScript {
                element_count,
                pairs: base
                    .iter()
                    .copied()
                    .cycle()
                    .take(base.len() * repeats)
                    .collect(),
                shape,
            }
        }
    }
}
