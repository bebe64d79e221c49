//! Sequential union-find oracle for partition verification.
//!
//! A simple, trusted, single-threaded implementation used as the reference
//! against which the concurrent structures are checked. Uses path halving
//! and union by rank; none of the concurrent machinery under test appears
//! here.

use std::collections::HashMap;

/// Trusted single-threaded union-find over `[0, element_count)`.
#[derive(Clone, Debug)]
pub struct SequentialUnionFind {
    parents: Vec<usize>,
    ranks: Vec<usize>,
}

impl SequentialUnionFind {
    /// Builds an oracle of `element_count` singletons.
    #[must_use]
    pub fn new(element_count: usize) -> Self {
        Self {
            parents: (0..element_count).collect(),
            ranks: vec![0; element_count],
        }
    }

    /// Returns the number of elements in the universe.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.parents.len()
    }

    /// Returns the root of `element`'s set, halving the path on the way up.
    ///
    /// # Panics
    /// Panics when `element` is out of bounds; the oracle is test tooling
    /// and expects valid inputs.
    pub fn find(&mut self, element: usize) -> usize {
        let mut current = element;
        while self.parents[current] != current {
            let grandparent = self.parents[self.parents[current]];
            self.parents[current] = grandparent;
            current = grandparent;
        }
        current
    }

    /// Merges the sets containing `left` and `right`, returning whether a
    /// merge was performed.
    pub fn union(&mut self, left: usize, right: usize) -> bool {
        let left_root = self.find(left);
        let right_root = self.find(right);
        if left_root == right_root {
            return false;
        }

        let (parent, child) = if self.ranks[left_root] >= self.ranks[right_root] {
            (left_root, right_root)
        } else {
            (right_root, left_root)
        };
        self.parents[child] = parent;
        if self.ranks[left_root] == self.ranks[right_root] {
            self.ranks[parent] += 1;
        }
        true
    }

    /// Returns the partition as canonical labels (see [`canonical_labels`]).
    pub fn canonical_partition(&mut self) -> Vec<usize> {
        let roots: Vec<usize> = (0..self.element_count())
            .map(|element| self.find(element))
            .collect();
        canonical_labels(&roots)
    }
}

/// Relabels per-element roots into dense labels assigned in first-seen
/// order, so partitions from different implementations compare equal exactly
/// when they group the elements identically.
#[must_use]
pub fn canonical_labels(roots: &[usize]) -> Vec<usize> {
    let mut labels = HashMap::new();
    roots
        .iter()
        .map(|&root| {
            let next = labels.len();
            *labels.entry(root).or_insert(next)
        })
        .collect()
}
