//! Shared node storage for the fine-grained disjoint-set variants.
//!
//! Both the canonical-order structure and the discovery-order variant operate
//! on the same table: parallel atomic `parent`/`rank` arrays, one mutex per
//! node, and a live count of disjoint sets. The arrays are allocated once and
//! never resized; only the two fields of each node mutate, always under the
//! owning root's lock, while lock-free readers observe them through `Acquire`
//! loads. The sole difference between the two variants is the lock-ordering
//! discipline applied in their `union`, which lives outside this module.

use std::sync::{
    Mutex, MutexGuard,
    atomic::{AtomicUsize, Ordering},
};

use crate::error::{DisjointSetError, Result};

pub(crate) struct NodeTable {
    parents: Vec<AtomicUsize>,
    ranks: Vec<AtomicUsize>,
    sets: AtomicUsize,
    locks: Vec<Mutex<()>>,
}

impl NodeTable {
    pub(crate) fn new(element_count: usize) -> Result<Self> {
        if element_count == 0 {
            return Err(DisjointSetError::EmptyUniverse);
        }

        let mut parents = Vec::with_capacity(element_count);
        let mut ranks = Vec::with_capacity(element_count);
        for element in 0..element_count {
            parents.push(AtomicUsize::new(element));
            ranks.push(AtomicUsize::new(0));
        }

        let locks = (0..element_count).map(|_| Mutex::new(())).collect();

        Ok(Self {
            parents,
            ranks,
            sets: AtomicUsize::new(element_count),
            locks,
        })
    }

    pub(crate) fn element_count(&self) -> usize {
        self.parents.len()
    }

    pub(crate) fn set_count(&self) -> usize {
        self.sets.load(Ordering::Acquire)
    }

    pub(crate) fn check_bounds(&self, element: usize) -> Result<()> {
        if element >= self.parents.len() {
            return Err(DisjointSetError::ElementOutOfBounds {
                element,
                element_count: self.parents.len(),
            });
        }
        Ok(())
    }

    /// Walks parent links to the current root. Takes no locks and performs no
    /// writes, so concurrent merges may re-root the tree mid-walk; the walk
    /// still terminates because every link points strictly towards a root.
    /// Callers must have bounds-checked `element`.
    pub(crate) fn root_of(&self, element: usize) -> usize {
        let mut current = element;
        loop {
            let parent = self.parents[current].load(Ordering::Acquire);
            if parent == current {
                return current;
            }
            current = parent;
        }
    }

    pub(crate) fn is_root(&self, node: usize) -> bool {
        self.parents[node].load(Ordering::Acquire) == node
    }

    pub(crate) fn lock_root(&self, root: usize) -> Result<MutexGuard<'_, ()>> {
        self.locks[root]
            .lock()
            .map_err(|_| DisjointSetError::LockPoisoned {
                resource: "disjoint-set node lock",
            })
    }

    /// Merges two distinct roots by rank and compresses the chains from both
    /// original arguments onto the surviving root.
    ///
    /// Callers must hold the locks of `left_root` and `right_root` and must
    /// have re-validated both as roots after acquiring them.
    pub(crate) fn merge_roots(
        &self,
        left: usize,
        right: usize,
        left_root: usize,
        right_root: usize,
    ) {
        let left_rank = self.ranks[left_root].load(Ordering::Relaxed);
        let right_rank = self.ranks[right_root].load(Ordering::Relaxed);

        let (parent, child) = choose_parent_child(left_root, right_root, left_rank, right_rank);

        self.parents[child].store(parent, Ordering::Release);
        if left_rank == right_rank {
            self.ranks[parent].fetch_add(1, Ordering::Relaxed);
        }
        self.sets.fetch_sub(1, Ordering::AcqRel);

        self.compress_onto(left, parent);
        self.compress_onto(right, parent);
    }

    /// Rewrites every node on the chain from `element` to point directly at
    /// `root`. The caller must hold `root`'s lock, so `root` stays self-rooted
    /// for the duration of the walk and every store publishes a terminal root
    /// pointer; lock-free readers observe either the old chain or the
    /// shortcut, never a cycle.
    fn compress_onto(&self, element: usize, root: usize) {
        let mut current = element;
        loop {
            let parent = self.parents[current].load(Ordering::Acquire);
            if parent == current {
                break;
            }
            self.parents[current].store(root, Ordering::Release);
            current = parent;
        }
    }

    #[cfg(test)]
    pub(crate) fn parent_of(&self, element: usize) -> usize {
        self.parents[element].load(Ordering::Acquire)
    }

    #[cfg(test)]
    pub(crate) fn rank_of(&self, element: usize) -> usize {
        self.ranks[element].load(Ordering::Acquire)
    }

    #[cfg(test)]
    pub(crate) fn force_parent(&self, element: usize, parent: usize) {
        self.parents[element].store(parent, Ordering::Release);
    }
}

/// Canonical lock-acquisition order for a pair of roots: always by ascending
/// element index, regardless of which side the caller passed first.
pub(crate) fn lock_order(first: usize, second: usize) -> (usize, usize) {
    if first <= second {
        (first, second)
    } else {
        (second, first)
    }
}

fn choose_parent_child(
    left_root: usize,
    right_root: usize,
    left_rank: usize,
    right_rank: usize,
) -> (usize, usize) {
    if left_rank > right_rank {
        return (left_root, right_root);
    }
    if right_rank > left_rank {
        return (right_root, left_root);
    }

    // Equal ranks: the smaller index survives, so the tie-break is stable
    // across call orientations.
    lock_order(left_root, right_root)
}
