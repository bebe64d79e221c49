//! Discovery-order locking variant, retained as a deadlock anti-pattern.
//!
//! This is the negative example: the same retry loop, post-acquisition
//! re-validation, merge-by-rank, and compression as
//! [`DisjointSet`](crate::DisjointSet), but the two root locks are acquired
//! in the order the roots were discovered rather than canonical index order.
//! Two threads merging the same pair of roots from opposite orientations can
//! then attempt `lock(a) → lock(b)` and `lock(b) → lock(a)` simultaneously
//! and wait on each other forever.
//!
//! The variant exists so contention tests can demonstrate that hazard under a
//! watchdog deadline. It must never back a production code path, and the
//! missing ordering rule must not be silently restored here.

use tracing::{debug, trace};

use crate::{error::Result, table::NodeTable, union_find::UnionFind};

/// Deadlock-prone disjoint set that locks roots in discovery order.
///
/// Single-threaded use behaves exactly like [`crate::DisjointSet`]; with
/// concurrent callers the structure may hang. See the module documentation.
pub struct UnorderedDisjointSet {
    table: NodeTable,
}

impl UnorderedDisjointSet {
    /// Builds a disjoint set of `element_count` singletons.
    ///
    /// # Errors
    /// Returns [`crate::DisjointSetError::EmptyUniverse`] when
    /// `element_count` is zero.
    pub fn new(element_count: usize) -> Result<Self> {
        let table = NodeTable::new(element_count)?;
        debug!(element_count, "initialised discovery-order disjoint set");
        Ok(Self { table })
    }

    /// Returns the fixed number of elements in the universe.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.table.element_count()
    }

    /// Returns the current number of disjoint sets.
    #[must_use]
    pub fn set_count(&self) -> usize {
        self.table.set_count()
    }

    /// Returns the current root of `element`'s set. Lock-free and write-free.
    ///
    /// # Errors
    /// Returns [`crate::DisjointSetError::ElementOutOfBounds`] when `element`
    /// is outside the universe.
    pub fn find(&self, element: usize) -> Result<usize> {
        self.table.check_bounds(element)?;
        Ok(self.table.root_of(element))
    }

    /// Merges the sets containing `left` and `right`, returning whether a
    /// merge was performed.
    ///
    /// The locks are taken as `(left_root, right_root)` in discovery order,
    /// which is the defect this variant documents. Concurrent callers merging
    /// the same roots from opposite orientations can deadlock here.
    ///
    /// # Errors
    /// Returns [`crate::DisjointSetError::ElementOutOfBounds`] when either
    /// element is outside the universe, and
    /// [`crate::DisjointSetError::LockPoisoned`] when a node lock was
    /// poisoned.
    pub fn union(&self, left: usize, right: usize) -> Result<bool> {
        self.table.check_bounds(left)?;
        self.table.check_bounds(right)?;

        loop {
            let left_root = self.table.root_of(left);
            let right_root = self.table.root_of(right);
            if left_root == right_root {
                return Ok(false);
            }

            let _left_guard = self.table.lock_root(left_root)?;
            let _right_guard = self.table.lock_root(right_root)?;

            if !self.table.is_root(left_root) || !self.table.is_root(right_root) {
                trace!(left_root, right_root, "root moved before locks were held, retrying");
                continue;
            }

            self.table.merge_roots(left, right, left_root, right_root);
            return Ok(true);
        }
    }

    /// Returns whether `left` and `right` currently share a root. No locks.
    ///
    /// # Errors
    /// Returns [`crate::DisjointSetError::ElementOutOfBounds`] when either
    /// element is outside the universe.
    pub fn same_set(&self, left: usize, right: usize) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }
}

impl UnionFind for UnorderedDisjointSet {
    fn element_count(&self) -> usize {
        Self::element_count(self)
    }

    fn find(&self, element: usize) -> Result<usize> {
        Self::find(self, element)
    }

    fn union(&self, left: usize, right: usize) -> Result<bool> {
        Self::union(self, left, right)
    }
}
