//! Seam trait over the disjoint-set variants.

use crate::error::Result;

/// Abstraction over a disjoint set of densely numbered elements.
///
/// Implemented by both [`crate::DisjointSet`] and the deliberately flawed
/// [`crate::UnorderedDisjointSet`] so stress harnesses and benchmarks can run
/// generically over either locking discipline.
///
/// # Examples
/// ```
/// use braid_core::{DisjointSet, UnionFind};
///
/// fn chain(set: &impl UnionFind) -> braid_core::Result<usize> {
///     for element in 0..set.element_count() - 1 {
///         set.union(element, element + 1)?;
///     }
///     set.find(0)
/// }
///
/// let set = DisjointSet::new(5)?;
/// let root = chain(&set)?;
/// assert!(set.same_set(0, 4)?);
/// assert_eq!(set.find(4)?, root);
/// # Ok::<(), braid_core::DisjointSetError>(())
/// ```
pub trait UnionFind {
    /// Returns the fixed number of elements in the universe.
    fn element_count(&self) -> usize;

    /// Returns the current root of `element`'s set.
    ///
    /// # Errors
    /// Returns [`crate::DisjointSetError::ElementOutOfBounds`] when `element`
    /// is outside the universe.
    fn find(&self, element: usize) -> Result<usize>;

    /// Merges the sets containing `left` and `right`, returning whether a
    /// merge was performed.
    ///
    /// # Errors
    /// Returns [`crate::DisjointSetError::ElementOutOfBounds`] when either
    /// element is outside the universe, and
    /// [`crate::DisjointSetError::LockPoisoned`] when a node lock was
    /// poisoned.
    fn union(&self, left: usize, right: usize) -> Result<bool>;

    /// Returns whether `left` and `right` currently share a root.
    ///
    /// # Errors
    /// Returns [`crate::DisjointSetError::ElementOutOfBounds`] when either
    /// element is outside the universe.
    fn same_set(&self, left: usize, right: usize) -> Result<bool> {
        Ok(self.find(left)? == self.find(right)?)
    }
}
