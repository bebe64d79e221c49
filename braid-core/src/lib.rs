//! Braid core library.
//!
//! Concurrent disjoint-set (union-find) structures over a fixed universe of
//! densely numbered elements. [`DisjointSet`] serialises merges with one lock
//! per root, acquired in canonical index order, and validates its optimistic
//! root reads after locking; `find` is a pure lock-free walk. The
//! [`UnorderedDisjointSet`] variant omits the canonical ordering rule and is
//! retained solely as a documented deadlock anti-pattern for contention
//! testing.

mod error;
mod set;
mod table;
mod union_find;
mod unordered;


pub use crate::{
    error::{DisjointSetError, DisjointSetErrorCode, Result},
    set::DisjointSet,
    union_find::UnionFind,
    unordered::UnorderedDisjointSet,
};
