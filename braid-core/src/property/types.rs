//! Type definitions for the concurrent union property tests.

/// Shape of a generated union script.
///
/// Each shape stresses a different aspect of the structure: chains maximise
/// root overlap between racing threads, random pairs exercise arbitrary
/// merge orders, clustered scripts leave several sets standing, and
/// duplicate-heavy scripts hammer the idempotent no-op path.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum ScriptShape {
    /// Adjacent `(i, i + 1)` pairs covering the whole universe, shuffled.
    Chain,
    /// Uniformly random pairs, self-pairs included.
    RandomPairs,
    /// Pairs confined to a handful of clusters with no cross-cluster edges.
    Clustered,
    /// A short pair list repeated many times over.
    DuplicateHeavy,
}

/// Fixture for concurrent union property tests.
#[derive(Clone, Debug)]
pub(super) struct UnionScript {
    /// Number of elements in the universe.
    pub element_count: usize,
    /// Union pairs in issue order.
    pub pairs: Vec<(usize, usize)>,
    /// Shape used during generation, kept for failure diagnosis.
    pub shape: ScriptShape,
}
