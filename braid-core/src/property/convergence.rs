//! Concurrent convergence property.
//!
//! Replays a generated union script from several threads at once, with odd
//! workers in reversed orientation so racing unions hit the same roots from
//! both sides, and asserts that the resulting partition is exactly the
//! transitive closure the sequential oracle computes.

use std::sync::{Arc, Barrier};
use std::thread;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use braid_test_support::{SequentialUnionFind, canonical_labels};

use crate::DisjointSet;

use super::types::UnionScript;

const WORKER_THREADS: usize = 8;

pub(super) fn run_convergence_property(script: &UnionScript) -> TestCaseResult {
    let set = Arc::new(DisjointSet::new(script.element_count).map_err(|error| {
        TestCaseError::fail(format!(
            "construction failed: {error} (shape={:?}, elements={})",
            script.shape, script.element_count,
        ))
    })?);

    let barrier = Arc::new(Barrier::new(WORKER_THREADS));
    let mut workers = Vec::with_capacity(WORKER_THREADS);
    for worker in 0..WORKER_THREADS {
        let set = Arc::clone(&set);
        let barrier = Arc::clone(&barrier);
        let pairs = script.pairs.clone();
        workers.push(thread::spawn(move || -> crate::Result<()> {
            barrier.wait();
            if worker % 2 == 0 {
                for &(left, right) in &pairs {
                    set.union(left, right)?;
                }
            } else {
                for &(left, right) in pairs.iter().rev() {
                    set.union(right, left)?;
                }
            }
            Ok(())
        }));
    }

    for worker in workers {
        worker
            .join()
            .map_err(|_| TestCaseError::fail("worker thread panicked"))?
            .map_err(|error| {
                TestCaseError::fail(format!(
                    "union failed: {error} (shape={:?}, elements={})",
                    script.shape, script.element_count,
                ))
            })?;
    }

    let mut oracle = SequentialUnionFind::new(script.element_count);
    for &(left, right) in &script.pairs {
        oracle.union(left, right);
    }
    let expected = oracle.canonical_partition();

    let concurrent = partition_of(&set, script)?;
    if concurrent != expected {
        return Err(TestCaseError::fail(format!(
            "partition diverged from oracle (shape={:?}, elements={}, pairs={})",
            script.shape,
            script.element_count,
            script.pairs.len(),
        )));
    }

    let expected_sets = expected.iter().max().map_or(0, |label| label + 1);
    if set.set_count() != expected_sets {
        return Err(TestCaseError::fail(format!(
            "set counter diverged: counter={}, partition has {} sets (shape={:?})",
            set.set_count(),
            expected_sets,
            script.shape,
        )));
    }

    Ok(())
}

fn partition_of(set: &DisjointSet, script: &UnionScript) -> Result<Vec<usize>, TestCaseError> {
    let roots = (0..set.element_count())
        .map(|element| set.find(element))
        .collect::<crate::Result<Vec<_>>>()
        .map_err(|error| {
            TestCaseError::fail(format!("find failed: {error} (shape={:?})", script.shape))
        })?;
    Ok(canonical_labels(&roots))
}
