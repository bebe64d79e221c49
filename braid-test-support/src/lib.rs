//! Shared test tooling for the braid workspace.
//!
//! Hosts the pieces the core test suites and benches have in common: a
//! trusted sequential union-find oracle with partition canonicalisation, a
//! deadline watchdog for detecting hung concurrent runs, and one-shot
//! tracing initialisation for test binaries.

mod logging;
mod oracle;
mod watchdog;

pub use crate::{
    logging::init_test_tracing,
    oracle::{SequentialUnionFind, canonical_labels},
    watchdog::{DeadlineOutcome, run_with_deadline},
};
