//! Reproducibility: repeated runs on the same graph are identical.
//!
//! Both engines are deterministic, so every re-execution must select the
//! same edges in the same order and report the same operation count.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::Algorithm;

use super::types::{MstFixture, RepetitionConfig};

/// Runs the idempotence property for the given fixture.
pub(super) fn run_idempotence_property(fixture: &MstFixture) -> TestCaseResult {
    let config = RepetitionConfig::load();
    let graph = fixture.to_graph();

    for algorithm in Algorithm::ALL {
        let baseline = algorithm.run(&graph);
        for run in 1..=config.repetitions {
            let repeat = algorithm.run(&graph);
            if repeat.edges() != baseline.edges() {
                return Err(TestCaseError::fail(format!(
                    "{algorithm}: run {run} selected different edges (distribution={:?})",
                    fixture.distribution,
                )));
            }
            if repeat.operations() != baseline.operations() {
                return Err(TestCaseError::fail(format!(
                    "{algorithm}: run {run} counted {} operations, baseline {}",
                    repeat.operations(),
                    baseline.operations(),
                )));
            }
        }
    }
    Ok(())
}
