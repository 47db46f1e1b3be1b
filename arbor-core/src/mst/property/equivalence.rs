//! Oracle equivalence: both engines select forests of minimum weight.
//!
//! Kruskal must match the oracle's full forest weight and edge count on
//! every input. Prim only explores the start vertex's component, so it must
//! match the oracle's weight for that component. On connected inputs the
//! two engines must agree with each other and with the oracle.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::{kruskal, prim};

use super::oracle::dense_prim;
use super::types::MstFixture;

/// Runs the oracle equivalence property for the given fixture.
pub(super) fn run_oracle_equivalence_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.to_graph();
    let oracle = dense_prim(fixture.vertex_count, &fixture.edges);
    let context = || {
        format!(
            "distribution={:?}, vertices={}, edges={}",
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges.len(),
        )
    };

    let kruskal = kruskal(&graph);
    if kruskal.total_weight() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "kruskal weight {} != oracle {} ({})",
            kruskal.total_weight(),
            oracle.total_weight,
            context(),
        )));
    }
    if kruskal.edge_count() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "kruskal selected {} edges, oracle {} ({})",
            kruskal.edge_count(),
            oracle.edge_count,
            context(),
        )));
    }

    let prim = prim(&graph);
    if prim.total_weight() != oracle.first_component_weight {
        return Err(TestCaseError::fail(format!(
            "prim weight {} != oracle start-component weight {} ({})",
            prim.total_weight(),
            oracle.first_component_weight,
            context(),
        )));
    }

    let connected = oracle.component_count <= 1;
    for result in [&prim, &kruskal] {
        if result.is_connected() != connected {
            return Err(TestCaseError::fail(format!(
                "{} reports connected={} but oracle found {} components ({})",
                result.algorithm(),
                result.is_connected(),
                oracle.component_count,
                context(),
            )));
        }
    }

    if connected && prim.total_weight() != kruskal.total_weight() {
        return Err(TestCaseError::fail(format!(
            "engines disagree on a connected graph: prim={} kruskal={} ({})",
            prim.total_weight(),
            kruskal.total_weight(),
            context(),
        )));
    }

    Ok(())
}
