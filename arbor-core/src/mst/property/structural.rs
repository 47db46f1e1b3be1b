//! Structural invariant verification.
//!
//! For each engine's output, verifies:
//!
//! - **Provenance**: every selected edge exists in the input graph.
//! - **Acyclicity**: no selected edge closes a cycle.
//! - **Weight bookkeeping**: `total_weight` equals the sum of the edges.
//! - **Edge count**: a connected result holds exactly `V - 1` edges.
//! - **Prim locality**: every Prim edge joins the start vertex's tree.

use std::collections::HashSet;

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{Graph, MstResult, mst::Algorithm};

use super::helpers::{endpoints, find_root, total_weight};
use super::types::MstFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &MstFixture) -> TestCaseResult {
    let graph = fixture.to_graph();
    let known = undirected_edges(&graph);

    for algorithm in Algorithm::ALL {
        let result = algorithm.run(&graph);
        validate_provenance(&known, &result)?;
        validate_weight(&result)?;
        let parent = validate_acyclicity(&graph, &result)?;
        validate_edge_count(&graph, &result)?;
        if algorithm == Algorithm::Prim {
            validate_single_tree(parent, &result)?;
        }
    }
    Ok(())
}

type UndirectedKey = (String, String, u32);

fn key(from: &str, to: &str, weight: u32) -> UndirectedKey {
    let (lo, hi) = if from <= to { (from, to) } else { (to, from) };
    (lo.to_owned(), hi.to_owned(), weight)
}

fn undirected_edges(graph: &Graph) -> HashSet<UndirectedKey> {
    graph
        .edges()
        .iter()
        .map(|edge| key(edge.from(), edge.to(), edge.weight()))
        .collect()
}

fn validate_provenance(known: &HashSet<UndirectedKey>, result: &MstResult) -> TestCaseResult {
    for (position, edge) in result.edges().iter().enumerate() {
        if !known.contains(&key(edge.from(), edge.to(), edge.weight())) {
            return Err(TestCaseError::fail(format!(
                "{}: edge {position} ({edge}) is not in the input graph",
                result.algorithm(),
            )));
        }
    }
    Ok(())
}

fn validate_weight(result: &MstResult) -> TestCaseResult {
    let summed = total_weight(result.edges());
    if summed != result.total_weight() {
        return Err(TestCaseError::fail(format!(
            "{}: reported weight {} but edges sum to {summed}",
            result.algorithm(),
            result.total_weight(),
        )));
    }
    Ok(())
}

/// Returns the union-find parent table built from the selected edges.
fn validate_acyclicity(graph: &Graph, result: &MstResult) -> Result<Vec<usize>, TestCaseError> {
    let mut parent: Vec<usize> = (0..graph.vertex_count()).collect();
    for (position, edge) in result.edges().iter().enumerate() {
        let (from, to) = endpoints(graph, edge)?;
        let left = find_root(&mut parent, from);
        let right = find_root(&mut parent, to);
        if left == right {
            return Err(TestCaseError::fail(format!(
                "{}: edge {position} ({edge}) closes a cycle",
                result.algorithm(),
            )));
        }
        parent[left] = right;
    }
    Ok(parent)
}

fn validate_edge_count(graph: &Graph, result: &MstResult) -> TestCaseResult {
    let expected = graph.vertex_count().saturating_sub(1);
    if result.is_connected() && result.edge_count() != expected {
        return Err(TestCaseError::fail(format!(
            "{}: connected result has {} edges, expected {expected}",
            result.algorithm(),
            result.edge_count(),
        )));
    }
    if !result.is_connected() && result.edge_count() >= expected {
        return Err(TestCaseError::fail(format!(
            "{}: disconnected result has {} edges, at most {} possible",
            result.algorithm(),
            result.edge_count(),
            expected.saturating_sub(1),
        )));
    }
    Ok(())
}

/// Prim never leaves the start component, so its edges form one tree
/// holding vertex 0 and exactly `edge_count + 1` vertices.
fn validate_single_tree(mut parent: Vec<usize>, result: &MstResult) -> TestCaseResult {
    if parent.is_empty() {
        return Ok(());
    }
    let root = find_root(&mut parent, 0);
    let members = (0..parent.len())
        .filter(|&vertex| find_root(&mut parent, vertex) == root)
        .count();
    if members != result.edge_count() + 1 {
        return Err(TestCaseError::fail(format!(
            "prim tree spans {members} vertices but holds {} edges",
            result.edge_count(),
        )));
    }
    Ok(())
}
