//! Graph fixtures shared by the integration tests.

#![allow(dead_code)]

use arbor_core::{Edge, Graph};

pub fn graph(id: u64, vertices: &[&str], edges: &[(&str, &str, u32)]) -> Graph {
    let edges = edges
        .iter()
        .map(|(from, to, weight)| Edge::new(*from, *to, *weight));
    Graph::new(id, vertices.iter().copied(), edges)
        .expect("fixture graph must validate")
}

/// Five vertices, seven edges, MST weight 16.
pub fn scenario_a() -> Graph {
    graph(
        1,
        &["A", "B", "C", "D", "E"],
        &[
            ("A", "B", 4),
            ("A", "C", 3),
            ("B", "C", 2),
            ("B", "D", 5),
            ("C", "D", 7),
            ("C", "E", 8),
            ("D", "E", 6),
        ],
    )
}

/// Four vertices, five edges, MST weight 6.
pub fn scenario_b() -> Graph {
    graph(
        2,
        &["A", "B", "C", "D"],
        &[
            ("A", "B", 1),
            ("A", "C", 4),
            ("B", "C", 2),
            ("C", "D", 3),
            ("B", "D", 5),
        ],
    )
}

/// Two components: {A, B} and {C, D, E}.
pub fn two_islands() -> Graph {
    graph(
        3,
        &["A", "B", "C", "D", "E"],
        &[("A", "B", 2), ("C", "D", 5), ("D", "E", 1), ("C", "E", 9)],
    )
}
