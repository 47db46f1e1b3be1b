//! Dense-matrix Prim oracle for MST property verification.
//!
//! Computes a minimum spanning forest by running an `O(n^2)` array-based
//! Prim from every unvisited vertex in turn. It shares no code with the
//! engines under test: no heap, no union-find, no adjacency lists.

/// Result of the dense oracle.
#[derive(Clone, Debug)]
pub(super) struct OracleResult {
    /// Total weight of the minimum spanning forest.
    pub total_weight: u64,
    /// Number of edges in the forest.
    pub edge_count: usize,
    /// Number of connected components, counting isolated vertices.
    pub component_count: usize,
    /// Forest weight restricted to the component containing vertex 0.
    pub first_component_weight: u64,
}

/// Computes a minimum spanning forest over `vertex_count` vertices.
///
/// Parallel edges collapse to their lightest copy and self-loops are
/// ignored.
pub(super) fn dense_prim(vertex_count: usize, edges: &[(usize, usize, u32)]) -> OracleResult {
    let mut matrix: Vec<Vec<Option<u32>>> = vec![vec![None; vertex_count]; vertex_count];
    for &(source, target, weight) in edges {
        if source == target {
            continue;
        }
        for (row, column) in [(source, target), (target, source)] {
            let cell = &mut matrix[row][column];
            *cell = Some(cell.map_or(weight, |current| current.min(weight)));
        }
    }

    let mut in_tree = vec![false; vertex_count];
    let mut result = OracleResult {
        total_weight: 0,
        edge_count: 0,
        component_count: 0,
        first_component_weight: 0,
    };

    for root in 0..vertex_count {
        if in_tree[root] {
            continue;
        }
        result.component_count += 1;
        let weight = grow_component(&matrix, &mut in_tree, root, &mut result.edge_count);
        if root == 0 {
            result.first_component_weight = weight;
        }
        result.total_weight += weight;
    }
    result
}

/// Grows one tree from `root`, returning its weight.
fn grow_component(
    matrix: &[Vec<Option<u32>>],
    in_tree: &mut [bool],
    root: usize,
    edge_count: &mut usize,
) -> u64 {
    let mut best: Vec<Option<u32>> = vec![None; matrix.len()];
    let mut weight = 0_u64;
    let mut current = root;
    in_tree[root] = true;

    loop {
        for (vertex, cell) in matrix[current].iter().enumerate() {
            if let Some(candidate) = *cell {
                if !in_tree[vertex] && best[vertex].is_none_or(|known| candidate < known) {
                    best[vertex] = Some(candidate);
                }
            }
        }

        let next = best
            .iter()
            .enumerate()
            .filter(|(vertex, _)| !in_tree[*vertex])
            .filter_map(|(vertex, cost)| cost.map(|cost| (cost, vertex)))
            .min();
        let Some((cost, vertex)) = next else {
            return weight;
        };
        in_tree[vertex] = true;
        weight += u64::from(cost);
        *edge_count += 1;
        current = vertex;
    }
}
