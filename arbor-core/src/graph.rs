//! Weighted undirected graph model shared by both MST engines.
//!
//! A [`Graph`] owns its vertex labels, the declared edge list, and a derived
//! adjacency table in which every edge appears once from each endpoint. The
//! adjacency table is index-aligned with the declared vertex order so the
//! engines can work with dense indices while still reporting labels.

use std::{collections::HashMap, fmt, sync::Arc};

use crate::error::GraphError;

/// An undirected weighted edge between two vertex labels.
///
/// The orientation (`from`, `to`) only records how the edge was declared or
/// traversed; the edge itself is undirected.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Edge {
    from: Arc<str>,
    to: Arc<str>,
    weight: u32,
}

impl Edge {
    /// Creates an edge between `from` and `to`.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::Edge;
    ///
    /// let edge = Edge::new("A", "B", 4);
    /// assert_eq!(edge.from(), "A");
    /// assert_eq!(edge.to(), "B");
    /// assert_eq!(edge.weight(), 4);
    /// ```
    #[must_use]
    pub fn new(from: impl Into<Arc<str>>, to: impl Into<Arc<str>>, weight: u32) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            weight,
        }
    }

    /// Returns the label the edge starts from.
    #[must_use]
    #[rustfmt::skip]
    pub fn from(&self) -> &str { &self.from }

    /// Returns the label the edge leads to.
    #[must_use]
    #[rustfmt::skip]
    pub fn to(&self) -> &str { &self.to }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub const fn weight(&self) -> u32 { self.weight }

    /// Returns the same edge traversed in the opposite direction.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            from: Arc::clone(&self.to),
            to: Arc::clone(&self.from),
            weight: self.weight,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.from, self.to, self.weight)
    }
}

/// One entry of a vertex's adjacency list.
///
/// The wrapped edge is oriented away from the owning vertex, so
/// [`Edge::to`] is always the far endpoint.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Incidence {
    edge: Edge,
    target: usize,
}

impl Incidence {
    /// Returns the oriented edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge(&self) -> &Edge { &self.edge }

    /// Returns the dense index of the far endpoint.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target_index(&self) -> usize { self.target }
}

/// A validated weighted undirected graph.
///
/// # Examples
/// ```
/// use arbor_core::{Edge, Graph};
///
/// let graph = Graph::new(
///     1,
///     ["A", "B", "C"],
///     vec![Edge::new("A", "B", 1), Edge::new("B", "C", 2)],
/// )?;
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 2);
/// assert_eq!(graph.adjacency("B").map(<[_]>::len), Some(2));
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct Graph {
    id: u64,
    vertices: Vec<Arc<str>>,
    edges: Vec<Edge>,
    adjacency: Vec<Vec<Incidence>>,
    index: HashMap<Arc<str>, usize>,
}

impl Graph {
    /// Validates the inputs and builds the mirrored adjacency table.
    ///
    /// Edge endpoints are re-pointed at the graph's own vertex labels so
    /// result edges share storage with the graph.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertex`] when a label repeats,
    /// [`GraphError::UnknownVertex`] when an edge endpoint is not declared,
    /// and [`GraphError::ZeroWeight`] when an edge has weight zero.
    pub fn new<V>(
        id: u64,
        labels: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> Result<Self, GraphError>
    where
        V: Into<Arc<str>>,
    {
        let vertices: Vec<Arc<str>> = labels.into_iter().map(Into::into).collect();
        let mut index = HashMap::with_capacity(vertices.len());
        for (position, label) in vertices.iter().enumerate() {
            if index.insert(Arc::clone(label), position).is_some() {
                return Err(GraphError::DuplicateVertex {
                    graph_id: id,
                    vertex: Arc::clone(label),
                });
            }
        }

        let mut adjacency: Vec<Vec<Incidence>> = vec![Vec::new(); vertices.len()];
        let mut canonical_edges = Vec::new();
        for (edge_index, edge) in edges.into_iter().enumerate() {
            let (from, from_label) = resolve(&index, &vertices, id, edge_index, &edge.from)?;
            let (to, to_label) = resolve(&index, &vertices, id, edge_index, &edge.to)?;
            if edge.weight == 0 {
                return Err(GraphError::ZeroWeight {
                    graph_id: id,
                    edge_index,
                    from: from_label,
                    to: to_label,
                });
            }

            let canonical = Edge {
                from: from_label,
                to: to_label,
                weight: edge.weight,
            };
            adjacency[from].push(Incidence {
                edge: canonical.clone(),
                target: to,
            });
            adjacency[to].push(Incidence {
                edge: canonical.reversed(),
                target: from,
            });
            canonical_edges.push(canonical);
        }

        Ok(Self {
            id,
            vertices,
            edges: canonical_edges,
            adjacency,
            index,
        })
    }

    /// Returns the graph identifier.
    #[must_use]
    #[rustfmt::skip]
    pub const fn id(&self) -> u64 { self.id }

    /// Returns the vertex labels in declared order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertices(&self) -> &[Arc<str>] { self.vertices.as_slice() }

    /// Returns the edges in declared order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges(&self) -> &[Edge] { self.edges.as_slice() }

    /// Returns the number of vertices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex_count(&self) -> usize { self.vertices.len() }

    /// Returns the number of declared edges.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edge_count(&self) -> usize { self.edges.len() }

    /// Returns the dense index assigned to `label`.
    #[must_use]
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.index.get(label).copied()
    }

    /// Returns the incident edges of `label`, oriented away from it.
    ///
    /// Isolated vertices yield an empty slice; undeclared labels yield
    /// `None`.
    #[must_use]
    pub fn adjacency(&self, label: &str) -> Option<&[Incidence]> {
        self.index_of(label).and_then(|index| self.incident(index))
    }

    /// Returns the incident edges of the vertex at `index`.
    #[must_use]
    pub fn incident(&self, index: usize) -> Option<&[Incidence]> {
        self.adjacency.get(index).map(Vec::as_slice)
    }
}

fn resolve(
    index: &HashMap<Arc<str>, usize>,
    vertices: &[Arc<str>],
    graph_id: u64,
    edge_index: usize,
    label: &Arc<str>,
) -> Result<(usize, Arc<str>), GraphError> {
    index
        .get(label)
        .and_then(|&position| {
            let vertex = vertices.get(position)?;
            Some((position, Arc::clone(vertex)))
        })
        .ok_or_else(|| GraphError::UnknownVertex {
            graph_id,
            edge_index,
            vertex: Arc::clone(label),
        })
}
