//! Stable indexing for solver integration.
//!
//! Provides a bidirectional mapping between vertices and contiguous solver
//! indices (0..N), plus per-vertex spring lists so a solver can walk the
//! incidence structure without hashing.

use std::collections::HashMap;

use fp_core::{Real, Vertex};

use crate::error::{GraphError, GraphResult};
use crate::graph::Graph;

/// One end of an edge as seen from a vertex: the opposite endpoint's solver
/// index and the edge's desired distance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    pub other: usize,
    pub rest_length: Real,
}

/// Index map providing stable, contiguous indices for graph vertices.
///
/// Indices follow `Graph::vertices()` order. Provides O(1) lookup in both
/// directions.
#[derive(Debug, Clone)]
pub struct IndexMap {
    /// Contiguous list of vertices (index -> Vertex).
    vertices: Vec<Vertex>,

    /// Reverse lookup: Vertex -> index.
    vertex_to_idx: HashMap<Vertex, usize>,

    /// Offsets into `springs`: vertex i's springs are springs[spring_offsets[i]..spring_offsets[i+1]].
    spring_offsets: Vec<usize>,

    springs: Vec<Spring>,
}

impl IndexMap {
    /// Build an index map from a graph.
    pub fn from_graph(graph: &Graph) -> Self {
        // Forward map is the graph's own vertex order
        let vertices = graph.vertices().to_vec();
        let vertex_to_idx = graph.vertex_lookup.clone();

        let mut spring_offsets = Vec::with_capacity(vertices.len() + 1);
        let mut springs = Vec::with_capacity(graph.edge_count() * 2);
        spring_offsets.push(0);

        for (i, &vertex) in vertices.iter().enumerate() {
            for &e in graph.incident_positions(i) {
                let edge = &graph.edges()[e];
                // Incidence only lists edges touching `vertex`, and every
                // endpoint of a retained edge is indexed.
                if let Some(other) = edge.other(vertex).and_then(|o| vertex_to_idx.get(&o)) {
                    springs.push(Spring {
                        other: *other,
                        rest_length: edge.weight(),
                    });
                }
            }
            spring_offsets.push(springs.len());
        }

        Self {
            vertices,
            vertex_to_idx,
            spring_offsets,
            springs,
        }
    }

    /// Number of vertices in the index.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the contiguous index for a vertex.
    pub fn vertex_idx(&self, vertex: Vertex) -> GraphResult<usize> {
        self.vertex_to_idx
            .get(&vertex)
            .copied()
            .ok_or(GraphError::VertexNotFound { vertex })
    }

    /// Get the vertex for a contiguous index (panics if out of bounds).
    pub fn vertex(&self, i: usize) -> Vertex {
        self.vertices[i]
    }

    /// All vertices in index order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Springs attached to the vertex at index `i`.
    pub fn springs(&self, i: usize) -> &[Spring] {
        let start = self.spring_offsets[i];
        let end = self.spring_offsets[i + 1];
        &self.springs[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::edge::Edge;

    #[test]
    fn index_map_basic() {
        let a = Vertex::new();
        let b = Vertex::new();
        let graph = Graph::from_edges([Edge::new(a, b, 2.5)]).unwrap();

        let idx_map = IndexMap::from_graph(&graph);

        assert_eq!(idx_map.vertex_count(), 2);

        // Round-trip vertices
        let ia = idx_map.vertex_idx(a).unwrap();
        assert_eq!(idx_map.vertex(ia), a);
        let ib = idx_map.vertex_idx(b).unwrap();
        assert_eq!(idx_map.vertex(ib), b);

        assert_eq!(
            idx_map.springs(ia),
            &[Spring {
                other: ib,
                rest_length: 2.5
            }]
        );
        assert_eq!(
            idx_map.springs(ib),
            &[Spring {
                other: ia,
                rest_length: 2.5
            }]
        );
    }

    #[test]
    fn index_map_invalid_vertex() {
        let a = Vertex::new();
        let b = Vertex::new();
        let graph = Graph::from_edges([Edge::new(a, b, 1.0)]).unwrap();

        let idx_map = IndexMap::from_graph(&graph);

        let bogus = Vertex::new();
        assert!(idx_map.vertex_idx(bogus).is_err());
    }

    #[test]
    fn index_map_contiguous() {
        let a = Vertex::new();
        let b = Vertex::new();
        let c = Vertex::new();
        let lonely = Vertex::new();
        let mut builder = Graph::builder();
        builder.connect(a, b, 1.0);
        builder.connect(b, c, 1.0);
        builder.add_vertex(lonely);
        let graph = builder.build().unwrap();

        let idx_map = IndexMap::from_graph(&graph);

        // All indices should be 0..N in first-seen order
        assert_eq!(idx_map.vertex_idx(a).unwrap(), 0);
        assert_eq!(idx_map.vertex_idx(b).unwrap(), 1);
        assert_eq!(idx_map.vertex_idx(c).unwrap(), 2);
        assert_eq!(idx_map.vertex_idx(lonely).unwrap(), 3);

        assert_eq!(idx_map.springs(1).len(), 2);
        assert!(idx_map.springs(3).is_empty());
    }
}
