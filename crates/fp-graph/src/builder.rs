//! Incremental graph builder.

use std::collections::{HashMap, HashSet};

use fp_core::Vertex;

use crate::edge::Edge;
use crate::error::GraphResult;
use crate::graph::Graph;
use crate::validate;

/// Builder for constructing a graph incrementally.
///
/// Use `add_edge` (and `add_vertex` for vertices without edges), then call
/// `build()` to validate and freeze the result into an immutable `Graph`.
/// Duplicate edges are dropped on insertion: the first occurrence wins.
#[derive(Debug, Default)]
pub struct GraphBuilder {
    vertices: Vec<Vertex>,
    known_vertices: HashSet<Vertex>,
    edges: Vec<Edge>,
    known_edges: HashSet<Edge>,
}

impl GraphBuilder {
    /// Create a new empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a vertex, even if no edge will touch it.
    ///
    /// Returns `false` if the vertex was already known.
    pub fn add_vertex(&mut self, vertex: impl Into<Vertex>) -> bool {
        let vertex = vertex.into();
        if !self.known_vertices.insert(vertex) {
            return false;
        }
        self.vertices.push(vertex);
        true
    }

    /// Add an edge, registering both endpoints.
    ///
    /// Returns `false` (and keeps the earlier edge) if an equal edge was
    /// already added, regardless of weight or endpoint order.
    pub fn add_edge(&mut self, edge: Edge) -> bool {
        if !self.known_edges.insert(edge) {
            return false;
        }
        self.add_vertex(edge.left());
        self.add_vertex(edge.right());
        self.edges.push(edge);
        true
    }

    /// Shorthand for `add_edge(Edge::new(left, right, weight))`.
    pub fn connect(&mut self, left: impl Into<Vertex>, right: impl Into<Vertex>, weight: f64) -> bool {
        self.add_edge(Edge::new(left, right, weight))
    }

    /// Number of edges retained so far.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Build and validate the graph, returning an immutable `Graph`.
    ///
    /// This performs validation and constructs compact incidence lists.
    pub fn build(self) -> GraphResult<Graph> {
        // First validate the edges themselves
        validate::validate_edges(&self.edges)?;

        let vertex_lookup: HashMap<Vertex, usize> = self
            .vertices
            .iter()
            .enumerate()
            .map(|(i, &v)| (v, i))
            .collect();

        // Build incidence lists: vertex -> [edge positions]
        let (vertex_edge_offsets, vertex_edges) =
            Self::build_incidence(&self.vertices, &vertex_lookup, &self.edges);

        // Validate incidence consistency
        validate::validate_incidence(&self.vertices, &self.edges, &vertex_edge_offsets, &vertex_edges)?;

        Ok(Graph {
            vertices: self.vertices,
            edges: self.edges,
            vertex_lookup,
            vertex_edge_offsets,
            vertex_edges,
        })
    }

    /// Build compact incidence lists: for each vertex, collect its incident edges.
    fn build_incidence(
        vertices: &[Vertex],
        vertex_lookup: &HashMap<Vertex, usize>,
        edges: &[Edge],
    ) -> (Vec<usize>, Vec<usize>) {
        // Group edge positions by vertex position; edges are visited in order,
        // so every group comes out ascending.
        let mut per_vertex: Vec<Vec<usize>> = vec![Vec::new(); vertices.len()];
        for (e, edge) in edges.iter().enumerate() {
            for endpoint in [edge.left(), edge.right()] {
                if let Some(&v) = vertex_lookup.get(&endpoint) {
                    per_vertex[v].push(e);
                }
            }
        }

        // Build offsets and flat list
        let mut offsets = Vec::with_capacity(vertices.len() + 1);
        let mut flat = Vec::with_capacity(edges.len() * 2);
        offsets.push(0);

        for list in &per_vertex {
            flat.extend_from_slice(list);
            offsets.push(flat.len());
        }

        (offsets, flat)
    }
}

impl Extend<Edge> for GraphBuilder {
    fn extend<I: IntoIterator<Item = Edge>>(&mut self, edges: I) {
        for edge in edges {
            self.add_edge(edge);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GraphError;

    #[test]
    fn builder_basic() {
        let a = Vertex::new();
        let b = Vertex::new();
        let mut builder = GraphBuilder::new();
        assert!(builder.connect(a, b, 1.0));
        assert!(!builder.connect(b, a, 2.0));

        assert_eq!(builder.edge_count(), 1);
        assert_eq!(builder.vertices, vec![a, b]);
    }

    #[test]
    fn builder_isolated_vertex() {
        let a = Vertex::new();
        let b = Vertex::new();
        let lonely = Vertex::new();
        let mut builder = GraphBuilder::new();
        builder.connect(a, b, 1.0);
        assert!(builder.add_vertex(lonely));
        assert!(!builder.add_vertex(a));

        let graph = builder.build().unwrap();
        assert_eq!(graph.vertex_count(), 3);
        assert_eq!(graph.degree(lonely).unwrap(), 0);
        assert_eq!(graph.try_get_edge(lonely, a).unwrap(), None);
    }

    #[test]
    fn builder_build_rejects_self_loop() {
        let a = Vertex::new();
        let mut builder = GraphBuilder::new();
        builder.connect(a, a, 1.0);
        assert_eq!(
            builder.build().unwrap_err(),
            GraphError::SelfLoop { vertex: a }
        );
    }

    #[test]
    fn incidence_is_grouped_by_vertex() {
        let a = Vertex::new();
        let b = Vertex::new();
        let c = Vertex::new();
        let mut builder = GraphBuilder::new();
        builder.connect(a, b, 1.0);
        builder.connect(b, c, 1.0);
        builder.connect(c, a, 1.0);
        let graph = builder.build().unwrap();

        assert_eq!(graph.vertex_edge_offsets, vec![0, 2, 4, 6]);
        assert_eq!(graph.vertex_edges, vec![0, 2, 0, 1, 1, 2]);
    }
}
