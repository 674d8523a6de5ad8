//! Core graph data structure.

use std::collections::HashMap;

use fp_core::Vertex;

use crate::builder::GraphBuilder;
use crate::edge::Edge;
use crate::error::{GraphError, GraphResult};

/// The graph: a validated, immutable set of vertices and undirected edges.
///
/// The graph stores:
/// - All vertices and all retained edges in first-seen order.
/// - Compact incidence: for each vertex, the indices of the edges touching it.
///
/// There is no mutation API; build a new graph to change topology.
#[derive(Debug, Clone)]
pub struct Graph {
    pub(crate) vertices: Vec<Vertex>,
    pub(crate) edges: Vec<Edge>,

    /// Reverse lookup: Vertex -> position in `vertices`.
    pub(crate) vertex_lookup: HashMap<Vertex, usize>,

    /// Offsets for vertex->edge incidence: vertex i's edges are in vertex_edges[vertex_edge_offsets[i]..vertex_edge_offsets[i+1]].
    pub(crate) vertex_edge_offsets: Vec<usize>,

    /// Flat list of edge positions incident to vertices (grouped by vertex, ascending within a group).
    pub(crate) vertex_edges: Vec<usize>,
}

impl Graph {
    /// Start an incremental builder.
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Build a graph from a sequence of edges.
    ///
    /// Edges equal to an earlier one (same endpoints, either order) are
    /// dropped, so the first weight given for a pair wins.
    pub fn from_edges<I>(edges: I) -> GraphResult<Graph>
    where
        I: IntoIterator<Item = Edge>,
    {
        let mut builder = GraphBuilder::new();
        builder.extend(edges);
        builder.build()
    }

    /// All vertices, in first-seen order.
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// All retained edges, in first-seen order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        self.vertex_lookup.contains_key(&vertex)
    }

    /// Edges touching `vertex`.
    pub fn incident_edges(&self, vertex: Vertex) -> GraphResult<impl Iterator<Item = &Edge> + '_> {
        let idx = self.position(vertex)?;
        Ok(self.incident_positions(idx).iter().map(move |&e| &self.edges[e]))
    }

    /// Number of edges touching `vertex`.
    pub fn degree(&self, vertex: Vertex) -> GraphResult<usize> {
        let idx = self.position(vertex)?;
        Ok(self.incident_positions(idx).len())
    }

    /// The edge joining `first` and `second`, if there is one.
    ///
    /// Only an unknown `first` is an error; a missing connection is `Ok(None)`.
    pub fn try_get_edge(&self, first: Vertex, second: Vertex) -> GraphResult<Option<&Edge>> {
        Ok(self
            .incident_edges(first)?
            .find(|edge| edge.other(first) == Some(second)))
    }

    fn position(&self, vertex: Vertex) -> GraphResult<usize> {
        self.vertex_lookup
            .get(&vertex)
            .copied()
            .ok_or(GraphError::VertexNotFound { vertex })
    }

    /// Edge positions incident to the vertex at position `idx`.
    pub(crate) fn incident_positions(&self, idx: usize) -> &[usize] {
        let start = self.vertex_edge_offsets[idx];
        let end = self.vertex_edge_offsets[idx + 1];
        &self.vertex_edges[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn incident_edges_of_path() {
        let a = Vertex::new();
        let b = Vertex::new();
        let c = Vertex::new();
        let graph = Graph::from_edges([Edge::new(a, b, 1.0), Edge::new(b, c, 1.0)]).unwrap();

        assert_eq!(graph.incident_edges(a).unwrap().count(), 1);
        assert_eq!(graph.incident_edges(b).unwrap().count(), 2);
        assert_eq!(graph.degree(c).unwrap(), 1);
    }

    #[test]
    fn unknown_vertex_is_an_error() {
        let a = Vertex::new();
        let b = Vertex::new();
        let graph = Graph::from_edges([Edge::new(a, b, 1.0)]).unwrap();
        let stranger = Vertex::new();

        assert!(matches!(
            graph.incident_edges(stranger),
            Err(GraphError::VertexNotFound { vertex }) if vertex == stranger
        ));
        assert!(graph.try_get_edge(stranger, a).is_err());
        assert!(!graph.contains_vertex(stranger));
    }

    #[test]
    fn missing_connection_is_none() {
        let a = Vertex::new();
        let b = Vertex::new();
        let c = Vertex::new();
        let graph = Graph::from_edges([Edge::new(a, b, 1.0), Edge::new(b, c, 1.0)]).unwrap();

        assert_eq!(graph.try_get_edge(a, c).unwrap(), None);
        assert_eq!(graph.try_get_edge(c, a).unwrap(), None);
        // Known first vertex, unknown second: still just "no edge"
        assert_eq!(graph.try_get_edge(a, Vertex::new()).unwrap(), None);
    }

    #[test]
    fn empty_graph() {
        let graph = Graph::from_edges(Vec::new()).unwrap();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }
}
