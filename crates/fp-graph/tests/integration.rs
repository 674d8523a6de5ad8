//! Integration tests for fp-graph.

use fp_graph::{Edge, Graph, GraphError, IndexMap, Tagged, Vertex};
use proptest::prelude::*;

fn square() -> (Graph, [Vertex; 4]) {
    // A - B
    // |   |
    // C - D
    let [a, b, c, d] = [Vertex::new(), Vertex::new(), Vertex::new(), Vertex::new()];
    let graph = Graph::from_edges([
        Edge::new(a, b, 1.0),
        Edge::new(a, c, 1.0),
        Edge::new(c, d, 1.0),
        Edge::new(b, d, 1.0),
    ])
    .unwrap();
    (graph, [a, b, c, d])
}

#[test]
fn reversed_duplicate_is_dropped() {
    let a = Vertex::new();
    let b = Vertex::new();
    let graph = Graph::from_edges([Edge::new(a, b, 1.0), Edge::new(b, a, 1.0)]).unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.degree(a).unwrap(), 1);
    assert_eq!(graph.degree(b).unwrap(), 1);
}

#[test]
fn first_occurrence_wins() {
    let a = Vertex::new();
    let b = Vertex::new();
    let c = Vertex::new();
    let graph = Graph::from_edges([
        Edge::new(a, b, 3.0),
        Edge::new(b, c, 1.0),
        Edge::new(b, a, 9.0),
        Edge::new(a, b, 0.5),
    ])
    .unwrap();

    assert_eq!(graph.edge_count(), 2);
    let ab = graph.try_get_edge(a, b).unwrap().unwrap();
    assert_eq!(ab.weight(), 3.0);
    assert_eq!(ab.left(), a);
}

#[test]
fn vertices_are_edge_endpoints_in_first_seen_order() {
    let (graph, [a, b, c, d]) = square();
    assert_eq!(graph.vertices(), &[a, b, c, d]);
}

#[test]
fn adjacency_matches_edges() {
    let (graph, vertices) = square();
    for &v in &vertices {
        let incident: Vec<&Edge> = graph.incident_edges(v).unwrap().collect();
        let expected: Vec<&Edge> = graph.edges().iter().filter(|e| e.contains(v)).collect();
        assert_eq!(incident, expected);
    }
}

#[test]
fn symmetric_lookup_on_square() {
    let (graph, [a, b, c, d]) = square();

    for (x, y) in [(a, b), (a, c), (c, d), (b, d)] {
        let forward = graph.try_get_edge(x, y).unwrap();
        let backward = graph.try_get_edge(y, x).unwrap();
        assert!(forward.is_some());
        assert_eq!(forward, backward);
    }

    // Diagonals are not connected
    for (x, y) in [(a, d), (b, c)] {
        assert_eq!(graph.try_get_edge(x, y).unwrap(), None);
        assert_eq!(graph.try_get_edge(y, x).unwrap(), None);
    }
}

#[test]
fn unknown_vertex_lookup_fails() {
    let (graph, _) = square();
    let stranger = Vertex::new();
    assert_eq!(
        graph.degree(stranger).unwrap_err(),
        GraphError::VertexNotFound { vertex: stranger }
    );
}

#[test]
fn vertices_shared_between_graphs() {
    let a = Vertex::new();
    let b = Vertex::new();
    let c = Vertex::new();
    let first = Graph::from_edges([Edge::new(a, b, 1.0)]).unwrap();
    let second = Graph::from_edges([Edge::new(b, c, 2.0)]).unwrap();

    assert!(first.contains_vertex(b));
    assert!(second.contains_vertex(b));
    assert!(!first.contains_vertex(c));
}

#[test]
fn tagged_vertices_build_graphs() {
    let labels = ["a", "b", "c"].map(Tagged::new);
    let graph = Graph::from_edges([
        Edge::new(&labels[0], &labels[1], 1.0),
        Edge::new(&labels[1], &labels[2], 1.0),
    ])
    .unwrap();

    assert_eq!(graph.vertex_count(), 3);
    assert!(graph.contains_vertex(labels[2].vertex()));
}

#[test]
fn invalid_weight_fails_build() {
    let a = Vertex::new();
    let b = Vertex::new();
    let err = Graph::from_edges([Edge::new(a, b, f64::INFINITY)]).unwrap_err();
    assert!(matches!(err, GraphError::InvalidWeight { .. }));
    assert!(err.to_string().contains("invalid weight"));
}

#[test]
fn index_map_round_trip() {
    let (graph, vertices) = square();
    let idx_map = IndexMap::from_graph(&graph);

    for (i, &v) in vertices.iter().enumerate() {
        assert_eq!(idx_map.vertex_idx(v).unwrap(), i);
        assert_eq!(idx_map.vertex(i), v);
        assert_eq!(idx_map.springs(i).len(), 2);
    }
}

proptest! {
    /// Random multigraphs on a small vertex pool: lookups agree in both
    /// directions and duplicates collapse to the first occurrence.
    #[test]
    fn lookup_is_symmetric(pairs in prop::collection::vec((0usize..6, 0usize..6, 0.0f64..10.0), 0..30)) {
        let pool: Vec<Vertex> = (0..6).map(|_| Vertex::new()).collect();
        let edges: Vec<Edge> = pairs
            .iter()
            .filter(|(l, r, _)| l != r)
            .map(|&(l, r, w)| Edge::new(pool[l], pool[r], w))
            .collect();
        let graph = Graph::from_edges(edges.clone()).unwrap();

        for &x in graph.vertices() {
            for &y in graph.vertices() {
                let forward = graph.try_get_edge(x, y).unwrap();
                let backward = graph.try_get_edge(y, x).unwrap();
                prop_assert_eq!(forward, backward);

                if x != y {
                    let first = edges.iter().find(|e| e.contains(x) && e.contains(y));
                    prop_assert_eq!(forward.map(Edge::weight), first.map(Edge::weight));
                }
            }
        }

        // Incidence lists account for every retained edge exactly twice
        let total: usize = graph.vertices().iter().map(|&v| graph.degree(v).unwrap()).sum();
        prop_assert_eq!(total, graph.edge_count() * 2);
    }
}
