//! Graph validation logic.

use fp_core::{Vertex, ensure_non_negative};

use crate::edge::Edge;
use crate::error::{GraphError, GraphResult};

/// Validate retained edges: no self-loops, finite non-negative weights.
pub(crate) fn validate_edges(edges: &[Edge]) -> GraphResult<()> {
    for edge in edges {
        if edge.is_self_loop() {
            return Err(GraphError::SelfLoop {
                vertex: edge.left(),
            });
        }

        if ensure_non_negative(edge.weight(), "edge weight").is_err() {
            return Err(GraphError::InvalidWeight {
                left: edge.left(),
                right: edge.right(),
                weight: edge.weight(),
            });
        }
    }

    Ok(())
}

/// Validate incidence lists for consistency.
///
/// Every edge must appear exactly twice (once per endpoint) and only in the
/// lists of its own endpoints.
pub(crate) fn validate_incidence(
    vertices: &[Vertex],
    edges: &[Edge],
    vertex_edge_offsets: &[usize],
    vertex_edges: &[usize],
) -> GraphResult<()> {
    let mut occurrences = vec![0u32; edges.len()];

    for (i, &vertex) in vertices.iter().enumerate() {
        let start = vertex_edge_offsets[i];
        let end = vertex_edge_offsets[i + 1];

        for &e in &vertex_edges[start..end] {
            // Edge must exist and touch this vertex
            match edges.get(e) {
                Some(edge) if edge.contains(vertex) => occurrences[e] += 1,
                _ => return Err(GraphError::InconsistentIncidence { vertex }),
            }
        }
    }

    if let Some(e) = occurrences.iter().position(|&n| n != 2) {
        return Err(GraphError::InconsistentIncidence {
            vertex: edges[e].left(),
        });
    }

    Ok(())
}
