//! Graph-specific error types.

use fp_core::{FpError, Vertex};
use thiserror::Error;

/// Graph construction and lookup errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    /// The vertex was never part of any edge (or registered) at construction.
    #[error("Vertex {vertex} not found in graph")]
    VertexNotFound { vertex: Vertex },

    /// An edge connects a vertex to itself.
    #[error("Edge connects vertex {vertex} to itself")]
    SelfLoop { vertex: Vertex },

    /// An edge weight (desired distance) is negative or non-finite.
    #[error("Edge {left}-{right} has invalid weight {weight} (expected finite and >= 0)")]
    InvalidWeight {
        left: Vertex,
        right: Vertex,
        weight: f64,
    },

    /// Incidence index disagrees with the edge list.
    #[error("Incidence list of vertex {vertex} is inconsistent with the edge list")]
    InconsistentIncidence { vertex: Vertex },
}

pub type GraphResult<T> = Result<T, GraphError>;

impl From<GraphError> for FpError {
    fn from(err: GraphError) -> Self {
        match err {
            GraphError::VertexNotFound { .. } => FpError::NotFound { what: "vertex" },
            GraphError::SelfLoop { .. } => FpError::InvalidArg { what: "self-loop edge" },
            GraphError::InvalidWeight { .. } => FpError::InvalidArg { what: "edge weight" },
            GraphError::InconsistentIncidence { .. } => FpError::Invariant {
                what: "graph incidence index",
            },
        }
    }
}
