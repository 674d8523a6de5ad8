//! Error types for planner operations.

use fp_core::{FpError, Vertex};
use fp_graph::GraphError;
use thiserror::Error;

/// Errors that can occur while planning a layout.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlannerError {
    #[error("Invalid planner configuration: {what}")]
    InvalidConfig { what: String },

    #[error("Planning cancelled before iteration {iteration}")]
    Cancelled { iteration: usize },

    #[error("Non-finite location for vertex {vertex}")]
    NonFinite { vertex: Vertex },

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),
}

pub type PlannerResult<T> = Result<T, PlannerError>;

impl From<PlannerError> for FpError {
    fn from(e: PlannerError) -> Self {
        match e {
            PlannerError::InvalidConfig { what: _ } => FpError::InvalidArg {
                what: "planner configuration",
            },
            PlannerError::Cancelled { iteration: _ } => FpError::Invariant {
                what: "planning cancelled",
            },
            PlannerError::NonFinite { vertex: _ } => FpError::NonFinite {
                what: "vertex location",
                value: f64::NAN,
            },
            PlannerError::Graph(g) => g.into(),
        }
    }
}
