//! fp-graph: topology layer for forceplan.
//!
//! Provides:
//! - Vertex payload wrapper (`Tagged`) and undirected weighted `Edge`
//! - Immutable `Graph` with deduplicated edges and an incidence index
//! - Incremental `GraphBuilder` with validation
//! - Stable indexing for solver integration
//!
//! # Example
//!
//! ```
//! use fp_core::Vertex;
//! use fp_graph::{Edge, Graph};
//!
//! let a = Vertex::new();
//! let b = Vertex::new();
//! let c = Vertex::new();
//! let graph = Graph::from_edges([
//!     Edge::new(a, b, 1.0),
//!     Edge::new(b, c, 2.0),
//!     Edge::new(b, a, 3.0), // duplicate of a-b, dropped
//! ])
//! .unwrap();
//!
//! assert_eq!(graph.vertices().len(), 3);
//! assert_eq!(graph.edges().len(), 2);
//! assert_eq!(graph.try_get_edge(b, a).unwrap().unwrap().weight(), 1.0);
//! ```

pub mod builder;
pub mod edge;
pub mod error;
pub mod graph;
pub mod indexing;
pub(crate) mod validate;
pub mod vertex;

// Re-exports for ergonomics
pub use builder::GraphBuilder;
pub use edge::Edge;
pub use error::{GraphError, GraphResult};
pub use fp_core::Vertex;
pub use graph::Graph;
pub use indexing::{IndexMap, Spring};
pub use vertex::Tagged;
