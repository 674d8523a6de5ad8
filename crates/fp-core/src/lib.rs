//! fp-core: stable foundation for forceplan.
//!
//! Contains:
//! - geometry (2D `Vector` displacements and `Location` positions)
//! - numeric (Real + tolerances + float helpers)
//! - ids (identity handles for graph vertices)
//! - error (shared error types)

pub mod error;
pub mod geometry;
pub mod ids;
pub mod numeric;

// Re-exports: nice ergonomics for downstream crates
pub use error::{FpError, FpResult};
pub use geometry::{Location, Vector};
pub use ids::Vertex;
pub use numeric::*;
