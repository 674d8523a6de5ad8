//! Force-directed layout solver for undirected weighted graphs.
//!
//! This crate places every vertex of an `fp_graph::Graph` in the plane by
//! iterating a simple physical model: all vertex pairs repel with an
//! inverse-square law, and each edge acts as a one-sided spring that pulls its
//! endpoints together once they are farther apart than the edge weight. Each
//! iteration applies the net force as a unit-step displacement and then
//! recentres the layout on the origin.

pub mod config;
pub mod error;
pub mod forces;
pub mod initialization;
pub mod layout;
pub mod planner;
pub mod progress;

pub use config::{CoincidencePolicy, PlannerConfig};
pub use error::{PlannerError, PlannerResult};
pub use layout::Layout;
pub use planner::{PlanOptions, Planner};
pub use progress::{CancelToken, PlanProgress};
