//! Progress reporting and cooperative cancellation for long runs.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use fp_core::{Location, Real, Vertex};

/// Snapshot handed to the progress callback after each completed iteration.
///
/// `locations[i]` belongs to `vertices[i]`; both borrow the planner's working
/// state, so copy anything that must outlive the callback.
#[derive(Debug, Clone, Copy)]
pub struct PlanProgress<'a> {
    /// Number of iterations completed so far (1-based)
    pub iteration: usize,
    pub max_iterations: usize,
    /// Sum of squared net forces applied during this iteration
    pub total_displacement: Real,
    pub vertices: &'a [Vertex],
    pub locations: &'a [Location],
}

impl PlanProgress<'_> {
    /// Completed share of the iteration budget, in `[0, 1]`.
    pub fn fraction_complete(&self) -> f64 {
        if self.max_iterations == 0 {
            1.0
        } else {
            self.iteration as f64 / self.max_iterations as f64
        }
    }
}

/// Shared flag that stops a running plan at the next iteration boundary.
///
/// Clones share the same flag, so one clone can be handed to another thread
/// (or captured by the progress callback) while the planner holds another.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
