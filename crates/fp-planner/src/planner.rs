//! The force-directed iteration loop.

use fp_core::{Location, Real, Vector};
use fp_graph::{Graph, IndexMap};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, trace, warn};

use crate::config::PlannerConfig;
use crate::error::{PlannerError, PlannerResult};
use crate::forces;
use crate::initialization::initial_locations;
use crate::layout::Layout;
use crate::progress::{CancelToken, PlanProgress};

/// Optional inputs to [`Planner::plan_with`].
#[derive(Default)]
pub struct PlanOptions<'a> {
    /// Previous layout to resume from; vertices it lacks start at random.
    pub initial: Option<&'a Layout>,
    /// Checked before every iteration.
    pub cancel: Option<&'a CancelToken>,
    /// Called after every completed iteration.
    pub progress: Option<&'a mut dyn FnMut(&PlanProgress<'_>)>,
}

/// Force-directed layout solver.
///
/// Each iteration:
/// 1. computes the net force on every vertex from the previous iteration's
///    locations (all vertex pairs repel, edges pull stretched endpoints
///    together),
/// 2. moves every vertex by its net force,
/// 3. shifts the whole layout so its centroid sits at the origin.
///
/// Forces are computed from a snapshot, so the result does not depend on the
/// order in which vertices are visited.
#[derive(Debug, Clone, Copy, Default)]
pub struct Planner {
    config: PlannerConfig,
}

impl Planner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Lay out `graph`, drawing random starting locations from `rng`.
    pub fn plan<R: Rng>(&self, graph: &Graph, rng: &mut R) -> PlannerResult<Layout> {
        self.plan_with(graph, rng, PlanOptions::default())
    }

    /// Lay out `graph` from a reproducible seed.
    pub fn plan_seeded(&self, graph: &Graph, seed: u64) -> PlannerResult<Layout> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.plan(graph, &mut rng)
    }

    /// Lay out `graph` with a warm start, cancellation or progress reporting.
    ///
    /// With `CoincidencePolicy::Propagate` a non-finite layout is returned as
    /// `Ok`; check it with [`Layout::ensure_finite`].
    pub fn plan_with<R: Rng>(
        &self,
        graph: &Graph,
        rng: &mut R,
        mut options: PlanOptions<'_>,
    ) -> PlannerResult<Layout> {
        self.config.validate()?;

        let index = IndexMap::from_graph(graph);
        let vertex_count = index.vertex_count();
        if vertex_count == 0 {
            debug!("empty graph, nothing to plan");
            return Ok(Layout::default());
        }

        debug!(
            vertices = vertex_count,
            edges = graph.edge_count(),
            max_iterations = self.config.max_iterations,
            parallel = self.config.parallel,
            coincidence = self.config.coincidence.as_str(),
            warm_start = options.initial.is_some(),
            "planning layout"
        );

        let mut current = initial_locations(&index, rng, options.initial);
        let mut iterations = 0;
        let mut total_displacement = 0.0;

        for iteration in 0..self.config.max_iterations {
            if options.cancel.is_some_and(CancelToken::is_cancelled) {
                debug!(iteration, "planning cancelled");
                return Err(PlannerError::Cancelled { iteration });
            }

            let net_forces = self.compute_forces(&index, &current);
            total_displacement = net_forces.iter().map(|f| f.squared_norm()).sum::<Real>();

            let mut next: Vec<Location> = current
                .iter()
                .zip(&net_forces)
                .map(|(&location, &force)| location + force)
                .collect();
            recentre(&mut next);
            current = next;
            iterations = iteration + 1;

            trace!(iteration = iterations, total_displacement, "iteration complete");

            if let Some(progress) = options.progress.as_deref_mut() {
                progress(&PlanProgress {
                    iteration: iterations,
                    max_iterations: self.config.max_iterations,
                    total_displacement,
                    vertices: index.vertices(),
                    locations: &current,
                });
            }

            if let Some(threshold) = self.config.convergence_threshold {
                if total_displacement < threshold {
                    debug!(iterations, total_displacement, "converged");
                    break;
                }
            }
        }

        let layout = Layout::from_parts(
            index.vertices().to_vec(),
            current,
            iterations,
            total_displacement,
        );

        if let Err(e) = layout.ensure_finite() {
            warn!(error = %e, "layout contains non-finite locations");
        }
        debug!(iterations, total_displacement, "planning finished");

        Ok(layout)
    }

    /// Net force per vertex, in index order.
    fn compute_forces(&self, index: &IndexMap, snapshot: &[Location]) -> Vec<Vector> {
        let force_on = |idx: usize| forces::net_force(idx, index, snapshot, &self.config);
        if self.config.parallel {
            (0..snapshot.len()).into_par_iter().map(force_on).collect()
        } else {
            (0..snapshot.len()).map(force_on).collect()
        }
    }
}

/// Translate `locations` so their centroid is the origin.
fn recentre(locations: &mut [Location]) {
    if let Some(centre) = Location::centroid(locations.iter().copied()) {
        for location in locations.iter_mut() {
            *location = *location - centre;
        }
    }
}
