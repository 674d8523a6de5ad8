//! Force laws.
//!
//! Every force is expressed as the displacement it would cause on the vertex
//! at `of`; the integrator applies it with a unit step.

use fp_core::{Location, Real, Vector};
use fp_graph::IndexMap;

use crate::config::{CoincidencePolicy, PlannerConfig};

/// Push `of` directly away from `from` with magnitude `strength / d²`.
///
/// Under [`CoincidencePolicy::Skip`] a pair too close for the magnitude to be
/// finite is treated as coincident.
pub fn repulsion(of: Location, from: Location, strength: Real, policy: CoincidencePolicy) -> Vector {
    let Some((away, distance)) = direction(of - from, policy) else {
        return Vector::ZERO;
    };
    let magnitude = strength / (distance * distance);
    if policy == CoincidencePolicy::Skip && !magnitude.is_finite() {
        return Vector::ZERO;
    }
    away * magnitude
}

/// Pull `of` toward `from` with magnitude `strength * max(d - rest_length, 0)`.
///
/// The spring is one-sided: endpoints closer than `rest_length` feel nothing.
pub fn attraction(
    of: Location,
    from: Location,
    rest_length: Real,
    strength: Real,
    policy: CoincidencePolicy,
) -> Vector {
    match direction(of - from, policy) {
        Some((away, distance)) => {
            let stretch = (distance - rest_length).max(0.0);
            away * -(strength * stretch)
        }
        None => Vector::ZERO,
    }
}

fn direction(offset: Vector, policy: CoincidencePolicy) -> Option<(Vector, Real)> {
    match policy {
        CoincidencePolicy::Skip => offset.try_normalized(),
        CoincidencePolicy::Propagate => Some(offset.normalized()),
    }
}

/// Summed repulsion from every other vertex onto vertex `idx`.
pub fn total_repulsion(idx: usize, snapshot: &[Location], config: &PlannerConfig) -> Vector {
    let here = snapshot[idx];
    snapshot
        .iter()
        .enumerate()
        .filter(|&(other, _)| other != idx)
        .map(|(_, &there)| repulsion(here, there, config.repulsion_strength, config.coincidence))
        .sum()
}

/// Summed spring pull from every edge incident to vertex `idx`.
pub fn total_attraction(
    idx: usize,
    index: &IndexMap,
    snapshot: &[Location],
    config: &PlannerConfig,
) -> Vector {
    let here = snapshot[idx];
    index
        .springs(idx)
        .iter()
        .map(|spring| {
            attraction(
                here,
                snapshot[spring.other],
                spring.rest_length,
                config.attraction_strength,
                config.coincidence,
            )
        })
        .sum()
}

/// Net force on vertex `idx`, read entirely from `snapshot`.
pub fn net_force(
    idx: usize,
    index: &IndexMap,
    snapshot: &[Location],
    config: &PlannerConfig,
) -> Vector {
    total_repulsion(idx, snapshot, config) + total_attraction(idx, index, snapshot, config)
}
