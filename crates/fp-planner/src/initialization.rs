//! Starting positions for a layout run.

use fp_core::Location;
use fp_graph::IndexMap;
use rand::Rng;

use crate::layout::Layout;

/// Uniform random location in the unit square `[0, 1) x [0, 1)`.
pub fn random_location<R: Rng>(rng: &mut R) -> Location {
    Location::new(rng.random(), rng.random())
}

/// Starting location for every indexed vertex, in index order.
///
/// Vertices present in `warm_start` resume from their previous location; the
/// rest draw a random location. Random draws happen in index order, so a
/// seeded generator gives reproducible starts.
pub fn initial_locations<R: Rng>(
    index: &IndexMap,
    rng: &mut R,
    warm_start: Option<&Layout>,
) -> Vec<Location> {
    index
        .vertices()
        .iter()
        .map(|&vertex| {
            warm_start
                .and_then(|layout| layout.get(vertex))
                .unwrap_or_else(|| random_location(rng))
        })
        .collect()
}
