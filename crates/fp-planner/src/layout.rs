//! Planner output: one location per vertex.

use std::collections::HashMap;

use fp_core::{Location, Real, Vector, Vertex};
use fp_graph::GraphError;

use crate::error::{PlannerError, PlannerResult};

/// Final (or warm-start) positions for a set of vertices.
///
/// Entries keep the order in which vertices were indexed, which for planner
/// output is `Graph::vertices()` order.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    vertices: Vec<Vertex>,
    locations: Vec<Location>,
    lookup: HashMap<Vertex, usize>,
    iterations: usize,
    total_displacement: Real,
}

impl Layout {
    pub(crate) fn from_parts(
        vertices: Vec<Vertex>,
        locations: Vec<Location>,
        iterations: usize,
        total_displacement: Real,
    ) -> Self {
        debug_assert_eq!(vertices.len(), locations.len());
        let lookup = vertices.iter().enumerate().map(|(i, &v)| (v, i)).collect();
        Self {
            vertices,
            locations,
            lookup,
            iterations,
            total_displacement,
        }
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.lookup.contains_key(&vertex)
    }

    pub fn get(&self, vertex: Vertex) -> Option<Location> {
        self.lookup.get(&vertex).map(|&i| self.locations[i])
    }

    /// Like [`Layout::get`], but an absent vertex is an error.
    pub fn try_get(&self, vertex: Vertex) -> PlannerResult<Location> {
        self.get(vertex)
            .ok_or(PlannerError::Graph(GraphError::VertexNotFound { vertex }))
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn iter(&self) -> impl Iterator<Item = (Vertex, Location)> + '_ {
        self.vertices.iter().copied().zip(self.locations.iter().copied())
    }

    /// Iterations actually run to produce this layout.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Sum of squared net forces in the last iteration run.
    pub fn total_displacement(&self) -> Real {
        self.total_displacement
    }

    /// Distance between two placed vertices.
    pub fn distance(&self, a: Vertex, b: Vertex) -> PlannerResult<Real> {
        Ok(self.try_get(a)?.distance(self.try_get(b)?))
    }

    pub fn centroid(&self) -> Option<Vector> {
        Location::centroid(self.locations.iter().copied())
    }

    /// Axis-aligned bounding box as `(min, max)` corners.
    pub fn bounds(&self) -> Option<(Location, Location)> {
        let first = *self.locations.first()?;
        Some(self.locations.iter().fold((first, first), |(lo, hi), l| {
            (
                Location::new(lo.x.min(l.x), lo.y.min(l.y)),
                Location::new(hi.x.max(l.x), hi.y.max(l.y)),
            )
        }))
    }

    pub fn is_finite(&self) -> bool {
        self.locations.iter().all(|l| l.is_finite())
    }

    /// Error naming the first vertex whose location is NaN or infinite.
    pub fn ensure_finite(&self) -> PlannerResult<()> {
        match self.iter().find(|(_, l)| !l.is_finite()) {
            Some((vertex, _)) => Err(PlannerError::NonFinite { vertex }),
            None => Ok(()),
        }
    }

    pub fn into_map(self) -> HashMap<Vertex, Location> {
        self.vertices.into_iter().zip(self.locations).collect()
    }
}

/// Build a layout by hand, e.g. as a warm start. A repeated vertex keeps its
/// last location.
impl FromIterator<(Vertex, Location)> for Layout {
    fn from_iter<I: IntoIterator<Item = (Vertex, Location)>>(iter: I) -> Self {
        let mut vertices = Vec::new();
        let mut locations = Vec::new();
        let mut lookup = HashMap::new();
        for (vertex, location) in iter {
            match lookup.get(&vertex) {
                Some(&i) => locations[i] = location,
                None => {
                    lookup.insert(vertex, vertices.len());
                    vertices.push(vertex);
                    locations.push(location);
                }
            }
        }
        Self {
            vertices,
            locations,
            lookup,
            iterations: 0,
            total_displacement: 0.0,
        }
    }
}
