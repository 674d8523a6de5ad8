//! Undirected weighted edges.
//!
//! An edge joins two vertices and carries a weight: the desired distance
//! between its endpoints in the final layout. Edges are unordered, so
//! `Edge::new(a, b, w)` and `Edge::new(b, a, w)` are the same edge. The weight
//! takes no part in equality, which is what lets a graph drop a later
//! duplicate whose weight differs.

use core::hash::{Hash, Hasher};

use fp_core::{Real, Vertex};

#[derive(Debug, Clone, Copy)]
pub struct Edge {
    left: Vertex,
    right: Vertex,
    weight: Real,
}

impl Edge {
    /// Create an edge between `left` and `right` with the given desired distance.
    ///
    /// Weights are validated when the edge is added to a graph, not here.
    pub fn new(left: impl Into<Vertex>, right: impl Into<Vertex>, weight: Real) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            weight,
        }
    }

    pub fn left(&self) -> Vertex {
        self.left
    }

    pub fn right(&self) -> Vertex {
        self.right
    }

    /// Desired distance between the endpoints.
    pub fn weight(&self) -> Real {
        self.weight
    }

    /// Endpoints in canonical (sorted) order.
    pub fn endpoints(&self) -> (Vertex, Vertex) {
        if self.left <= self.right {
            (self.left, self.right)
        } else {
            (self.right, self.left)
        }
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.left == vertex || self.right == vertex
    }

    /// The endpoint opposite `vertex`, or `None` if `vertex` is not an endpoint.
    pub fn other(&self, vertex: Vertex) -> Option<Vertex> {
        if self.left == vertex {
            Some(self.right)
        } else if self.right == vertex {
            Some(self.left)
        } else {
            None
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.left == self.right
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.endpoints() == other.endpoints()
    }
}

impl Eq for Edge {}

impl Hash for Edge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.endpoints().hash(state);
    }
}

/// An edge "equals" a vertex when the vertex is one of its endpoints.
impl PartialEq<Vertex> for Edge {
    fn eq(&self, vertex: &Vertex) -> bool {
        self.contains(*vertex)
    }
}
