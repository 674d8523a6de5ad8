//! Payload-carrying vertices.

use core::borrow::Borrow;
use core::fmt;
use core::hash::{Hash, Hasher};

use fp_core::Vertex;

/// A vertex handle bundled with caller data (a label, a domain record, ...).
///
/// Identity is the handle alone: equality and hashing ignore the payload, so
/// two `Tagged` values with equal payloads are still distinct vertices.
/// `Tagged<T>` borrows as [`Vertex`], which lets sets and maps keyed by
/// tagged vertices be queried with plain handles.
#[derive(Clone)]
pub struct Tagged<T> {
    vertex: Vertex,
    payload: T,
}

impl<T> Tagged<T> {
    /// Wrap `payload` with a freshly allocated vertex handle.
    pub fn new(payload: T) -> Self {
        Self {
            vertex: Vertex::new(),
            payload,
        }
    }

    /// Attach `payload` to an existing handle.
    pub fn with_vertex(vertex: Vertex, payload: T) -> Self {
        Self { vertex, payload }
    }

    pub fn vertex(&self) -> Vertex {
        self.vertex
    }

    pub fn payload(&self) -> &T {
        &self.payload
    }

    pub fn into_payload(self) -> T {
        self.payload
    }
}

impl<T> PartialEq for Tagged<T> {
    fn eq(&self, other: &Self) -> bool {
        self.vertex == other.vertex
    }
}

impl<T> Eq for Tagged<T> {}

impl<T> Hash for Tagged<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertex.hash(state);
    }
}

impl<T> Borrow<Vertex> for Tagged<T> {
    fn borrow(&self) -> &Vertex {
        &self.vertex
    }
}

impl<T> From<&Tagged<T>> for Vertex {
    fn from(tagged: &Tagged<T>) -> Self {
        tagged.vertex
    }
}

impl<T: fmt::Debug> fmt::Debug for Tagged<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tagged")
            .field("vertex", &self.vertex)
            .field("payload", &self.payload)
            .finish()
    }
}

impl<T: fmt::Display> fmt::Display for Tagged<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.payload)
    }
}
