use core::fmt;
use core::num::NonZeroU64;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_VERTEX: AtomicU64 = AtomicU64::new(0);

/// Identity handle for a graph vertex.
///
/// - identity only: two handles are equal iff they came from the same `new()` call
/// - `Copy` and 8 bytes, so graphs and layouts store them by value
/// - `NonZero` enables `Option<Vertex>` to be pointer-optimized
///
/// Handles are process-unique, so one vertex may be shared by several graphs.
/// There is no way to construct one from a raw number, deserialisation
/// included:
///
/// ```compile_fail
/// fn deserializable<T: serde::de::DeserializeOwned>() {}
/// deserializable::<fp_core::Vertex>();
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Vertex(NonZeroU64);

impl Vertex {
    /// Allocate a fresh, never-before-seen vertex handle.
    pub fn new() -> Self {
        let index = NEXT_VERTEX.fetch_add(1, Ordering::Relaxed);
        Self(NonZeroU64::MIN.saturating_add(index))
    }

    /// 0-based allocation index of this handle.
    pub fn index(self) -> u64 {
        self.0.get() - 1
    }
}

impl Default for Vertex {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Vertex({})", self.index())
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.index())
    }
}
