//! Node abstractions for the consistent hash ring.
//!
//! Nodes represent named participants on the ring. Each one occupies a single
//! position derived from its id when it is added; the ring hands out clones,
//! never references into its own storage.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named participant owning a contiguous arc of the hash space.
///
/// The position is computed exactly once, when the node is inserted, and
/// never changes afterwards. Keep this struct small and cheap to clone; any
/// heavier per-node state (connections, stats, etc.) belongs to the caller.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct Node {
    /// Caller-supplied identifier, unique within the ring.
    pub id: String,
    /// Fixed position on the ring, derived from `id`.
    pub position: u32,
}

impl Node {
    /// Construct a node at the given ring position.
    pub fn new(id: impl Into<String>, position: u32) -> Self {
        Self {
            id: id.into(),
            position,
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.id, self.position)
    }
}
