//! Hash space configuration.

use serde::{Deserialize, Serialize};

/// Bucket count of the default hash space.
///
/// Positions then live in `[0, 1000)`. That keeps them small and readable
/// but bounds how evenly nodes can spread, and makes positional collisions
/// likely once dozens of nodes are present. Widen with [`HashSpace::Full`]
/// when that matters.
pub const DEFAULT_BUCKETS: u32 = 1000;

/// The set of positions a ring places nodes and keys on.
///
/// The space is circular: the arc past the highest position wraps back to
/// the lowest one. A ring's space is fixed at construction; node positions
/// are computed once, so changing the space under live nodes would
/// desynchronize them.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum HashSpace {
    /// Digests reduced modulo the bucket count; positions live in
    /// `[0, buckets)`. The count must be non-zero; [`RingBuilder::build`]
    /// rejects `Buckets(0)`.
    ///
    /// [`RingBuilder::build`]: crate::ring::RingBuilder::build
    Buckets(u32),
    /// Digests used at their full 32-bit width.
    Full,
}

impl HashSpace {
    /// Reduce a raw digest onto this space.
    ///
    /// # Panics
    ///
    /// Panics if the space is `Buckets(0)`.
    pub fn position(self, digest: u32) -> u32 {
        match self {
            HashSpace::Buckets(buckets) => digest % buckets,
            HashSpace::Full => digest,
        }
    }
}

impl Default for HashSpace {
    fn default() -> Self {
        HashSpace::Buckets(DEFAULT_BUCKETS)
    }
}
