//! Ring construction (builder pattern).

use std::fmt;

use crate::error::{Error, Result};
use crate::partitioner::{Crc32Partitioner, Partitioner};
use crate::ring::ring::Ring;
use crate::ring::space::HashSpace;

/// Builder for [`Ring`].
///
/// Configures the hash space and partitioner, optionally seeds the ring with
/// an initial set of node ids, and validates the configuration at build time.
///
/// ```
/// use hashring::{HashSpace, Ring, Xxh3Partitioner};
///
/// let ring = Ring::builder()
///     .with_hash_space(HashSpace::Full)
///     .with_partitioner(Xxh3Partitioner)
///     .add_node("cache-1")
///     .add_node("cache-2")
///     .build()
///     .unwrap();
/// assert_eq!(ring.node_count(), 2);
/// ```
pub struct RingBuilder {
    space: HashSpace,
    partitioner: Box<dyn Partitioner>,
    seeds: Vec<String>,
}

impl RingBuilder {
    /// Creates a builder with the default configuration: CRC-32 partitioner
    /// on the 1000-bucket space.
    pub fn new() -> Self {
        Self {
            space: HashSpace::default(),
            partitioner: Box::new(Crc32Partitioner),
            seeds: Vec::new(),
        }
    }

    /// Sets the hash space nodes and keys are positioned on.
    pub fn with_hash_space(mut self, space: HashSpace) -> Self {
        self.space = space;
        self
    }

    /// Sets the partitioner used to derive positions from ids and keys.
    pub fn with_partitioner(mut self, partitioner: impl Partitioner) -> Self {
        self.partitioner = Box::new(partitioner);
        self
    }

    /// Adds a node id to insert when the ring is built.
    pub fn add_node(mut self, id: impl Into<String>) -> Self {
        self.seeds.push(id.into());
        self
    }

    /// Builds the ring and inserts any seeded node ids.
    ///
    /// Fails with [`Error::Config`] if the hash space has zero buckets, and
    /// with [`Error::NodeAlreadyExists`] if a seeded id repeats.
    pub fn build(self) -> Result<Ring> {
        if self.space == HashSpace::Buckets(0) {
            return Err(Error::Config(
                "hash space must have at least one bucket".into(),
            ));
        }

        let ring = Ring::with_parts(self.space, self.partitioner);
        for id in self.seeds {
            ring.add_node(id)?;
        }
        Ok(ring)
    }
}

impl Default for RingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RingBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RingBuilder")
            .field("space", &self.space)
            .field("partitioner", &self.partitioner.name())
            .field("seeds", &self.seeds)
            .finish()
    }
}
