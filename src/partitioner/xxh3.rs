//! XXH3 partitioner implementation.

use xxhash_rust::xxh3::xxh3_64;

use crate::partitioner::traits::Partitioner;

/// XXH3 partitioner, truncating the 64-bit digest to the ring's 32-bit width.
///
/// An alternative to the CRC-32 default that pairs well with
/// [`HashSpace::Full`](crate::ring::HashSpace::Full). A ring's partitioner is
/// fixed at construction: rings built with different partitioners place the
/// same ids at different positions.
#[derive(Clone, Copy, Default, Debug)]
pub struct Xxh3Partitioner;

impl Partitioner for Xxh3Partitioner {
    fn digest(&self, key: &[u8]) -> u32 {
        xxh3_64(key) as u32
    }

    fn name(&self) -> &'static str {
        "Xxh3Partitioner"
    }
}
