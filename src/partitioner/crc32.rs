//! CRC-32 partitioner implementation (IEEE polynomial).

use crate::partitioner::traits::Partitioner;

/// CRC-32 partitioner using the IEEE polynomial.
///
/// This is the default partitioner. The checksum is not a cryptographic
/// hash: it is cheap, stable across processes and platforms, and spreads
/// node ids and keys well enough for ring placement.
#[derive(Clone, Copy, Default, Debug)]
pub struct Crc32Partitioner;

impl Partitioner for Crc32Partitioner {
    fn digest(&self, key: &[u8]) -> u32 {
        crc32fast::hash(key)
    }

    fn name(&self) -> &'static str {
        "Crc32Partitioner"
    }
}
