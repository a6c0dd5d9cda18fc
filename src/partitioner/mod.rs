//! Partitioner abstraction for the hash ring.
//!
//! Partitioners are responsible for converting keys into digests
//! that can be placed on the hash ring.

pub mod crc32;
pub mod traits;
pub mod xxh3;

pub use crc32::Crc32Partitioner;
pub use traits::Partitioner;
pub use xxh3::Xxh3Partitioner;
