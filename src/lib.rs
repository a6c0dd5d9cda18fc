//! Consistent-hashing ring mapping string keys to named nodes.
//!
//! This crate provides the building blocks for stable key placement:
//! - Partitioner algorithms for hashing ids and keys
//! - A configurable circular hash space
//! - A thread-safe ring with lookup, successor, and membership operations
//!
//! The ring places each node at a position derived from its id and assigns
//! every key to the first node at or after the key's position, wrapping at
//! the top of the space. Membership changes remap only the keys adjacent to
//! the changed node, so caches and shard maps stay mostly intact as nodes
//! come and go.

pub mod error;
pub mod node;
pub mod partitioner;
pub mod ring;

pub use error::{Error, Result};
pub use node::Node;
pub use partitioner::{Crc32Partitioner, Partitioner, Xxh3Partitioner};
pub use ring::{HashSpace, Ring, RingBuilder, DEFAULT_BUCKETS};
