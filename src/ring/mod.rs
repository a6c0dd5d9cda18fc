//! Ring assembly: hash space, builder, and the ring itself.
//!
//! [`HashSpace`] fixes the circular coordinate space, [`RingBuilder`]
//! configures a ring before first use, and [`Ring`] holds the live node
//! sequence and answers lookups.

pub mod builder;
pub mod ring;
pub mod space;

pub use builder::RingBuilder;
pub use ring::Ring;
pub use space::{HashSpace, DEFAULT_BUCKETS};
