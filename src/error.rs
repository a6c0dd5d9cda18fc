//! Error types for the hash ring.

use thiserror::Error;

/// Result type alias for ring operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during ring operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// No node with the given id is present in the ring.
    #[error("node not found: {0}")]
    NodeNotFound(String),

    /// A node with the given id is already present in the ring.
    #[error("node already exists: {0}")]
    NodeAlreadyExists(String),

    /// The ring has no nodes, so no key has an owner.
    #[error("ring is empty")]
    EmptyRing,

    /// Invalid ring configuration.
    #[error("invalid ring config: {0}")]
    Config(String),
}
