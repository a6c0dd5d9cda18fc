//! Core partitioner trait definition.

/// A partitioner converts keys into 32-bit digests for placement on the
/// hash ring.
///
/// Partitioners are stateless and thread-safe, allowing concurrent digest
/// computation without synchronization overhead. They always produce the full
/// 32-bit width; reducing a digest onto the configured
/// [`HashSpace`](crate::ring::HashSpace) is the ring's job.
pub trait Partitioner: Send + Sync + 'static {
    /// Computes the 32-bit digest of a key.
    ///
    /// # Arguments
    ///
    /// * `key` - The key bytes to digest
    ///
    /// # Returns
    ///
    /// A digest identifying the key's place on the full 32-bit ring
    fn digest(&self, key: &[u8]) -> u32;

    /// Returns the name of this partitioner.
    fn name(&self) -> &'static str;
}
