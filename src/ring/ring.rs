//! Hash ring data structure.

use std::fmt;

use parking_lot::RwLock;
use tracing::debug;

use crate::error::{Error, Result};
use crate::node::Node;
use crate::partitioner::{Crc32Partitioner, Partitioner};
use crate::ring::builder::RingBuilder;
use crate::ring::space::HashSpace;

/// A consistent-hashing ring mapping string keys to named nodes.
///
/// Nodes occupy fixed positions on a circular hash space; a key belongs to
/// the first node at or after the key's own position, wrapping past the top
/// of the space back to the lowest node. Adding or removing a node therefore
/// remaps only the keys on the arc adjacent to that node, which is the whole
/// point of consistent hashing.
///
/// Each id occupies exactly one position, derived from the id when it is
/// added. Ids are unique within the ring; positions need not be, and nodes
/// sharing a position are ordered by id.
///
/// All operations take `&self`. The node sequence is guarded by a
/// reader-writer lock: lookups run concurrently while membership changes
/// serialize.
///
/// ```
/// use hashring::Ring;
///
/// let ring = Ring::new();
/// ring.add_node("cache-1").unwrap();
/// ring.add_node("cache-2").unwrap();
///
/// let owner = ring.lookup("user:1001").unwrap();
/// assert!(ring.get_node(&owner).is_some());
/// ```
pub struct Ring {
    nodes: RwLock<Vec<Node>>,
    space: HashSpace,
    partitioner: Box<dyn Partitioner>,
}

impl Ring {
    /// Creates an empty ring with the default configuration: CRC-32
    /// partitioner on the 1000-bucket space.
    pub fn new() -> Self {
        Self::with_parts(HashSpace::default(), Box::new(Crc32Partitioner))
    }

    /// Returns a builder for configuring the hash space and partitioner.
    pub fn builder() -> RingBuilder {
        RingBuilder::new()
    }

    pub(crate) fn with_parts(space: HashSpace, partitioner: Box<dyn Partitioner>) -> Self {
        Self {
            nodes: RwLock::new(Vec::new()),
            space,
            partitioner,
        }
    }

    /// Position of a key on this ring's hash space.
    pub fn position_of(&self, key: impl AsRef<[u8]>) -> u32 {
        self.space.position(self.partitioner.digest(key.as_ref()))
    }

    /// Returns the node with the given id, if present.
    ///
    /// This is a membership check by literal id, not a hash lookup: it
    /// answers "is this node in the ring", not "which node owns this key".
    pub fn get_node(&self, id: &str) -> Option<Node> {
        let nodes = self.nodes.read();
        nodes.iter().find(|node| node.id == id).cloned()
    }

    /// Adds a node and returns it.
    ///
    /// The node's position is derived from `id` exactly once, here. Any id
    /// string is accepted, including the empty string. Fails with
    /// [`Error::NodeAlreadyExists`] if the id is already present.
    ///
    /// Ownership of the arc immediately clockwise of the new node's position
    /// transfers to it from its successor; keys elsewhere keep their owner.
    pub fn add_node(&self, id: impl Into<String>) -> Result<Node> {
        let id = id.into();
        let position = self.position_of(id.as_bytes());
        let node = Node::new(id, position);

        let mut nodes = self.nodes.write();
        if nodes.iter().any(|existing| existing.id == node.id) {
            return Err(Error::NodeAlreadyExists(node.id));
        }

        // Insert at the sorted slot; ties on position order by id.
        let at = nodes
            .partition_point(|n| (n.position, n.id.as_str()) < (node.position, node.id.as_str()));
        nodes.insert(at, node.clone());
        drop(nodes);

        debug!(%node, "added node to ring");
        Ok(node)
    }

    /// Removes the node with the given id.
    ///
    /// The node is located by literal id, so removal stays correct even when
    /// several ids share one position. Fails with [`Error::NodeNotFound`] if
    /// the id is absent. Keys owned by the removed node transfer to its
    /// successor on the ring.
    pub fn remove_node(&self, id: &str) -> Result<()> {
        let mut nodes = self.nodes.write();
        let at = nodes
            .iter()
            .position(|node| node.id == id)
            .ok_or_else(|| Error::NodeNotFound(id.to_string()))?;
        let node = nodes.remove(at);
        drop(nodes);

        debug!(%node, "removed node from ring");
        Ok(())
    }

    /// Returns the id of the node owning `key`.
    ///
    /// Fails with [`Error::EmptyRing`] on a ring with no nodes.
    pub fn lookup(&self, key: impl AsRef<[u8]>) -> Result<String> {
        self.lookup_node(key).map(|node| node.id)
    }

    /// Returns the node owning `key`.
    ///
    /// The owner is the first node whose position is at or after the key's
    /// position; a key past the highest node wraps around to the lowest one.
    /// Fails with [`Error::EmptyRing`] on a ring with no nodes.
    pub fn lookup_node(&self, key: impl AsRef<[u8]>) -> Result<Node> {
        let position = self.position_of(key);
        let nodes = self.nodes.read();
        if nodes.is_empty() {
            return Err(Error::EmptyRing);
        }
        Ok(nodes[owner_index(&nodes, position)].clone())
    }

    /// Returns the id of the node immediately after the node `id` in ring
    /// order, wrapping past the last node back to the first.
    ///
    /// On a single-node ring a node is its own successor. Fails with
    /// [`Error::NodeNotFound`] if `id` is not in the ring. Useful for
    /// replica or fallback routing.
    pub fn successor(&self, id: &str) -> Result<String> {
        let nodes = self.nodes.read();
        let at = nodes
            .iter()
            .position(|node| node.id == id)
            .ok_or_else(|| Error::NodeNotFound(id.to_string()))?;
        Ok(nodes[(at + 1) % nodes.len()].id.clone())
    }

    /// Number of nodes in the ring.
    pub fn node_count(&self) -> usize {
        self.nodes.read().len()
    }

    /// True if the ring has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.read().is_empty()
    }

    /// Snapshot of all nodes, in ring order.
    pub fn nodes(&self) -> Vec<Node> {
        self.nodes.read().clone()
    }

    /// Name of the partitioner this ring was built with.
    pub fn partitioner_name(&self) -> &'static str {
        self.partitioner.name()
    }

    /// The hash space this ring places nodes and keys on.
    pub fn hash_space(&self) -> HashSpace {
        self.space
    }
}

impl Default for Ring {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Ring")
            .field("nodes", &self.nodes.read().len())
            .field("space", &self.space)
            .field("partitioner", &self.partitioner.name())
            .finish()
    }
}

/// Index of the first node at or after `position`; index 0 when `position`
/// is past the highest node (circular wraparound).
///
/// `nodes` must be sorted by position and non-empty.
fn owner_index(nodes: &[Node], position: u32) -> usize {
    let at = nodes.partition_point(|node| node.position < position);
    if at == nodes.len() {
        0
    } else {
        at
    }
}
