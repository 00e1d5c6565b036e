//! Node identifier type.

use std::fmt;

/// Identifies a node (a simulated page) inside a tree's node store.
///
/// Nodes are never freed, so an id stays valid for the lifetime of the
/// tree that issued it. Ids are handed out sequentially from zero.
///
/// Using `u32` caps a tree at 4,294,967,296 nodes; allocating past that
/// panics rather than reusing an id.
///
/// # Example
/// ```
/// use bplus_index::NodeId;
///
/// let node_id = NodeId::new(42);
/// assert_eq!(node_id.index(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new NodeId.
    #[inline]
    pub fn new(id: u32) -> Self {
        NodeId(id)
    }

    /// Id of the node stored at position `index`.
    ///
    /// # Panics
    /// Panics if `index` does not fit in a `u32`.
    #[inline]
    pub fn from_index(index: usize) -> Self {
        match u32::try_from(index) {
            Ok(id) => NodeId(id),
            Err(_) => panic!("node index {index} exceeds the NodeId limit of {}", u32::MAX),
        }
    }

    /// Position of the node in its store.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}
