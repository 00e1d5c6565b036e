//! Node store - the simulated disk backing a tree.
//!
//! Nodes are appended and never freed, mirroring how pages are allocated at
//! the end of a database file:
//! ```text
//! ┌─────────┬─────────┬─────────┬─────────┐
//! │ Node 0  │ Node 1  │ Node 2  │  ...    │
//! └─────────┴─────────┴─────────┴─────────┘
//! ```
//! The store owns every node. Parent/child edges and the leaf chain are
//! [`NodeId`]s, so dropping the store drops the whole tree at once.

use crate::common::NodeId;
use crate::index::btree::node::{InternalNode, LeafNode, Node};

#[derive(Debug, Default)]
pub(crate) struct NodeStore {
    nodes: Vec<Node>,
}

impl NodeStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Id the next call to [`allocate`](Self::allocate) will return.
    ///
    /// # Panics
    /// Panics once the store already holds `u32::MAX + 1` nodes.
    #[inline]
    pub(crate) fn next_id(&self) -> NodeId {
        NodeId::from_index(self.nodes.len())
    }

    pub(crate) fn allocate(&mut self, node: Node) -> NodeId {
        let id = self.next_id();
        self.nodes.push(node);
        id
    }

    #[inline]
    pub(crate) fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// # Panics
    /// Panics if `id` names an internal node.
    pub(crate) fn leaf(&self, id: NodeId) -> &LeafNode {
        match self.get(id) {
            Node::Leaf(leaf) => leaf,
            Node::Internal(_) => panic!("{id} is an internal node, expected a leaf"),
        }
    }

    /// # Panics
    /// Panics if `id` names an internal node.
    pub(crate) fn leaf_mut(&mut self, id: NodeId) -> &mut LeafNode {
        match self.get_mut(id) {
            Node::Leaf(leaf) => leaf,
            Node::Internal(_) => panic!("{id} is an internal node, expected a leaf"),
        }
    }

    /// # Panics
    /// Panics if `id` names a leaf.
    pub(crate) fn internal(&self, id: NodeId) -> &InternalNode {
        match self.get(id) {
            Node::Internal(internal) => internal,
            Node::Leaf(_) => panic!("{id} is a leaf, expected an internal node"),
        }
    }

    /// # Panics
    /// Panics if `id` names a leaf.
    pub(crate) fn internal_mut(&mut self, id: NodeId) -> &mut InternalNode {
        match self.get_mut(id) {
            Node::Internal(internal) => internal,
            Node::Leaf(_) => panic!("{id} is a leaf, expected an internal node"),
        }
    }

    /// Number of nodes ever allocated.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}
