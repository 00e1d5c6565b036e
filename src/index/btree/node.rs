//! Tree vertices: leaves holding records and internal nodes holding separators.
//!
//! # Layout
//! ```text
//! Internal:  keys      [ k0 | k1 | ... | kn-1 ]
//!            children  [ c0 | c1 | ... | cn-1 | cn ]     children = keys + 1
//!
//!            every key under c[i] <  k[i]
//!            every key under c[i+1] >= k[i]
//!
//! Leaf:      keys      [ k0 | k1 | ... ]
//!            pointers  [ p0 | p1 | ... ]                 parallel to keys
//!            next  ──▶ right neighbour leaf (or none)
//! ```
//!
//! Children and `next` are [`NodeId`]s into the owning tree's node store.
//! A node never owns another node; `next` in particular is only a
//! traversal link.

use crate::common::{Key, NodeId, RecordPointer};

/// A tree vertex.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(LeafNode),
    Internal(InternalNode),
}

impl Node {
    /// The keys stored in this node, ascending.
    pub fn keys(&self) -> &[Key] {
        match self {
            Node::Leaf(leaf) => &leaf.keys,
            Node::Internal(internal) => &internal.keys,
        }
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Child ids, empty for a leaf.
    pub fn children(&self) -> &[NodeId] {
        match self {
            Node::Leaf(_) => &[],
            Node::Internal(internal) => &internal.children,
        }
    }

    /// Whether the node holds `max_keys` keys and must be split before
    /// anything descends into it.
    #[inline]
    pub fn is_full(&self, max_keys: usize) -> bool {
        self.keys().len() >= max_keys
    }

    /// Split a full node in two.
    ///
    /// `self` keeps the left half. Returns the separator to promote into the
    /// parent and the new right sibling, which the caller must store under
    /// `sibling_id`.
    pub(crate) fn split(&mut self, order: usize, sibling_id: NodeId) -> (Key, Node) {
        match self {
            Node::Leaf(leaf) => {
                let (separator, sibling) = leaf.split(order, sibling_id);
                (separator, Node::Leaf(sibling))
            }
            Node::Internal(internal) => {
                let (separator, sibling) = internal.split(order);
                (separator, Node::Internal(sibling))
            }
        }
    }
}

/// A leaf: sorted keys, the record pointer of each key, and the link to the
/// next leaf in key order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeafNode {
    pub(crate) keys: Vec<Key>,
    pub(crate) pointers: Vec<RecordPointer>,
    pub(crate) next: Option<NodeId>,
}

impl LeafNode {
    /// A leaf holding a single record and no right neighbour.
    pub(crate) fn with_entry(key: Key, pointer: RecordPointer) -> Self {
        Self {
            keys: vec![key],
            pointers: vec![pointer],
            next: None,
        }
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn pointers(&self) -> &[RecordPointer] {
        &self.pointers
    }

    /// The leaf immediately to the right in global key order.
    pub fn next(&self) -> Option<NodeId> {
        self.next
    }

    /// `(key, pointer)` pairs in ascending key order.
    pub fn entries(&self) -> impl Iterator<Item = (Key, RecordPointer)> + '_ {
        self.keys.iter().copied().zip(self.pointers.iter().copied())
    }

    /// Exact-match lookup.
    pub fn get(&self, key: Key) -> Option<RecordPointer> {
        self.keys
            .binary_search(&key)
            .ok()
            .map(|pos| self.pointers[pos])
    }

    /// Insert at the sorted position. Returns `false` and leaves the leaf
    /// untouched if `key` is already present.
    pub(crate) fn insert(&mut self, key: Key, pointer: RecordPointer) -> bool {
        match self.keys.binary_search(&key) {
            Ok(_) => false,
            Err(pos) => {
                self.keys.insert(pos, key);
                self.pointers.insert(pos, pointer);
                true
            }
        }
    }

    /// Remove `key` and return the pointer it carried.
    pub(crate) fn remove(&mut self, key: Key) -> Option<RecordPointer> {
        let pos = self.keys.binary_search(&key).ok()?;
        self.keys.remove(pos);
        Some(self.pointers.remove(pos))
    }

    /// Copy-up split: the left keeps `order` entries, the right gets the rest
    /// and its first key becomes the separator. The right sibling is spliced
    /// into the chain directly after `self`.
    fn split(&mut self, order: usize, sibling_id: NodeId) -> (Key, LeafNode) {
        let sibling = LeafNode {
            keys: self.keys.split_off(order),
            pointers: self.pointers.split_off(order),
            next: self.next.replace(sibling_id),
        };
        (sibling.keys[0], sibling)
    }
}

/// An internal node: separators and the children they delimit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternalNode {
    pub(crate) keys: Vec<Key>,
    pub(crate) children: Vec<NodeId>,
}

impl InternalNode {
    /// A separator-less node over a single child, used as the new root
    /// right before the old root is split beneath it.
    pub(crate) fn with_child(child: NodeId) -> Self {
        Self {
            keys: Vec::new(),
            children: vec![child],
        }
    }

    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Index of the child whose subtree may contain `key`.
    ///
    /// A key equal to a separator routes right, since leaf splits copy the
    /// right sibling's first key up.
    #[inline]
    pub fn child_index(&self, key: Key) -> usize {
        self.keys.partition_point(|&separator| separator <= key)
    }

    /// The child whose subtree may contain `key`.
    #[inline]
    pub fn child_for(&self, key: Key) -> NodeId {
        self.children[self.child_index(key)]
    }

    /// Record that `children[index]` was split: `separator` goes in at
    /// `index`, the new right sibling directly after the split child.
    pub(crate) fn adopt(&mut self, index: usize, separator: Key, right: NodeId) {
        self.keys.insert(index, separator);
        self.children.insert(index + 1, right);
    }

    /// Move-up split: the left keeps `order` children and `order - 1` keys,
    /// the key at `order - 1` leaves the node to become the separator.
    fn split(&mut self, order: usize) -> (Key, InternalNode) {
        let keys = self.keys.split_off(order);
        let children = self.children.split_off(order);
        let separator = self
            .keys
            .pop()
            .unwrap_or_else(|| unreachable!("split of an internal node below order {order}"));
        (separator, InternalNode { keys, children })
    }
}
