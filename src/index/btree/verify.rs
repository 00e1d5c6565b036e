//! Structural invariant checking.

use crate::common::{Key, NodeId};
use crate::index::btree::node::Node;
use crate::index::btree::BPlusTree;

impl BPlusTree {
    /// Verify the structural invariants of the tree.
    ///
    /// Checks that every node holds strictly ascending keys within its
    /// separator bounds and at most `2t - 1` of them. It also checks that
    /// internal nodes have one more child than keys and that leaves keep
    /// keys and pointers parallel at a uniform depth equal to the height.
    /// Finally the leaf chain must visit every leaf left to right and the
    /// counters must agree with the structure.
    ///
    /// Minimum occupancy is not checked: deletion never rebalances.
    ///
    /// # Errors
    /// Returns a description of the first violation found.
    pub fn check_invariants(&self) -> Result<(), String> {
        let Some(root) = self.root else {
            if self.len() != 0 || self.height() != 0 {
                return Err("empty tree with non-zero counters".to_string());
            }
            return Ok(());
        };

        let mut walk = Walk::default();
        self.check_node(root, 1, None, None, &mut walk)?;

        if walk.keys != self.len() {
            return Err(format!(
                "tree holds {} keys but total_keys is {}",
                walk.keys,
                self.len()
            ));
        }
        let total_nodes = self.stats().total_nodes as usize;
        if total_nodes != self.store.len() {
            return Err(format!(
                "total_nodes is {total_nodes} but {} nodes were allocated",
                self.store.len()
            ));
        }

        let mut chained = Vec::with_capacity(walk.leaves.len());
        let mut cursor = Some(self.leftmost_leaf(root));
        while let Some(id) = cursor {
            if chained.len() > walk.leaves.len() {
                return Err("leaf chain is longer than the tree (cycle?)".to_string());
            }
            chained.push(id);
            cursor = self.store.leaf(id).next();
        }
        if chained != walk.leaves {
            return Err(format!(
                "leaf chain {chained:?} does not match leaves in key order {:?}",
                walk.leaves
            ));
        }
        Ok(())
    }

    fn check_node(
        &self,
        id: NodeId,
        depth: usize,
        lower: Option<Key>,
        upper: Option<Key>,
        walk: &mut Walk,
    ) -> Result<(), String> {
        let node = self.store.get(id);
        let keys = node.keys();

        if keys.len() > self.config.max_keys() {
            return Err(format!("{id} holds {} keys, max is {}", keys.len(), self.config.max_keys()));
        }
        if keys.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(format!("{id} keys are not strictly ascending: {keys:?}"));
        }
        if let (Some(lower), Some(&first)) = (lower, keys.first()) {
            if first < lower {
                return Err(format!("{id} key {first} is below its separator {lower}"));
            }
        }
        if let (Some(upper), Some(&last)) = (upper, keys.last()) {
            if last >= upper {
                return Err(format!("{id} key {last} is not below its separator {upper}"));
            }
        }

        match node {
            Node::Leaf(leaf) => {
                if leaf.pointers().len() != keys.len() {
                    return Err(format!("{id} has {} keys but {} pointers", keys.len(), leaf.pointers().len()));
                }
                if depth != self.height() {
                    return Err(format!("{id} is a leaf at depth {depth}, height is {}", self.height()));
                }
                walk.keys += keys.len();
                walk.leaves.push(id);
            }
            Node::Internal(internal) => {
                let children = internal.children();
                if children.len() != keys.len() + 1 {
                    return Err(format!("{id} has {} keys but {} children", keys.len(), children.len()));
                }
                for (i, &child) in children.iter().enumerate() {
                    let child_lower = if i == 0 { lower } else { Some(keys[i - 1]) };
                    let child_upper = keys.get(i).copied().or(upper);
                    self.check_node(child, depth + 1, child_lower, child_upper, walk)?;
                }
            }
        }
        Ok(())
    }
}

#[derive(Default)]
struct Walk {
    keys: usize,
    leaves: Vec<NodeId>,
}
