//! Breadth-first rendering of the tree, one line per level.

use std::fmt;

use crate::common::NodeId;
use crate::index::btree::node::Node;
use crate::index::btree::BPlusTree;

impl BPlusTree {
    /// A level-order view of the tree for display. Reads no pages.
    ///
    /// # Example
    /// ```
    /// use bplus_index::BPlusTree;
    ///
    /// let mut tree = BPlusTree::new();
    /// assert_eq!(tree.level_order().to_string(), "(empty)");
    ///
    /// for key in 1..=6 {
    ///     let _ = tree.insert(key, key * 10);
    /// }
    /// assert_eq!(
    ///     tree.level_order().to_string(),
    ///     "Level 0: [(4)] \nLevel 1: [(1: 10) (2: 20) (3: 30)] [(4: 40) (5: 50) (6: 60)] "
    /// );
    /// ```
    pub fn level_order(&self) -> LevelOrder<'_> {
        LevelOrder { tree: self }
    }

    /// Node ids grouped by depth, root first, each level left to right.
    pub fn levels(&self) -> Vec<Vec<NodeId>> {
        let mut levels = Vec::new();
        let mut frontier: Vec<NodeId> = self.root.into_iter().collect();
        while !frontier.is_empty() {
            let below = frontier
                .iter()
                .flat_map(|&id| self.store.get(id).children().iter().copied())
                .collect();
            levels.push(std::mem::replace(&mut frontier, below));
        }
        levels
    }
}

/// Display adapter returned by [`BPlusTree::level_order`].
///
/// Each line reads `Level <n>: ` followed by one bracketed node per entry
/// and a trailing space. Internal nodes list `(key)`, leaves `(key: pointer)`.
pub struct LevelOrder<'a> {
    tree: &'a BPlusTree,
}

impl fmt::Display for LevelOrder<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let levels = self.tree.levels();
        if levels.is_empty() {
            return write!(f, "(empty)");
        }

        for (depth, level) in levels.iter().enumerate() {
            if depth > 0 {
                writeln!(f)?;
            }
            write!(f, "Level {depth}: ")?;
            for &id in level {
                write_node(f, self.tree.store.get(id))?;
                write!(f, " ")?;
            }
        }
        Ok(())
    }
}

fn write_node(f: &mut fmt::Formatter<'_>, node: &Node) -> fmt::Result {
    write!(f, "[")?;
    match node {
        Node::Leaf(leaf) => {
            for (i, (key, pointer)) in leaf.entries().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "({key}: {pointer})")?;
            }
        }
        Node::Internal(internal) => {
            for (i, key) in internal.keys().iter().enumerate() {
                if i > 0 {
                    write!(f, " ")?;
                }
                write!(f, "({key})")?;
            }
        }
    }
    write!(f, "]")
}

#[cfg(test)]
mod tests {
    use crate::BPlusTree;

    #[test]
    fn test_single_leaf() {
        let mut tree = BPlusTree::new();
        let _ = tree.insert(2, 20);
        let _ = tree.insert(1, 10);
        assert_eq!(tree.level_order().to_string(), "Level 0: [(1: 10) (2: 20)] ");
    }

    #[test]
    fn test_print_does_not_count_io() {
        let mut tree = BPlusTree::new();
        for key in 0..30 {
            let _ = tree.insert(key, key);
        }
        let before = tree.stats();
        let rendered = tree.level_order().to_string();

        assert_eq!(rendered.lines().count(), tree.height());
        assert_eq!(tree.stats(), before);
    }

    #[test]
    fn test_levels_cover_every_node() {
        let mut tree = BPlusTree::new();
        for key in 0..50 {
            let _ = tree.insert(key, key);
        }
        let levels = tree.levels();
        let total: usize = levels.iter().map(Vec::len).sum();

        assert_eq!(levels.len(), tree.height());
        assert_eq!(levels[0].len(), 1);
        assert_eq!(total as u64, tree.stats().total_nodes);
    }

    #[test]
    fn test_emptied_leaf_renders_brackets() {
        let mut tree = BPlusTree::new();
        let _ = tree.insert(1, 10);
        tree.remove(1);
        assert_eq!(tree.level_order().to_string(), "Level 0: [] ");
    }
}
