//! The B+ tree: construction, insertion with proactive splits, and deletion.
//!
//! Search, range scans and traversal live in sibling modules as further
//! `impl BPlusTree` blocks.

use tracing::{debug, info, trace};

use crate::common::{Key, NodeId, RecordPointer, Result, TreeConfig};
use crate::index::btree::node::{InternalNode, LeafNode, Node};
use crate::index::btree::stats::{StatsSnapshot, TreeStats};
use crate::index::btree::store::NodeStore;

/// Result of [`BPlusTree::insert`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum InsertOutcome {
    /// The pair was added.
    Inserted,
    /// The key was already present; nothing changed.
    Duplicate,
}

/// An in-memory B+ tree mapping integer keys to record pointers.
///
/// Every operation counts the nodes it touches as simulated page reads and
/// the nodes it modifies as simulated page writes. See [`TreeStats`].
///
/// # Structure
/// ```text
///                   [ 4 ]                       internal: separators only
///                  /     \
///      [1 2 3] ──────▶ [4 5 6] ──▶ none         leaves: records + chain
/// ```
///
/// Deletion only removes the record from its leaf. There is no merging,
/// borrowing or height reduction, and separators are left as they were, so
/// non-root nodes may end up with fewer than `t - 1` keys.
///
/// # Example
/// ```
/// use bplus_index::{BPlusTree, InsertOutcome};
///
/// let mut tree = BPlusTree::new();
/// for key in 1..=6 {
///     assert_eq!(tree.insert(key, key * 100), InsertOutcome::Inserted);
/// }
/// assert_eq!(tree.insert(3, 0), InsertOutcome::Duplicate);
///
/// assert_eq!(tree.search(4), Some(400));
/// assert_eq!(tree.range_search(2, 3), vec![(2, 200), (3, 300)]);
/// assert_eq!(tree.remove(4), Some(400));
/// assert_eq!(tree.search(4), None);
/// assert_eq!(tree.height(), 2);
/// ```
#[derive(Debug)]
pub struct BPlusTree {
    pub(crate) store: NodeStore,
    pub(crate) root: Option<NodeId>,
    pub(crate) config: TreeConfig,
    pub(crate) stats: TreeStats,
}

impl BPlusTree {
    /// Create an empty tree with the default order (3) and page size (512).
    pub fn new() -> Self {
        Self::from_valid_config(TreeConfig::default())
    }

    /// Create an empty tree with the given configuration.
    ///
    /// # Errors
    /// Returns an error if the configuration fails [`TreeConfig::validate`].
    pub fn with_config(config: TreeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: TreeConfig) -> Self {
        Self {
            store: NodeStore::new(),
            root: None,
            config,
            stats: TreeStats::new(),
        }
    }

    /// Minimum degree `t`.
    #[inline]
    pub fn order(&self) -> usize {
        self.config.order
    }

    /// Simulated page size in bytes.
    #[inline]
    pub fn page_size(&self) -> usize {
        self.config.page_size
    }

    /// Number of records currently stored.
    #[inline]
    pub fn len(&self) -> usize {
        self.stats.snapshot().total_keys as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of levels; 0 before the first insert.
    #[inline]
    pub fn height(&self) -> usize {
        self.stats.snapshot().tree_height as usize
    }

    /// Current value of the cumulative counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    /// Mutable access to the counters, e.g. to [`reset_io`](TreeStats::reset_io).
    pub fn stats_mut(&mut self) -> &mut TreeStats {
        &mut self.stats
    }

    // ========================================================================
    // Insertion
    // ========================================================================

    /// Insert `key` with its record pointer.
    ///
    /// Full nodes are split on the way down, so the leaf reached at the end
    /// always has room. A key that is already present is rejected without
    /// touching the stored pointer; nodes split on the way down stay split.
    pub fn insert(&mut self, key: Key, pointer: RecordPointer) -> InsertOutcome {
        let Some(mut current) = self.root else {
            self.plant_first_leaf(key, pointer);
            return InsertOutcome::Inserted;
        };

        if self.store.get(current).is_full(self.config.max_keys()) {
            current = self.split_root(current);
        }

        loop {
            self.stats.record_read();
            let Node::Internal(internal) = self.store.get(current) else {
                break;
            };

            let mut index = internal.child_index(key);
            let child = internal.children[index];
            if self.store.get(child).is_full(self.config.max_keys()) {
                self.split_child(current, index);
                index = self.store.internal(current).child_index(key);
            }
            current = self.store.internal(current).children[index];
        }

        if !self.store.leaf_mut(current).insert(key, pointer) {
            trace!(key, "insert rejected, key already present");
            return InsertOutcome::Duplicate;
        }
        self.stats.record_writes(1);
        self.stats.record_key_inserted();
        InsertOutcome::Inserted
    }

    fn plant_first_leaf(&mut self, key: Key, pointer: RecordPointer) {
        let leaf = self
            .store
            .allocate(Node::Leaf(LeafNode::with_entry(key, pointer)));
        self.root = Some(leaf);

        self.stats.record_node_created();
        self.stats.record_level_added();
        self.stats.record_writes(1);
        self.stats.record_key_inserted();
        info!(%leaf, "created root leaf");
    }

    /// Grow the tree by one level: a new separator-less root adopts the old
    /// one, which is then split beneath it. Returns the new root.
    fn split_root(&mut self, old_root: NodeId) -> NodeId {
        let new_root = self
            .store
            .allocate(Node::Internal(InternalNode::with_child(old_root)));
        self.root = Some(new_root);
        self.stats.record_node_created();
        self.stats.record_level_added();

        self.split_child(new_root, 0);
        info!(
            %old_root,
            %new_root,
            height = self.stats.snapshot().tree_height,
            "root split"
        );
        new_root
    }

    /// Split the full child at `children[index]` of `parent`.
    ///
    /// Costs one read (the child) and three writes (the child, its new right
    /// sibling and the parent).
    fn split_child(&mut self, parent: NodeId, index: usize) {
        let child = self.store.internal(parent).children[index];
        self.stats.record_read();

        let sibling_id = self.store.next_id();
        let order = self.config.order;
        let (separator, sibling) = self.store.get_mut(child).split(order, sibling_id);
        let leaf = sibling.is_leaf();
        let allocated = self.store.allocate(sibling);
        debug_assert_eq!(allocated, sibling_id);

        self.store
            .internal_mut(parent)
            .adopt(index, separator, sibling_id);

        self.stats.record_node_created();
        self.stats.record_writes(3);
        debug!(%parent, %child, sibling = %sibling_id, separator, leaf, "split node");
    }

    // ========================================================================
    // Deletion
    // ========================================================================

    /// Remove `key` and return its record pointer, or `None` if absent.
    ///
    /// Only the leaf changes. Separators that pointed at the removed key
    /// stay in place and no node is merged or freed.
    pub fn remove(&mut self, key: Key) -> Option<RecordPointer> {
        let leaf = self.find_leaf(key)?;
        let Some(pointer) = self.store.leaf_mut(leaf).remove(key) else {
            trace!(key, "delete of absent key");
            return None;
        };
        self.stats.record_writes(1);
        self.stats.record_key_removed();
        Some(pointer)
    }

    /// Walk from the root to the leaf whose key range covers `key`, counting
    /// one read per node visited.
    pub(crate) fn find_leaf(&mut self, key: Key) -> Option<NodeId> {
        let mut current = self.root?;
        loop {
            self.stats.record_read();
            match self.store.get(current) {
                Node::Internal(internal) => current = internal.child_for(key),
                Node::Leaf(_) => return Some(current),
            }
        }
    }
}

impl Default for BPlusTree {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::Error;

    fn tree_with(keys: impl IntoIterator<Item = Key>) -> BPlusTree {
        let mut tree = BPlusTree::new();
        for key in keys {
            assert_eq!(tree.insert(key, key * 10), InsertOutcome::Inserted);
        }
        tree
    }

    fn root_keys(tree: &BPlusTree) -> Vec<Key> {
        tree.store.get(tree.root.unwrap()).keys().to_vec()
    }

    #[test]
    fn test_new_tree_is_empty() {
        let tree = BPlusTree::new();
        assert!(tree.is_empty());
        assert_eq!(tree.height(), 0);
        assert_eq!(tree.order(), 3);
        assert_eq!(tree.page_size(), 512);
        assert_eq!(tree.stats(), StatsSnapshot::default());
    }

    #[test]
    fn test_with_config_rejects_bad_order() {
        let err = BPlusTree::with_config(TreeConfig::default().order(1)).unwrap_err();
        assert!(matches!(err, Error::InvalidOrder(1)));
    }

    #[test]
    fn test_with_config_rejects_overflowing_order() {
        let order = usize::MAX / 2 + 1;
        let err = BPlusTree::with_config(TreeConfig::default().order(order)).unwrap_err();
        assert!(matches!(err, Error::InvalidOrder(o) if o == order));
    }

    #[test]
    fn test_first_insert_plants_leaf() {
        let tree = tree_with([7]);
        let stats = tree.stats();
        assert_eq!(stats.tree_height, 1);
        assert_eq!(stats.total_nodes, 1);
        assert_eq!(stats.total_keys, 1);
        assert_eq!(stats.disk_reads, 0);
        assert_eq!(stats.disk_writes, 1);
        assert!(tree.store.get(tree.root.unwrap()).is_leaf());
    }

    #[test]
    fn test_fill_root_leaf_without_split() {
        let tree = tree_with(1..=5);
        assert_eq!(root_keys(&tree), vec![1, 2, 3, 4, 5]);
        assert_eq!(tree.height(), 1);
        assert_eq!(tree.stats().total_nodes, 1);
    }

    #[test]
    fn test_sixth_insert_splits_root() {
        let tree = tree_with(1..=6);
        let root = tree.store.internal(tree.root.unwrap());
        assert_eq!(root.keys(), &[4]);
        assert_eq!(tree.store.leaf(root.children()[0]).keys(), &[1, 2, 3]);
        assert_eq!(tree.store.leaf(root.children()[1]).keys(), &[4, 5, 6]);

        let stats = tree.stats();
        assert_eq!(stats.tree_height, 2);
        assert_eq!(stats.total_nodes, 3);
        assert_eq!(stats.total_keys, 6);
    }

    #[test]
    fn test_io_accounting_through_root_split() {
        let tree = tree_with(1..=6);
        let stats = tree.stats();
        // 1 write for the first leaf, 1 read + 1 write for each of 2..=5,
        // then the split (1 read, 3 writes) and the descent root -> leaf
        // (2 reads, 1 write).
        assert_eq!(stats.disk_reads, 4 + 1 + 2);
        assert_eq!(stats.disk_writes, 1 + 4 + 3 + 1);
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut tree = tree_with(1..=6);
        let before = tree.stats();

        assert_eq!(tree.insert(4, 999), InsertOutcome::Duplicate);
        assert_eq!(tree.search(4), Some(40));

        let after = tree.stats();
        assert_eq!(after.total_keys, before.total_keys);
        assert_eq!(after.total_nodes, before.total_nodes);
        assert_eq!(after.disk_writes, before.disk_writes);
    }

    #[test]
    fn test_duplicate_of_separator_found_in_right_leaf() {
        // After the split 4 is both separator and first key of the right
        // leaf; the duplicate must be detected there, not slipped into the left.
        let mut tree = tree_with(1..=6);
        assert_eq!(tree.insert(4, 1), InsertOutcome::Duplicate);
        let root = tree.store.internal(tree.root.unwrap());
        assert_eq!(tree.store.leaf(root.children()[0]).keys(), &[1, 2, 3]);
    }

    #[test]
    fn test_internal_split_grows_height() {
        let tree = tree_with(1..=100);
        assert!(tree.height() >= 3);
        assert_eq!(tree.len(), 100);
        assert_eq!(tree.stats().total_nodes as usize, tree.store.len());
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_remove_present_key() {
        let mut tree = tree_with(1..=6);
        let writes = tree.stats().disk_writes;

        assert_eq!(tree.remove(4), Some(40));
        assert_eq!(tree.len(), 5);
        assert_eq!(tree.stats().disk_writes, writes + 1);
        assert_eq!(root_keys(&tree), vec![4]);
        assert_eq!(tree.search(4), None);
    }

    #[test]
    fn test_remove_absent_key() {
        let mut tree = tree_with(1..=6);
        let before = tree.stats();

        assert_eq!(tree.remove(42), None);

        let after = tree.stats();
        assert_eq!(after.total_keys, before.total_keys);
        assert_eq!(after.disk_writes, before.disk_writes);
        assert_eq!(after.disk_reads, before.disk_reads + 2);
    }

    #[test]
    fn test_remove_from_empty_tree() {
        let mut tree = BPlusTree::new();
        assert_eq!(tree.remove(1), None);
        assert_eq!(tree.stats(), StatsSnapshot::default());
    }

    #[test]
    fn test_emptied_leaf_accepts_new_keys() {
        let mut tree = tree_with(1..=6);
        for key in 4..=6 {
            assert_eq!(tree.remove(key), Some(key * 10));
        }
        assert_eq!(tree.insert(5, 55), InsertOutcome::Inserted);
        assert_eq!(tree.search(5), Some(55));
        assert_eq!(tree.stats().total_nodes, 3);
        tree.check_invariants().unwrap();
    }

    #[test]
    fn test_reset_io() {
        let mut tree = tree_with(1..=6);
        tree.stats_mut().reset_io();

        let stats = tree.stats();
        assert_eq!(stats.disk_reads, 0);
        assert_eq!(stats.disk_writes, 0);
        assert_eq!(stats.total_keys, 6);
    }
}
