//! Point lookups, range scans and ordered iteration over the leaf chain.

use crate::common::{Key, NodeId, RecordPointer};
use crate::index::btree::node::Node;
use crate::index::btree::store::NodeStore;
use crate::index::btree::BPlusTree;

impl BPlusTree {
    /// Look up the record pointer stored for `key`.
    ///
    /// Costs one read per level.
    pub fn search(&mut self, key: Key) -> Option<RecordPointer> {
        let leaf = self.find_leaf(key)?;
        self.store.leaf(leaf).get(key)
    }

    /// All records with `low <= key <= high`, in ascending key order.
    ///
    /// Descends once to the leaf that would hold `low`, then follows the leaf
    /// chain, stopping at the first key above `high`. Every leaf after the
    /// first costs one extra read. An empty result means no record falls in
    /// the range (including when `low > high`).
    pub fn range_search(&mut self, low: Key, high: Key) -> Vec<(Key, RecordPointer)> {
        let mut found = Vec::new();
        let Some(first) = self.find_leaf(low) else {
            return found;
        };

        let mut cursor = Some(first);
        while let Some(id) = cursor {
            if id != first {
                self.stats.record_read();
            }
            let leaf = self.store.leaf(id);
            for (key, pointer) in leaf.entries() {
                if key > high {
                    return found;
                }
                if key >= low {
                    found.push((key, pointer));
                }
            }
            cursor = leaf.next();
        }
        found
    }

    /// Iterate over every record in ascending key order by walking the leaf
    /// chain. Not instrumented: no reads are counted.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            store: &self.store,
            leaf: self.root.map(|root| self.leftmost_leaf(root)),
            position: 0,
        }
    }

    pub(crate) fn leftmost_leaf(&self, mut current: NodeId) -> NodeId {
        while let Node::Internal(internal) = self.store.get(current) {
            current = internal.children[0];
        }
        current
    }
}

/// Iterator over `(key, pointer)` pairs returned by [`BPlusTree::iter`].
pub struct Iter<'a> {
    store: &'a NodeStore,
    leaf: Option<NodeId>,
    position: usize,
}

impl Iterator for Iter<'_> {
    type Item = (Key, RecordPointer);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let leaf = self.store.leaf(self.leaf?);
            if let Some(&key) = leaf.keys().get(self.position) {
                let pointer = leaf.pointers()[self.position];
                self.position += 1;
                return Some((key, pointer));
            }
            self.leaf = leaf.next();
            self.position = 0;
        }
    }
}

impl<'a> IntoIterator for &'a BPlusTree {
    type Item = (Key, RecordPointer);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use crate::{BPlusTree, InsertOutcome, Key};

    fn scenario_tree() -> BPlusTree {
        let mut tree = BPlusTree::new();
        for key in 1..=6 {
            assert_eq!(tree.insert(key, key * 10), InsertOutcome::Inserted);
        }
        tree
    }

    #[test]
    fn test_search_found_and_missing() {
        let mut tree = scenario_tree();
        assert_eq!(tree.search(4), Some(40));
        assert_eq!(tree.search(1), Some(10));
        assert_eq!(tree.search(6), Some(60));
        assert_eq!(tree.search(9), None);
        assert_eq!(tree.search(-3), None);
    }

    #[test]
    fn test_search_counts_one_read_per_level() {
        let mut tree = scenario_tree();
        let reads = tree.stats().disk_reads;
        tree.search(2);
        assert_eq!(tree.stats().disk_reads, reads + 2);
    }

    #[test]
    fn test_search_empty_tree() {
        let mut tree = BPlusTree::new();
        assert_eq!(tree.search(1), None);
        assert_eq!(tree.stats().disk_reads, 0);
    }

    #[test]
    fn test_range_across_leaves() {
        let mut tree = scenario_tree();
        let reads = tree.stats().disk_reads;

        assert_eq!(
            tree.range_search(2, 5),
            vec![(2, 20), (3, 30), (4, 40), (5, 50)]
        );
        // root, first leaf, second leaf
        assert_eq!(tree.stats().disk_reads, reads + 3);
    }

    #[test]
    fn test_range_stops_early() {
        let mut tree = BPlusTree::new();
        for key in (0..60).map(|k| k * 2) {
            let _ = tree.insert(key, key);
        }
        let reads = tree.stats().disk_reads;
        let height = tree.height() as u64;

        assert_eq!(tree.range_search(3, 7), vec![(4, 4), (6, 6)]);
        // Both matches sit in at most two adjacent leaves.
        assert!(tree.stats().disk_reads - reads <= height + 1);
    }

    #[test]
    fn test_range_empty_results() {
        let mut tree = scenario_tree();
        assert!(tree.range_search(7, 10).is_empty());
        assert!(tree.range_search(-5, 0).is_empty());
        assert!(tree.range_search(5, 2).is_empty());
        assert!(BPlusTree::new().range_search(0, 100).is_empty());
    }

    #[test]
    fn test_range_skips_deleted_and_empty_leaves() {
        let mut tree = scenario_tree();
        for key in 4..=6 {
            tree.remove(key);
        }
        assert_eq!(tree.range_search(2, 100), vec![(2, 20), (3, 30)]);
        assert!(tree.range_search(4, 6).is_empty());
    }

    #[test]
    fn test_iter_is_ascending_and_free() {
        let mut tree = BPlusTree::new();
        let keys: Vec<Key> = vec![50, 10, 40, 20, 30, 60, 5, 45, 15];
        for &key in &keys {
            let _ = tree.insert(key, -key);
        }
        let before = tree.stats();

        let mut expected = keys.clone();
        expected.sort_unstable();
        let walked: Vec<Key> = tree.iter().map(|(k, _)| k).collect();

        assert_eq!(walked, expected);
        assert!(tree.iter().all(|(k, p)| p == -k));
        assert_eq!(tree.stats(), before);
        assert_eq!((&tree).into_iter().count(), keys.len());
    }

    #[test]
    fn test_iter_empty_tree() {
        assert_eq!(BPlusTree::new().iter().next(), None);
    }
}
