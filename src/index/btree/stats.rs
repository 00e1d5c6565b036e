//! Tree statistics tracking.

use std::fmt;

/// Counters maintained by a [`BPlusTree`](crate::BPlusTree).
///
/// Counters are cumulative for the lifetime of the tree: no operation
/// resets them. Disk reads and writes are simulated page touches, not real
/// I/O.
///
/// The tree is single-threaded, so plain integers are enough here; the tree
/// owns its stats and mutates them through `&mut self`.
///
/// # Example
/// ```
/// use bplus_index::BPlusTree;
///
/// let mut tree = BPlusTree::new();
/// let _ = tree.insert(1, 100);
///
/// let stats = tree.stats();
/// assert_eq!(stats.tree_height, 1);
/// assert_eq!(stats.total_keys, 1);
/// assert_eq!(stats.disk_writes, 1);
/// ```
#[derive(Debug, Default)]
pub struct TreeStats {
    disk_reads: u64,
    disk_writes: u64,
    total_nodes: u64,
    total_keys: u64,
    tree_height: u64,
}

impl TreeStats {
    /// Create a new stats tracker with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub(crate) fn record_read(&mut self) {
        self.disk_reads += 1;
    }

    #[inline]
    pub(crate) fn record_writes(&mut self, pages: u64) {
        self.disk_writes += pages;
    }

    #[inline]
    pub(crate) fn record_node_created(&mut self) {
        self.total_nodes += 1;
    }

    #[inline]
    pub(crate) fn record_key_inserted(&mut self) {
        self.total_keys += 1;
    }

    #[inline]
    pub(crate) fn record_key_removed(&mut self) {
        self.total_keys -= 1;
    }

    /// Height only ever grows: once for the first leaf, then once per root split.
    #[inline]
    pub(crate) fn record_level_added(&mut self) {
        self.tree_height += 1;
    }

    /// Reset the simulated I/O counters to zero.
    ///
    /// Structural counters (nodes, keys, height) describe the tree itself
    /// and are left untouched.
    pub fn reset_io(&mut self) {
        self.disk_reads = 0;
        self.disk_writes = 0;
    }

    /// Get a snapshot of current statistics.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            tree_height: self.tree_height,
            total_nodes: self.total_nodes,
            total_keys: self.total_keys,
            disk_reads: self.disk_reads,
            disk_writes: self.disk_writes,
        }
    }
}

/// A point-in-time copy of the tree statistics.
///
/// `Display` renders the five-line statistics block of the command protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatsSnapshot {
    pub tree_height: u64,
    pub total_nodes: u64,
    pub total_keys: u64,
    pub disk_reads: u64,
    pub disk_writes: u64,
}

impl fmt::Display for StatsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Tree Height: {}", self.tree_height)?;
        writeln!(f, "Total Nodes: {}", self.total_nodes)?;
        writeln!(f, "Total Keys: {}", self.total_keys)?;
        writeln!(f, "Disk Reads: {}", self.disk_reads)?;
        write!(f, "Disk Writes: {}", self.disk_writes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_new() {
        let stats = TreeStats::new();
        assert_eq!(stats.snapshot(), StatsSnapshot::default());
    }

    #[test]
    fn test_stats_increment() {
        let mut stats = TreeStats::new();

        stats.record_read();
        stats.record_read();
        stats.record_writes(3);
        stats.record_node_created();
        stats.record_key_inserted();
        stats.record_key_inserted();
        stats.record_key_removed();
        stats.record_level_added();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.disk_reads, 2);
        assert_eq!(snapshot.disk_writes, 3);
        assert_eq!(snapshot.total_nodes, 1);
        assert_eq!(snapshot.total_keys, 1);
        assert_eq!(snapshot.tree_height, 1);
    }

    #[test]
    fn test_reset_io_keeps_structure() {
        let mut stats = TreeStats::new();
        stats.record_read();
        stats.record_writes(2);
        stats.record_node_created();
        stats.record_key_inserted();
        stats.record_level_added();

        stats.reset_io();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.disk_reads, 0);
        assert_eq!(snapshot.disk_writes, 0);
        assert_eq!(snapshot.total_nodes, 1);
        assert_eq!(snapshot.total_keys, 1);
        assert_eq!(snapshot.tree_height, 1);
    }

    #[test]
    fn test_stats_display() {
        let snapshot = StatsSnapshot {
            tree_height: 2,
            total_nodes: 3,
            total_keys: 6,
            disk_reads: 7,
            disk_writes: 9,
        };

        assert_eq!(
            format!("{}", snapshot),
            "Tree Height: 2\nTotal Nodes: 3\nTotal Keys: 6\nDisk Reads: 7\nDisk Writes: 9"
        );
    }
}
