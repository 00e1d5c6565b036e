//! B+ tree index with simulated page I/O.
//!
//! # Components
//! - [`BPlusTree`] - Insert, search, delete, range scan, level-order print
//! - [`Node`] - Leaf and internal vertices
//! - [`TreeStats`] / [`StatsSnapshot`] - Cumulative read/write and shape counters
//! - [`LevelOrder`] - Display adapter for the breadth-first dump
//!
//! Nodes live in an append-only store owned by the tree; children and the
//! leaf chain refer to them by [`NodeId`](crate::NodeId).

mod node;
mod print;
mod scan;
mod stats;
mod store;
mod tree;
mod verify;

pub use node::{InternalNode, LeafNode, Node};
pub use print::LevelOrder;
pub use scan::Iter;
pub use stats::{StatsSnapshot, TreeStats};
pub use tree::{BPlusTree, InsertOutcome};
