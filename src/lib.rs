//! bplus-index - An in-memory B+ tree index that simulates page I/O.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          bplus-index                            │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Protocol Layer (protocol/)                  │   │
//! │  │      CommandReader → Session → Report / statistics       │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Index Layer (index/btree/)                  │   │
//! │  │   BPlusTree: proactive-split insert, search, delete,     │   │
//! │  │   leaf-chain range scan, level-order print               │   │
//! │  │   ┌─────────────────────────────────────────────────┐   │   │
//! │  │   │  NodeStore (simulated disk) + TreeStats          │   │   │
//! │  │   │  reads/writes counted, never performed           │   │   │
//! │  │   └─────────────────────────────────────────────────┘   │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │              Storage Layer (storage/)                    │   │
//! │  │           IndexFile (empty artifact for `init`)          │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (NodeId, Error, config)
//! - [`index`] - The B+ tree
//! - [`storage`] - The index artifact written by `init`
//! - [`protocol`] - Text command protocol
//!
//! # Quick Start
//! ```
//! use bplus_index::{BPlusTree, TreeConfig};
//!
//! let mut tree = BPlusTree::with_config(TreeConfig::default().order(2)).unwrap();
//! for key in [30, 10, 20, 40] {
//!     let _ = tree.insert(key, key + 1);
//! }
//!
//! assert_eq!(tree.search(20), Some(21));
//! assert_eq!(tree.range_search(15, 35), vec![(20, 21), (30, 31)]);
//! println!("{}", tree.level_order());
//! println!("{}", tree.stats());
//! ```

pub mod common;
pub mod index;
pub mod protocol;
pub mod storage;

// Re-export commonly used items at crate root for convenience
pub use common::{Error, Key, NodeId, RecordPointer, Result, TreeConfig};

pub use index::btree::{BPlusTree, InsertOutcome, LevelOrder, StatsSnapshot, TreeStats};
pub use protocol::{Command, CommandReader, Report, Session};
pub use storage::IndexFile;
