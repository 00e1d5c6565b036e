//! Index structures.
//!
//! - [`btree`] - B+ tree mapping keys to record pointers

pub mod btree;
