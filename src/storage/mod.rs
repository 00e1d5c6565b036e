//! Storage layer - the on-disk index artifact.
//!
//! - [`IndexFile`] - Creates the empty index file for `bplus init`

mod index_file;

pub use index_file::IndexFile;
