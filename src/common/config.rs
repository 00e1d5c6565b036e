//! Configuration constants for the B+ tree index.

use crate::common::{Error, Result};

/// Default minimum degree `t` of the tree.
///
/// With `t = 3` a node holds at most `2t - 1 = 5` keys, which keeps trees
/// small enough to read in a level-order dump.
pub const DEFAULT_ORDER: usize = 3;

/// Smallest minimum degree that still yields a valid B+ tree.
///
/// `t = 1` would give nodes of a single key whose split leaves an empty
/// internal sibling.
pub const MIN_ORDER: usize = 2;

/// Largest minimum degree for which `2t - 1` still fits in a `usize`.
pub const MAX_ORDER: usize = usize::MAX / 2;

/// Simulated page size in bytes used when none is given.
pub const DEFAULT_PAGE_SIZE: usize = 512;

/// Name of the artifact written by `bplus init`.
pub const INDEX_FILE_NAME: &str = "bplus_index.dat";

/// Environment variable holding the log level of the `bplus` binary.
pub const LOG_ENV_VAR: &str = "BPLUS_LOG";

/// Tunables of a [`BPlusTree`](crate::BPlusTree).
///
/// # Example
/// ```
/// use bplus_index::TreeConfig;
///
/// let config = TreeConfig::default().order(4).page_size(4096);
/// assert_eq!(config.max_keys(), 7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeConfig {
    /// Minimum degree `t`.
    pub order: usize,
    /// Simulated page size in bytes. Reported only; node capacity is
    /// governed by `order`.
    pub page_size: usize,
}

impl TreeConfig {
    /// Set the minimum degree.
    pub fn order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Set the simulated page size.
    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Maximum number of keys a node may hold before it must be split.
    #[inline]
    pub fn max_keys(&self) -> usize {
        2 * self.order - 1
    }

    /// Reject configurations the tree cannot operate with.
    ///
    /// # Errors
    /// - `Error::InvalidOrder` if `order` is outside `MIN_ORDER..=MAX_ORDER`
    /// - `Error::InvalidPageSize` if `page_size` is zero
    pub fn validate(&self) -> Result<()> {
        if !(MIN_ORDER..=MAX_ORDER).contains(&self.order) {
            return Err(Error::InvalidOrder(self.order));
        }
        if self.page_size == 0 {
            return Err(Error::InvalidPageSize(self.page_size.to_string()));
        }
        Ok(())
    }
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            order: DEFAULT_ORDER,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}
