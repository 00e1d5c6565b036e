//! Index file - the artifact written by the one-shot `init` mode.
//!
//! The tree itself never touches disk; its reads and writes are counted,
//! not performed. Initializing only records the chosen page size and leaves
//! an empty file behind, truncating any previous contents.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::common::config::INDEX_FILE_NAME;
use crate::common::{Error, Result};

/// An initialized, empty index file.
#[derive(Debug)]
pub struct IndexFile {
    path: PathBuf,
    page_size: usize,
}

impl IndexFile {
    /// Create `path` as an empty index file for pages of `page_size` bytes.
    ///
    /// An existing file at `path` is truncated.
    ///
    /// # Errors
    /// - `Error::InvalidPageSize` if `page_size` is zero
    /// - `Error::Io` if the file cannot be created
    pub fn initialize<P: AsRef<Path>>(path: P, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(Error::InvalidPageSize(page_size.to_string()));
        }

        let path = path.as_ref().to_path_buf();
        OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&path)?;

        info!(path = %path.display(), page_size, "initialized index file");
        Ok(Self { path, page_size })
    }

    /// Initialize [`INDEX_FILE_NAME`] inside `dir`.
    pub fn initialize_in<P: AsRef<Path>>(dir: P, page_size: usize) -> Result<Self> {
        Self::initialize(dir.as_ref().join(INDEX_FILE_NAME), page_size)
    }

    /// Parse a page size argument: a positive decimal integer.
    ///
    /// # Errors
    /// Returns `Error::InvalidPageSize` for anything else.
    pub fn parse_page_size(arg: &str) -> Result<usize> {
        match arg.trim().parse::<usize>() {
            Ok(size) if size > 0 => Ok(size),
            _ => Err(Error::InvalidPageSize(arg.to_string())),
        }
    }

    #[inline]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current size of the file on disk in bytes.
    pub fn file_size(&self) -> Result<u64> {
        Ok(std::fs::metadata(&self.path)?.len())
    }
}
