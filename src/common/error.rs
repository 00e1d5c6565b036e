//! Error types for the B+ tree index.
//!
//! Only configuration, I/O and protocol failures are errors. A duplicate
//! insert, a missing key or an empty range are ordinary tree outcomes and are
//! reported through return values instead.

use thiserror::Error;

use crate::common::config::{MAX_ORDER, MIN_ORDER};

/// Convenient Result type alias.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the index.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error from writing the index artifact or reading commands.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The tree order is outside the supported range.
    #[error("invalid tree order {0}: must be between {min} and {max}", min = MIN_ORDER, max = MAX_ORDER)]
    InvalidOrder(usize),

    /// The page size argument is not a positive integer.
    #[error("invalid page size: {0:?}")]
    InvalidPageSize(String),

    /// A command word the protocol does not know.
    #[error("line {line}: unknown command {token:?}")]
    UnknownCommand { token: String, line: usize },

    /// The command stream ended before all arguments of a command were read.
    #[error("line {line}: {command} expects {expected} argument(s)")]
    MissingArgument {
        command: &'static str,
        expected: usize,
        line: usize,
    },

    /// A command argument that is not an integer.
    #[error("line {line}: {command} argument {token:?} is not an integer")]
    InvalidInteger {
        command: &'static str,
        token: String,
        line: usize,
    },
}
