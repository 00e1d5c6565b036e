//! The line-oriented text protocol spoken by the `bplus` binary.
//!
//! - [`Command`] / [`CommandReader`] - Parsing requests
//! - [`Report`] - Rendering operation outcomes
//! - [`Session`] - Running a command stream against one tree

mod command;
mod report;
mod session;

pub use command::{Command, CommandReader};
pub use report::Report;
pub use session::Session;
