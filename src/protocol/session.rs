//! A command session: one tree, a stream of commands, a text sink.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::common::Result;
use crate::index::btree::{BPlusTree, InsertOutcome};
use crate::protocol::command::{Command, CommandReader};
use crate::protocol::report::Report;

/// Executes protocol commands against a single tree for its whole lifetime.
///
/// `SEARCH`, `DELETE` and `RANGESEARCH` are followed by the statistics
/// block; `INSERT` and `PRINT` are not. Counters are never reset.
///
/// # Example
/// ```
/// use bplus_index::{BPlusTree, Session};
///
/// let mut out = Vec::new();
/// let mut session = Session::new(BPlusTree::new(), &mut out);
/// session.run("INSERT 1 100\nSEARCH 1\n".as_bytes()).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("(1, 100) inserted\n1 found, point is 100\n"));
/// ```
pub struct Session<W> {
    tree: BPlusTree,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(tree: BPlusTree, out: W) -> Self {
        Self { tree, out }
    }

    pub fn tree(&self) -> &BPlusTree {
        &self.tree
    }

    pub fn into_parts(self) -> (BPlusTree, W) {
        (self.tree, self.out)
    }

    /// Execute every command in `input` until it is exhausted.
    ///
    /// Returns the number of commands executed.
    ///
    /// # Errors
    /// Stops at the first malformed command or I/O failure. Output of the
    /// commands before it has already been written.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<usize> {
        let mut executed = 0;
        for command in CommandReader::new(input) {
            self.execute(command?)?;
            executed += 1;
        }
        Ok(executed)
    }

    /// Execute one command and write its output.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        debug!(?command, "executing");
        match command {
            Command::Insert { key, pointer } => {
                let report = match self.tree.insert(key, pointer) {
                    InsertOutcome::Inserted => Report::Inserted { key, pointer },
                    InsertOutcome::Duplicate => Report::Duplicate { key, pointer },
                };
                writeln!(self.out, "{report}")?;
            }
            Command::Search { key } => {
                let report = match self.tree.search(key) {
                    Some(pointer) => Report::Found { key, pointer },
                    None => Report::NotFound { key },
                };
                self.report_with_statistics(report)?;
            }
            Command::Delete { key } => {
                let report = match self.tree.remove(key) {
                    Some(_) => Report::Deleted { key },
                    None => Report::NotDeleted { key },
                };
                self.report_with_statistics(report)?;
            }
            Command::RangeSearch { low, high } => {
                let records = self.tree.range_search(low, high);
                self.report_with_statistics(Report::Range { low, high, records })?;
            }
            Command::Print => writeln!(self.out, "{}", self.tree.level_order())?,
            Command::PrintStatistics => writeln!(self.out, "{}", self.tree.stats())?,
        }
        self.out.flush()?;
        Ok(())
    }

    fn report_with_statistics(&mut self, report: Report) -> Result<()> {
        writeln!(self.out, "{report}")?;
        writeln!(self.out, "{}", self.tree.stats())?;
        Ok(())
    }
}
