//! Command parsing for the text protocol.
//!
//! Commands are whitespace-separated tokens and may span lines:
//! ```text
//! INSERT <key> <pointer>
//! SEARCH <key>
//! DELETE <key>
//! RANGESEARCH <low> <high>
//! PRINT
//! PRINT STATISTICS
//! ```
//! `PRINT` looks one token ahead for `STATISTICS`; any other token is left
//! in place as the start of the next command.

use std::collections::VecDeque;
use std::io::BufRead;

use crate::common::{Error, Key, RecordPointer, Result};

/// A parsed protocol request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Insert { key: Key, pointer: RecordPointer },
    Search { key: Key },
    Delete { key: Key },
    RangeSearch { low: Key, high: Key },
    Print,
    PrintStatistics,
}

/// Reads [`Command`]s from a buffered input, one line at a time.
pub struct CommandReader<R> {
    input: R,
    tokens: VecDeque<String>,
    line: usize,
}

impl<R: BufRead> CommandReader<R> {
    pub fn new(input: R) -> Self {
        Self {
            input,
            tokens: VecDeque::new(),
            line: 0,
        }
    }

    /// 1-based number of the last line read.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Parse the next command, or `None` once the input is exhausted.
    ///
    /// # Errors
    /// - `Error::UnknownCommand` for a word that starts no command
    /// - `Error::MissingArgument` if the input ends mid-command
    /// - `Error::InvalidInteger` for a non-integer argument
    /// - `Error::Io` if reading fails
    pub fn next_command(&mut self) -> Result<Option<Command>> {
        let Some(word) = self.next_token()? else {
            return Ok(None);
        };

        let command = match word.as_str() {
            "INSERT" => Command::Insert {
                key: self.integer("INSERT", 2)?,
                pointer: self.integer("INSERT", 2)?,
            },
            "SEARCH" => Command::Search {
                key: self.integer("SEARCH", 1)?,
            },
            "DELETE" => Command::Delete {
                key: self.integer("DELETE", 1)?,
            },
            "RANGESEARCH" => Command::RangeSearch {
                low: self.integer("RANGESEARCH", 2)?,
                high: self.integer("RANGESEARCH", 2)?,
            },
            "PRINT" => {
                let statistics = matches!(self.peek_token()?, Some("STATISTICS"));
                if statistics {
                    self.tokens.pop_front();
                    Command::PrintStatistics
                } else {
                    Command::Print
                }
            }
            _ => {
                return Err(Error::UnknownCommand {
                    token: word,
                    line: self.line,
                })
            }
        };
        Ok(Some(command))
    }

    fn integer(&mut self, command: &'static str, expected: usize) -> Result<i64> {
        let Some(token) = self.next_token()? else {
            return Err(Error::MissingArgument {
                command,
                expected,
                line: self.line,
            });
        };
        token.parse().map_err(|_| Error::InvalidInteger {
            command,
            token,
            line: self.line,
        })
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        self.fill()?;
        Ok(self.tokens.pop_front())
    }

    fn peek_token(&mut self) -> Result<Option<&str>> {
        self.fill()?;
        Ok(self.tokens.front().map(String::as_str))
    }

    /// Read lines until a token is buffered or the input ends.
    fn fill(&mut self) -> Result<()> {
        let mut buf = String::new();
        while self.tokens.is_empty() {
            buf.clear();
            if self.input.read_line(&mut buf)? == 0 {
                break;
            }
            self.line += 1;
            self.tokens
                .extend(buf.split_whitespace().map(str::to_owned));
        }
        Ok(())
    }
}

impl<R: BufRead> Iterator for CommandReader<R> {
    type Item = Result<Command>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_command().transpose()
    }
}
