//! Human-readable outcome lines of the text protocol.

use std::fmt;

use crate::common::{Key, RecordPointer};

/// The outcome of one tree operation, as the protocol prints it.
///
/// The tree returns plain values; this type turns them into the exact
/// strings existing clients expect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    Inserted { key: Key, pointer: RecordPointer },
    Duplicate { key: Key, pointer: RecordPointer },
    Found { key: Key, pointer: RecordPointer },
    NotFound { key: Key },
    Deleted { key: Key },
    NotDeleted { key: Key },
    Range {
        low: Key,
        high: Key,
        records: Vec<(Key, RecordPointer)>,
    },
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Report::Inserted { key, pointer } => write!(f, "({key}, {pointer}) inserted"),
            Report::Duplicate { key, pointer } => {
                write!(f, "({key}, {pointer}) not inserted. {key} found.")
            }
            Report::Found { key, pointer } => write!(f, "{key} found, point is {pointer}"),
            Report::NotFound { key } => write!(f, "{key} not found"),
            Report::Deleted { key } => write!(f, "{key} deleted."),
            Report::NotDeleted { key } => write!(f, "{key} not found, not deleted."),
            Report::Range { low, high, records } if records.is_empty() => {
                write!(f, "no records in the range [{low}, {high}]")
            }
            Report::Range { records, .. } => {
                write!(f, "found")?;
                for (key, pointer) in records {
                    write!(f, "\n({key}, {pointer})")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_reports() {
        assert_eq!(Report::Inserted { key: 5, pointer: 50 }.to_string(), "(5, 50) inserted");
        assert_eq!(
            Report::Duplicate { key: 5, pointer: 51 }.to_string(),
            "(5, 51) not inserted. 5 found."
        );
    }

    #[test]
    fn test_lookup_reports() {
        assert_eq!(
            Report::Found { key: 4, pointer: 400 }.to_string(),
            "4 found, point is 400"
        );
        assert_eq!(Report::NotFound { key: 9 }.to_string(), "9 not found");
        assert_eq!(Report::Deleted { key: 4 }.to_string(), "4 deleted.");
        assert_eq!(
            Report::NotDeleted { key: 4 }.to_string(),
            "4 not found, not deleted."
        );
    }

    #[test]
    fn test_range_reports() {
        let found = Report::Range {
            low: 2,
            high: 3,
            records: vec![(2, 20), (3, 30)],
        };
        assert_eq!(found.to_string(), "found\n(2, 20)\n(3, 30)");

        let empty = Report::Range {
            low: 7,
            high: -1,
            records: Vec::new(),
        };
        assert_eq!(empty.to_string(), "no records in the range [7, -1]");
    }
}
