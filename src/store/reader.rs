//! Store Reader
//!
//! Snapshot reads for consumers of the store (report generation). Readers
//! never hold the append mutex; they open the file independently and see a
//! quiescent prefix of the append history.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{IngestError, Result};
use crate::record::Record;

use super::Store;

impl Store {
    /// Read all records currently in the store
    ///
    /// Blank lines are skipped. A line that does not parse as a record is a
    /// corruption error naming the offending line number. A store file that
    /// does not exist yet yields an empty snapshot.
    pub fn snapshot(&self) -> Result<Vec<Record>> {
        read_records(self.path())
    }
}

/// Read every record from a store file
pub(crate) fn read_records(path: &Path) -> Result<Vec<Record>> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => {
            return Err(IngestError::Store(format!(
                "cannot read {}: {}",
                path.display(),
                e
            )))
        }
    };

    let mut records = Vec::new();
    for (index, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let record = Record::parse(line).map_err(|rejection| {
            IngestError::Store(format!(
                "corrupt entry at {}:{}: {}",
                path.display(),
                index + 1,
                rejection
            ))
        })?;
        records.push(record);
    }

    Ok(records)
}

/// Resolve "the" record for a phone number: most-recently-appended wins
///
/// The store keeps every append; a re-ingested phone number simply has more
/// than one entry, and the last one is the current truth.
pub fn most_recent_by_phone<'a>(records: &'a [Record], phone: &str) -> Option<&'a Record> {
    records.iter().rev().find(|record| record.phone == phone)
}
