//! Document log reader
//!
//! Replays the log from the start, verifying every record checksum.
//! Corruption halts replay with an explicit error rather than
//! skipping the bad record.

use std::io::ErrorKind;
use std::path::Path;

use super::errors::{StorageError, StorageResult};
use super::record::DocumentRecord;

/// Reader that replays the document log in write order
pub struct LogReader;

impl LogReader {
    /// Replay all records from the log at `path`.
    ///
    /// A missing file is an empty log, not an error.
    pub fn replay(path: impl AsRef<Path>) -> StorageResult<Vec<DocumentRecord>> {
        let data = match std::fs::read(path.as_ref()) {
            Ok(data) => data,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut records = Vec::new();
        let mut offset = 0usize;

        while offset < data.len() {
            match DocumentRecord::deserialize(&data[offset..]) {
                Ok((record, consumed)) => {
                    records.push(record);
                    offset += consumed;
                }
                Err(e) if e.kind() == ErrorKind::UnexpectedEof => {
                    return Err(StorageError::Truncated {
                        offset: offset as u64,
                    });
                }
                Err(e) => {
                    return Err(StorageError::corrupt(offset as u64, e.to_string()));
                }
            }
        }

        Ok(records)
    }
}
